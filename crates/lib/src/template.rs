//! Reusable wizard templates.
//!
//! A template is a previously built [`BuildDescriptor`] saved as JSON. Loading
//! one pre-fills the wizard's answers.
//!
//! # Storage Layout
//!
//! ```text
//! {templates_dir}/
//! └── <name>.template     # JSON-serialized BuildDescriptor
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::consts::{TEMPLATE_EXTENSION, TEMPLATES_DIR, TEMPLATES_DIR_ENV};
use crate::descriptor::BuildDescriptor;

/// Errors that can occur while loading or saving templates.
#[derive(Debug, Error)]
pub enum TemplateError {
  #[error("invalid template name: {name:?}")]
  InvalidName { name: String },

  #[error("template not found: {}", path.display())]
  NotFound { path: PathBuf },

  #[error("failed to read template {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("failed to parse template {}: {source}", path.display())]
  Parse { path: PathBuf, source: serde_json::Error },

  #[error("failed to serialize template: {0}")]
  Serialize(#[source] serde_json::Error),

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: io::Error },

  #[error("failed to write template {}: {source}", path.display())]
  Write { path: PathBuf, source: io::Error },
}

/// Returns the directory templates are read from and saved to.
///
/// Uses `$STARBUILD_TEMPLATES_DIR` when set, otherwise `templates/` relative
/// to the working directory.
pub fn templates_dir() -> PathBuf {
  std::env::var_os(TEMPLATES_DIR_ENV)
    .filter(|dir| !dir.is_empty())
    .map(PathBuf::from)
    .unwrap_or_else(|| PathBuf::from(TEMPLATES_DIR))
}

/// Path of the template called `name` inside `dir`.
///
/// # Errors
///
/// Rejects empty names and names that would escape `dir`.
pub fn template_path(dir: &Path, name: &str) -> Result<PathBuf, TemplateError> {
  let name = name.trim();
  if name.is_empty() || name.starts_with('.') || name.contains(['/', '\\']) {
    return Err(TemplateError::InvalidName { name: name.to_string() });
  }
  Ok(dir.join(format!("{}.{}", name, TEMPLATE_EXTENSION)))
}

/// Load the template called `name` from `dir`.
pub fn load_template(dir: &Path, name: &str) -> Result<BuildDescriptor, TemplateError> {
  let path = template_path(dir, name)?;

  let content = match fs::read_to_string(&path) {
    Ok(content) => content,
    Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(TemplateError::NotFound { path }),
    Err(e) => return Err(TemplateError::Read { path, source: e }),
  };

  let descriptor = serde_json::from_str(&content).map_err(|e| TemplateError::Parse {
    path: path.clone(),
    source: e,
  })?;

  debug!(path = %path.display(), "loaded template");
  Ok(descriptor)
}

/// Save `descriptor` as the template called `name` in `dir`, creating `dir`
/// if needed. Returns the written path.
pub fn save_template(dir: &Path, name: &str, descriptor: &BuildDescriptor) -> Result<PathBuf, TemplateError> {
  let path = template_path(dir, name)?;

  fs::create_dir_all(dir).map_err(|e| TemplateError::CreateDir {
    path: dir.to_path_buf(),
    source: e,
  })?;

  let content = serde_json::to_string_pretty(descriptor).map_err(TemplateError::Serialize)?;
  fs::write(&path, content).map_err(|e| TemplateError::Write {
    path: path.clone(),
    source: e,
  })?;

  debug!(path = %path.display(), "saved template");
  Ok(path)
}
