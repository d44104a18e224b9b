//! Writing the STARBUILD artifact to disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::consts::STARBUILD_FILENAME;
use crate::descriptor::BuildDescriptor;
use crate::render::render;

/// Errors that can occur while writing the artifact.
#[derive(Debug, Error)]
pub enum GenerateError {
  #[error("file already exists: {}", path.display())]
  PathExists { path: PathBuf },

  #[error("could not write {}: {source}", path.display())]
  Write { path: PathBuf, source: std::io::Error },
}

/// Options for writing the artifact.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
  /// Directory the STARBUILD file is written into.
  pub dir: PathBuf,
  /// Replace an existing STARBUILD instead of failing.
  pub overwrite: bool,
}

/// Path of the STARBUILD file inside `dir`.
pub fn starbuild_path(dir: &Path) -> PathBuf {
  dir.join(STARBUILD_FILENAME)
}

/// Whether a STARBUILD file already exists in `dir`.
pub fn starbuild_exists(dir: &Path) -> bool {
  starbuild_path(dir).exists()
}

/// Render `descriptor` and write it to `STARBUILD` in the target directory.
///
/// The content is written to a temporary sibling and renamed into place, so a
/// failed write never leaves a truncated artifact behind and never touches an
/// existing one.
///
/// # Errors
///
/// Returns [`GenerateError::PathExists`] if the file exists and `overwrite`
/// is not set, or [`GenerateError::Write`] if the file cannot be written.
pub fn write_starbuild(descriptor: &BuildDescriptor, options: &GenerateOptions) -> Result<PathBuf, GenerateError> {
  let path = starbuild_path(&options.dir);
  if !options.overwrite && path.exists() {
    return Err(GenerateError::PathExists { path });
  }

  let content = render(descriptor);
  let temp_path = options.dir.join(format!(".{}.tmp", STARBUILD_FILENAME));

  if let Err(e) = fs::write(&temp_path, &content).and_then(|()| fs::rename(&temp_path, &path)) {
    let _ = fs::remove_file(&temp_path);
    return Err(GenerateError::Write { path, source: e });
  }

  debug!(path = %path.display(), bytes = content.len(), "wrote STARBUILD");
  Ok(path)
}
