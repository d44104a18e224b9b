//! Build descriptor types.
//!
//! A [`BuildDescriptor`] describes one or more [`Package`]s that share a single
//! build pipeline. It is only ever constructed through
//! [`DescriptorBuilder`](super::DescriptorBuilder), which enforces the model
//! invariants:
//!
//! - there is always at least one package
//! - package names are non-empty and unique
//! - every package carries the version of the first package
//! - each option flag appears at most once
//!
//! Script line sequences are normalized by [`Script`] itself, so no script
//! ever contains a blank line.

use serde::{Deserialize, Serialize};

use crate::consts::SCRIPT_PLACEHOLDER;
use crate::parse::parse_script_lines;

use super::builder::DescriptorBuilder;

/// An ordered sequence of non-empty, trimmed shell lines forming one build phase.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Script(Vec<String>);

impl Script {
  /// Create a script from raw lines, dropping blank ones.
  ///
  /// The result may be empty; use [`Script::from_input`] for user-entered
  /// scripts that must never render an empty body.
  pub fn new<I, S>(lines: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    Self(parse_script_lines(lines))
  }

  /// Create a script from user input, substituting the placeholder comment
  /// when nothing but blank lines were entered.
  pub fn from_input<I, S>(lines: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let script = Self::new(lines);
    if script.is_empty() { Self::placeholder() } else { script }
  }

  /// A script holding only the placeholder comment.
  pub fn placeholder() -> Self {
    Self(vec![SCRIPT_PLACEHOLDER.to_string()])
  }

  pub fn lines(&self) -> &[String] {
    &self.0
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// True when the script holds nothing but the placeholder comment.
  pub fn is_placeholder(&self) -> bool {
    self.0.len() == 1 && self.0[0] == SCRIPT_PLACEHOLDER
  }
}

impl From<Vec<String>> for Script {
  fn from(lines: Vec<String>) -> Self {
    Self::new(lines)
  }
}

impl From<Script> for Vec<String> {
  fn from(script: Script) -> Self {
    script.0
  }
}

/// One buildable unit within a descriptor.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
  pub name: String,
  /// Only the first package's version is authoritative.
  pub version: String,
  pub description: String,
  pub license: Vec<String>,
  /// Package-specific dependencies, additive to the global ones.
  pub dependencies: Vec<String>,
  /// Virtual packages this package provides.
  pub gives: Vec<String>,
  /// Packages that conflict with this one.
  pub clashes: Vec<String>,
  pub optional_dependencies: Vec<String>,
  /// Body of the package's `assemble` phase.
  pub assemble_script: Script,
}

impl Package {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      ..Self::default()
    }
  }

  pub fn with_version(mut self, version: impl Into<String>) -> Self {
    self.version = version.into();
    self
  }

  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = description.into();
    self
  }

  pub fn with_license(mut self, license: Vec<String>) -> Self {
    self.license = license;
    self
  }

  pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
    self.dependencies = dependencies;
    self
  }

  pub fn with_assemble_script(mut self, script: Script) -> Self {
    self.assemble_script = script;
    self
  }
}

/// The complete, validated description of one STARBUILD artifact.
///
/// # Serialization
///
/// Serializes to JSON for templates. Deserialization goes back through
/// [`DescriptorBuilder`], so a hand-edited template cannot smuggle in an
/// invalid model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DescriptorBuilder")]
pub struct BuildDescriptor {
  pub(super) packages: Vec<Package>,
  pub global_dependencies: Vec<String>,
  pub build_dependencies: Vec<String>,
  pub sources: Vec<String>,
  pub prepare_script: Script,
  pub compile_script: Script,
  pub verify_script: Script,
  /// Gates collection and rendering of `gives`, `clashes` and `optional_dependencies`.
  pub enable_advanced_fields: bool,
  pub(super) options: Vec<String>,
}

impl BuildDescriptor {
  /// All packages, in declaration order. Never empty.
  pub fn packages(&self) -> &[Package] {
    &self.packages
  }

  /// The first package, whose version is authoritative.
  pub fn primary(&self) -> &Package {
    &self.packages[0]
  }

  pub fn version(&self) -> &str {
    &self.primary().version
  }

  /// Whether the descriptor uses the multi-package syntax variant.
  pub fn is_multi_package(&self) -> bool {
    self.packages.len() > 1
  }

  /// Selected option flags: bare names are enabled, `!`-prefixed are negated.
  pub fn options(&self) -> &[String] {
    &self.options
  }

  /// Reopen this descriptor for modification.
  pub fn into_builder(self) -> DescriptorBuilder {
    DescriptorBuilder::from(self)
  }
}
