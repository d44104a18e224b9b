//! Construction of [`BuildDescriptor`]s.
//!
//! The builder accepts whatever the wizard collected and repairs input-shape
//! problems at [`DescriptorBuilder::build`] instead of failing. Every repair is
//! reported as a [`BuildWarning`] so the caller can surface it.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::DEFAULT_PACKAGE_NAME;
use crate::options::flag_name;

use super::types::{BuildDescriptor, Package, Script};

/// An input-shape problem that was repaired while building a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWarning {
  /// No package survived validation; a placeholder package was substituted.
  NoPackages { substituted: String },
  /// A package with an empty name was dropped.
  BlankPackageName,
  /// A package name held characters that cannot appear in a shell
  /// identifier; each was replaced with `-`.
  InvalidPackageName { name: String, renamed: String },
  /// A later package reused an earlier package's name and was dropped.
  DuplicatePackage { name: String },
  /// A package's version differed from the first package's and was replaced.
  VersionOverridden { package: String, version: String },
  /// An option flag was selected more than once; later entries were dropped.
  DuplicateOption { flag: String },
}

impl fmt::Display for BuildWarning {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BuildWarning::NoPackages { substituted } => {
        write!(f, "No valid package names provided, using default package name '{}'", substituted)
      }
      BuildWarning::BlankPackageName => write!(f, "Ignoring package with an empty name"),
      BuildWarning::InvalidPackageName { name, renamed } => {
        write!(f, "Package name '{}' is not a valid identifier, using '{}'", name, renamed)
      }
      BuildWarning::DuplicatePackage { name } => write!(f, "Ignoring duplicate package '{}'", name),
      BuildWarning::VersionOverridden { package, version } => {
        write!(f, "Package '{}' shares version '{}' with the first package", package, version)
      }
      BuildWarning::DuplicateOption { flag } => write!(f, "Option '{}' selected more than once", flag),
    }
  }
}

/// Accumulates descriptor fields and validates them into a [`BuildDescriptor`].
///
/// Field names mirror [`BuildDescriptor`]'s serialized form, which lets
/// templates deserialize through the builder.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptorBuilder {
  packages: Vec<Package>,
  global_dependencies: Vec<String>,
  build_dependencies: Vec<String>,
  sources: Vec<String>,
  prepare_script: Script,
  compile_script: Script,
  verify_script: Script,
  enable_advanced_fields: bool,
  options: Vec<String>,
  #[serde(skip)]
  version: Option<String>,
}

impl DescriptorBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn package(mut self, package: Package) -> Self {
    self.packages.push(package);
    self
  }

  pub fn packages(mut self, packages: impl IntoIterator<Item = Package>) -> Self {
    self.packages.extend(packages);
    self
  }

  /// Set the version shared by every package.
  pub fn version(mut self, version: impl Into<String>) -> Self {
    self.version = Some(version.into());
    self
  }

  pub fn global_dependencies(mut self, dependencies: Vec<String>) -> Self {
    self.global_dependencies = dependencies;
    self
  }

  pub fn build_dependencies(mut self, dependencies: Vec<String>) -> Self {
    self.build_dependencies = dependencies;
    self
  }

  pub fn sources(mut self, sources: Vec<String>) -> Self {
    self.sources = sources;
    self
  }

  pub fn prepare_script(mut self, script: Script) -> Self {
    self.prepare_script = script;
    self
  }

  pub fn compile_script(mut self, script: Script) -> Self {
    self.compile_script = script;
    self
  }

  pub fn verify_script(mut self, script: Script) -> Self {
    self.verify_script = script;
    self
  }

  pub fn enable_advanced_fields(mut self, enabled: bool) -> Self {
    self.enable_advanced_fields = enabled;
    self
  }

  pub fn options(mut self, options: Vec<String>) -> Self {
    self.options = options;
    self
  }

  /// Validate the collected fields into a descriptor.
  ///
  /// Never fails. Repairs are applied in this order: invalid name characters
  /// are replaced, blank and duplicate package names are dropped, a placeholder package is substituted if none
  /// remain, the first package's version is propagated, and repeated option
  /// flags are dropped.
  pub fn build(self) -> (BuildDescriptor, Vec<BuildWarning>) {
    let mut warnings = Vec::new();

    let mut seen = HashSet::new();
    let mut packages = Vec::with_capacity(self.packages.len());
    for mut package in self.packages {
      package.name = package.name.trim().to_string();
      if package.name.is_empty() {
        warnings.push(BuildWarning::BlankPackageName);
        continue;
      }
      if !package.name.chars().all(is_package_name_char) {
        let renamed: String = package
          .name
          .chars()
          .map(|c| if is_package_name_char(c) { c } else { '-' })
          .collect();
        warnings.push(BuildWarning::InvalidPackageName {
          name: std::mem::replace(&mut package.name, renamed.clone()),
          renamed,
        });
      }
      if !seen.insert(package.name.clone()) {
        warnings.push(BuildWarning::DuplicatePackage { name: package.name });
        continue;
      }
      packages.push(package);
    }

    if packages.is_empty() {
      warnings.push(BuildWarning::NoPackages {
        substituted: DEFAULT_PACKAGE_NAME.to_string(),
      });
      packages.push(Package::new(DEFAULT_PACKAGE_NAME));
    }

    let version = match self.version {
      Some(version) => version,
      None => packages[0].version.clone(),
    };
    for (index, package) in packages.iter_mut().enumerate() {
      if index > 0 && !package.version.is_empty() && package.version != version {
        warnings.push(BuildWarning::VersionOverridden {
          package: package.name.clone(),
          version: version.clone(),
        });
      }
      package.version = version.clone();
    }

    let mut flags = HashSet::new();
    let mut options = Vec::with_capacity(self.options.len());
    for entry in self.options {
      let entry = entry.trim().to_string();
      let flag = flag_name(&entry).to_string();
      if flag.is_empty() {
        continue;
      }
      if !flags.insert(flag.clone()) {
        warnings.push(BuildWarning::DuplicateOption { flag });
        continue;
      }
      options.push(entry);
    }

    let descriptor = BuildDescriptor {
      packages,
      global_dependencies: self.global_dependencies,
      build_dependencies: self.build_dependencies,
      sources: self.sources,
      prepare_script: self.prepare_script,
      compile_script: self.compile_script,
      verify_script: self.verify_script,
      enable_advanced_fields: self.enable_advanced_fields,
      options,
    };

    (descriptor, warnings)
  }
}

/// Characters allowed in a package name. Names end up in function and
/// variable names such as `assemble_<name>`.
fn is_package_name_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+')
}

impl From<BuildDescriptor> for DescriptorBuilder {
  fn from(descriptor: BuildDescriptor) -> Self {
    Self {
      packages: descriptor.packages,
      global_dependencies: descriptor.global_dependencies,
      build_dependencies: descriptor.build_dependencies,
      sources: descriptor.sources,
      prepare_script: descriptor.prepare_script,
      compile_script: descriptor.compile_script,
      verify_script: descriptor.verify_script,
      enable_advanced_fields: descriptor.enable_advanced_fields,
      options: descriptor.options,
      version: None,
    }
  }
}

impl From<DescriptorBuilder> for BuildDescriptor {
  fn from(builder: DescriptorBuilder) -> Self {
    let (descriptor, warnings) = builder.build();
    for warning in &warnings {
      warn!(%warning, "repaired descriptor");
    }
    descriptor
  }
}
