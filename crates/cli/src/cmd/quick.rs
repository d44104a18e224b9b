//! Implementation of quick mode (`starbuild -q NAME VERSION DESCRIPTION`).
//!
//! Writes a minimal single-package STARBUILD without any prompting: empty
//! dependency and source arrays and empty phase bodies.

use std::path::Path;

use anyhow::{Context, Result};

use starbuild_lib::descriptor::{DescriptorBuilder, Package};
use starbuild_lib::generate::{GenerateOptions, write_starbuild};

use crate::output::print_success;

use super::report_warnings;

/// Execute quick mode in `dir`, replacing any existing STARBUILD.
pub fn cmd_quick(dir: &Path, name: &str, version: &str, description: &str) -> Result<()> {
  let (descriptor, warnings) = DescriptorBuilder::new()
    .package(Package::new(name).with_description(description))
    .version(version)
    .build();
  report_warnings(&warnings);

  let options = GenerateOptions {
    dir: dir.to_path_buf(),
    overwrite: true,
  };
  write_starbuild(&descriptor, &options).context("Could not create STARBUILD file")?;

  print_success("STARBUILD file created successfully!");
  print_success("Quick STARBUILD file created!");
  Ok(())
}
