//! Serialization of a [`BuildDescriptor`] into STARBUILD text.
//!
//! Rendering is a pure function of the model. Output layout:
//!
//! ```text
//! # STARBUILD generated by StarbuildCreator
//!
//! package_name="foo"              # or ( "foo" "bar" ) for several packages
//! package_version="1.0"
//! description="..."               # or package_descriptions=( ... )
//! license=( "MIT" )               # single package only, when non-empty
//!
//! dependencies=( )
//! build_dependencies=( )
//! sources=( )
//! options=( "lto" "!docs" )       # only when non-empty
//!
//! prepare() {
//!     ...
//! }
//!
//! compile() { ... }  verify() { ... }  assemble() { ... }  # or assemble_<name>
//!
//! dependencies_<name>=( ... )     # multi-package extras, when non-empty
//! license_<name>=( ... )
//! gives=( ... ) clashes=( ... ) optional_dependencies=( ... )  # advanced fields
//! ```

use std::fmt::{self, Write};

use crate::consts::HEADER_COMMENT;
use crate::descriptor::{BuildDescriptor, Package, Script};

/// Indentation of script lines inside a phase body.
const SCRIPT_INDENT: &str = "    ";

/// Render a descriptor to its textual form.
pub fn render(descriptor: &BuildDescriptor) -> String {
  descriptor.to_string()
}

impl fmt::Display for BuildDescriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", HEADER_COMMENT)?;
    writeln!(f)?;

    write_identity(f, self)?;
    writeln!(f)?;

    write_array(f, "dependencies", &self.global_dependencies)?;
    write_array(f, "build_dependencies", &self.build_dependencies)?;
    write_array(f, "sources", &self.sources)?;
    write_optional_array(f, "options", self.options())?;
    writeln!(f)?;

    write_script(f, "prepare", &self.prepare_script)?;
    write_script(f, "compile", &self.compile_script)?;
    write_script(f, "verify", &self.verify_script)?;

    if self.is_multi_package() {
      for package in self.packages() {
        write_script(f, &per_package("assemble", package), &package.assemble_script)?;
      }
      for package in self.packages() {
        write_optional_array(f, &per_package("dependencies", package), &package.dependencies)?;
      }
      for package in self.packages() {
        write_optional_array(f, &per_package("license", package), &package.license)?;
      }
    } else {
      write_script(f, "assemble", &self.primary().assemble_script)?;
    }

    if self.enable_advanced_fields {
      if self.is_multi_package() {
        for package in self.packages() {
          write_advanced_fields(f, package, |field| per_package(field, package))?;
        }
      } else {
        write_advanced_fields(f, self.primary(), str::to_string)?;
      }
    }

    Ok(())
  }
}

fn write_identity<W: Write>(out: &mut W, descriptor: &BuildDescriptor) -> fmt::Result {
  if descriptor.is_multi_package() {
    let names: Vec<&str> = descriptor.packages().iter().map(|p| p.name.as_str()).collect();
    let descriptions: Vec<&str> = descriptor.packages().iter().map(|p| p.description.as_str()).collect();
    write_array(out, "package_name", &names)?;
    write_scalar(out, "package_version", descriptor.version())?;
    write_array(out, "package_descriptions", &descriptions)?;
  } else {
    let package = descriptor.primary();
    write_scalar(out, "package_name", &package.name)?;
    write_scalar(out, "package_version", &package.version)?;
    write_scalar(out, "description", &package.description)?;
    write_optional_array(out, "license", &package.license)?;
  }
  Ok(())
}

fn write_advanced_fields<W, N>(out: &mut W, package: &Package, name: N) -> fmt::Result
where
  W: Write,
  N: Fn(&str) -> String,
{
  write_optional_array(out, &name("gives"), &package.gives)?;
  write_optional_array(out, &name("clashes"), &package.clashes)?;
  write_optional_array(out, &name("optional_dependencies"), &package.optional_dependencies)
}

/// `<field>_<package-name>`, the naming convention for per-package fields.
fn per_package(field: &str, package: &Package) -> String {
  format!("{}_{}", field, package.name)
}

fn write_scalar<W: Write>(out: &mut W, name: &str, value: &str) -> fmt::Result {
  writeln!(out, "{}=\"{}\"", name, escape(value))
}

/// `name=( "a" "b" )`, or `name=( )` when empty.
fn write_array<W: Write, S: AsRef<str>>(out: &mut W, name: &str, items: &[S]) -> fmt::Result {
  write!(out, "{}=( ", name)?;
  for item in items {
    write!(out, "\"{}\" ", escape(item.as_ref()))?;
  }
  writeln!(out, ")")
}

/// Like [`write_array`], but emits nothing for an empty sequence.
fn write_optional_array<W: Write, S: AsRef<str>>(out: &mut W, name: &str, items: &[S]) -> fmt::Result {
  if items.is_empty() {
    return Ok(());
  }
  write_array(out, name, items)
}

fn write_script<W: Write>(out: &mut W, phase: &str, script: &Script) -> fmt::Result {
  writeln!(out, "{}() {{", phase)?;
  for line in script.lines() {
    writeln!(out, "{}{}", SCRIPT_INDENT, line)?;
  }
  writeln!(out, "}}")?;
  writeln!(out)
}

/// Escape characters that would terminate a double-quoted shell string.
///
/// `$` and backticks pass through so values like `${pkgver}` still expand.
fn escape(value: &str) -> std::borrow::Cow<'_, str> {
  if !value.contains(['"', '\\']) {
    return std::borrow::Cow::Borrowed(value);
  }
  let mut escaped = String::with_capacity(value.len() + 2);
  for c in value.chars() {
    if c == '"' || c == '\\' {
      escaped.push('\\');
    }
    escaped.push(c);
  }
  std::borrow::Cow::Owned(escaped)
}
