//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
///
/// Each test gets its own working directory and templates directory.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// Get a Command for the starbuild binary, isolated to this environment.
  pub fn starbuild_cmd(&self) -> Command {
    let mut cmd = cargo_bin_cmd!("starbuild");
    cmd
      .current_dir(self.temp.path())
      .env("STARBUILD_TEMPLATES_DIR", self.templates_dir())
      .env_remove("RUST_LOG");
    cmd
  }

  pub fn starbuild_path(&self) -> PathBuf {
    self.temp.path().join("STARBUILD")
  }

  pub fn templates_dir(&self) -> PathBuf {
    self.temp.path().join("templates")
  }

  /// Read the generated STARBUILD.
  pub fn starbuild(&self) -> String {
    std::fs::read_to_string(self.starbuild_path()).unwrap_or_else(|e| panic!("Failed to read STARBUILD: {}", e))
  }

  /// Write a file relative to the temp directory.
  pub fn write_file(&self, relative_path: &str, content: &str) {
    let path = self.temp.path().join(relative_path);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
  }
}

/// Answers for a single-package wizard run without advanced fields.
///
/// Selects `lto` (last catalog entry) as enabled, then generates and declines
/// the template save.
pub const SINGLE_PACKAGE_ANSWERS: &str = concat!(
  "n\n",                                      // advanced fields
  "hello\n",                                  // names
  "2.12\n",                                   // version
  "GNU Hello\n",                              // description
  "GPL-3.0-or-later\n",                       // license
  "glibc\n",                                  // global dependencies
  "\n",                                       // build dependencies
  "https://ftp.gnu.org/gnu/hello/hello-2.12.tar.gz\n", // sources
  "cd \"${srcdir}\"\nEND\n",                  // prepare
  "./configure --prefix=/usr\nmake\nEND\n",   // compile
  "make check\nEND\n",                        // verify
  "make DESTDIR=\"${pkgdir}\" install\nEND\n", // assemble
  "\x1b[A q",                                 // options: up to `lto`, toggle, finish
  "y\n",                                      // generate
  "n\n",                                      // save template
);
