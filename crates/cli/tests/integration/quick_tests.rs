//! Quick mode integration tests.

use predicates::prelude::*;

use super::common::TestEnv;

#[test]
fn quick_mode_writes_minimal_descriptor() {
  let env = TestEnv::new();

  env
    .starbuild_cmd()
    .args(["-q", "foo", "1.0", "bar"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Quick STARBUILD file created!"));

  let expected = concat!(
    "# STARBUILD generated by StarbuildCreator\n",
    "\n",
    "package_name=\"foo\"\n",
    "package_version=\"1.0\"\n",
    "description=\"bar\"\n",
    "\n",
    "dependencies=( )\n",
    "build_dependencies=( )\n",
    "sources=( )\n",
    "\n",
    "prepare() {\n}\n\n",
    "compile() {\n}\n\n",
    "verify() {\n}\n\n",
    "assemble() {\n}\n\n",
  );
  assert_eq!(env.starbuild(), expected);
}

#[test]
fn quick_mode_overwrites_without_prompting() {
  let env = TestEnv::new();
  env.write_file("STARBUILD", "# old\n");

  env.starbuild_cmd().args(["--quick", "foo", "1.0", "bar"]).assert().success();

  assert!(env.starbuild().contains("package_name=\"foo\""));
}

#[test]
fn quick_mode_with_blank_name_uses_placeholder() {
  let env = TestEnv::new();

  env
    .starbuild_cmd()
    .args(["-q", "  ", "1.0", "bar"])
    .assert()
    .success()
    .stderr(predicate::str::contains("mypackage"));

  assert!(env.starbuild().contains("package_name=\"mypackage\""));
}

#[test]
#[cfg(unix)]
fn quick_mode_write_failure_exits_nonzero() {
  use std::os::unix::fs::PermissionsExt;

  let env = TestEnv::new();
  let readonly = env.temp.path().join("readonly");
  std::fs::create_dir(&readonly).unwrap();
  std::fs::set_permissions(&readonly, std::fs::Permissions::from_mode(0o555)).unwrap();

  // Root ignores directory permissions; nothing to test there.
  if std::fs::write(readonly.join("probe"), "").is_ok() {
    return;
  }

  env
    .starbuild_cmd()
    .current_dir(&readonly)
    .args(["-q", "foo", "1.0", "bar"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Could not create STARBUILD file"))
    .stdout(predicate::str::contains("created").not());

  assert!(!readonly.join("STARBUILD").exists());
}
