//! Template save/load integration tests.

use predicates::prelude::*;

use super::common::{SINGLE_PACKAGE_ANSWERS, TestEnv};

#[test]
fn saved_template_round_trips_through_wizard() {
  let env = TestEnv::new();
  let save = SINGLE_PACKAGE_ANSWERS.replace(" qy\nn\n", " qy\ny\ngnu\n");

  env
    .starbuild_cmd()
    .write_stdin(save)
    .assert()
    .success()
    .stdout(predicate::str::contains("Template saved"));
  assert!(env.templates_dir().join("gnu.template").exists());

  let first = env.starbuild();
  std::fs::remove_file(env.starbuild_path()).unwrap();

  // Accept every template default.
  let input = concat!("\n", "\n\n\n\n", "\n\n\n", "END\nEND\nEND\nEND\n", "q", "y\n", "n\n");
  env
    .starbuild_cmd()
    .args(["-t", "gnu"])
    .write_stdin(input)
    .assert()
    .success()
    .stdout(predicate::str::contains("Template loaded"));

  assert_eq!(env.starbuild(), first);
}

#[test]
fn missing_template_warns_and_continues() {
  let env = TestEnv::new();

  env
    .starbuild_cmd()
    .args(["--template", "missing"])
    .write_stdin(SINGLE_PACKAGE_ANSWERS)
    .assert()
    .success()
    .stderr(predicate::str::contains("Template not found, using defaults"));

  assert!(env.starbuild_path().exists());
}

#[test]
fn malformed_template_warns_and_continues() {
  let env = TestEnv::new();
  env.write_file("templates/broken.template", "{ not json");

  env
    .starbuild_cmd()
    .args(["-t", "broken"])
    .write_stdin(SINGLE_PACKAGE_ANSWERS)
    .assert()
    .success()
    .stderr(predicate::str::contains("using defaults"));

  assert!(env.starbuild().contains("package_name=\"hello\""));
}

#[test]
fn template_save_failure_still_exits_zero() {
  let env = TestEnv::new();
  env.write_file("templates", "a file where the directory should be");
  let save = SINGLE_PACKAGE_ANSWERS.replace(" qy\nn\n", " qy\ny\ngnu\n");

  env
    .starbuild_cmd()
    .write_stdin(save)
    .assert()
    .success()
    .stderr(predicate::str::contains("Could not save template"));

  assert!(env.starbuild_path().exists());
}
