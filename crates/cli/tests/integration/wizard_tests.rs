//! Interactive wizard integration tests, driven through piped stdin.

use predicates::prelude::*;

use super::common::{SINGLE_PACKAGE_ANSWERS, TestEnv};

#[test]
fn wizard_generates_single_package_descriptor() {
  let env = TestEnv::new();

  env
    .starbuild_cmd()
    .write_stdin(SINGLE_PACKAGE_ANSWERS)
    .assert()
    .success()
    .stdout(predicate::str::contains("STARBUILD file created successfully!"));

  let expected = concat!(
    "# STARBUILD generated by StarbuildCreator\n",
    "\n",
    "package_name=\"hello\"\n",
    "package_version=\"2.12\"\n",
    "description=\"GNU Hello\"\n",
    "license=( \"GPL-3.0-or-later\" )\n",
    "\n",
    "dependencies=( \"glibc\" )\n",
    "build_dependencies=( )\n",
    "sources=( \"https://ftp.gnu.org/gnu/hello/hello-2.12.tar.gz\" )\n",
    "options=( \"lto\" )\n",
    "\n",
    "prepare() {\n    cd \"${srcdir}\"\n}\n\n",
    "compile() {\n    ./configure --prefix=/usr\n    make\n}\n\n",
    "verify() {\n    make check\n}\n\n",
    "assemble() {\n    make DESTDIR=\"${pkgdir}\" install\n}\n\n",
  );
  assert_eq!(env.starbuild(), expected);
}

#[test]
fn wizard_declined_overwrite_keeps_existing_file() {
  let env = TestEnv::new();
  env.write_file("STARBUILD", "# handwritten\n");

  env
    .starbuild_cmd()
    .write_stdin("n\n")
    .assert()
    .success()
    .stdout(predicate::str::contains("Operation cancelled."))
    .stdout(predicate::str::contains("created successfully").not());

  assert_eq!(env.starbuild(), "# handwritten\n");
}

#[test]
fn wizard_confirmed_overwrite_replaces_file() {
  let env = TestEnv::new();
  env.write_file("STARBUILD", "# handwritten\n");

  env
    .starbuild_cmd()
    .write_stdin(format!("y\n{}", SINGLE_PACKAGE_ANSWERS))
    .assert()
    .success()
    .stderr(predicate::str::contains("already exists"));

  assert!(env.starbuild().contains("package_name=\"hello\""));
}

#[test]
fn wizard_declined_generation_writes_nothing() {
  let env = TestEnv::new();
  let input = SINGLE_PACKAGE_ANSWERS.replace(" qy\nn\n", " qn\n");

  env
    .starbuild_cmd()
    .write_stdin(input)
    .assert()
    .success()
    .stdout(predicate::str::contains("Operation cancelled."));

  assert!(!env.starbuild_path().exists());
}

#[test]
fn wizard_multi_package_with_advanced_fields() {
  let env = TestEnv::new();
  let input = concat!(
    "y\n",                     // advanced fields
    "libfoo, foo-utils\n",     // names
    "0.3\n",                   // version
    "Foo library\n",           // description libfoo
    "Foo tools\n",             // description foo-utils
    "MIT\n",                   // license libfoo
    "MIT, Apache-2.0\n",       // license foo-utils
    "glibc\n",                 // global dependencies
    "meson, ninja\n",          // build dependencies
    "\n",                      // dependencies libfoo
    "libfoo\n",                // dependencies foo-utils
    "foo-0.3.tar.xz\n",        // sources
    "libfoo.so\n",             // gives libfoo
    "\n",                      // clashes libfoo
    "\n",                      // optional libfoo
    "\n",                      // gives foo-utils
    "foo-utils-git\n",         // clashes foo-utils
    "bash-completion\n",       // optional foo-utils
    "END\n",                   // prepare
    "meson setup build\nninja -C build\nEND\n", // compile
    "END\n",                   // verify
    "END\n",                   // assemble libfoo
    "END\n",                   // assemble foo-utils
    "  q",                     // options: negate no-strip
    "y\n",                     // generate
    "n\n",                     // save template
  );

  env.starbuild_cmd().write_stdin(input).assert().success();
  let text = env.starbuild();

  assert!(text.contains("package_name=( \"libfoo\" \"foo-utils\" )\n"));
  assert!(text.contains("package_descriptions=( \"Foo library\" \"Foo tools\" )\n"));
  assert!(text.contains("build_dependencies=( \"meson\" \"ninja\" )\n"));
  assert!(text.contains("options=( \"!no-strip\" )\n"));
  assert!(text.contains("assemble_libfoo() {\n    # Add your commands here\n}\n"));
  assert!(text.contains("assemble_foo-utils() {\n    # Add your commands here\n}\n"));
  assert!(text.ends_with(concat!(
    "dependencies_foo-utils=( \"libfoo\" )\n",
    "license_libfoo=( \"MIT\" )\n",
    "license_foo-utils=( \"MIT\" \"Apache-2.0\" )\n",
    "gives_libfoo=( \"libfoo.so\" )\n",
    "clashes_foo-utils=( \"foo-utils-git\" )\n",
    "optional_dependencies_foo-utils=( \"bash-completion\" )\n",
  )));
}

#[test]
fn wizard_suggests_directory_name() {
  let env = TestEnv::new();
  let project = env.temp.path().join("My_Project");
  std::fs::create_dir(&project).unwrap();

  // Accept the suggested name and every other default.
  let input = concat!("n\n", "\n", "\n\n\n", "\n\n\n", "END\nEND\nEND\nEND\n", "q", "y\n", "n\n");
  env
    .starbuild_cmd()
    .current_dir(&project)
    .write_stdin(input)
    .assert()
    .success()
    .stdout(predicate::str::contains("[my-project]"));

  let text = std::fs::read_to_string(project.join("STARBUILD")).unwrap();
  assert!(text.contains("package_name=\"my-project\"\n"));
}
