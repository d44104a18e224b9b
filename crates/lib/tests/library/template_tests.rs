//! Tests for template persistence feeding back into generation.

use starbuild_lib::descriptor::{DescriptorBuilder, Package, Script};
use starbuild_lib::render::render;
use starbuild_lib::template::{load_template, save_template};
use tempfile::TempDir;

#[test]
fn reloaded_template_renders_identically() {
  let temp = TempDir::new().unwrap();
  let dir = temp.path().join("templates");

  let (descriptor, _) = DescriptorBuilder::new()
    .packages([
      Package::new("mesa").with_description("OpenGL implementation"),
      Package::new("mesa-vulkan")
        .with_description("Vulkan drivers")
        .with_dependencies(vec!["vulkan-icd-loader".to_string()])
        .with_assemble_script(Script::new(["meson install -C build --destdir \"${pkgdir}\""])),
    ])
    .version("24.2.1")
    .build_dependencies(vec!["meson".to_string(), "python-mako".to_string()])
    .enable_advanced_fields(true)
    .options(vec!["lto".to_string(), "!docs".to_string()])
    .build();

  save_template(&dir, "mesa", &descriptor).unwrap();
  let loaded = load_template(&dir, "mesa").unwrap();

  assert_eq!(loaded, descriptor);
  assert_eq!(render(&loaded), render(&descriptor));
}

#[test]
fn hand_written_template_is_repaired_on_load() {
  let temp = TempDir::new().unwrap();
  std::fs::write(
    temp.path().join("sparse.template"),
    r#"{ "packages": [ { "name": "a", "version": "2.0" }, { "name": "a" }, { "name": "b", "version": "1.0" } ] }"#,
  )
  .unwrap();

  let loaded = load_template(temp.path(), "sparse").unwrap();

  let names: Vec<&str> = loaded.packages().iter().map(|p| p.name.as_str()).collect();
  assert_eq!(names, ["a", "b"]);
  assert_eq!(loaded.version(), "2.0");
  assert_eq!(loaded.packages()[1].version, "2.0");
  assert!(render(&loaded).contains("package_name=( \"a\" \"b\" )\n"));
}
