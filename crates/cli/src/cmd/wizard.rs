//! Implementation of the interactive wizard (the default `starbuild` command).
//!
//! Prompts in a fixed order (package identity, dependencies, sources,
//! advanced fields, scripts, options), previews the result, and writes the
//! STARBUILD file once the user confirms. An optional template pre-fills
//! every answer.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use starbuild_lib::descriptor::{BuildDescriptor, BuildWarning, DescriptorBuilder, Package};
use starbuild_lib::generate::{GenerateOptions, starbuild_exists, write_starbuild};
use starbuild_lib::options::OptionSelector;
use starbuild_lib::parse::parse_list;
use starbuild_lib::suggest::suggest_package_name;
use starbuild_lib::template::{TemplateError, load_template, save_template, templates_dir};

use crate::output::{
  clear_screen, print_error, print_header, print_info, print_list, print_stat, print_success, print_warning,
};
use crate::prompts::Prompter;
use crate::selector::{TerminalMode, select_options};

use super::report_warnings;

/// Options for a wizard run.
#[derive(Debug, Clone)]
pub struct WizardOptions {
  /// Directory the STARBUILD file is written into; also the source of the
  /// suggested package name.
  pub dir: PathBuf,
  /// Directory templates are loaded from and saved to.
  pub templates_dir: PathBuf,
  /// Template to pre-fill answers from.
  pub template: Option<String>,
  /// Which standard streams are terminals.
  pub terminal: TerminalMode,
}

/// How a wizard run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
  Generated(PathBuf),
  Cancelled,
}

/// Execute the wizard against the process's stdin and stdout.
///
/// # Errors
///
/// Returns an error if the STARBUILD file cannot be written or the terminal
/// cannot be read.
pub fn cmd_wizard(dir: &Path, template: Option<&str>) -> Result<()> {
  let stdin = io::stdin();
  let options = WizardOptions {
    dir: dir.to_path_buf(),
    templates_dir: templates_dir(),
    template: template.map(str::to_string),
    terminal: TerminalMode::detect(stdin.is_terminal(), io::stdout().is_terminal()),
  };

  let mut prompter = Prompter::new(stdin.lock(), io::stdout());
  let outcome = run_wizard(&mut prompter, &options)?;
  debug!(?outcome, "wizard finished");
  Ok(())
}

/// Run the wizard with an arbitrary prompter.
///
/// Prompts and the option selector are written to the prompter's output;
/// banners, headers, the preview and status lines use [`crate::output`].
pub fn run_wizard<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, options: &WizardOptions) -> Result<WizardOutcome> {
  let template = options
    .template
    .as_deref()
    .and_then(|name| load_defaults(&options.templates_dir, name));
  let template = template.as_ref();

  if options.terminal.redraw {
    clear_screen(prompter.output())?;
  }
  println!("Welcome to StarbuildCreator!");
  println!("This wizard will help you create a STARBUILD file.");

  let overwrite = starbuild_exists(&options.dir);
  if overwrite {
    print_warning("STARBUILD file already exists");
    if !prompter.confirm("Overwrite existing file?", false)? {
      return Ok(cancelled());
    }
  }

  print_header("Advanced Fields");
  println!("Would you like to configure advanced package fields?");
  println!("These include:");
  println!("  - gives: Virtual packages this package provides");
  println!("  - clashes: Packages that conflict with this one");
  println!("  - optional_dependencies: Optional dependencies");
  let advanced = prompter.confirm(
    "Enable advanced fields?",
    template.is_some_and(|t| t.enable_advanced_fields),
  )?;

  let (mut packages, version) = ask_basic_info(prompter, &options.dir, template)?;
  let (global_dependencies, build_dependencies) = ask_dependencies(prompter, &mut packages, template)?;

  print_header("Sources");
  let sources = prompter.ask_list(
    "Sources (URLs or local files, comma-separated)",
    template.map(|t| t.sources.as_slice()).unwrap_or_default(),
  )?;

  if advanced {
    ask_advanced_fields(prompter, &mut packages, template)?;
  }

  let builder = ask_scripts(prompter, &mut packages, template)?;

  println!();
  let mut selector = OptionSelector::default();
  if let Some(template) = template {
    selector.preselect(template.options());
  }
  let selected = select_options(prompter, selector, options.terminal)?;

  let (descriptor, warnings) = builder
    .packages(packages)
    .version(version)
    .global_dependencies(global_dependencies)
    .build_dependencies(build_dependencies)
    .sources(sources)
    .enable_advanced_fields(advanced)
    .options(selected)
    .build();
  report_warnings(&warnings);

  print_preview(&descriptor);

  if !prompter.confirm("Generate STARBUILD file?", false)? {
    return Ok(cancelled());
  }

  let generate = GenerateOptions {
    dir: options.dir.clone(),
    overwrite,
  };
  let path = write_starbuild(&descriptor, &generate).context("Could not create STARBUILD file")?;
  info!(path = %path.display(), packages = descriptor.packages().len(), "generated STARBUILD");
  print_success("STARBUILD file created successfully!");

  if prompter.confirm("Save as template for future use?", false)? {
    save_as_template(prompter, &options.templates_dir, &descriptor)?;
  }

  Ok(WizardOutcome::Generated(path))
}

fn cancelled() -> WizardOutcome {
  print_info("Operation cancelled.");
  WizardOutcome::Cancelled
}

/// Load a template for pre-filling. Failures degrade to no defaults.
fn load_defaults(dir: &Path, name: &str) -> Option<BuildDescriptor> {
  match load_template(dir, name) {
    Ok(descriptor) => {
      print_success("Template loaded");
      Some(descriptor)
    }
    Err(TemplateError::NotFound { path }) => {
      debug!(path = %path.display(), "template not found");
      print_warning("Template not found, using defaults");
      None
    }
    Err(e) => {
      warn!(error = %e, "failed to load template");
      print_warning(&format!("{}, using defaults", e));
      None
    }
  }
}

/// The template package matching `name`, or at the same position.
fn template_package<'a>(template: Option<&'a BuildDescriptor>, name: &str, index: usize) -> Option<&'a Package> {
  let packages = template?.packages();
  packages.iter().find(|p| p.name == name).or_else(|| packages.get(index))
}

fn ask_basic_info<R: BufRead, W: Write>(
  prompter: &mut Prompter<R, W>,
  dir: &Path,
  template: Option<&BuildDescriptor>,
) -> Result<(Vec<Package>, String)> {
  print_header("Basic Package Information");

  let default_names = match template {
    Some(t) => t.packages().iter().map(|p| p.name.as_str()).collect::<Vec<_>>().join(", "),
    None => suggest_package_name(dir),
  };
  let names = parse_list(&prompter.ask_or("Package name(s) (comma-separated for multiple)", &default_names)?);

  // Run the names through the builder now so every later prompt sees the
  // final package list.
  let (skeleton, warnings) = DescriptorBuilder::new()
    .packages(names.into_iter().map(Package::new))
    .build();
  if warnings.iter().any(|w| matches!(w, BuildWarning::NoPackages { .. })) {
    print_error("No valid package names provided");
  }
  report_warnings(&warnings);
  let mut packages = skeleton.packages().to_vec();
  let multi = packages.len() > 1;

  let version = prompter.ask_or("Package version", template.map_or("", |t| t.version()))?;

  if multi {
    println!();
    println!("Enter descriptions for each package:");
  }
  for (index, package) in packages.iter_mut().enumerate() {
    let previous = template_package(template, &package.name, index);
    let prompt = if multi {
      format!("Description for {}", package.name)
    } else {
      "Package description".to_string()
    };
    package.description = prompter.ask_or(&prompt, previous.map_or("", |p| p.description.as_str()))?;
  }

  if multi {
    println!();
    println!("Enter licenses for each package:");
  }
  for (index, package) in packages.iter_mut().enumerate() {
    let previous = template_package(template, &package.name, index);
    let prompt = if multi {
      format!("License(s) for {} (comma-separated)", package.name)
    } else {
      "License(s) (comma-separated, e.g., 'GPL-3.0, MIT')".to_string()
    };
    package.license = prompter.ask_list(&prompt, previous.map(|p| p.license.as_slice()).unwrap_or_default())?;
  }

  Ok((packages, version))
}

fn ask_dependencies<R: BufRead, W: Write>(
  prompter: &mut Prompter<R, W>,
  packages: &mut [Package],
  template: Option<&BuildDescriptor>,
) -> Result<(Vec<String>, Vec<String>)> {
  print_header("Dependencies");

  let global = prompter.ask_list(
    "Global dependencies (comma-separated)",
    template.map(|t| t.global_dependencies.as_slice()).unwrap_or_default(),
  )?;
  let build = prompter.ask_list(
    "Build dependencies (comma-separated)",
    template.map(|t| t.build_dependencies.as_slice()).unwrap_or_default(),
  )?;

  if packages.len() > 1 {
    for (index, package) in packages.iter_mut().enumerate() {
      let previous = template_package(template, &package.name, index);
      package.dependencies = prompter.ask_list(
        &format!("Additional dependencies for {} (comma-separated)", package.name),
        previous.map(|p| p.dependencies.as_slice()).unwrap_or_default(),
      )?;
    }
  }

  Ok((global, build))
}

fn ask_advanced_fields<R: BufRead, W: Write>(
  prompter: &mut Prompter<R, W>,
  packages: &mut [Package],
  template: Option<&BuildDescriptor>,
) -> Result<()> {
  print_header("Advanced Package Fields");
  let multi = packages.len() > 1;

  for (index, package) in packages.iter_mut().enumerate() {
    let previous = template_package(template, &package.name, index);
    let (gives, clashes, optional) = if multi {
      println!();
      println!("Package: {}", package.name);
      (
        format!("Gives for {} (comma-separated)", package.name),
        format!("Clashes for {} (comma-separated)", package.name),
        format!("Optional dependencies for {} (comma-separated)", package.name),
      )
    } else {
      (
        "Gives (virtual packages, comma-separated)".to_string(),
        "Clashes (conflicting packages, comma-separated)".to_string(),
        "Optional dependencies (comma-separated)".to_string(),
      )
    };

    package.gives = prompter.ask_list(&gives, previous.map(|p| p.gives.as_slice()).unwrap_or_default())?;
    package.clashes = prompter.ask_list(&clashes, previous.map(|p| p.clashes.as_slice()).unwrap_or_default())?;
    package.optional_dependencies =
      prompter.ask_list(&optional, previous.map(|p| p.optional_dependencies.as_slice()).unwrap_or_default())?;
  }

  Ok(())
}

/// Ask for every phase script. Shared phases land on the returned builder,
/// assemble scripts on their packages.
fn ask_scripts<R: BufRead, W: Write>(
  prompter: &mut Prompter<R, W>,
  packages: &mut [Package],
  template: Option<&BuildDescriptor>,
) -> Result<DescriptorBuilder> {
  print_header("Build Scripts");

  let prepare = prompter.ask_script(
    "Prepare script (e.g., 'cd \"${srcdir}\"')",
    template.map(|t| &t.prepare_script),
  )?;
  let compile = prompter.ask_script(
    "Compile script (e.g., 'make -j$(nproc)')",
    template.map(|t| &t.compile_script),
  )?;
  let verify = prompter.ask_script("Verify script (e.g., 'make check')", template.map(|t| &t.verify_script))?;

  let multi = packages.len() > 1;
  for (index, package) in packages.iter_mut().enumerate() {
    let previous = template_package(template, &package.name, index).map(|p| &p.assemble_script);
    let prompt = if multi {
      format!("Assemble script for {}", package.name)
    } else {
      println!();
      println!("Assemble script for {}:", package.name);
      "Assemble script (e.g., 'make DESTDIR=\"${pkgdir}\" install')".to_string()
    };
    package.assemble_script = prompter.ask_script(&prompt, previous)?;
  }

  Ok(
    DescriptorBuilder::new()
      .prepare_script(prepare)
      .compile_script(compile)
      .verify_script(verify),
  )
}

fn print_preview(descriptor: &BuildDescriptor) {
  print_header("Preview");

  if descriptor.is_multi_package() {
    println!("Packages:");
    for package in descriptor.packages() {
      println!("  - {}: {}", package.name, package.description);
      print_list("  License", &package.license);
    }
    print_stat("Version", descriptor.version());
  } else {
    let package = descriptor.primary();
    print_stat("Package", &format!("{} {}", package.name, package.version));
    print_stat("Description", &package.description);
    print_list("License", &package.license);
  }

  print_list("Dependencies", &descriptor.global_dependencies);
  print_list("Build dependencies", &descriptor.build_dependencies);
  print_list("Sources", &descriptor.sources);

  if descriptor.enable_advanced_fields {
    for package in descriptor.packages() {
      let label = |field: &str| {
        if descriptor.is_multi_package() {
          format!("{} ({})", field, package.name)
        } else {
          field.to_string()
        }
      };
      print_list(&label("Gives"), &package.gives);
      print_list(&label("Clashes"), &package.clashes);
      print_list(&label("Optional dependencies"), &package.optional_dependencies);
    }
  }

  print_list("Options", descriptor.options());
}

fn save_as_template<R: BufRead, W: Write>(
  prompter: &mut Prompter<R, W>,
  dir: &Path,
  descriptor: &BuildDescriptor,
) -> Result<()> {
  let name = prompter.ask("Template name")?;
  if name.is_empty() {
    print_info("Template save cancelled.");
    return Ok(());
  }

  match save_template(dir, &name, descriptor) {
    Ok(path) => {
      info!(path = %path.display(), "saved template");
      print_success("Template saved");
    }
    Err(e) => {
      warn!(error = %e, "failed to save template");
      print_error(&format!("Could not save template: {}", e));
    }
  }
  Ok(())
}
