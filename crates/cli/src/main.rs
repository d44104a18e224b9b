use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;
mod prompts;
mod selector;

use cmd::{cmd_quick, cmd_wizard};
use output::print_error;

/// StarbuildCreator - Easy STARBUILD file generator
///
/// Runs an interactive wizard by default.
#[derive(Parser)]
#[command(name = "starbuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Quick mode: write a minimal STARBUILD without prompting
  #[arg(
    short,
    long,
    num_args = 3,
    value_names = ["NAME", "VERSION", "DESCRIPTION"],
    conflicts_with = "template"
  )]
  quick: Option<Vec<String>>,

  /// Pre-fill the wizard from a saved template
  #[arg(short, long, value_name = "TEMPLATE")]
  template: Option<String>,

  /// Enable verbose logging
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "error" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  match run(cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      error!(error = %format!("{:#}", err), "starbuild failed");
      print_error(&format!("{:#}", err));
      ExitCode::FAILURE
    }
  }
}

fn run(cli: Cli) -> Result<()> {
  let dir = std::env::current_dir().context("Failed to determine the working directory")?;

  match cli.quick.as_deref() {
    Some([name, version, description]) => cmd_quick(&dir, name, version, description),
    Some(_) => bail!("quick mode takes NAME VERSION DESCRIPTION"),
    None => cmd_wizard(&dir, cli.template.as_deref()),
  }
}
