//! CLI output formatting utilities.
//!
//! Provides consistent formatting for terminal output: colored status
//! messages, section headers, and Unicode symbols.

use std::io::{self, Write};

use crossterm::{cursor::MoveTo, execute, terminal::Clear, terminal::ClearType};
use owo_colors::{OwoColorize, Stream};

pub mod symbols {
  pub const SUCCESS: &str = "✓";
  pub const ERROR: &str = "✗";
  pub const WARNING: &str = "⚠";
  pub const INFO: &str = "•";
  pub const POINTER: &str = ">";
}

pub fn print_success(message: &str) {
  println!(
    "{} {}",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    message.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

pub fn print_error(message: &str) {
  eprintln!(
    "{} {}",
    symbols::ERROR.if_supports_color(Stream::Stderr, |s| s.red()),
    message.if_supports_color(Stream::Stderr, |s| s.red())
  );
}

pub fn print_warning(message: &str) {
  eprintln!(
    "{} {}",
    symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
    message.if_supports_color(Stream::Stderr, |s| s.yellow())
  );
}

pub fn print_info(message: &str) {
  println!(
    "{} {}",
    symbols::INFO.if_supports_color(Stream::Stdout, |s| s.blue()),
    message
  );
}

pub fn print_header(title: &str) {
  println!();
  println!(
    "{}",
    format!("=== {} ===", title).if_supports_color(Stream::Stdout, |s| s.bold())
  );
}

/// Print a `label: a b c` summary line, skipping empty lists.
pub fn print_list(label: &str, items: &[String]) {
  if items.is_empty() {
    return;
  }
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    items.join(" ")
  );
}

pub fn print_stat(label: &str, value: &str) {
  println!(
    "  {}: {}",
    label.if_supports_color(Stream::Stdout, |s| s.dimmed()),
    value
  );
}

/// Clear the terminal and move the cursor home.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
  execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}
