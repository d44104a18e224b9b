//! Line-oriented prompts.
//!
//! [`Prompter`] owns both ends of the conversation so the wizard can run
//! against stdin/stdout or against in-memory buffers in tests. End of input
//! is never an error: line prompts answer with their default, confirmations
//! answer with theirs, and script entry stops.

use std::io::{BufRead, Write};

use anyhow::Result;

use starbuild_lib::consts::SCRIPT_END_MARKER;
use starbuild_lib::descriptor::Script;
use starbuild_lib::parse::parse_list;

/// Question-and-answer channel of the wizard.
///
/// Only prompt text and the option selector are written to `output`. Status
/// lines, headers and the preview go through [`crate::output`] to the
/// process's stdout and stderr, like every other command.
pub struct Prompter<R, W> {
  input: R,
  output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
  pub fn new(input: R, output: W) -> Self {
    Self { input, output }
  }

  /// Read one line, without its terminator. `None` at end of input.
  fn read_line(&mut self) -> Result<Option<String>> {
    let mut line = String::new();
    if self.input.read_line(&mut line)? == 0 {
      return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
  }

  /// Ask for a single trimmed line.
  pub fn ask(&mut self, prompt: &str) -> Result<String> {
    self.ask_or(prompt, "")
  }

  /// Ask for a single trimmed line, answering `default` when left empty.
  pub fn ask_or(&mut self, prompt: &str, default: &str) -> Result<String> {
    if default.is_empty() {
      write!(self.output, "{}: ", prompt)?;
    } else {
      write!(self.output, "{} [{}]: ", prompt, default)?;
    }
    self.output.flush()?;

    let answer = self.read_line()?.unwrap_or_default();
    let answer = answer.trim();
    if answer.is_empty() {
      Ok(default.to_string())
    } else {
      Ok(answer.to_string())
    }
  }

  /// Ask for a comma-separated list, answering `default` when left empty.
  pub fn ask_list(&mut self, prompt: &str, default: &[String]) -> Result<Vec<String>> {
    let answer = self.ask_or(prompt, &default.join(", "))?;
    Ok(parse_list(&answer))
  }

  /// Ask a yes/no question. Only `y`/`yes` (any case) confirm; an empty
  /// answer takes `default`.
  pub fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    write!(self.output, "{} {} ", prompt, hint)?;
    self.output.flush()?;

    let answer = self.read_line()?.unwrap_or_default().trim().to_ascii_lowercase();
    if answer.is_empty() {
      return Ok(default);
    }
    Ok(matches!(answer.as_str(), "y" | "yes"))
  }

  /// Read a multi-line script terminated by a line containing only `END`.
  ///
  /// Blank lines are dropped. When nothing was entered, `default` is kept if
  /// it has content, otherwise the placeholder script is used.
  pub fn ask_script(&mut self, prompt: &str, default: Option<&Script>) -> Result<Script> {
    writeln!(self.output, "{}", prompt)?;
    writeln!(
      self.output,
      "(Type '{}' on a line by itself to finish)",
      SCRIPT_END_MARKER
    )?;
    if let Some(script) = default.filter(|s| !s.is_empty() && !s.is_placeholder()) {
      writeln!(self.output, "(Leave empty to keep the template's {} line(s))", script.lines().len())?;
    }
    self.output.flush()?;

    let mut lines = Vec::new();
    while let Some(line) = self.read_line()? {
      if line.trim() == SCRIPT_END_MARKER {
        break;
      }
      lines.push(line);
    }

    let script = Script::new(lines);
    if script.is_empty() {
      if let Some(default) = default.filter(|s| !s.is_empty()) {
        return Ok(default.clone());
      }
      return Ok(Script::placeholder());
    }
    Ok(script)
  }

  /// Read a single raw byte. `None` at end of input.
  pub fn read_byte(&mut self) -> Result<Option<u8>> {
    let byte = self.peek_byte()?;
    if byte.is_some() {
      self.input.consume(1);
    }
    Ok(byte)
  }

  /// Look at the next raw byte without consuming it.
  pub fn peek_byte(&mut self) -> Result<Option<u8>> {
    Ok(self.input.fill_buf()?.first().copied())
  }

  pub fn output(&mut self) -> &mut W {
    &mut self.output
  }
}
