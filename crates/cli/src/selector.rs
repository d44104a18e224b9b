//! Terminal front end for the option selector.
//!
//! Decodes raw input bytes into [`Key`]s, feeds them to an
//! [`OptionSelector`] and redraws the catalog after every key. Raw mode is
//! held by a [`RawModeGuard`] for exactly as long as the loop runs.

use std::io::{BufRead, Write};

use anyhow::Result;
use crossterm::terminal;
use owo_colors::{OwoColorize, Stream};
use tracing::{debug, warn};

use starbuild_lib::options::{Key, OptionSelector, OptionState, Step};

use crate::output::{clear_screen, symbols};
use crate::prompts::Prompter;

const ESC: u8 = 0x1b;
const CTRL_C: u8 = 0x03;
const CTRL_D: u8 = 0x04;

const INSTRUCTIONS: &str = "Use arrow keys (or j/k) to navigate, Enter/Space to toggle, 'q' to finish";

/// How the selector talks to the terminal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TerminalMode {
  /// Stdin is a terminal: read keys in raw mode, one press at a time.
  pub raw_input: bool,
  /// Stdout is that terminal too: clear and redraw after every key.
  pub redraw: bool,
}

impl TerminalMode {
  pub fn detect(stdin_is_terminal: bool, stdout_is_terminal: bool) -> Self {
    Self {
      raw_input: stdin_is_terminal,
      redraw: stdin_is_terminal && stdout_is_terminal,
    }
  }
}

/// Keeps the terminal in raw mode until dropped.
///
/// Restoration happens on every exit path out of the selector loop,
/// including early returns through `?`.
pub struct RawModeGuard {
  active: bool,
}

impl RawModeGuard {
  /// Enter raw mode if `enable` is set; otherwise a no-op guard.
  pub fn acquire(enable: bool) -> Result<Self> {
    if enable {
      terminal::enable_raw_mode()?;
      debug!("entered raw mode");
    }
    Ok(Self { active: enable })
  }
}

impl Drop for RawModeGuard {
  fn drop(&mut self) {
    if self.active {
      if let Err(e) = terminal::disable_raw_mode() {
        warn!(error = %e, "failed to restore terminal mode");
      } else {
        debug!("left raw mode");
      }
    }
  }
}

/// Decode the next key from `prompter`. `None` at end of input.
///
/// Arrow keys arrive as `ESC [ A` / `ESC [ B`.
pub fn read_key<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Option<Key>> {
  let Some(byte) = prompter.read_byte()? else {
    return Ok(None);
  };

  let key = match byte {
    b'q' | b'Q' | CTRL_C | CTRL_D => Key::Finish,
    b' ' | b'\r' | b'\n' => Key::Toggle,
    b'k' => Key::Up,
    b'j' => Key::Down,
    // A lone ESC leaves the following byte for the next key.
    ESC if prompter.peek_byte()? == Some(b'[') => {
      prompter.read_byte()?;
      match prompter.read_byte()? {
        Some(b'A') => Key::Up,
        Some(b'B') => Key::Down,
        _ => Key::Other,
      }
    }
    _ => Key::Other,
  };
  Ok(Some(key))
}

/// Run the selector until the user finishes, returning the selected options.
///
/// Raw mode is held while keys are read when `mode.raw_input` is set. With
/// `mode.redraw` the list is redrawn after each key; otherwise it is drawn
/// once before and once after.
pub fn select_options<R: BufRead, W: Write>(
  prompter: &mut Prompter<R, W>,
  mut selector: OptionSelector,
  mode: TerminalMode,
) -> Result<Vec<String>> {
  {
    let _raw = RawModeGuard::acquire(mode.raw_input)?;
    let newline = if mode.redraw { "\r\n" } else { "\n" };

    draw(prompter.output(), &selector, mode.redraw, newline)?;
    loop {
      let key = read_key(prompter)?.unwrap_or(Key::Finish);
      if selector.handle(key) == Step::Finished {
        break;
      }
      if mode.redraw {
        draw(prompter.output(), &selector, true, newline)?;
      }
    }
  }

  let options = selector.to_option_list();
  debug!(?options, "options selected");
  if !mode.redraw {
    draw(prompter.output(), &selector, false, "\n")?;
  }
  Ok(options)
}

fn draw<W: Write>(out: &mut W, selector: &OptionSelector, clear: bool, newline: &str) -> Result<()> {
  if clear {
    clear_screen(out)?;
  }
  write!(out, "=== Package Options ==={nl}{}{nl}{nl}", INSTRUCTIONS, nl = newline)?;

  for entry in selector.entries() {
    let marker = if entry.focused {
      format!("  {} ", symbols::POINTER)
    } else {
      "    ".to_string()
    };
    match entry.state {
      OptionState::Unselected => write!(out, "{}  {}{}", marker, entry.name, newline)?,
      OptionState::Enabled => write!(
        out,
        "{}{}{}",
        marker,
        entry.name.if_supports_color(Stream::Stdout, |s| s.magenta()),
        newline
      )?,
      OptionState::Negated => write!(
        out,
        "{}{}{}",
        marker,
        format!("!{}", entry.name).if_supports_color(Stream::Stdout, |s| s.red()),
        newline
      )?,
    }
  }

  write!(
    out,
    "{nl}Legend: {}, {}, normal = not selected{nl}",
    "purple = enabled".if_supports_color(Stream::Stdout, |s| s.magenta()),
    "red = disabled".if_supports_color(Stream::Stdout, |s| s.red()),
    nl = newline
  )?;
  out.flush()?;
  Ok(())
}
