//! Interactive three-state option selection.
//!
//! [`OptionSelector`] is a pure state machine: it knows nothing about
//! terminals or key codes. The CLI decodes input into [`Key`]s, feeds them to
//! [`OptionSelector::handle`], and redraws from [`OptionSelector::entries`]
//! until the selector reports [`Step::Finished`].
//!
//! Each catalog entry cycles `Unselected → Enabled → Negated → Unselected`.

/// Build options offered by the selector, in display order.
pub const CATALOG: &[&str] = &[
  "no-strip",
  "no-strip-binaries",
  "no-remove-la",
  "no-remove-a",
  "man",
  "libs",
  "include",
  "docs",
  "lto",
];

/// Prefix marking an explicitly negated option.
pub const NEGATION_PREFIX: char = '!';

/// Strip the negation prefix from an option entry.
pub fn flag_name(entry: &str) -> &str {
  entry.strip_prefix(NEGATION_PREFIX).unwrap_or(entry)
}

/// Selection state of a single catalog entry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
  #[default]
  Unselected,
  Enabled,
  Negated,
}

impl OptionState {
  /// The next state in the cycle.
  pub fn next(self) -> Self {
    match self {
      OptionState::Unselected => OptionState::Enabled,
      OptionState::Enabled => OptionState::Negated,
      OptionState::Negated => OptionState::Unselected,
    }
  }

  /// Parse an option entry into its flag name and state.
  pub fn from_entry(entry: &str) -> (&str, OptionState) {
    match entry.strip_prefix(NEGATION_PREFIX) {
      Some(flag) => (flag, OptionState::Negated),
      None => (entry, OptionState::Enabled),
    }
  }
}

/// A decoded control action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
  Up,
  Down,
  Toggle,
  Finish,
  /// Anything else; ignored.
  Other,
}

/// Outcome of handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
  Continue,
  Finished,
}

/// One row of the selector as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
  pub name: &'a str,
  pub state: OptionState,
  pub focused: bool,
}

/// Cyclic three-state selector over a fixed catalog.
#[derive(Debug, Clone)]
pub struct OptionSelector {
  catalog: Vec<String>,
  states: Vec<OptionState>,
  focus: usize,
  finished: bool,
}

impl Default for OptionSelector {
  fn default() -> Self {
    Self::new(CATALOG.iter().copied())
  }
}

impl OptionSelector {
  /// Create a selector over `catalog` with every entry unselected and the
  /// first entry focused.
  pub fn new<I, S>(catalog: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let catalog: Vec<String> = catalog.into_iter().map(Into::into).collect();
    let states = vec![OptionState::Unselected; catalog.len()];
    Self {
      catalog,
      states,
      focus: 0,
      finished: false,
    }
  }

  /// Seed entry states from a previously selected option list.
  ///
  /// Entries naming flags outside the catalog are ignored.
  pub fn preselect<S: AsRef<str>>(&mut self, options: &[S]) {
    for entry in options {
      let (flag, state) = OptionState::from_entry(entry.as_ref().trim());
      if let Some(index) = self.catalog.iter().position(|name| name == flag) {
        self.states[index] = state;
      }
    }
  }

  /// Apply one control action. Once finished, further keys are ignored.
  pub fn handle(&mut self, key: Key) -> Step {
    if self.finished {
      return Step::Finished;
    }
    match key {
      Key::Up => self.move_up(),
      Key::Down => self.move_down(),
      Key::Toggle => self.toggle(),
      Key::Finish => self.finished = true,
      Key::Other => {}
    }
    if self.finished { Step::Finished } else { Step::Continue }
  }

  fn move_up(&mut self) {
    let len = self.catalog.len();
    if len > 0 {
      self.focus = (self.focus + len - 1) % len;
    }
  }

  fn move_down(&mut self) {
    let len = self.catalog.len();
    if len > 0 {
      self.focus = (self.focus + 1) % len;
    }
  }

  fn toggle(&mut self) {
    if let Some(state) = self.states.get_mut(self.focus) {
      *state = state.next();
    }
  }

  pub fn focus(&self) -> usize {
    self.focus
  }

  pub fn is_finished(&self) -> bool {
    self.finished
  }

  pub fn state_of(&self, flag: &str) -> Option<OptionState> {
    self.catalog.iter().position(|name| name == flag).map(|index| self.states[index])
  }

  /// Rows in catalog order.
  pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
    self
      .catalog
      .iter()
      .zip(&self.states)
      .enumerate()
      .map(move |(index, (name, state))| Entry {
        name,
        state: *state,
        focused: index == self.focus,
      })
  }

  /// Enabled flags as bare names, negated flags with a `!` prefix, in
  /// catalog order. Unselected flags are omitted.
  pub fn to_option_list(&self) -> Vec<String> {
    self
      .entries()
      .filter_map(|entry| match entry.state {
        OptionState::Unselected => None,
        OptionState::Enabled => Some(entry.name.to_string()),
        OptionState::Negated => Some(format!("{}{}", NEGATION_PREFIX, entry.name)),
      })
      .collect()
  }
}
