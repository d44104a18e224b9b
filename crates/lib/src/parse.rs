//! Parsing of raw user input into model values.
//!
//! Every list the user types (names, dependencies, licenses, sources) goes
//! through [`parse_list`]. Script blocks go through [`parse_script_lines`].

/// Split a comma-separated string into trimmed, non-empty tokens.
///
/// Order is preserved and duplicates are kept.
///
/// ```
/// use starbuild_lib::parse::parse_list;
///
/// assert_eq!(parse_list("  foo, bar,, baz "), vec!["foo", "bar", "baz"]);
/// assert!(parse_list(" , ").is_empty());
/// ```
pub fn parse_list(raw: &str) -> Vec<String> {
  raw
    .split(',')
    .map(str::trim)
    .filter(|piece| !piece.is_empty())
    .map(str::to_string)
    .collect()
}

/// Trim each script line and drop the ones left empty.
pub fn parse_script_lines<I, S>(lines: I) -> Vec<String>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  lines
    .into_iter()
    .map(|line| line.as_ref().trim().to_string())
    .filter(|line| !line.is_empty())
    .collect()
}
