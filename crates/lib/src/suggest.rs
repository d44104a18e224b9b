//! Package name suggestions.

use std::path::Path;

use crate::consts::DEFAULT_PACKAGE_NAME;

/// Suggest a package name from a directory path.
///
/// Takes the last path component, lowercases ASCII letters, keeps digits and
/// replaces everything else with `-`. Falls back to the default package name
/// when the path has no usable final component.
///
/// ```
/// use std::path::Path;
/// use starbuild_lib::suggest::suggest_package_name;
///
/// assert_eq!(suggest_package_name(Path::new("/src/My_Tool 2")), "my-tool-2");
/// ```
pub fn suggest_package_name(dir: &Path) -> String {
  let Some(component) = dir.file_name().map(|name| name.to_string_lossy()) else {
    return DEFAULT_PACKAGE_NAME.to_string();
  };

  let suggested: String = component
    .chars()
    .map(|c| {
      if c.is_ascii_alphabetic() {
        c.to_ascii_lowercase()
      } else if c.is_ascii_digit() {
        c
      } else {
        '-'
      }
    })
    .collect();

  if suggested.chars().all(|c| c == '-') {
    DEFAULT_PACKAGE_NAME.to_string()
  } else {
    suggested
  }
}
