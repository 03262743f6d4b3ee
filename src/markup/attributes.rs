use regex::Regex;

use crate::error::HelperError;

fn attribute_name_pattern() -> &'static Regex {
  use std::sync::OnceLock;

  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(r"^[A-Za-z_:][-A-Za-z0-9_:.]*$").expect("invalid attribute name regex")
  })
}

/// Ensure `name` can be written as an HTML attribute name.
pub fn validate_attribute_name(name: &str) -> Result<(), HelperError> {
  if attribute_name_pattern().is_match(name) {
    Ok(())
  } else {
    Err(HelperError::InvalidAttributeName(name.to_string()))
  }
}

/// Insertion-ordered attribute list where setting an existing name replaces it in place.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Attributes {
  entries: Vec<(String, String)>,
}

impl Attributes {
  /// Create an empty attribute list.
  pub fn new() -> Self {
    Self::default()
  }

  /// Set `name` to `value`, keeping the original position of an existing entry.
  pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
    let name = name.into();
    let value = value.into();
    match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
      Some(entry) => entry.1 = value,
      None => self.entries.push((name, value)),
    }
  }

  /// Value stored for `name`.
  pub fn get(&self, name: &str) -> Option<&str> {
    self
      .entries
      .iter()
      .find(|(existing, _)| existing == name)
      .map(|(_, value)| value.as_str())
  }

  /// Remove and return the value stored for `name`.
  pub fn remove(&mut self, name: &str) -> Option<String> {
    let index = self.entries.iter().position(|(existing, _)| existing == name)?;
    Some(self.entries.remove(index).1)
  }

  /// Returns `true` when no attributes are set.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Render as `name="value"` pairs separated by single spaces.
  pub fn render(&self) -> String {
    self
      .entries
      .iter()
      .map(|(name, value)| format!("{name}=\"{value}\""))
      .collect::<Vec<_>>()
      .join(" ")
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut attributes = Self::new();
    for (name, value) in iter {
      attributes.set(name, value);
    }
    attributes
  }
}
