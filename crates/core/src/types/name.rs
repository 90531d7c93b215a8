//! Display names entered through the add-category and add-tag dialogs.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`EntryName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryNameError {
    /// The input is empty or only whitespace.
    #[error("name cannot be empty")]
    Empty,
}

/// A trimmed, non-empty name for a new category or tag.
///
/// Duplicates of existing names are allowed; this is the only check the
/// dialogs perform before handing a name to the store.
///
/// ## Examples
///
/// ```
/// use context_demos_core::EntryName;
///
/// assert_eq!(EntryName::parse("  Rust  ").unwrap().as_str(), "Rust");
/// assert!(EntryName::parse("").is_err());
/// assert!(EntryName::parse(" \t ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct EntryName(String);

impl EntryName {
    /// Parse an `EntryName`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`EntryNameError::Empty`] if nothing is left after trimming.
    pub fn parse(s: &str) -> Result<Self, EntryNameError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EntryNameError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `EntryName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for EntryName {
    type Err = EntryNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EntryName {
    type Error = EntryNameError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<EntryName> for String {
    fn from(name: EntryName) -> Self {
        name.0
    }
}

impl AsRef<str> for EntryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
