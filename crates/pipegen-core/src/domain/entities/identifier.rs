//! Class-name identifiers and their casing variants.
//!
//! An [`Identifier`] wraps one CamelCase name supplied by the user (the class
//! to generate, a dependency, or an archetype's base class) and derives every
//! other spelling the scaffolder needs from it:
//!
//! | Form            | `UserEvents`      |
//! |-----------------|-------------------|
//! | `as_class()`    | `UserEvents`      |
//! | `as_snake()`    | `user_events`     |
//! | `as_file_name()`| `user_events.py`  |
//! | `as_variable()` | `userEvents`      |
//!
//! The class form and snake form are mutual inverses over valid names:
//! `Identifier::from_snake(id.as_snake()) == id`. Dependency lookup relies on
//! this to go from a class name to its data-model file and back.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::domain::{error::DomainError, validation::DomainValidator as validator};

/// File extension of generated and looked-up source files.
pub const SOURCE_EXTENSION: &str = "py";

/// A validated CamelCase class name.
///
/// Invariant: matches `[A-Z][A-Za-z0-9]*`. Enforced at construction, so no
/// filesystem or template work ever sees an invalid name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Validate and wrap a raw class name.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = raw.as_ref();
        validator::validate_class_name(raw)?;
        Ok(Self(raw.to_string()))
    }

    /// Wrap a compile-time constant known to be valid.
    pub(crate) fn trusted(raw: &'static str) -> Self {
        debug_assert!(validator::validate_class_name(raw).is_ok(), "{raw}");
        Self(raw.to_string())
    }

    /// Rebuild an identifier from its snake-case form (`raw_logs` → `RawLogs`).
    pub fn from_snake(stem: impl AsRef<str>) -> Result<Self, DomainError> {
        let stem = stem.as_ref();
        validator::validate_snake_stem(stem)?;

        let mut class = String::with_capacity(stem.len());
        let mut uppercase_next = true;
        for ch in stem.chars() {
            if ch == '_' {
                uppercase_next = true;
            } else if uppercase_next {
                class.push(ch.to_ascii_uppercase());
                uppercase_next = false;
            } else {
                class.push(ch);
            }
        }

        Self::new(class)
    }

    /// CamelCase class form, exactly as supplied.
    pub fn as_class(&self) -> &str {
        &self.0
    }

    /// Lowercase words joined by underscores.
    ///
    /// Every uppercase letter after the first starts a new word, so runs of
    /// capitals split letter by letter (`HTTPLog` → `h_t_t_p_log`). That keeps
    /// the mapping reversible.
    pub fn as_snake(&self) -> String {
        let mut snake = String::with_capacity(self.0.len() + 4);
        for (i, ch) in self.0.chars().enumerate() {
            if ch.is_ascii_uppercase() {
                if i > 0 {
                    snake.push('_');
                }
                snake.push(ch.to_ascii_lowercase());
            } else {
                snake.push(ch);
            }
        }
        snake
    }

    /// Snake form plus the source extension.
    pub fn as_file_name(&self) -> String {
        format!("{}.{SOURCE_EXTENSION}", self.as_snake())
    }

    /// Lower camel case, for variable names in generated code.
    pub fn as_variable(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Templates see every form, not just the raw string.
impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Identifier", 4)?;
        state.serialize_field("class", self.as_class())?;
        state.serialize_field("snake", &self.as_snake())?;
        state.serialize_field("variable", &self.as_variable())?;
        state.serialize_field("file_name", &self.as_file_name())?;
        state.end()
    }
}
