//! Domain value objects: Archetype, WriteMode.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file defines the types, their string representations, and their
//! `FromStr` parsers.

use crate::domain::{entities::identifier::Identifier, error::DomainError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Archetype ────────────────────────────────────────────────────────────────

/// The kind of task class to generate. Each archetype has its own template
/// and its own framework base class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    /// Produces the first dataset of a pipeline from an external source.
    Source,
    /// One output per input, no shared state.
    SimpleTask,
    /// General task with optional initialisation and finalisation.
    #[default]
    Task,
}

impl Archetype {
    pub const ALL: [Archetype; 3] = [Self::Source, Self::SimpleTask, Self::Task];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::SimpleTask => "simple-task",
            Self::Task => "task",
        }
    }

    /// Base class name in the pipeline framework.
    pub const fn class_name(&self) -> &'static str {
        match self {
            Self::Source => "Source",
            Self::SimpleTask => "SimpleTask",
            Self::Task => "Task",
        }
    }

    /// The base class wrapped as an [`Identifier`].
    pub fn identifier(&self) -> Identifier {
        Identifier::trusted(self.class_name())
    }

    /// Lookup key of this archetype's template, e.g. `simple_task.py.j2`.
    pub fn template_key(&self) -> String {
        format!("{}.j2", self.identifier().as_file_name())
    }

    /// Collapse the CLI's two shortcut switches into one archetype.
    ///
    /// Neither switch selects [`Archetype::Task`].
    pub fn from_flags(source: bool, simple: bool) -> Result<Self, DomainError> {
        match (source, simple) {
            (true, true) => Err(DomainError::AmbiguousArchetype),
            (true, false) => Ok(Self::Source),
            (false, true) => Ok(Self::SimpleTask),
            (false, false) => Ok(Self::Task),
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for Archetype {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "source" => Ok(Self::Source),
            "simple-task" | "simple_task" | "simpletask" | "simple" => Ok(Self::SimpleTask),
            "task" => Ok(Self::Task),
            _ => Err(DomainError::UnknownArchetype(s.to_string())),
        }
    }
}

// ── WriteMode ────────────────────────────────────────────────────────────────

/// The two independent write flags. Every combination is legal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WriteMode {
    pub dry_run: bool,
    pub force: bool,
}

impl WriteMode {
    pub const fn new(dry_run: bool, force: bool) -> Self {
        Self { dry_run, force }
    }

    /// Suffix appended to user-facing confirmations. Carries no control flow.
    pub const fn message(&self) -> &'static str {
        match (self.dry_run, self.force) {
            (false, false) => "",
            (true, false) => " - Mode: Dry run",
            (false, true) => " - Mode: Force",
            (true, true) => " - Mode: Dry run, Force",
        }
    }
}
