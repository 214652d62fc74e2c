//! Program-level reference entities

use super::ContributionLevel;
use serde::{Deserialize, Serialize};

/// An institutional mission statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    /// Natural key (e.g., "M1")
    pub mission_no: String,
    /// Mission text
    pub description: String,
}

/// An institution-level graduate attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraduateAttribute {
    /// Natural key (e.g., "GA3")
    pub ga_no: String,
    /// Attribute text
    pub description: String,
}

/// A program educational objective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peo {
    /// Objective identifier
    pub id: i64,
    /// Objective statement
    pub statement: String,
}

/// A program outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramOutcome {
    /// Outcome identifier
    pub id: i64,

    /// Short outcome name (e.g., "PO1")
    pub name: String,

    /// Full outcome statement
    pub statement: String,

    /// Contribution levels a course outcome may use when mapping to this
    /// outcome; levels outside this set are presented disabled and never
    /// persisted
    pub available_levels: Vec<ContributionLevel>,
}

impl ProgramOutcome {
    /// Create a program outcome that accepts all three contribution levels
    #[must_use]
    pub fn new(id: i64, name: String, statement: String) -> Self {
        Self {
            id,
            name,
            statement,
            available_levels: vec![
                ContributionLevel::Introductory,
                ContributionLevel::Enabling,
                ContributionLevel::Development,
            ],
        }
    }

    /// Whether a contribution level may be used when mapping to this outcome
    #[must_use]
    pub fn allows(&self, level: ContributionLevel) -> bool {
        self.available_levels.contains(&level)
    }
}
