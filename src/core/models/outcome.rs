//! Course outcome model and its pedagogical metadata

use serde::{Deserialize, Serialize};

/// ABCD objective fields for a course outcome
///
/// Audience is free text; behavior, condition, and degree are expected to be
/// verbatim phrases extracted from the outcome statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abcd {
    /// Who the outcome addresses (e.g., "Students")
    pub audience: String,
    /// Observable action extracted from the statement
    pub behavior: String,
    /// Circumstances under which the behavior occurs
    pub condition: String,
    /// Standard of acceptable performance
    pub degree: String,
}

/// Learning-domain classification (Cognitive / Psychomotor / Affective)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CpaDomain {
    /// Knowledge and intellectual skills
    Cognitive,
    /// Physical and manual skills
    Psychomotor,
    /// Attitudes and values
    Affective,
    /// No domain chosen yet
    #[default]
    Unset,
}

impl CpaDomain {
    /// Parse a wire-format domain string; unknown or empty input yields `Unset`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "cognitive" | "c" => Self::Cognitive,
            "psychomotor" | "p" => Self::Psychomotor,
            "affective" | "a" => Self::Affective,
            _ => Self::Unset,
        }
    }

    /// Display name for the domain; empty string for `Unset`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cognitive => "Cognitive",
            Self::Psychomotor => "Psychomotor",
            Self::Affective => "Affective",
            Self::Unset => "",
        }
    }

    /// Whether a domain has been chosen.
    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }
}

/// Contribution-strength tier for a CO-to-PO mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContributionLevel {
    /// The outcome introduces the program outcome
    Introductory,
    /// The outcome enables the program outcome
    Enabling,
    /// The outcome develops the program outcome
    Development,
}

impl ContributionLevel {
    /// Parse from a one-letter code ("I"/"E"/"D") or full name, case-insensitive.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "i" | "introductory" => Some(Self::Introductory),
            "e" | "enabling" => Some(Self::Enabling),
            "d" | "development" => Some(Self::Development),
            _ => None,
        }
    }

    /// One-letter code used in matrix cells.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Introductory => "I",
            Self::Enabling => "E",
            Self::Development => "D",
        }
    }

    /// Full display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Introductory => "Introductory",
            Self::Enabling => "Enabling",
            Self::Development => "Development",
        }
    }
}

/// A mapping row from a course outcome to a program outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoMapping {
    /// Identifier of the mapped program outcome
    pub po_id: i64,
    /// Chosen contribution level; `None` means the row exists but no level
    /// has been selected yet
    pub level: Option<ContributionLevel>,
}

/// An assessment task for a course outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TlaTask {
    /// Task code (e.g., "Q1", "LAB2")
    pub code: String,
    /// Task name
    pub name: String,
    /// Assessment tool (e.g., "Rubric", "Written exam")
    pub tool: String,
    /// Weight of the task as a percentage of the whole outcome set
    pub weight_percent: f64,
}

/// Teaching methods and learning resources attached to an outcome
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlaMethod {
    /// Teaching methods (e.g., "Lecture", "Case study")
    pub teaching_methods: Vec<String>,
    /// Learning resources (e.g., "Textbook", "Simulator")
    pub learning_resources: Vec<String>,
}

impl TlaMethod {
    /// Add a teaching method, ignoring duplicates
    pub fn add_teaching_method(&mut self, method: String) {
        if !self.teaching_methods.contains(&method) {
            self.teaching_methods.push(method);
        }
    }

    /// Add a learning resource, ignoring duplicates
    pub fn add_learning_resource(&mut self, resource: String) {
        if !self.learning_resources.contains(&resource) {
            self.learning_resources.push(resource);
        }
    }
}

/// A course outcome and its committee-populated pedagogical metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseOutcome {
    /// Outcome identifier
    pub id: i64,

    /// Short outcome name (e.g., "CO1")
    pub name: String,

    /// Full outcome statement
    pub statement: String,

    /// ABCD objective fields
    pub abcd: Abcd,

    /// Learning-domain classification
    pub cpa: CpaDomain,

    /// Mappings to program outcomes
    pub po_mappings: Vec<PoMapping>,

    /// Assessment tasks
    pub tla_tasks: Vec<TlaTask>,

    /// Teaching methods and learning resources
    pub tla_method: TlaMethod,
}

impl CourseOutcome {
    /// Create a new outcome with empty metadata
    #[must_use]
    pub fn new(id: i64, name: String, statement: String) -> Self {
        Self {
            id,
            name,
            statement,
            abcd: Abcd::default(),
            cpa: CpaDomain::Unset,
            po_mappings: Vec::new(),
            tla_tasks: Vec::new(),
            tla_method: TlaMethod::default(),
        }
    }

    /// Replace the ABCD fields
    pub fn set_abcd(&mut self, abcd: Abcd) {
        self.abcd = abcd;
    }

    /// Replace the learning-domain classification
    pub fn set_cpa(&mut self, cpa: CpaDomain) {
        self.cpa = cpa;
    }

    /// Set or replace the mapping to a program outcome
    ///
    /// If a mapping row for `po_id` already exists its level is replaced,
    /// otherwise a new row is added.
    pub fn map_to_po(&mut self, po_id: i64, level: Option<ContributionLevel>) {
        if let Some(existing) = self.po_mappings.iter_mut().find(|m| m.po_id == po_id) {
            existing.level = level;
        } else {
            self.po_mappings.push(PoMapping { po_id, level });
        }
    }

    /// Remove the mapping to a program outcome
    ///
    /// # Returns
    /// `true` if a mapping row was removed
    pub fn unmap_po(&mut self, po_id: i64) -> bool {
        if let Some(pos) = self.po_mappings.iter().position(|m| m.po_id == po_id) {
            self.po_mappings.remove(pos);
            true
        } else {
            false
        }
    }

    /// Add an assessment task
    pub fn add_task(&mut self, task: TlaTask) {
        self.tla_tasks.push(task);
    }

    /// Sum of assessment-task weights for this outcome
    #[must_use]
    pub fn task_weight_total(&self) -> f64 {
        self.tla_tasks.iter().map(|t| t.weight_percent).sum()
    }
}
