//! Course, category, and semester models

use super::CourseOutcome;
use serde::{Deserialize, Serialize};

/// A semester slot in the study plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// Natural key (e.g., "1-1" for first year, first semester)
    pub code: String,
    /// Display name (e.g., "First Year, First Semester")
    pub name: String,
}

/// A course category (e.g., general education, professional)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseCategory {
    /// Natural key (e.g., "PROF")
    pub code: String,
    /// Display name
    pub name: String,
}

/// A course in the proposed curriculum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Identifier of the curriculum-course record this course came from,
    /// used to key committee-level submission edits
    pub curriculum_course_id: i64,

    /// Course code - the natural key (e.g., "CS101")
    pub code: String,

    /// Course title
    pub title: String,

    /// Credit units (can be fractional)
    pub units: f64,

    /// Code of the semester the course is scheduled in
    pub semester_code: String,

    /// Code of the course category
    pub category_code: String,

    /// Course outcomes with their pedagogical metadata
    pub outcomes: Vec<CourseOutcome>,
}

impl Course {
    /// Create a new course with no outcomes
    #[must_use]
    pub const fn new(curriculum_course_id: i64, code: String, title: String, units: f64) -> Self {
        Self {
            curriculum_course_id,
            code,
            title,
            units,
            semester_code: String::new(),
            category_code: String::new(),
            outcomes: Vec::new(),
        }
    }

    /// Add a course outcome
    pub fn add_outcome(&mut self, outcome: CourseOutcome) {
        self.outcomes.push(outcome);
    }

    /// Find an outcome by id
    #[must_use]
    pub fn outcome(&self, outcome_id: i64) -> Option<&CourseOutcome> {
        self.outcomes.iter().find(|o| o.id == outcome_id)
    }

    /// Find an outcome by id, mutably
    pub fn outcome_mut(&mut self, outcome_id: i64) -> Option<&mut CourseOutcome> {
        self.outcomes.iter_mut().find(|o| o.id == outcome_id)
    }
}
