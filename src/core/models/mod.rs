//! Domain models for curriculum proposals

mod course;
mod outcome;
mod program;

pub use course::{Course, CourseCategory, Semester};
pub use outcome::{Abcd, ContributionLevel, CourseOutcome, CpaDomain, PoMapping, TlaMethod, TlaTask};
pub use program::{GraduateAttribute, Mission, Peo, ProgramOutcome};
