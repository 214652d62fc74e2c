//! Raw wire shapes for proposal payloads
//!
//! These mirror the nested JSON the backend returns, one struct per nesting
//! level. Every repeating or optional field carries `#[serde(default)]` so a
//! malformed or partial record deserializes to empty collections instead of
//! failing - the normalizer treats "missing" as "none" throughout.
//!
//! Numeric fields the backend transports as strings (`units`, `weight`) stay
//! strings here; the normalization pipeline parses them.

use serde::Deserialize;

/// Top-level proposal payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProposal {
    /// Program name
    #[serde(default)]
    pub program_name: String,
    /// Owning department
    #[serde(default)]
    pub department: String,
    /// Program educational objectives with their nested mappings
    #[serde(default)]
    pub peos: Vec<RawPeo>,
    /// Program outcomes with their nested mappings
    #[serde(default)]
    pub pos: Vec<RawPo>,
    /// The proposed curriculum
    #[serde(default)]
    pub curriculum: RawCurriculum,
}

/// A program educational objective record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPeo {
    /// Objective identifier
    #[serde(default)]
    pub id: i64,
    /// Objective statement
    #[serde(default)]
    pub statement: String,
    /// Missions this objective supports (repeated across PEOs)
    #[serde(default)]
    pub missions: Vec<RawMission>,
    /// Graduate attributes this objective addresses
    #[serde(default)]
    pub graduate_attributes: Vec<RawGraduateAttribute>,
}

/// A mission record nested under a PEO
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawMission {
    /// Natural key (e.g., "M1")
    #[serde(default)]
    pub mission_no: String,
    /// Mission text
    #[serde(default)]
    pub description: String,
}

/// A graduate-attribute record nested under a PEO or PO
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGraduateAttribute {
    /// Natural key (e.g., "GA3")
    #[serde(default)]
    pub ga_no: String,
    /// Attribute text
    #[serde(default)]
    pub description: String,
}

/// A program outcome record
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPo {
    /// Outcome identifier
    #[serde(default)]
    pub id: i64,
    /// Short outcome name (e.g., "PO1")
    #[serde(default)]
    pub name: String,
    /// Full outcome statement
    #[serde(default)]
    pub statement: String,
    /// Allowed contribution-level codes ("I"/"E"/"D" or full names);
    /// empty means all levels allowed
    #[serde(default)]
    pub available_levels: Vec<String>,
    /// PEOs this outcome maps to (back-references by id)
    #[serde(default)]
    pub peos: Vec<RawPeoRef>,
    /// Graduate attributes this outcome maps to
    #[serde(default)]
    pub graduate_attributes: Vec<RawGraduateAttribute>,
}

/// A back-reference to a PEO from a program outcome
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPeoRef {
    /// Referenced objective identifier
    #[serde(default)]
    pub id: i64,
    /// Referenced objective statement (repeated in the payload)
    #[serde(default)]
    pub statement: String,
}

/// The curriculum section of a proposal
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCurriculum {
    /// Course placements in the study plan
    #[serde(default)]
    pub courses: Vec<RawCurriculumCourse>,
}

/// One course placement: semester, category, course, and outcomes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCurriculumCourse {
    /// Curriculum-course record identifier (keys committee-level edits)
    #[serde(default)]
    pub id: i64,
    /// Semester slot
    #[serde(default)]
    pub semester: RawSemester,
    /// Course category
    #[serde(default)]
    pub category: RawCategory,
    /// The course itself
    #[serde(default)]
    pub course: RawCourseInfo,
    /// Course outcomes; absent means the committee has not added any yet
    #[serde(default)]
    pub course_outcomes: Vec<RawCourseOutcome>,
}

/// A semester record nested under a curriculum course
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSemester {
    /// Natural key (e.g., "1-1")
    #[serde(default)]
    pub code: String,
    /// Display name
    #[serde(default)]
    pub name: String,
}

/// A course-category record nested under a curriculum course
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCategory {
    /// Natural key (e.g., "PROF")
    #[serde(default)]
    pub code: String,
    /// Display name
    #[serde(default)]
    pub name: String,
}

/// Course identity nested under a curriculum course
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCourseInfo {
    /// Course code - the natural key (e.g., "CS101")
    #[serde(default)]
    pub code: String,
    /// Course title
    #[serde(default)]
    pub title: String,
    /// Credit units, transported as a string
    #[serde(default)]
    pub units: String,
}

/// A course outcome record with committee metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCourseOutcome {
    /// Outcome identifier
    #[serde(default)]
    pub id: i64,
    /// Short outcome name (e.g., "CO1")
    #[serde(default)]
    pub name: String,
    /// Full outcome statement
    #[serde(default)]
    pub statement: String,
    /// ABCD objective fields
    #[serde(default)]
    pub abcd: RawAbcd,
    /// Learning-domain classification as a wire string
    #[serde(default)]
    pub cpa: String,
    /// Mappings to program outcomes
    #[serde(default)]
    pub po_mappings: Vec<RawPoMapping>,
    /// Assessment tasks
    #[serde(default)]
    pub tla_tasks: Vec<RawTlaTask>,
    /// Teaching methods and learning resources
    #[serde(default)]
    pub tla_method: RawTlaMethod,
}

/// ABCD fields as transported
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAbcd {
    /// Audience
    #[serde(default)]
    pub audience: String,
    /// Behavior
    #[serde(default)]
    pub behavior: String,
    /// Condition
    #[serde(default)]
    pub condition: String,
    /// Degree
    #[serde(default)]
    pub degree: String,
}

/// A CO-to-PO mapping row as transported
///
/// The referenced PO's name and statement are repeated here; when the PO is
/// not present in the top-level `pos` array the first occurrence seen in a
/// mapping row supplies them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPoMapping {
    /// Referenced program-outcome identifier
    #[serde(default)]
    pub po_id: i64,
    /// Referenced outcome name (repeated)
    #[serde(default)]
    pub po_name: String,
    /// Referenced outcome statement (repeated)
    #[serde(default)]
    pub po_statement: String,
    /// Chosen contribution level; empty means not selected yet
    #[serde(default)]
    pub contribution_level: String,
}

/// An assessment task as transported
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTlaTask {
    /// Task code
    #[serde(default)]
    pub code: String,
    /// Task name
    #[serde(default)]
    pub name: String,
    /// Assessment tool
    #[serde(default)]
    pub tool: String,
    /// Weight percentage, transported as a string
    #[serde(default)]
    pub weight: String,
}

/// Teaching methods and learning resources as transported
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTlaMethod {
    /// Teaching methods
    #[serde(default)]
    pub teaching_methods: Vec<String>,
    /// Learning resources
    #[serde(default)]
    pub learning_resources: Vec<String>,
}
