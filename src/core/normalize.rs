//! Normalization pipeline
//!
//! Flattens a raw nested proposal payload into renderable entity lists and
//! cross-reference (mapping) edge lists. The pipeline walks the nested
//! arrays twice: once through [`UniqueIndex`] to collapse repeated records
//! into first-seen canonical entities, and a second time to emit mapping
//! edges against the flat lists.
//!
//! Edge endpoints follow the convention the downstream tables expect:
//! PEO and PO endpoints are positional indices into the flat lists, while
//! mission, graduate-attribute, and course endpoints use natural keys.
//!
//! Normalization is best-effort and never fails: missing nested arrays are
//! empty lists, unparseable numerics become 0, records without a natural key
//! are skipped.

use crate::core::dedupe::UniqueIndex;
use crate::core::models::{
    Abcd, ContributionLevel, Course, CourseCategory, CourseOutcome, CpaDomain, GraduateAttribute,
    Mission, Peo, PoMapping, ProgramOutcome, Semester, TlaMethod, TlaTask,
};
use crate::core::raw::{RawCourseOutcome, RawProposal};
use serde::Serialize;
use std::collections::HashSet;

/// One endpoint of a mapping edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum EdgeRef {
    /// Positional index into the corresponding flat entity list (PEOs, POs)
    Index(usize),
    /// Natural key of the entity (mission number, GA number, course code)
    Key(String),
}

/// A cross-reference between two entities, renderable as one matrix cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingEdge {
    /// Row entity reference
    pub row: EdgeRef,
    /// Column entity reference
    pub col: EdgeRef,
    /// Cell label (e.g., a contribution-level code on course-PO edges)
    pub label: Option<String>,
    /// Hover text, usually the column entity's statement or description
    pub tooltip: Option<String>,
}

/// The flat, renderable view of a proposal
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlatViewModel {
    /// Program name
    pub program_name: String,
    /// Owning department
    pub department: String,

    /// Missions in first-seen order
    pub missions: Vec<Mission>,
    /// Graduate attributes in first-seen order
    pub graduate_attributes: Vec<GraduateAttribute>,
    /// Program educational objectives in first-seen order
    pub peos: Vec<Peo>,
    /// Program outcomes in first-seen order
    pub program_outcomes: Vec<ProgramOutcome>,
    /// Semesters in first-seen order
    pub semesters: Vec<Semester>,
    /// Course categories in first-seen order
    pub categories: Vec<CourseCategory>,
    /// Courses in first-seen order, each carrying its outcomes
    pub courses: Vec<Course>,

    /// PEO-to-mission edges; row is a PEO index, col is a mission number
    pub peo_mission: Vec<MappingEdge>,
    /// GA-to-PEO edges; row is a GA number, col is a PEO index
    pub ga_peo: Vec<MappingEdge>,
    /// PO-to-PEO edges; both endpoints are positional indices
    pub po_peo: Vec<MappingEdge>,
    /// PO-to-GA edges; row is a PO index, col is a GA number
    pub po_ga: Vec<MappingEdge>,
    /// Course-to-PO edges; row is a course code, col is a PO index, label is
    /// the contribution-level code
    pub course_po: Vec<MappingEdge>,
}

impl FlatViewModel {
    /// All course outcomes across all courses, in course order
    #[must_use]
    pub fn all_outcomes(&self) -> Vec<CourseOutcome> {
        self.courses
            .iter()
            .flat_map(|c| c.outcomes.iter().cloned())
            .collect()
    }
}

/// Parse a numeric field transported as a string; unparseable input is 0.
fn parse_number(value: &str) -> f64 {
    value.trim().parse().unwrap_or(0.0)
}

/// Convert a raw course outcome into the domain model, parsing enums and
/// string-transported numbers.
fn convert_outcome(raw: &RawCourseOutcome) -> CourseOutcome {
    let mut tla_method = TlaMethod::default();
    for method in &raw.tla_method.teaching_methods {
        tla_method.add_teaching_method(method.clone());
    }
    for resource in &raw.tla_method.learning_resources {
        tla_method.add_learning_resource(resource.clone());
    }

    CourseOutcome {
        id: raw.id,
        name: raw.name.clone(),
        statement: raw.statement.clone(),
        abcd: Abcd {
            audience: raw.abcd.audience.clone(),
            behavior: raw.abcd.behavior.clone(),
            condition: raw.abcd.condition.clone(),
            degree: raw.abcd.degree.clone(),
        },
        cpa: CpaDomain::parse(&raw.cpa),
        po_mappings: raw
            .po_mappings
            .iter()
            .map(|m| PoMapping {
                po_id: m.po_id,
                level: ContributionLevel::parse(&m.contribution_level),
            })
            .collect(),
        tla_tasks: raw
            .tla_tasks
            .iter()
            .map(|t| TlaTask {
                code: t.code.clone(),
                name: t.name.clone(),
                tool: t.tool.clone(),
                weight_percent: parse_number(&t.weight),
            })
            .collect(),
        tla_method,
    }
}

/// Parse a program outcome's allowed contribution levels; an empty or fully
/// unparseable list means all levels are allowed.
fn parse_available_levels(codes: &[String]) -> Vec<ContributionLevel> {
    let parsed: Vec<ContributionLevel> = codes
        .iter()
        .filter_map(|c| ContributionLevel::parse(c))
        .collect();

    if parsed.is_empty() {
        vec![
            ContributionLevel::Introductory,
            ContributionLevel::Enabling,
            ContributionLevel::Development,
        ]
    } else {
        parsed
    }
}

/// Accumulates edges for one mapping kind with set semantics: a repeated
/// (row, col) pair in the raw payload yields one edge, first seen wins.
#[derive(Default)]
struct EdgeSet {
    seen: HashSet<(EdgeRef, EdgeRef)>,
    edges: Vec<MappingEdge>,
}

impl EdgeSet {
    fn add(&mut self, row: EdgeRef, col: EdgeRef, label: Option<String>, tooltip: Option<String>) {
        if self.seen.insert((row.clone(), col.clone())) {
            self.edges.push(MappingEdge {
                row,
                col,
                label,
                tooltip,
            });
        }
    }

    fn into_edges(self) -> Vec<MappingEdge> {
        self.edges
    }
}

/// Flatten a raw proposal into entity lists and mapping-edge lists.
///
/// Pure and idempotent: the same payload always yields a structurally
/// identical view model, with nothing accumulated across calls.
#[must_use]
pub fn normalize(raw: &RawProposal) -> FlatViewModel {
    // Pass 1: identity-keyed deduplication over every repeating nested array.
    let mut missions: UniqueIndex<String, Mission> = UniqueIndex::new();
    let mut gas: UniqueIndex<String, GraduateAttribute> = UniqueIndex::new();
    let mut peos: UniqueIndex<i64, Peo> = UniqueIndex::new();
    let mut pos: UniqueIndex<i64, ProgramOutcome> = UniqueIndex::new();
    let mut semesters: UniqueIndex<String, Semester> = UniqueIndex::new();
    let mut categories: UniqueIndex<String, CourseCategory> = UniqueIndex::new();
    let mut courses: UniqueIndex<String, Course> = UniqueIndex::new();

    for raw_peo in &raw.peos {
        peos.insert_first(
            raw_peo.id,
            Peo {
                id: raw_peo.id,
                statement: raw_peo.statement.clone(),
            },
        );

        for mission in &raw_peo.missions {
            if mission.mission_no.is_empty() {
                continue;
            }
            missions.insert_first(
                mission.mission_no.clone(),
                Mission {
                    mission_no: mission.mission_no.clone(),
                    description: mission.description.clone(),
                },
            );
        }

        for ga in &raw_peo.graduate_attributes {
            if ga.ga_no.is_empty() {
                continue;
            }
            gas.insert_first(
                ga.ga_no.clone(),
                GraduateAttribute {
                    ga_no: ga.ga_no.clone(),
                    description: ga.description.clone(),
                },
            );
        }
    }

    for raw_po in &raw.pos {
        pos.insert_first(
            raw_po.id,
            ProgramOutcome {
                id: raw_po.id,
                name: raw_po.name.clone(),
                statement: raw_po.statement.clone(),
                available_levels: parse_available_levels(&raw_po.available_levels),
            },
        );

        // PEOs referenced only from a PO still become flat entities.
        for peo_ref in &raw_po.peos {
            peos.insert_first(
                peo_ref.id,
                Peo {
                    id: peo_ref.id,
                    statement: peo_ref.statement.clone(),
                },
            );
        }

        for ga in &raw_po.graduate_attributes {
            if ga.ga_no.is_empty() {
                continue;
            }
            gas.insert_first(
                ga.ga_no.clone(),
                GraduateAttribute {
                    ga_no: ga.ga_no.clone(),
                    description: ga.description.clone(),
                },
            );
        }
    }

    for record in &raw.curriculum.courses {
        if !record.semester.code.is_empty() {
            semesters.insert_first(
                record.semester.code.clone(),
                Semester {
                    code: record.semester.code.clone(),
                    name: record.semester.name.clone(),
                },
            );
        }

        if !record.category.code.is_empty() {
            categories.insert_first(
                record.category.code.clone(),
                CourseCategory {
                    code: record.category.code.clone(),
                    name: record.category.name.clone(),
                },
            );
        }

        if record.course.code.is_empty() {
            continue;
        }

        let mut course = Course::new(
            record.id,
            record.course.code.clone(),
            record.course.title.clone(),
            parse_number(&record.course.units),
        );
        course.semester_code = record.semester.code.clone();
        course.category_code = record.category.code.clone();
        for raw_outcome in &record.course_outcomes {
            course.add_outcome(convert_outcome(raw_outcome));
        }
        courses.insert_first(record.course.code.clone(), course);

        // POs referenced only from course-outcome mapping rows become flat
        // entities too; the first occurrence's name and statement win.
        for raw_outcome in &record.course_outcomes {
            for mapping in &raw_outcome.po_mappings {
                pos.insert_first(
                    mapping.po_id,
                    ProgramOutcome::new(
                        mapping.po_id,
                        mapping.po_name.clone(),
                        mapping.po_statement.clone(),
                    ),
                );
            }
        }
    }

    // Pass 2: re-walk the nested arrays and emit mapping edges against the
    // flat lists built above.
    let mut peo_mission = EdgeSet::default();
    let mut ga_peo = EdgeSet::default();
    let mut po_peo = EdgeSet::default();
    let mut po_ga = EdgeSet::default();
    let mut course_po = EdgeSet::default();

    for raw_peo in &raw.peos {
        let Some(peo_index) = peos.index_of(&raw_peo.id) else {
            continue;
        };

        for mission in &raw_peo.missions {
            if let Some(canonical) = missions.get(&mission.mission_no) {
                peo_mission.add(
                    EdgeRef::Index(peo_index),
                    EdgeRef::Key(mission.mission_no.clone()),
                    None,
                    Some(canonical.description.clone()),
                );
            }
        }

        for ga in &raw_peo.graduate_attributes {
            if gas.contains(&ga.ga_no) {
                ga_peo.add(
                    EdgeRef::Key(ga.ga_no.clone()),
                    EdgeRef::Index(peo_index),
                    None,
                    Some(raw_peo.statement.clone()),
                );
            }
        }
    }

    for raw_po in &raw.pos {
        let Some(po_index) = pos.index_of(&raw_po.id) else {
            continue;
        };

        for peo_ref in &raw_po.peos {
            if let Some(peo_index) = peos.index_of(&peo_ref.id) {
                let tooltip = peos.get(&peo_ref.id).map(|p| p.statement.clone());
                po_peo.add(
                    EdgeRef::Index(po_index),
                    EdgeRef::Index(peo_index),
                    None,
                    tooltip,
                );
            }
        }

        for ga in &raw_po.graduate_attributes {
            if let Some(canonical) = gas.get(&ga.ga_no) {
                po_ga.add(
                    EdgeRef::Index(po_index),
                    EdgeRef::Key(ga.ga_no.clone()),
                    None,
                    Some(canonical.description.clone()),
                );
            }
        }
    }

    for record in &raw.curriculum.courses {
        if record.course.code.is_empty() {
            continue;
        }

        for raw_outcome in &record.course_outcomes {
            for mapping in &raw_outcome.po_mappings {
                let Some(po_index) = pos.index_of(&mapping.po_id) else {
                    continue;
                };
                let label =
                    ContributionLevel::parse(&mapping.contribution_level).map(|l| l.code().to_string());
                let tooltip = pos.get(&mapping.po_id).map(|p| p.statement.clone());
                course_po.add(
                    EdgeRef::Key(record.course.code.clone()),
                    EdgeRef::Index(po_index),
                    label,
                    tooltip,
                );
            }
        }
    }

    FlatViewModel {
        program_name: raw.program_name.clone(),
        department: raw.department.clone(),
        missions: missions.into_values(),
        graduate_attributes: gas.into_values(),
        peos: peos.into_values(),
        program_outcomes: pos.into_values(),
        semesters: semesters.into_values(),
        categories: categories.into_values(),
        courses: courses.into_values(),
        peo_mission: peo_mission.into_edges(),
        ga_peo: ga_peo.into_edges(),
        po_peo: po_peo.into_edges(),
        po_ga: po_ga.into_edges(),
        course_po: course_po.into_edges(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::raw::{
        RawCategory, RawCourseInfo, RawCurriculum, RawCurriculumCourse, RawGraduateAttribute,
        RawMission, RawPeo, RawPeoRef, RawPo, RawPoMapping, RawSemester, RawTlaTask,
    };

    fn mission(no: &str, description: &str) -> RawMission {
        RawMission {
            mission_no: no.to_string(),
            description: description.to_string(),
        }
    }

    fn ga(no: &str, description: &str) -> RawGraduateAttribute {
        RawGraduateAttribute {
            ga_no: no.to_string(),
            description: description.to_string(),
        }
    }

    fn sample_proposal() -> RawProposal {
        RawProposal {
            program_name: "BS Computer Science".to_string(),
            department: "Computing".to_string(),
            peos: vec![
                RawPeo {
                    id: 1,
                    statement: "Graduates practice their profession".to_string(),
                    missions: vec![mission("M1", "Serve the region"), mission("M2", "Advance knowledge")],
                    graduate_attributes: vec![ga("GA1", "Critical thinking")],
                },
                RawPeo {
                    id: 2,
                    statement: "Graduates pursue lifelong learning".to_string(),
                    // M1 repeats with conflicting text; first seen wins
                    missions: vec![mission("M1", "Conflicting text")],
                    graduate_attributes: vec![ga("GA1", "Conflicting GA text"), ga("GA2", "Communication")],
                },
            ],
            pos: vec![RawPo {
                id: 10,
                name: "PO1".to_string(),
                statement: "Apply computing knowledge".to_string(),
                available_levels: vec!["I".to_string(), "E".to_string()],
                peos: vec![RawPeoRef {
                    id: 1,
                    statement: "Graduates practice their profession".to_string(),
                }],
                graduate_attributes: vec![ga("GA1", "Critical thinking")],
            }],
            curriculum: RawCurriculum {
                courses: vec![
                    RawCurriculumCourse {
                        id: 100,
                        semester: RawSemester {
                            code: "1-1".to_string(),
                            name: "First Year, First Semester".to_string(),
                        },
                        category: RawCategory {
                            code: "PROF".to_string(),
                            name: "Professional".to_string(),
                        },
                        course: RawCourseInfo {
                            code: "CS101".to_string(),
                            title: "Intro to Computing".to_string(),
                            units: "3".to_string(),
                        },
                        course_outcomes: vec![RawCourseOutcome {
                            id: 1000,
                            name: "CO1".to_string(),
                            statement: "Students will explain computing concepts clearly".to_string(),
                            po_mappings: vec![
                                RawPoMapping {
                                    po_id: 10,
                                    po_name: "PO1".to_string(),
                                    po_statement: "Apply computing knowledge".to_string(),
                                    contribution_level: "I".to_string(),
                                },
                                RawPoMapping {
                                    po_id: 11,
                                    po_name: "PO2".to_string(),
                                    po_statement: "Design solutions".to_string(),
                                    contribution_level: String::new(),
                                },
                            ],
                            tla_tasks: vec![RawTlaTask {
                                code: "Q1".to_string(),
                                name: "Quiz".to_string(),
                                tool: "Rubric".to_string(),
                                weight: "40.5".to_string(),
                            }],
                            ..Default::default()
                        }],
                    },
                    RawCurriculumCourse {
                        id: 101,
                        semester: RawSemester {
                            code: "1-1".to_string(),
                            name: "First Year, First Semester".to_string(),
                        },
                        category: RawCategory {
                            code: "GEN".to_string(),
                            name: "General Education".to_string(),
                        },
                        course: RawCourseInfo {
                            code: "MATH110".to_string(),
                            title: "College Algebra".to_string(),
                            units: "3.5".to_string(),
                        },
                        course_outcomes: vec![RawCourseOutcome {
                            id: 1001,
                            name: "CO1".to_string(),
                            statement: "Students will solve equations correctly".to_string(),
                            po_mappings: vec![RawPoMapping {
                                po_id: 11,
                                // Conflicting statement for PO 11; the first
                                // occurrence above is authoritative
                                po_name: "PO2 conflicting".to_string(),
                                po_statement: "Different statement".to_string(),
                                contribution_level: "D".to_string(),
                            }],
                            ..Default::default()
                        }],
                    },
                ],
            },
        }
    }

    #[test]
    fn test_flat_lists_preserve_first_seen_order() {
        let flat = normalize(&sample_proposal());

        let mission_nos: Vec<&str> = flat.missions.iter().map(|m| m.mission_no.as_str()).collect();
        assert_eq!(mission_nos, ["M1", "M2"]);
        assert_eq!(flat.missions[0].description, "Serve the region");

        let ga_nos: Vec<&str> = flat
            .graduate_attributes
            .iter()
            .map(|g| g.ga_no.as_str())
            .collect();
        assert_eq!(ga_nos, ["GA1", "GA2"]);
        assert_eq!(flat.graduate_attributes[0].description, "Critical thinking");

        assert_eq!(flat.semesters.len(), 1);
        assert_eq!(flat.categories.len(), 2);
        assert_eq!(flat.courses.len(), 2);
    }

    #[test]
    fn test_po_conflict_first_seen_wins() {
        let flat = normalize(&sample_proposal());

        // PO 10 from the top-level array, PO 11 first seen under CS101
        assert_eq!(flat.program_outcomes.len(), 2);
        let po11 = flat.program_outcomes.iter().find(|p| p.id == 11).unwrap();
        assert_eq!(po11.name, "PO2");
        assert_eq!(po11.statement, "Design solutions");
    }

    #[test]
    fn test_available_levels_parsed() {
        let flat = normalize(&sample_proposal());

        let po10 = flat.program_outcomes.iter().find(|p| p.id == 10).unwrap();
        assert_eq!(
            po10.available_levels,
            vec![ContributionLevel::Introductory, ContributionLevel::Enabling]
        );

        // PO first seen in a mapping row has no level list; all allowed
        let po11 = flat.program_outcomes.iter().find(|p| p.id == 11).unwrap();
        assert_eq!(po11.available_levels.len(), 3);
    }

    #[test]
    fn test_string_numerics_parsed() {
        let flat = normalize(&sample_proposal());

        assert!((flat.courses[1].units - 3.5).abs() < f64::EPSILON);
        assert!(
            (flat.courses[0].outcomes[0].tla_tasks[0].weight_percent - 40.5).abs() < f64::EPSILON
        );
    }

    #[test]
    fn test_peo_mission_edges_are_positional_by_peo() {
        let flat = normalize(&sample_proposal());

        assert!(flat.peo_mission.contains(&MappingEdge {
            row: EdgeRef::Index(0),
            col: EdgeRef::Key("M1".to_string()),
            label: None,
            tooltip: Some("Serve the region".to_string()),
        }));
        // Second PEO also maps to M1; tooltip carries the canonical text
        assert!(flat.peo_mission.contains(&MappingEdge {
            row: EdgeRef::Index(1),
            col: EdgeRef::Key("M1".to_string()),
            label: None,
            tooltip: Some("Serve the region".to_string()),
        }));
        assert_eq!(flat.peo_mission.len(), 3);
    }

    #[test]
    fn test_course_po_edges_carry_level_labels() {
        let flat = normalize(&sample_proposal());

        let cs101_po10 = flat
            .course_po
            .iter()
            .find(|e| {
                e.row == EdgeRef::Key("CS101".to_string()) && e.col == EdgeRef::Index(0)
            })
            .unwrap();
        assert_eq!(cs101_po10.label.as_deref(), Some("I"));

        // Mapping row without a chosen level still yields an edge, unlabeled
        let cs101_po11 = flat
            .course_po
            .iter()
            .find(|e| {
                e.row == EdgeRef::Key("CS101".to_string()) && e.col == EdgeRef::Index(1)
            })
            .unwrap();
        assert_eq!(cs101_po11.label, None);
    }

    #[test]
    fn test_edges_are_sets() {
        let mut raw = sample_proposal();
        // Repeat an identical mapping row
        let dup = raw.curriculum.courses[0].course_outcomes[0].po_mappings[0].clone();
        raw.curriculum.courses[0].course_outcomes[0]
            .po_mappings
            .push(dup);

        let flat = normalize(&raw);
        let cs101_po10_count = flat
            .course_po
            .iter()
            .filter(|e| e.row == EdgeRef::Key("CS101".to_string()) && e.col == EdgeRef::Index(0))
            .count();
        assert_eq!(cs101_po10_count, 1);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = sample_proposal();

        let first = normalize(&raw);
        let second = normalize(&raw);

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_proposal_yields_empty_model() {
        let flat = normalize(&RawProposal::default());

        assert!(flat.missions.is_empty());
        assert!(flat.peos.is_empty());
        assert!(flat.program_outcomes.is_empty());
        assert!(flat.courses.is_empty());
        assert!(flat.course_po.is_empty());
    }

    #[test]
    fn test_course_without_outcomes_propagates_empty_list() {
        let raw = RawProposal {
            curriculum: RawCurriculum {
                courses: vec![RawCurriculumCourse {
                    id: 5,
                    course: RawCourseInfo {
                        code: "PE101".to_string(),
                        title: "Physical Education".to_string(),
                        units: "2".to_string(),
                    },
                    ..Default::default()
                }],
            },
            ..Default::default()
        };

        let flat = normalize(&raw);

        assert_eq!(flat.courses.len(), 1);
        assert!(flat.courses[0].outcomes.is_empty());
    }

    #[test]
    fn test_duplicate_course_code_collapses() {
        let mut raw = sample_proposal();
        let mut dup = raw.curriculum.courses[0].clone();
        dup.course.title = "Conflicting title".to_string();
        raw.curriculum.courses.push(dup);

        let flat = normalize(&raw);

        assert_eq!(flat.courses.len(), 2);
        assert_eq!(flat.courses[0].title, "Intro to Computing");
    }

    #[test]
    fn test_all_outcomes_flattens_across_courses() {
        let flat = normalize(&sample_proposal());

        let outcomes = flat.all_outcomes();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].id, 1000);
        assert_eq!(outcomes[1].id, 1001);
    }
}
