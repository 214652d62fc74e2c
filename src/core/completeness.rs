//! Per-entity completeness predicates
//!
//! These are pure boolean predicates consulted live during editing and for
//! summary/progress badges. "Incomplete" is an expected steady state while a
//! committee fills in metadata, not an error, so nothing here ever fails.

use crate::core::models::{ContributionLevel, CourseOutcome, ProgramOutcome};
use crate::core::textcheck::{has_overlap, is_substring};

/// Default tolerance when comparing the grand total of assessment-task
/// weights against 100. Carried over from the source system; overridable via
/// configuration and [`is_tla_complete_with_tolerance`].
pub const WEIGHT_TOLERANCE: f64 = 0.01;

/// Whether an outcome's ABCD fields are complete.
///
/// All four fields must be non-empty; behavior, condition, and degree must
/// each appear verbatim (case-insensitively) in the statement and no two of
/// them may be equal or one a substring of another.
#[must_use]
pub fn is_abcd_complete(outcome: &CourseOutcome) -> bool {
    let abcd = &outcome.abcd;

    if abcd.audience.trim().is_empty()
        || abcd.behavior.trim().is_empty()
        || abcd.condition.trim().is_empty()
        || abcd.degree.trim().is_empty()
    {
        return false;
    }

    is_substring(&abcd.behavior, &outcome.statement)
        && is_substring(&abcd.condition, &outcome.statement)
        && is_substring(&abcd.degree, &outcome.statement)
        && !has_overlap(&abcd.behavior, &abcd.condition, &abcd.degree)
}

/// Whether a learning domain has been chosen (unset is not complete).
#[must_use]
pub const fn is_cpa_complete(outcome: &CourseOutcome) -> bool {
    outcome.cpa.is_set()
}

/// Whether an outcome has at least one PO mapping and every mapping row has
/// a contribution level chosen.
#[must_use]
pub fn is_outcome_mapped(outcome: &CourseOutcome) -> bool {
    !outcome.po_mappings.is_empty() && outcome.po_mappings.iter().all(|m| m.level.is_some())
}

/// Whether an outcome has at least one teaching method and one learning
/// resource.
#[must_use]
pub fn is_methods_complete(outcome: &CourseOutcome) -> bool {
    !outcome.tla_method.teaching_methods.is_empty()
        && !outcome.tla_method.learning_resources.is_empty()
}

/// Whether the assessment plan for a whole outcome set is submission-ready:
/// every outcome has at least one task and the grand total of weights across
/// all outcomes is within [`WEIGHT_TOLERANCE`] of 100.
#[must_use]
pub fn is_tla_complete(outcomes: &[CourseOutcome]) -> bool {
    is_tla_complete_with_tolerance(outcomes, WEIGHT_TOLERANCE)
}

/// [`is_tla_complete`] with an explicit tolerance (e.g., from configuration).
#[must_use]
pub fn is_tla_complete_with_tolerance(outcomes: &[CourseOutcome], tolerance: f64) -> bool {
    if outcomes.is_empty() {
        return false;
    }
    if outcomes.iter().any(|o| o.tla_tasks.is_empty()) {
        return false;
    }

    let total: f64 = outcomes.iter().map(CourseOutcome::task_weight_total).sum();
    (total - 100.0).abs() < tolerance
}

/// Whether a chosen contribution level is allowed for a program outcome.
///
/// Levels outside the PO's available set are presented disabled by the UI
/// and must never be persisted.
#[must_use]
pub fn is_level_allowed(po: &ProgramOutcome, level: ContributionLevel) -> bool {
    po.allows(level)
}

/// Count how many outcomes satisfy a predicate, for "n of m" progress
/// displays.
pub fn completed_count<P>(outcomes: &[CourseOutcome], predicate: P) -> usize
where
    P: Fn(&CourseOutcome) -> bool,
{
    outcomes.iter().filter(|o| predicate(o)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Abcd, CpaDomain, TlaTask};

    fn outcome_with_statement(statement: &str) -> CourseOutcome {
        CourseOutcome::new(1, "CO1".to_string(), statement.to_string())
    }

    fn task(weight: f64) -> TlaTask {
        TlaTask {
            code: "T".to_string(),
            name: "Task".to_string(),
            tool: "Rubric".to_string(),
            weight_percent: weight,
        }
    }

    #[test]
    fn test_abcd_complete_on_valid_extraction() {
        let mut outcome = outcome_with_statement(
            "Students will analyze data using statistical methods accurately",
        );
        outcome.set_abcd(Abcd {
            audience: "Students".to_string(),
            behavior: "analyze".to_string(),
            condition: "using statistical methods".to_string(),
            degree: "accurately".to_string(),
        });

        assert!(is_abcd_complete(&outcome));
    }

    #[test]
    fn test_abcd_incomplete_when_condition_contains_behavior() {
        let mut outcome = outcome_with_statement(
            "Students will analyze data using statistical methods accurately",
        );
        outcome.set_abcd(Abcd {
            audience: "Students".to_string(),
            behavior: "statistical methods".to_string(),
            condition: "using statistical methods".to_string(),
            degree: "accurately".to_string(),
        });

        assert!(!is_abcd_complete(&outcome));
    }

    #[test]
    fn test_abcd_incomplete_when_phrase_not_in_statement() {
        let mut outcome = outcome_with_statement("Students will analyze data accurately");
        outcome.set_abcd(Abcd {
            audience: "Students".to_string(),
            behavior: "synthesize".to_string(),
            condition: "data".to_string(),
            degree: "accurately".to_string(),
        });

        assert!(!is_abcd_complete(&outcome));
    }

    #[test]
    fn test_abcd_incomplete_with_empty_field() {
        let mut outcome = outcome_with_statement("Students will analyze data accurately");
        outcome.set_abcd(Abcd {
            audience: String::new(),
            behavior: "analyze".to_string(),
            condition: "data".to_string(),
            degree: "accurately".to_string(),
        });

        assert!(!is_abcd_complete(&outcome));
    }

    #[test]
    fn test_cpa_complete() {
        let mut outcome = outcome_with_statement("s");
        assert!(!is_cpa_complete(&outcome));

        outcome.set_cpa(CpaDomain::Affective);
        assert!(is_cpa_complete(&outcome));
    }

    #[test]
    fn test_outcome_mapped_transitions() {
        let mut outcome = outcome_with_statement("s");
        assert!(!is_outcome_mapped(&outcome));

        // Row without a chosen level does not count as mapped
        outcome.map_to_po(3, None);
        assert!(!is_outcome_mapped(&outcome));

        outcome.map_to_po(3, Some(ContributionLevel::Enabling));
        assert!(is_outcome_mapped(&outcome));
    }

    #[test]
    fn test_methods_complete_needs_both_lists() {
        let mut outcome = outcome_with_statement("s");
        assert!(!is_methods_complete(&outcome));

        outcome.tla_method.add_teaching_method("Lecture".to_string());
        assert!(!is_methods_complete(&outcome));

        outcome
            .tla_method
            .add_learning_resource("Textbook".to_string());
        assert!(is_methods_complete(&outcome));
    }

    #[test]
    fn test_tla_complete_requires_exact_total() {
        let mut a = outcome_with_statement("a");
        let mut b = outcome_with_statement("b");
        a.add_task(task(60.0));
        b.add_task(task(39.9));

        // 99.9 is outside tolerance
        assert!(!is_tla_complete(&[a.clone(), b.clone()]));

        b.add_task(task(0.1));
        assert!(is_tla_complete(&[a, b]));
    }

    #[test]
    fn test_tla_complete_within_tolerance() {
        let mut a = outcome_with_statement("a");
        a.add_task(task(100.004));

        assert!(is_tla_complete(&[a]));
    }

    #[test]
    fn test_tla_incomplete_when_any_outcome_has_no_tasks() {
        let mut a = outcome_with_statement("a");
        a.add_task(task(100.0));
        let b = outcome_with_statement("b");

        assert!(!is_tla_complete(&[a, b]));
    }

    #[test]
    fn test_tla_incomplete_on_empty_set() {
        assert!(!is_tla_complete(&[]));
    }

    #[test]
    fn test_tla_custom_tolerance() {
        let mut a = outcome_with_statement("a");
        a.add_task(task(99.5));

        assert!(!is_tla_complete(&[a.clone()]));
        assert!(is_tla_complete_with_tolerance(&[a], 1.0));
    }

    #[test]
    fn test_level_allowed() {
        let mut po = ProgramOutcome::new(1, "PO1".to_string(), "s".to_string());
        po.available_levels = vec![ContributionLevel::Introductory];

        assert!(is_level_allowed(&po, ContributionLevel::Introductory));
        assert!(!is_level_allowed(&po, ContributionLevel::Enabling));
    }

    #[test]
    fn test_completed_count() {
        let mut a = outcome_with_statement("a");
        a.set_cpa(CpaDomain::Cognitive);
        let b = outcome_with_statement("b");
        let mut c = outcome_with_statement("c");
        c.set_cpa(CpaDomain::Psychomotor);

        assert_eq!(completed_count(&[a, b, c], is_cpa_complete), 2);
    }
}
