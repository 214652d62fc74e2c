//! Review-step gate
//!
//! The proposal wizard is a plain linear sequencer owned by the UI; the only
//! thing it asks the engine is "may Next be enabled for this step" and
//! "how many outcomes are done". Each step maps onto one completeness
//! predicate over the outcome set.

use crate::core::completeness::{
    completed_count, is_abcd_complete, is_cpa_complete, is_methods_complete, is_outcome_mapped,
    is_tla_complete_with_tolerance,
};
use crate::core::models::CourseOutcome;
use serde::{Deserialize, Serialize};

/// The metadata sections a committee fills in per outcome set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewStep {
    /// ABCD objective fields
    Abcd,
    /// Learning-domain classification
    Cpa,
    /// CO-to-PO mappings
    Mapping,
    /// Assessment tasks and weights
    Tla,
    /// Teaching methods and learning resources
    Methods,
}

impl ReviewStep {
    /// All steps in presentation order
    pub const ALL: [Self; 5] = [Self::Abcd, Self::Cpa, Self::Mapping, Self::Tla, Self::Methods];
}

/// Whether "Next" may be enabled for a step, given every outcome of every
/// course in the proposal.
#[must_use]
pub fn step_ready(step: ReviewStep, outcomes: &[CourseOutcome], weight_tolerance: f64) -> bool {
    match step {
        ReviewStep::Abcd => !outcomes.is_empty() && outcomes.iter().all(is_abcd_complete),
        ReviewStep::Cpa => !outcomes.is_empty() && outcomes.iter().all(is_cpa_complete),
        ReviewStep::Mapping => !outcomes.is_empty() && outcomes.iter().all(is_outcome_mapped),
        ReviewStep::Tla => is_tla_complete_with_tolerance(outcomes, weight_tolerance),
        ReviewStep::Methods => !outcomes.is_empty() && outcomes.iter().all(is_methods_complete),
    }
}

/// "n of m complete" for a step's progress badge.
///
/// For the TLA step the count is outcomes with at least one task; the weight
/// total is a set-wide property reported by [`step_ready`].
#[must_use]
pub fn step_progress(step: ReviewStep, outcomes: &[CourseOutcome]) -> (usize, usize) {
    let done = match step {
        ReviewStep::Abcd => completed_count(outcomes, is_abcd_complete),
        ReviewStep::Cpa => completed_count(outcomes, is_cpa_complete),
        ReviewStep::Mapping => completed_count(outcomes, is_outcome_mapped),
        ReviewStep::Tla => completed_count(outcomes, |o| !o.tla_tasks.is_empty()),
        ReviewStep::Methods => completed_count(outcomes, is_methods_complete),
    };
    (done, outcomes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::completeness::WEIGHT_TOLERANCE;
    use crate::core::models::{Abcd, ContributionLevel, CpaDomain, TlaTask};

    fn complete_outcome() -> CourseOutcome {
        let mut outcome = CourseOutcome::new(
            1,
            "CO1".to_string(),
            "Students will analyze data using statistical methods accurately".to_string(),
        );
        outcome.set_abcd(Abcd {
            audience: "Students".to_string(),
            behavior: "analyze".to_string(),
            condition: "using statistical methods".to_string(),
            degree: "accurately".to_string(),
        });
        outcome.set_cpa(CpaDomain::Cognitive);
        outcome.map_to_po(1, Some(ContributionLevel::Introductory));
        outcome.add_task(TlaTask {
            code: "E1".to_string(),
            name: "Exam".to_string(),
            tool: "Written exam".to_string(),
            weight_percent: 100.0,
        });
        outcome.tla_method.add_teaching_method("Lecture".to_string());
        outcome
            .tla_method
            .add_learning_resource("Textbook".to_string());
        outcome
    }

    #[test]
    fn test_all_steps_ready_for_complete_outcome() {
        let outcomes = vec![complete_outcome()];

        for step in ReviewStep::ALL {
            assert!(step_ready(step, &outcomes, WEIGHT_TOLERANCE), "{step:?}");
        }
    }

    #[test]
    fn test_no_step_ready_for_empty_set() {
        for step in ReviewStep::ALL {
            assert!(!step_ready(step, &[], WEIGHT_TOLERANCE), "{step:?}");
        }
    }

    #[test]
    fn test_one_incomplete_outcome_blocks_the_step() {
        let incomplete = CourseOutcome::new(2, "CO2".to_string(), "s".to_string());
        let outcomes = vec![complete_outcome(), incomplete];

        assert!(!step_ready(ReviewStep::Cpa, &outcomes, WEIGHT_TOLERANCE));
        assert_eq!(step_progress(ReviewStep::Cpa, &outcomes), (1, 2));
    }

    #[test]
    fn test_tla_step_checks_grand_total() {
        let mut a = complete_outcome();
        a.tla_tasks[0].weight_percent = 50.0;
        let mut b = complete_outcome();
        b.id = 2;
        b.tla_tasks[0].weight_percent = 49.0;

        let outcomes = vec![a, b];
        assert!(!step_ready(ReviewStep::Tla, &outcomes, WEIGHT_TOLERANCE));
        // Both have tasks, so progress still reports 2 of 2
        assert_eq!(step_progress(ReviewStep::Tla, &outcomes), (2, 2));
    }
}
