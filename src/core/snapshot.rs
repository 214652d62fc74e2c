//! Pristine/working snapshot pair
//!
//! The UI loads a proposal once, lets the user edit a working copy in place,
//! and offers "reset to original" without refetching. The engine stays out
//! of that lifecycle; it only guarantees that every model is a deep `Clone`
//! and provides this thin holder for the two copies.

/// A pristine snapshot plus an independently mutable working copy
#[derive(Debug, Clone)]
pub struct SnapshotPair<T: Clone> {
    pristine: T,
    working: T,
}

impl<T: Clone> SnapshotPair<T> {
    /// Establish the pair from an initial snapshot; the working copy starts
    /// as a deep copy of the pristine one
    pub fn new(initial: T) -> Self {
        Self {
            working: initial.clone(),
            pristine: initial,
        }
    }

    /// The original snapshot, untouched by edits
    pub const fn pristine(&self) -> &T {
        &self.pristine
    }

    /// The working copy
    pub const fn working(&self) -> &T {
        &self.working
    }

    /// Mutable access to the working copy; edits never reach the pristine
    /// snapshot
    pub fn working_mut(&mut self) -> &mut T {
        &mut self.working
    }

    /// Discard edits and restore the working copy from the pristine snapshot
    pub fn reset(&mut self) {
        self.working = self.pristine.clone();
    }

    /// Accept the working copy as the new pristine snapshot (after a
    /// successful submission)
    pub fn commit(&mut self) {
        self.pristine = self.working.clone();
    }

    /// Consume the pair, yielding the working copy
    pub fn into_working(self) -> T {
        self.working
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CourseOutcome, CpaDomain};

    #[test]
    fn test_working_edits_do_not_touch_pristine() {
        let outcome = CourseOutcome::new(1, "CO1".to_string(), "original".to_string());
        let mut pair = SnapshotPair::new(outcome);

        pair.working_mut().statement = "edited".to_string();
        pair.working_mut().set_cpa(CpaDomain::Cognitive);

        assert_eq!(pair.pristine().statement, "original");
        assert_eq!(pair.pristine().cpa, CpaDomain::Unset);
        assert_eq!(pair.working().statement, "edited");
    }

    #[test]
    fn test_reset_restores_pristine() {
        let outcome = CourseOutcome::new(1, "CO1".to_string(), "original".to_string());
        let mut pair = SnapshotPair::new(outcome);

        pair.working_mut().statement = "edited".to_string();
        pair.reset();

        assert_eq!(pair.working().statement, "original");
    }

    #[test]
    fn test_commit_accepts_edits() {
        let outcome = CourseOutcome::new(1, "CO1".to_string(), "original".to_string());
        let mut pair = SnapshotPair::new(outcome);

        pair.working_mut().statement = "edited".to_string();
        pair.commit();
        pair.working_mut().statement = "edited again".to_string();
        pair.reset();

        assert_eq!(pair.working().statement, "edited");
    }

    #[test]
    fn test_nested_mutation_is_deep_copied() {
        let mut outcome = CourseOutcome::new(1, "CO1".to_string(), "s".to_string());
        outcome
            .tla_method
            .add_teaching_method("Lecture".to_string());
        let mut pair = SnapshotPair::new(outcome);

        pair.working_mut()
            .tla_method
            .add_teaching_method("Case study".to_string());

        assert_eq!(pair.pristine().tla_method.teaching_methods.len(), 1);
        assert_eq!(pair.working().tla_method.teaching_methods.len(), 2);
    }
}
