//! Stages of a single order placement attempt.
//!
//! ```text
//! Validating → Decrementing → Persisting → Completed
//!      └────────────┴─────────────┴──────→ Failed(tag)
//! ```
//!
//! There is no retry and no way back into an earlier stage.

use serde::Serialize;

use crate::domain::foundation::ErrorTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", content = "tag")]
pub enum PlacementStage {
    Validating,
    Decrementing,
    Persisting,
    Completed,
    Failed(ErrorTag),
}

impl PlacementStage {
    /// Returns true if moving from self to `target` is allowed.
    pub fn can_transition_to(&self, target: &Self) -> bool {
        use PlacementStage::*;
        matches!(
            (self, target),
            (Validating, Decrementing)
                | (Decrementing, Persisting)
                | (Persisting, Completed)
                | (Validating | Decrementing | Persisting, Failed(_))
        )
    }

    /// The next stage on the success path. Terminal stages stay put.
    pub fn advance(self) -> Self {
        match self {
            PlacementStage::Validating => PlacementStage::Decrementing,
            PlacementStage::Decrementing => PlacementStage::Persisting,
            PlacementStage::Persisting => PlacementStage::Completed,
            terminal => terminal,
        }
    }

    /// Moves to `Failed(tag)` unless already terminal.
    pub fn fail(self, tag: ErrorTag) -> Self {
        if self.is_terminal() {
            self
        } else {
            PlacementStage::Failed(tag)
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PlacementStage::Completed | PlacementStage::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_path_reaches_completed() {
        let stage = PlacementStage::Validating.advance().advance().advance();
        assert_eq!(stage, PlacementStage::Completed);
    }

    #[test]
    fn every_running_stage_can_fail() {
        for stage in [
            PlacementStage::Validating,
            PlacementStage::Decrementing,
            PlacementStage::Persisting,
        ] {
            let failed = stage.fail(ErrorTag::OrderError);
            assert!(stage.can_transition_to(&failed));
            assert_eq!(failed, PlacementStage::Failed(ErrorTag::OrderError));
        }
    }

    #[test]
    fn terminal_stages_do_not_move() {
        let done = PlacementStage::Completed;
        assert_eq!(done.advance(), done);
        assert_eq!(done.fail(ErrorTag::DatabaseError), done);

        let failed = PlacementStage::Failed(ErrorTag::InventoryError);
        assert_eq!(failed.advance(), failed);
        assert!(!failed.can_transition_to(&PlacementStage::Validating));
    }

    #[test]
    fn stages_cannot_be_skipped() {
        assert!(!PlacementStage::Validating.can_transition_to(&PlacementStage::Persisting));
        assert!(!PlacementStage::Decrementing.can_transition_to(&PlacementStage::Validating));
    }
}
