//! Swipe decisions and their history records.
//!
//! The UI classifies a drag gesture (right = yes, left = no) and hands the
//! engine a `Decision`. The engine never sees the gesture itself.

use serde::{Deserialize, Serialize};

use super::candidate::CandidateId;

/// Binary answer to "is this candidate the one?".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Yes,
    No,
}

impl Decision {
    /// Build from the UI's swipe callback flag.
    #[must_use]
    pub const fn from_is_yes(is_yes: bool) -> Self {
        if is_yes {
            Self::Yes
        } else {
            Self::No
        }
    }

    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "yes"),
            Self::No => write!(f, "no"),
        }
    }
}

/// An accepted decision with metadata for history tracking.
///
/// Used for replaying a session's votes on a results screen and for
/// checking tally arithmetic in tests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Question the decision answered (0-based).
    pub question_index: usize,

    /// Candidate swiped on.
    pub candidate: CandidateId,

    /// The decision.
    pub decision: Decision,

    /// Candidate's tally after applying the decision.
    pub score_after: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_is_yes() {
        assert_eq!(Decision::from_is_yes(true), Decision::Yes);
        assert_eq!(Decision::from_is_yes(false), Decision::No);
        assert!(Decision::Yes.is_yes());
        assert!(!Decision::No.is_yes());
    }

    #[test]
    fn test_display() {
        assert_eq!(Decision::Yes.to_string(), "yes");
        assert_eq!(Decision::No.to_string(), "no");
    }

    #[test]
    fn test_record_serialization() {
        let record = DecisionRecord {
            question_index: 1,
            candidate: CandidateId::new(2),
            decision: Decision::Yes,
            score_after: 3,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: DecisionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
