//! End-of-game resolution: winner, loser and the loser's challenge.
//!
//! Winner selection is deterministic (first in roster order among the top
//! scorers). Loser selection is random among the bottom scorers by default,
//! since picking the victim is part of the game. Challenge selection is
//! always random. All randomness flows through a [`RandomSource`].
//!
//! [`RandomSource`]: crate::core::RandomSource

mod policy;

pub use policy::{assign_challenge, resolve_loser, resolve_outcome, resolve_winner, tie_set, TieSet};

use serde::{Deserialize, Serialize};

use crate::core::CandidateId;

/// Final result of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Highest scorer.
    pub winner: CandidateId,

    /// Lowest scorer, who takes the challenge.
    pub loser: CandidateId,

    /// Challenge assigned to the loser.
    pub challenge: String,

    /// Winner's final score.
    pub winning_score: i64,

    /// Loser's final score.
    pub losing_score: i64,
}
