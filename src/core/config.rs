//! Session configuration.
//!
//! The two behaviours that differ between versions of the game are named
//! policies here rather than hardcoded:
//! - `ScoringMode`: whether a "no" swipe costs a point
//! - `LoserTieBreak`: how the loser is chosen among tied lowest scorers

use serde::{Deserialize, Serialize};

use crate::presets;

/// How a decision changes the candidate's score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringMode {
    /// Yes: +1. No: unchanged.
    #[default]
    YesOnlyIncrement,
    /// Yes: +1. No: -1.
    YesIncrementNoDecrement,
}

impl ScoringMode {
    /// Score change for a decision under this mode.
    #[must_use]
    pub const fn delta(self, is_yes: bool) -> i64 {
        match (self, is_yes) {
            (_, true) => 1,
            (Self::YesOnlyIncrement, false) => 0,
            (Self::YesIncrementNoDecrement, false) => -1,
        }
    }
}

/// How the loser is chosen among candidates sharing the minimum score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoserTieBreak {
    /// Uniformly at random from the tie set.
    #[default]
    Random,
    /// First tied candidate in roster order.
    FirstInRoster,
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Scoring policy for "no" swipes.
    pub scoring_mode: ScoringMode,

    /// Tie-break among lowest scorers.
    pub loser_tie_break: LoserTieBreak,

    /// Leave the winner out of the loser pool when anyone else is left.
    pub exclude_winner_from_loser: bool,

    /// Challenges the loser can be assigned. Must be non-empty.
    pub challenges: Vec<String>,

    /// Seed for the session RNG.
    /// Same seed with the same decisions gives the same outcome.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            scoring_mode: ScoringMode::default(),
            loser_tie_break: LoserTieBreak::default(),
            exclude_winner_from_loser: true,
            challenges: presets::default_challenges(),
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Set the scoring mode.
    #[must_use]
    pub fn with_scoring_mode(mut self, mode: ScoringMode) -> Self {
        self.scoring_mode = mode;
        self
    }

    /// Set the loser tie-break policy.
    #[must_use]
    pub fn with_loser_tie_break(mut self, tie_break: LoserTieBreak) -> Self {
        self.loser_tie_break = tie_break;
        self
    }

    /// Allow or forbid the winner also being picked as loser.
    #[must_use]
    pub fn with_exclude_winner_from_loser(mut self, exclude: bool) -> Self {
        self.exclude_winner_from_loser = exclude;
        self
    }

    /// Replace the challenge pool.
    #[must_use]
    pub fn with_challenges<I, S>(mut self, challenges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.challenges = challenges.into_iter().map(Into::into).collect();
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
