//! Error types for session setup, decisions and resolution.
//!
//! Every error is local and recoverable. The UI decides whether to surface
//! it (bad setup input) or drop it (a stray late swipe).

use thiserror::Error;

use super::candidate::CandidateId;

/// Why a decision was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidStateReason {
    /// The game has already ended.
    GameOver,
    /// The candidate was already swiped on in this round.
    NotInRound(CandidateId),
    /// No candidate with this name or ID exists in the roster.
    UnknownCandidate(String),
}

impl std::fmt::Display for InvalidStateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GameOver => write!(f, "game is over"),
            Self::NotInRound(id) => write!(f, "{id} is not in the current round"),
            Self::UnknownCandidate(name) => write!(f, "unknown candidate '{name}'"),
        }
    }
}

/// Errors raised by the engine.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// A decision arrived out of order, twice, or after the game ended.
    #[error("invalid state: {0}")]
    InvalidState(InvalidStateReason),

    /// Session created with zero candidates or zero questions.
    #[error("empty session data: {0}")]
    EmptySessionData(&'static str),

    /// Two roster entries share a name.
    #[error("duplicate candidate name '{0}'")]
    DuplicateCandidate(String),

    /// Challenge assignment requested with no challenges configured.
    #[error("challenge pool is empty")]
    EmptyChallengePool,

    /// Winner resolution over an empty tally.
    #[error("no winner: score tally is empty")]
    NoWinner,

    /// Loser resolution over an empty tally.
    #[error("no loser: score tally is empty")]
    NoLoser,
}

impl SessionError {
    /// Whether this is a rejected decision rather than a setup problem.
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, SessionError>;
