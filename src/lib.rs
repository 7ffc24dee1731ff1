//! # swipe-vote
//!
//! Round/voting state machine and scoring engine for a swipe-to-vote party
//! game. Players answer "who is most likely to..." prompts by swiping each
//! friend right (yes) or left (no). After the last prompt the top scorer
//! wins and a bottom scorer is handed a random challenge.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: Gestures, cards and images live in the UI. The engine
//!    only sees `(candidate, Decision)` pairs and returns status values.
//!
//! 2. **One Owned State**: A `Session` owns all game state and is mutated
//!    only through `submit_decision`.
//!
//! 3. **Reproducible**: Tie-breaks walk roster order, and all randomness
//!    comes from an injectable, seedable `RandomSource`.
//!
//! ## Modules
//!
//! - `core`: Candidates, decisions, state, tally, RNG, configuration, errors
//! - `round`: The round engine (`Session`)
//! - `resolution`: Winner, loser and challenge selection
//! - `presets`: Stock questions, challenges and demo roster
//!
//! ## Example
//!
//! ```
//! use swipe_vote::{presets, Decision, RoundStatus, Session, SessionConfig};
//!
//! let mut session = Session::new(
//!     presets::demo_roster(),
//!     ["Who is most likely to succeed?"],
//!     SessionConfig::default(),
//! )
//! .unwrap();
//!
//! session.submit_by_name("Birking1", Decision::Yes).unwrap();
//! session.submit_by_name("Cat1", Decision::No).unwrap();
//! let status = session.submit_by_name("Frenchie1", Decision::No).unwrap();
//!
//! assert_eq!(status, RoundStatus::GameOver);
//! let outcome = session.outcome().unwrap();
//! assert_eq!(session.candidate(outcome.winner).unwrap().name, "Birking1");
//! ```

pub mod core;
pub mod presets;
pub mod resolution;
pub mod round;

// Re-export commonly used types
pub use crate::core::{
    AssetRef, Candidate, CandidateId, CandidateMap, Roster,
    Decision, DecisionRecord,
    GameRng, RandomSource,
    LoserTieBreak, ScoringMode, SessionConfig,
    InvalidStateReason, Result, SessionError,
    ScoreTally, SessionPhase, SessionState,
};

pub use crate::resolution::{
    assign_challenge, resolve_loser, resolve_outcome, resolve_winner, Outcome, TieSet,
};

pub use crate::round::{RoundStatus, Session};
