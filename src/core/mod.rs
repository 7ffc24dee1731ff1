//! Core engine types: candidates, decisions, state, RNG, configuration, errors.

pub mod candidate;
pub mod config;
pub mod decision;
pub mod error;
pub mod rng;
pub mod state;

pub use candidate::{AssetRef, Candidate, CandidateId, CandidateMap, Roster};
pub use config::{LoserTieBreak, ScoringMode, SessionConfig};
pub use decision::{Decision, DecisionRecord};
pub use error::{InvalidStateReason, Result, SessionError};
pub use rng::{GameRng, RandomSource};
pub use state::{RemainingCandidates, ScoreTally, SessionPhase, SessionState};
