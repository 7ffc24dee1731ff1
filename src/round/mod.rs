//! Round engine: consumes swipe decisions and drives the session through
//! `InRound → (RoundAdvance → InRound)* → GameOver`.
//!
//! The UI collaborator owns gestures and rendering. It calls
//! [`Session::submit_decision`] once per swipe and re-renders from the
//! returned [`RoundStatus`].

pub mod engine;

pub use engine::{RoundStatus, Session};
