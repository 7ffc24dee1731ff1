//! Session state: everything one game needs between swipes.
//!
//! ## ScoreTally
//!
//! Cumulative per-candidate score, zero for every candidate at start and
//! never reset between rounds.
//!
//! ## SessionState
//!
//! - Roster and questions (fixed for the session)
//! - Question cursor and the candidates still to swipe this round
//! - Tally, game-over flag and outcome
//! - Decision history
//!
//! Only the round engine mutates it; everything here is read access plus
//! the primitive steps the engine composes.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::candidate::{Candidate, CandidateId, CandidateMap, Roster};
use super::decision::DecisionRecord;
use super::error::{Result, SessionError};
use crate::resolution::Outcome;

/// Per-candidate cumulative score, stored in roster order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    scores: CandidateMap<i64>,
}

impl ScoreTally {
    /// Zero tally for `count` candidates.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            scores: CandidateMap::with_value(count, 0),
        }
    }

    /// Tally from explicit scores, in roster order.
    #[must_use]
    pub fn from_scores(scores: impl IntoIterator<Item = i64>) -> Self {
        let scores: Vec<i64> = scores.into_iter().collect();
        Self {
            scores: CandidateMap::new(scores.len(), |id| scores[id.index()]),
        }
    }

    /// Score for a candidate. Absent entries count as zero.
    #[must_use]
    pub fn get(&self, id: CandidateId) -> i64 {
        self.scores.get(id).copied().unwrap_or(0)
    }

    /// Add `delta` to a candidate's score and return the new score.
    ///
    /// Out-of-range IDs are ignored and report zero.
    pub fn apply(&mut self, id: CandidateId, delta: i64) -> i64 {
        match self.scores.get_mut(id) {
            Some(score) => {
                *score += delta;
                *score
            }
            None => 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sum of all scores.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.scores.values().sum()
    }

    /// Iterate over (CandidateId, score) in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (CandidateId, i64)> + '_ {
        self.scores.iter().map(|(id, &score)| (id, score))
    }
}

/// Where the session is in its lifecycle.
///
/// `Setup` is the time before a session exists, so it has no variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Accepting decisions for the current question.
    InRound,
    /// Terminal. No further decisions are processed.
    GameOver,
}

/// Candidates still to be swiped on this round, in roster order.
pub type RemainingCandidates = SmallVec<[CandidateId; 8]>;

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct SessionState {
    roster: Roster,
    questions: Vec<String>,
    current_question_index: usize,
    remaining: RemainingCandidates,
    scores: ScoreTally,
    is_game_over: bool,
    outcome: Option<Outcome>,
    history: Vector<DecisionRecord>,
}

impl SessionState {
    /// Fresh state at the start of the first round.
    pub fn new(roster: Roster, questions: Vec<String>) -> Result<Self> {
        if questions.is_empty() {
            return Err(SessionError::EmptySessionData("question list is empty"));
        }

        let scores = ScoreTally::new(roster.len());
        let remaining = roster.ids().collect();

        Ok(Self {
            roster,
            questions,
            current_question_index: 0,
            remaining,
            scores,
            is_game_over: false,
            outcome: None,
            history: Vector::new(),
        })
    }

    // === Read Access ===

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    #[must_use]
    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    /// Prompt for the current round, `None` once the game is over.
    #[must_use]
    pub fn current_question(&self) -> Option<&str> {
        if self.is_game_over {
            return None;
        }
        self.questions.get(self.current_question_index).map(String::as_str)
    }

    /// Whether the current round answers the final question.
    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current_question_index + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn remaining(&self) -> &[CandidateId] {
        &self.remaining
    }

    /// Remaining candidates resolved against the roster.
    pub fn remaining_candidates(&self) -> impl Iterator<Item = &Candidate> {
        self.remaining.iter().filter_map(|&id| self.roster.get(id))
    }

    #[must_use]
    pub fn is_remaining(&self, id: CandidateId) -> bool {
        self.remaining.contains(&id)
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreTally {
        &self.scores
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.is_game_over {
            SessionPhase::GameOver
        } else {
            SessionPhase::InRound
        }
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<DecisionRecord> {
        &self.history
    }

    // === Engine Steps ===

    /// Take a candidate out of the current round.
    ///
    /// Returns false if it was not in the round.
    pub(crate) fn remove_remaining(&mut self, id: CandidateId) -> bool {
        match self.remaining.iter().position(|&c| c == id) {
            Some(pos) => {
                self.remaining.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn apply_score(&mut self, id: CandidateId, delta: i64) -> i64 {
        self.scores.apply(id, delta)
    }

    pub(crate) fn record(&mut self, record: DecisionRecord) {
        self.history.push_back(record);
    }

    /// Move to the next question and refill the round in roster order.
    pub(crate) fn advance_round(&mut self) {
        self.current_question_index += 1;
        self.remaining = self.roster.ids().collect();
    }

    /// Enter the terminal state.
    pub(crate) fn finish(&mut self, outcome: Outcome) {
        self.current_question_index = self.questions.len();
        self.outcome = Some(outcome);
        self.is_game_over = true;
    }
}
