//! The round engine: the only way a session's state changes.
//!
//! Each call to [`Session::submit_decision`] is one swipe, processed to
//! completion:
//! - Reject it if the game is over or the candidate already went this round
//! - Remove the candidate from the round and score the decision
//! - If the round is now empty, advance to the next question or resolve
//!   the outcome and end the game

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{
    Candidate, CandidateId, Decision, DecisionRecord, GameRng, InvalidStateReason, RandomSource,
    Result, Roster, ScoreTally, SessionConfig, SessionError, SessionPhase, SessionState,
};
use crate::resolution::{resolve_outcome, Outcome};

/// What a decision did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Same question, more candidates to swipe.
    RoundContinues,
    /// Round finished; now on `question_index` with a full roster.
    RoundAdvanced { question_index: usize },
    /// Final round finished; the outcome is available.
    GameOver,
}

/// One game, from first swipe to outcome.
///
/// Generic over the random source so tests can script loser and challenge
/// picks. [`Session::new`] seeds a [`GameRng`] from the config.
#[derive(Clone, Debug)]
pub struct Session<R = GameRng> {
    config: SessionConfig,
    state: SessionState,
    rng: R,
}

impl Session<GameRng> {
    /// Create a session seeded from `config.seed`.
    pub fn new<I>(roster: Vec<Candidate>, questions: I, config: SessionConfig) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let rng = GameRng::new(config.seed);
        Self::with_rng(roster, questions, config, rng)
    }
}

impl<R: RandomSource> Session<R> {
    /// Create a session with an explicit random source.
    ///
    /// Rejects an empty roster, duplicate names, an empty question list and
    /// an empty challenge pool.
    pub fn with_rng<I>(
        roster: Vec<Candidate>,
        questions: I,
        config: SessionConfig,
        rng: R,
    ) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let roster = Roster::new(roster)?;
        let questions: Vec<String> = questions.into_iter().map(Into::into).collect();
        if config.challenges.is_empty() {
            return Err(SessionError::EmptyChallengePool);
        }
        let state = SessionState::new(roster, questions)?;

        tracing::info!(
            candidates = state.roster().len(),
            questions = state.questions().len(),
            scoring = ?config.scoring_mode,
            "session created"
        );

        Ok(Self { config, state, rng })
    }

    /// Apply one swipe.
    ///
    /// On error the session is left exactly as it was.
    pub fn submit_decision(&mut self, candidate: CandidateId, decision: Decision) -> Result<RoundStatus> {
        if let Err(reason) = self.check_accepts(candidate) {
            tracing::warn!(%candidate, %decision, %reason, "decision rejected");
            return Err(SessionError::InvalidState(reason));
        }

        let delta = self.config.scoring_mode.delta(decision.is_yes());
        let round_ends = self.state.remaining().len() == 1;

        // Resolve before mutating so a failed resolution leaves no trace.
        let outcome = if round_ends && self.state.is_last_question() {
            let mut final_scores = self.state.scores().clone();
            final_scores.apply(candidate, delta);
            Some(resolve_outcome(&final_scores, &self.config, &mut self.rng)?)
        } else {
            None
        };

        self.state.remove_remaining(candidate);
        let score_after = self.state.apply_score(candidate, delta);
        self.state.record(DecisionRecord {
            question_index: self.state.current_question_index(),
            candidate,
            decision,
            score_after,
        });
        tracing::debug!(%candidate, %decision, score_after, "decision applied");

        if let Some(outcome) = outcome {
            tracing::info!(
                winner = %self.name_of(outcome.winner),
                loser = %self.name_of(outcome.loser),
                challenge = %outcome.challenge,
                "game over"
            );
            self.state.finish(outcome);
            return Ok(RoundStatus::GameOver);
        }

        if round_ends {
            self.state.advance_round();
            let question_index = self.state.current_question_index();
            tracing::info!(question_index, "round advanced");
            return Ok(RoundStatus::RoundAdvanced { question_index });
        }

        Ok(RoundStatus::RoundContinues)
    }

    /// Apply one swipe, naming the candidate.
    pub fn submit_by_name(&mut self, name: &str, decision: Decision) -> Result<RoundStatus> {
        let Some(candidate) = self.state.roster().id_of(name) else {
            tracing::warn!(name, %decision, "decision for unknown candidate");
            return Err(SessionError::InvalidState(InvalidStateReason::UnknownCandidate(
                name.to_string(),
            )));
        };
        self.submit_decision(candidate, decision)
    }

    fn check_accepts(&self, candidate: CandidateId) -> std::result::Result<(), InvalidStateReason> {
        if self.state.is_game_over() {
            return Err(InvalidStateReason::GameOver);
        }
        if self.state.roster().get(candidate).is_none() {
            return Err(InvalidStateReason::UnknownCandidate(candidate.to_string()));
        }
        if !self.state.is_remaining(candidate) {
            return Err(InvalidStateReason::NotInRound(candidate));
        }
        Ok(())
    }
}

impl<R> Session<R> {
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Read-only view of the full state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Prompt for the current round, `None` once the game is over.
    #[must_use]
    pub fn current_question(&self) -> Option<&str> {
        self.state.current_question()
    }

    #[must_use]
    pub fn current_question_index(&self) -> usize {
        self.state.current_question_index()
    }

    /// 1-based round number for progress display.
    #[must_use]
    pub fn round_number(&self) -> usize {
        self.state.current_question_index().min(self.question_count().saturating_sub(1)) + 1
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.state.questions().len()
    }

    /// Candidates still to swipe this round, in roster order.
    pub fn remaining_candidates(&self) -> impl Iterator<Item = &Candidate> {
        self.state.remaining_candidates()
    }

    /// The candidate the UI should show on top of the stack.
    #[must_use]
    pub fn current_candidate(&self) -> Option<(CandidateId, &Candidate)> {
        let id = *self.state.remaining().first()?;
        self.state.roster().get(id).map(|c| (id, c))
    }

    #[must_use]
    pub fn candidate(&self, id: CandidateId) -> Option<&Candidate> {
        self.state.roster().get(id)
    }

    #[must_use]
    pub fn candidate_id(&self, name: &str) -> Option<CandidateId> {
        self.state.roster().id_of(name)
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreTally {
        self.state.scores()
    }

    /// Score by candidate name; `None` for unknown names.
    #[must_use]
    pub fn score_of(&self, name: &str) -> Option<i64> {
        self.candidate_id(name).map(|id| self.state.scores().get(id))
    }

    /// Candidates ordered by score, highest first; ties keep roster order.
    #[must_use]
    pub fn standings(&self) -> Vec<(CandidateId, i64)> {
        let mut standings: Vec<_> = self.state.scores().iter().collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1));
        standings
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.state.outcome()
    }

    /// Every accepted decision, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<DecisionRecord> {
        self.state.history()
    }

    fn name_of(&self, id: CandidateId) -> &str {
        self.state.roster().get(id).map_or("?", |c| c.name.as_str())
    }
}
