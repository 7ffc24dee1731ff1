//! Winner, loser and challenge selection over a score tally.

use smallvec::SmallVec;

use super::Outcome;
use crate::core::{
    CandidateId, LoserTieBreak, RandomSource, Result, ScoreTally, SessionConfig, SessionError,
};

/// Candidates sharing an extreme score, in roster order.
pub type TieSet = SmallVec<[CandidateId; 4]>;

/// Resolve an exclusion so it never empties the pool.
///
/// A single-candidate tally keeps its only candidate even if excluded.
fn effective_exclusion(scores: &ScoreTally, excluding: Option<CandidateId>) -> Option<CandidateId> {
    excluding.filter(|&skip| scores.iter().any(|(id, _)| id != skip))
}

/// All candidates with exactly `target` score, in roster order.
#[must_use]
pub fn tie_set(scores: &ScoreTally, target: i64, excluding: Option<CandidateId>) -> TieSet {
    scores
        .iter()
        .filter(|&(id, score)| score == target && Some(id) != excluding)
        .map(|(id, _)| id)
        .collect()
}

/// Highest scorer. Ties go to the first candidate in roster order.
///
/// ```
/// use swipe_vote::core::{CandidateId, ScoreTally};
/// use swipe_vote::resolution::resolve_winner;
///
/// let scores = ScoreTally::from_scores([1, 3, 3]);
/// assert_eq!(resolve_winner(&scores), Ok(CandidateId::new(1)));
/// ```
pub fn resolve_winner(scores: &ScoreTally) -> Result<CandidateId> {
    let max = scores
        .iter()
        .map(|(_, score)| score)
        .max()
        .ok_or(SessionError::NoWinner)?;

    tie_set(scores, max, None)
        .first()
        .copied()
        .ok_or(SessionError::NoWinner)
}

/// Lowest scorer, optionally leaving one candidate (normally the winner) out.
///
/// With [`LoserTieBreak::Random`] the loser is drawn uniformly from the tie
/// set; `rng` is only consulted when more than one candidate is tied.
pub fn resolve_loser<R: RandomSource + ?Sized>(
    scores: &ScoreTally,
    excluding: Option<CandidateId>,
    tie_break: LoserTieBreak,
    rng: &mut R,
) -> Result<CandidateId> {
    let excluding = effective_exclusion(scores, excluding);

    let min = scores
        .iter()
        .filter(|&(id, _)| Some(id) != excluding)
        .map(|(_, score)| score)
        .min()
        .ok_or(SessionError::NoLoser)?;

    let ties = tie_set(scores, min, excluding);
    tracing::debug!(min, tied = ties.len(), ?tie_break, "resolving loser");

    let pick = match (tie_break, ties.len()) {
        (_, 0) => return Err(SessionError::NoLoser),
        (LoserTieBreak::FirstInRoster, _) | (_, 1) => 0,
        (LoserTieBreak::Random, n) => rng.pick_index(n),
    };

    ties.get(pick).copied().ok_or(SessionError::NoLoser)
}

/// Draw a challenge for the loser.
pub fn assign_challenge<R: RandomSource + ?Sized>(
    loser: CandidateId,
    challenge_pool: &[String],
    rng: &mut R,
) -> Result<(CandidateId, String)> {
    let pick = match challenge_pool.len() {
        0 => return Err(SessionError::EmptyChallengePool),
        1 => 0,
        n => rng.pick_index(n),
    };

    challenge_pool
        .get(pick)
        .map(|challenge| (loser, challenge.clone()))
        .ok_or(SessionError::EmptyChallengePool)
}

/// Full resolution: winner, then loser, then the loser's challenge.
pub fn resolve_outcome<R: RandomSource + ?Sized>(
    scores: &ScoreTally,
    config: &SessionConfig,
    rng: &mut R,
) -> Result<Outcome> {
    let winner = resolve_winner(scores)?;
    let excluding = config.exclude_winner_from_loser.then_some(winner);
    let loser = resolve_loser(scores, excluding, config.loser_tie_break, rng)?;
    let (loser, challenge) = assign_challenge(loser, &config.challenges, rng)?;

    Ok(Outcome {
        winner,
        loser,
        challenge,
        winning_score: scores.get(winner),
        losing_score: scores.get(loser),
    })
}
