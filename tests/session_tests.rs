//! Session lifecycle tests.
//!
//! These tests drive full games through the public API the way a UI would:
//! one decision per swipe, re-reading state after each.

use swipe_vote::{
    Candidate, CandidateId, Decision, InvalidStateReason, LoserTieBreak, RandomSource,
    RoundStatus, ScoringMode, Session, SessionConfig, SessionError, SessionPhase,
};

/// Random source that replays a fixed list of picks.
struct Scripted {
    picks: Vec<usize>,
    calls: usize,
}

impl Scripted {
    fn new(picks: &[usize]) -> Self {
        Self { picks: picks.to_vec(), calls: 0 }
    }
}

impl RandomSource for Scripted {
    fn pick_index(&mut self, len: usize) -> usize {
        let pick = self.picks.get(self.calls).copied().unwrap_or(0);
        self.calls += 1;
        pick % len
    }
}

fn roster(names: &[&str]) -> Vec<Candidate> {
    names.iter().map(|n| Candidate::new(*n)).collect()
}

fn remaining_names<R>(session: &Session<R>) -> Vec<String> {
    session.remaining_candidates().map(|c| c.name.clone()).collect()
}

/// Three friends, two questions, A always yes and B/C always no.
#[test]
fn test_three_friends_two_questions() {
    let mut session =
        Session::new(roster(&["A", "B", "C"]), ["Q1", "Q2"], SessionConfig::default()).unwrap();

    for round in 0..2 {
        assert_eq!(session.current_question_index(), round);
        assert_eq!(session.submit_by_name("A", Decision::Yes), Ok(RoundStatus::RoundContinues));
        assert_eq!(session.submit_by_name("B", Decision::No), Ok(RoundStatus::RoundContinues));
        let status = session.submit_by_name("C", Decision::No).unwrap();
        if round == 0 {
            assert_eq!(status, RoundStatus::RoundAdvanced { question_index: 1 });
        } else {
            assert_eq!(status, RoundStatus::GameOver);
        }
    }

    assert_eq!(session.score_of("A"), Some(2));
    assert_eq!(session.score_of("B"), Some(0));
    assert_eq!(session.score_of("C"), Some(0));

    let outcome = session.outcome().unwrap();
    assert_eq!(session.candidate(outcome.winner).unwrap().name, "A");
    let loser = &session.candidate(outcome.loser).unwrap().name;
    assert!(loser == "B" || loser == "C", "loser was {loser}");
    assert!(session.config().challenges.contains(&outcome.challenge));
}

/// The scripted source decides exactly which tied candidate loses.
#[test]
fn test_injected_source_picks_loser_and_challenge() {
    let config = SessionConfig::default().with_challenges(["Sing", "Dance", "Juggle"]);
    let mut session =
        Session::with_rng(roster(&["A", "B", "C"]), ["Q1"], config, Scripted::new(&[1, 2])).unwrap();

    session.submit_by_name("A", Decision::Yes).unwrap();
    session.submit_by_name("B", Decision::No).unwrap();
    session.submit_by_name("C", Decision::No).unwrap();

    let outcome = session.outcome().unwrap();
    assert_eq!(outcome.winner, CandidateId::new(0));
    // Tie set {B, C}, pick 1 -> C
    assert_eq!(outcome.loser, CandidateId::new(2));
    assert_eq!(outcome.challenge, "Juggle");
}

/// Round advance refills the full roster in roster order.
#[test]
fn test_round_advance_resets_in_roster_order() {
    let mut session =
        Session::new(roster(&["A", "B"]), ["Q1", "Q2", "Q3"], SessionConfig::default()).unwrap();

    // Swipe out of roster order
    session.submit_by_name("B", Decision::Yes).unwrap();
    let status = session.submit_by_name("A", Decision::No).unwrap();

    assert_eq!(status, RoundStatus::RoundAdvanced { question_index: 1 });
    assert_eq!(session.current_question_index(), 1);
    assert_eq!(session.current_question(), Some("Q2"));
    assert_eq!(remaining_names(&session), vec!["A", "B"]);
}

/// A second decision for the same candidate in a round is rejected.
#[test]
fn test_duplicate_decision_rejected() {
    let mut session =
        Session::new(roster(&["A", "B", "C"]), ["Q1"], SessionConfig::default()).unwrap();

    session.submit_by_name("A", Decision::Yes).unwrap();
    let before_scores = session.scores().clone();
    let before_remaining = remaining_names(&session);
    let before_history = session.history().len();

    let err = session.submit_by_name("A", Decision::Yes).unwrap_err();
    assert_eq!(
        err,
        SessionError::InvalidState(InvalidStateReason::NotInRound(CandidateId::new(0)))
    );

    assert_eq!(session.scores(), &before_scores);
    assert_eq!(remaining_names(&session), before_remaining);
    assert_eq!(session.history().len(), before_history);
    assert_eq!(session.current_question_index(), 0);
}

/// Unknown names are rejected without touching state.
#[test]
fn test_unknown_candidate_rejected() {
    let mut session = Session::new(roster(&["A"]), ["Q1"], SessionConfig::default()).unwrap();

    let err = session.submit_by_name("Zed", Decision::Yes).unwrap_err();
    assert_eq!(
        err,
        SessionError::InvalidState(InvalidStateReason::UnknownCandidate("Zed".to_string()))
    );
    assert_eq!(remaining_names(&session), vec!["A"]);
}

/// After game over every decision is rejected and the outcome is frozen.
#[test]
fn test_game_over_is_terminal() {
    let mut session =
        Session::new(roster(&["A", "B"]), ["Q1"], SessionConfig::default()).unwrap();

    session.submit_by_name("A", Decision::Yes).unwrap();
    assert_eq!(session.submit_by_name("B", Decision::No), Ok(RoundStatus::GameOver));
    assert_eq!(session.phase(), SessionPhase::GameOver);

    let outcome = session.outcome().cloned().unwrap();
    let scores = session.scores().clone();

    for name in ["A", "B"] {
        for decision in [Decision::Yes, Decision::No] {
            let err = session.submit_by_name(name, decision).unwrap_err();
            assert_eq!(err, SessionError::InvalidState(InvalidStateReason::GameOver));
        }
    }

    assert_eq!(session.outcome(), Some(&outcome));
    assert_eq!(session.scores(), &scores);
    assert_eq!(session.current_question(), None);
    assert_eq!(session.remaining_candidates().count(), 0);
}

/// Creation rejects empty inputs.
#[test]
fn test_creation_validation() {
    let err = Session::new(Vec::new(), ["Q1"], SessionConfig::default()).unwrap_err();
    assert!(matches!(err, SessionError::EmptySessionData(_)));

    let err = Session::new(roster(&["A"]), Vec::<String>::new(), SessionConfig::default()).unwrap_err();
    assert!(matches!(err, SessionError::EmptySessionData(_)));

    let err = Session::new(roster(&["A", "A"]), ["Q1"], SessionConfig::default()).unwrap_err();
    assert_eq!(err, SessionError::DuplicateCandidate("A".to_string()));
}

/// Decrement mode lets scores go negative and the loser is the most-rejected.
#[test]
fn test_decrement_mode_full_game() {
    let config = SessionConfig::default()
        .with_scoring_mode(ScoringMode::YesIncrementNoDecrement)
        .with_loser_tie_break(LoserTieBreak::FirstInRoster);
    let mut session = Session::new(roster(&["A", "B", "C"]), ["Q1", "Q2"], config).unwrap();

    let plan = [
        ("A", Decision::Yes),
        ("B", Decision::No),
        ("C", Decision::Yes),
        ("A", Decision::Yes),
        ("B", Decision::No),
        ("C", Decision::No),
    ];
    for (name, decision) in plan {
        session.submit_by_name(name, decision).unwrap();
    }

    assert_eq!(session.score_of("A"), Some(2));
    assert_eq!(session.score_of("B"), Some(-2));
    assert_eq!(session.score_of("C"), Some(0));

    let outcome = session.outcome().unwrap();
    assert_eq!(outcome.winner, CandidateId::new(0));
    assert_eq!(outcome.loser, CandidateId::new(1));
    assert_eq!(outcome.winning_score, 2);
    assert_eq!(outcome.losing_score, -2);
}

/// Same seed and same swipes give the same outcome.
#[test]
fn test_seeded_sessions_are_reproducible() {
    let play = |seed: u64| {
        let config = SessionConfig::default().with_seed(seed);
        let mut session =
            Session::new(roster(&["A", "B", "C", "D"]), ["Q1", "Q2"], config).unwrap();
        while let Some(id) = session.current_candidate().map(|(id, _)| id) {
            session.submit_decision(id, Decision::No).unwrap();
        }
        session.outcome().cloned().unwrap()
    };

    assert_eq!(play(9), play(9));
}

/// History records every accepted decision with its question.
#[test]
fn test_history_tracks_decisions() {
    let mut session =
        Session::new(roster(&["A", "B"]), ["Q1", "Q2"], SessionConfig::default()).unwrap();

    session.submit_by_name("A", Decision::Yes).unwrap();
    session.submit_by_name("B", Decision::No).unwrap();
    session.submit_by_name("A", Decision::Yes).unwrap();

    let history = session.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].question_index, 0);
    assert_eq!(history[2].question_index, 1);
    assert_eq!(history[2].candidate, CandidateId::new(0));
    assert_eq!(history[2].score_after, 2);
}

/// Cloning a session snapshots it; the clone diverges independently.
#[test]
fn test_clone_is_independent() {
    let mut session =
        Session::new(roster(&["A", "B"]), ["Q1"], SessionConfig::default()).unwrap();
    session.submit_by_name("A", Decision::Yes).unwrap();

    let snapshot = session.clone();
    session.submit_by_name("B", Decision::Yes).unwrap();

    assert!(session.is_game_over());
    assert!(!snapshot.is_game_over());
    assert_eq!(snapshot.history().len(), 1);
    assert_eq!(remaining_names(&snapshot), vec!["B"]);
}
