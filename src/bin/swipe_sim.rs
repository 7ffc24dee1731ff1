//! Headless simulator: plays seeded sessions with random swipes and reports
//! how often each candidate wins and loses.
//!
//! ```text
//! swipe-sim --games 1000 --seed 7 --yes-probability 0.4 --scoring decrement
//! RUST_LOG=swipe_vote=debug swipe-sim --games 1
//! ```

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use swipe_vote::{
    presets, CandidateMap, Decision, GameRng, LoserTieBreak, Result, ScoringMode, Session,
    SessionConfig,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scoring {
    /// "No" leaves the score unchanged
    YesOnly,
    /// "No" costs a point
    Decrement,
}

impl From<Scoring> for ScoringMode {
    fn from(value: Scoring) -> Self {
        match value {
            Scoring::YesOnly => ScoringMode::YesOnlyIncrement,
            Scoring::Decrement => ScoringMode::YesIncrementNoDecrement,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "swipe-sim")]
#[command(about = "Simulate swipe-vote sessions with random decisions", long_about = None)]
struct Cli {
    /// Number of sessions to play
    #[arg(long, default_value_t = 1000)]
    games: usize,

    /// Master seed; every session forks its own stream from it
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Chance that any single swipe is "yes"
    #[arg(long, default_value_t = 0.5)]
    yes_probability: f64,

    #[arg(long, value_enum, default_value_t = Scoring::YesOnly)]
    scoring: Scoring,

    /// Pick the first tied lowest scorer instead of a random one
    #[arg(long)]
    first_loser: bool,
}

#[derive(Clone, Copy, Debug, Default)]
struct Counts {
    wins: usize,
    losses: usize,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(env_filter)
        .init();
}

fn run(cli: &Cli) -> Result<CandidateMap<Counts>> {
    let roster = presets::demo_roster();
    let mut counts = CandidateMap::with_value(roster.len(), Counts::default());
    let mut master = GameRng::new(cli.seed);

    let tie_break = if cli.first_loser {
        LoserTieBreak::FirstInRoster
    } else {
        LoserTieBreak::Random
    };

    for game in 0..cli.games {
        let game_rng = master.fork();
        let mut swipes = game_rng.for_context("decisions");
        let config = SessionConfig::default()
            .with_scoring_mode(cli.scoring.into())
            .with_loser_tie_break(tie_break)
            .with_seed(game_rng.seed());

        let mut session = Session::new(roster.clone(), presets::default_questions(), config)?;
        while let Some(candidate) = session.current_candidate().map(|(id, _)| id) {
            let decision = Decision::from_is_yes(swipes.gen_bool(cli.yes_probability));
            session.submit_decision(candidate, decision)?;
        }

        if let Some(outcome) = session.outcome() {
            counts[outcome.winner].wins += 1;
            counts[outcome.loser].losses += 1;
            tracing::debug!(game, winner = %outcome.winner, loser = %outcome.loser, "session finished");
        }
    }

    Ok(counts)
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let counts = match run(&cli) {
        Ok(counts) => counts,
        Err(e) => {
            tracing::error!(error = %e, "simulation failed");
            return ExitCode::FAILURE;
        }
    };

    println!("{:<12} {:>8} {:>8}", "candidate", "wins", "losses");
    for (id, c) in counts.iter() {
        let name = presets::DEMO_FRIENDS.get(id.index()).copied().unwrap_or("?");
        println!("{:<12} {:>8} {:>8}", name, c.wins, c.losses);
    }

    ExitCode::SUCCESS
}
