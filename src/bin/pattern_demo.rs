//! pattern-demo: play seeded rounds of the pattern game in the terminal.
//!
//! Usage:
//!   pattern-demo                          # One round, seed 42
//!   pattern-demo --rounds 3 --mistakes 2  # Three rounds, two misses each
//!   pattern-demo --config game.json       # Custom palette / phrases
//!   pattern-demo --json                   # Print the final snapshot

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use pattern_game::{EngineConfig, FeedbackEvent, FeedbackSink, PatternGameEngine};

#[derive(Parser, Debug)]
#[command(
    name = "pattern-demo",
    about = "Auto-play the clothing pattern game and print the spoken feedback"
)]
struct Args {
    /// RNG seed for patterns and phrases
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Number of rounds to play
    #[arg(short, long, default_value_t = 1)]
    rounds: u32,

    /// Deliberate wrong placements per round
    #[arg(short, long, default_value_t = 0)]
    mistakes: u32,

    /// JSON engine configuration file
    #[arg(long)]
    config: Option<String>,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Log every selection and placement
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match &args.config {
        Some(path) => EngineConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => EngineConfig::default(),
    };
    let mut engine = PatternGameEngine::new(config.with_seed(args.seed))?;

    let mut speak = |event: &FeedbackEvent| {
        let params = event.tone.speech_params();
        info!(
            "say {:?} (pitch {:.1}, rate {:.1}): {}",
            event.kind, params.pitch, params.rate, event.phrase
        );
    };

    for round in 0..args.rounds {
        if round > 0 {
            engine.reset();
        }
        play_round(&mut engine, args.mistakes, &mut speak);

        let stats = engine.current_stats();
        info!(
            "Round {} summary: {} correct, {} failed, accuracy {:.0}%",
            engine.round_number(),
            stats.correct_count,
            stats.fail_count,
            stats.accuracy() * 100.0
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
    }

    Ok(())
}

/// Fill every slot in order, spending `mistakes` wrong attempts first.
fn play_round(engine: &mut PatternGameEngine, mistakes: u32, sink: &mut dyn FeedbackSink) {
    let slots = engine.board().len();
    let mut mistakes_left = mistakes;

    for slot in 0..slots {
        let pattern = engine.pattern().clone();
        let Some(target) = pattern.get(slot) else {
            continue;
        };

        if mistakes_left > 0 && slots > 1 {
            if let Some(wrong) = pattern.get((slot + 1) % slots) {
                engine.select_color(wrong);
                engine.attempt_placement(slot).dispatch(sink);
                mistakes_left -= 1;
            }
        }

        engine.select_color(target);
        engine.attempt_placement(slot).dispatch(sink);
    }
}
