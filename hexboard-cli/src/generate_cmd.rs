//! Generate command - search for balanced boards and display them
//!
//! ## Architecture
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_generator(), report()
//! - Level 3: rendering (see render.rs)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};

use hexboard_core::{BoardGenerator, Distribution, Generation, GeneratorConfig, Profile, ScoreWeights};

use crate::render;

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct GenerateArgs {
    /// Profile: base, five-six-player or custom
    #[arg(long, short, default_value = "base")]
    pub profile: String,

    /// Custom distribution JSON file (overrides --profile)
    #[arg(long, value_name = "FILE")]
    pub distribution: Option<PathBuf>,

    /// Maximum candidates sampled per board
    #[arg(long, default_value = "1000")]
    pub attempts: usize,

    /// Stop searching once a board scores below this
    #[arg(long, default_value = "50.0")]
    pub threshold: f64,

    /// Weight of the terrain clustering penalty
    #[arg(long, default_value = "10.0")]
    pub cluster_weight: f64,

    /// Weight of the resource balance penalty
    #[arg(long, default_value = "5.0")]
    pub balance_weight: f64,

    /// Weight of the pip adjacency penalty
    #[arg(long, default_value = "3.0")]
    pub pip_weight: f64,

    /// Number of boards to generate
    #[arg(long, short = 'n', default_value = "1")]
    pub count: usize,

    /// How to display each board
    #[arg(long, value_enum, default_value_t = View::Both)]
    pub view: View,

    /// Fail instead of printing an unchecked board when the search finds nothing valid
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum View {
    Visual,
    List,
    Both,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run generate command
pub fn run(args: GenerateArgs, seed: Option<u64>) -> Result<()> {
    let generator = build_generator(&args, seed)?;

    tracing::info!(
        "Generating {} board(s): attempts={}, threshold={}",
        args.count,
        args.attempts,
        args.threshold
    );

    let results = generator.generate_many(args.count);

    if args.strict {
        if let Some(failed) = results.iter().find(|r| !r.is_validated()) {
            anyhow::bail!(
                "No board satisfied the hard constraints within {} attempts",
                failed.attempts()
            );
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for (i, result) in results.iter().enumerate() {
            report(i + 1, result, &args);
        }
    }

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_generator(args: &GenerateArgs, seed: Option<u64>) -> Result<BoardGenerator> {
    let distribution = match &args.distribution {
        Some(path) => Distribution::load(path)
            .with_context(|| format!("Failed to load distribution: {}", path.display()))?,
        None => {
            let profile: Profile = args.profile.parse()?;
            profile.distribution()
        }
    };

    let weights = ScoreWeights::new(args.cluster_weight, args.balance_weight, args.pip_weight)?;
    let mut config = GeneratorConfig::default()
        .with_max_attempts(args.attempts)
        .with_good_enough(args.threshold)
        .with_weights(weights);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    Ok(BoardGenerator::new(distribution, config))
}

fn report(index: usize, result: &Generation, args: &GenerateArgs) {
    if args.count > 1 {
        println!("\nBoard {} of {}", index, args.count);
    }

    match result.score() {
        Some(score) => println!(
            "Score {:.2} (cluster {:.0}, balance {:.2}, pip adjacency {:.1}) after {} attempts",
            score.total, score.cluster, score.balance, score.pip_adjacency,
            result.attempts()
        ),
        None => println!(
            "WARNING: no valid board within {} attempts; showing an unchecked board",
            result.attempts()
        ),
    }

    let board = result.board();
    if matches!(args.view, View::Visual | View::Both) {
        print!("{}", render::visual(board));
    }
    if matches!(args.view, View::List | View::Both) {
        print!("{}", render::list(board));
    }
}
