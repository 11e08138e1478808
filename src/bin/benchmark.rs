use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use minimax_connect_four::ai::Difficulty;
use minimax_connect_four::config::AppConfig;
use minimax_connect_four::game::Player;
use minimax_connect_four::simulation::{run_benchmark, BatchSummary, BenchmarkReport};

/// Compare search cost with and without alpha-beta pruning.
#[derive(Parser)]
#[command(name = "benchmark", about = "Benchmark alpha-beta pruning on AI-vs-AI games")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games per batch
    #[arg(long)]
    games: Option<usize>,

    /// Override search depth
    #[arg(long)]
    depth: Option<u32>,

    /// Difficulty of player one: easy, medium or hard
    #[arg(long)]
    player_one: Option<Difficulty>,

    /// Difficulty of player two: easy, medium or hard
    #[arg(long)]
    player_two: Option<Difficulty>,

    /// Seed shared by both batches
    #[arg(long)]
    seed: Option<u64>,

    /// Override board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Print the report as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        if games == 0 {
            bail!("--games must be at least 1");
        }
        config.simulation.games = games;
    }
    if let Some(depth) = cli.depth {
        config.engine.depth = depth;
    }
    if let Some(difficulty) = cli.player_one {
        config.players.player_one = difficulty;
    }
    if let Some(difficulty) = cli.player_two {
        config.players.player_two = difficulty;
    }
    if cli.seed.is_some() {
        config.simulation.seed = cli.seed;
    }
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    config.validate().context("invalid configuration")?;

    let report = run_benchmark(&config).context("running benchmark")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("serializing report")?;
        println!("{json}");
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &BenchmarkReport) {
    println!("Search depth: {}", report.depth);
    print_batch("Stats Without Pruning", &report.without_pruning);
    print_batch("Stats With Pruning", &report.with_pruning);
    if let Some(reduction) = report.node_reduction() {
        println!();
        println!("Pruning visits {reduction:.2}x fewer nodes per searched move");
    }
}

fn print_batch(title: &str, summary: &BatchSummary) {
    println!();
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!(
        "Games: {}  {} wins: {}  {} wins: {}  Draws: {}  Avg length: {:.1}",
        summary.games,
        Player::One.name(),
        summary.player_one_wins,
        Player::Two.name(),
        summary.player_two_wins,
        summary.draws,
        summary.average_game_length,
    );
    println!(
        "{:<10} {:>10} {:>8} {:>14} {:>12}",
        "Player", "Searched", "Random", "Avg nodes", "Avg ms"
    );
    for player in [Player::One, Player::Two] {
        let stats = summary.summary_for(player);
        println!(
            "{:<10} {:>10} {:>8} {:>14.1} {:>12.3}",
            player.name(),
            stats.searched_moves,
            stats.random_moves,
            stats.average_nodes,
            stats.average_time_ms,
        );
    }
}
