use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use minimax_connect_four::ai::{Agent, Difficulty, HumanAgent};
use minimax_connect_four::config::AppConfig;
use minimax_connect_four::game::{GameResult, GameState, Player};
use minimax_connect_four::simulation::{build_agents, play_game, GameRecord};

/// Who sits at each side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Two minimax players
    Simulate,
    /// You as player one against a minimax player two
    Ai,
    /// Two people taking turns at the terminal
    Multiplayer,
}

/// Play Connect Four against the minimax engine, or watch it play itself.
#[derive(Parser)]
#[command(name = "connect4", about = "Play or simulate a game of Connect Four")]
struct Cli {
    /// Game mode
    #[arg(long, value_enum, default_value_t = Mode::Simulate)]
    mode: Mode,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override search depth
    #[arg(long)]
    depth: Option<u32>,

    /// Disable alpha-beta pruning
    #[arg(long)]
    no_pruning: bool,

    /// Difficulty of player one: easy, medium or hard
    #[arg(long)]
    player_one: Option<Difficulty>,

    /// Difficulty of player two: easy, medium or hard
    #[arg(long)]
    player_two: Option<Difficulty>,

    /// Seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Override board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns
    #[arg(long)]
    cols: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.engine.depth = depth;
    }
    if cli.no_pruning {
        config.engine.pruning = false;
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

    let state = GameState::with_board(config.board.build()?)?;
    let (minimax_one, minimax_two) = build_agents(&config, 0);
    let mut one: Box<dyn Agent> = match cli.mode {
        Mode::Simulate => Box::new(minimax_one),
        Mode::Ai => Box::new(HumanAgent::stdin("You")),
        Mode::Multiplayer => Box::new(HumanAgent::stdin("Red")),
    };
    let mut two: Box<dyn Agent> = match cli.mode {
        Mode::Simulate | Mode::Ai => Box::new(minimax_two),
        Mode::Multiplayer => Box::new(HumanAgent::stdin("Yellow")),
    };
    println!("{} vs {}", one.name(), two.name());

    let record = play_game(state, one.as_mut(), two.as_mut()).context("playing game")?;

    print_report(&record, cli.mode);
    Ok(())
}

fn is_minimax(mode: Mode, player: Player) -> bool {
    match mode {
        Mode::Simulate => true,
        Mode::Ai => player == Player::Two,
        Mode::Multiplayer => false,
    }
}

fn print_report(record: &GameRecord, mode: Mode) {
    println!();
    println!("{}", record.final_board);
    println!();

    match record.result {
        GameResult::Win(player) => {
            println!("{} wins after {} moves", player.name(), record.game_length())
        }
        GameResult::Draw => println!("Draw after {} moves", record.game_length()),
        GameResult::InProgress => println!("Game unfinished"),
    }

    for player in [Player::One, Player::Two].into_iter().filter(|&p| is_minimax(mode, p)) {
        let metrics = record.metrics_for(player);
        println!(
            "{}: {} moves ({} searched), avg {:.1} nodes, avg {:.3} ms",
            player.name(),
            metrics.moves().len(),
            metrics.searched_count(),
            metrics.average_nodes(),
            metrics.average_time().as_secs_f64() * 1000.0,
        );
    }
}
