use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use isolation_agent::config::AppConfig;
use isolation_agent::tournament::run_tournament;

/// Play a tournament between two configured Isolation agents.
#[derive(Parser)]
#[command(name = "isolation-agent", about = "Pit two Isolation agents against each other")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "isolation.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(long)]
    games: Option<usize>,

    /// Override the per-move time limit in milliseconds
    #[arg(long)]
    time_limit: Option<f64>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(games) = cli.games {
        config.tournament.games = games;
    }
    if let Some(time_limit) = cli.time_limit {
        config.tournament.time_limit_ms = time_limit;
    }

    config.validate().context("validating config")?;

    let player_one = config.player_one.clone();
    let player_two = config.player_two.clone();

    let result = run_tournament(
        &config.tournament,
        &|seed| player_one.build(seed),
        &|seed| player_two.build(seed),
    );

    println!("{:?} ({:?}) wins: {}", player_one.kind, player_one.evaluator, result.first_wins);
    println!("{:?} ({:?}) wins: {}", player_two.kind, player_two.evaluator, result.second_wins);
    println!("Forfeits:      {}", result.forfeits);

    Ok(())
}
