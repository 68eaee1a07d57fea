use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::SessionConfig;
use grid_snake::logger::init_logger;
use grid_snake::modes::HumanMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Fixed-timestep snake in the terminal")]
struct Cli {
    /// JSON session config; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Starting snake length
    #[arg(long)]
    initial_length: Option<usize>,

    /// Seed for reproducible food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Append log lines to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn session_config(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)?,
            None => SessionConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width_units = width;
        }
        if let Some(height) = self.height {
            config.grid_height_units = height;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if let Some(length) = self.initial_length {
            config.initial_length = length;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logger(Some("grid_snake".to_string()), path)
            .with_context(|| format!("Failed to open log file {:?}", path))?;
    }

    let config = cli.session_config()?;
    let human_mode = HumanMode::new(config)?;
    let summary = human_mode.run().await?;

    println!("Final score: {} ({} ticks)", summary.score, summary.ticks);

    Ok(())
}
