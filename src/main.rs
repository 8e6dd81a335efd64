use anyhow::{anyhow, Result};
use clap::Parser;
use ssnake::game::GameConfig;
use ssnake::logging::{init_logging, DEFAULT_LOG_FILE};
use ssnake::modes::HumanMode;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "ssnake")]
#[command(version, about = "Snake on a wrap-around board")]
struct Cli {
    /// TOML file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Speed level (1 to 10)
    #[arg(long)]
    speed: Option<u32>,

    /// Initial snake length (3 to 30)
    #[arg(long)]
    length: Option<usize>,

    /// Start playing immediately instead of showing the menu
    #[arg(long)]
    skip_menu: bool,

    /// Where to write the log
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Log filter directives, e.g. "ssnake=debug" (defaults to RUST_LOG)
    #[arg(long)]
    log_filter: Option<String>,

    /// Disable logging entirely
    #[arg(long, conflicts_with_all = ["log_file", "log_filter"])]
    no_log: bool,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(speed) = self.speed {
            config.speed_level = speed;
        }
        if let Some(length) = self.length {
            config.initial_snake_length = length;
        }

        config
            .validate()
            .map_err(|e| anyhow!("Invalid game configuration: {}", e))?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.no_log {
        init_logging(&cli.log_file, cli.log_filter.as_deref())?;
    }

    let config = cli.game_config()?;
    info!(?config, "configuration loaded");

    let mut human_mode = HumanMode::new(config, cli.skip_menu);
    human_mode.run().await?;

    Ok(())
}
