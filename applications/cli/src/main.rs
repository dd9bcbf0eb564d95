/// Reel - interactive video catalogue and playlist player
use clap::Parser;
use reel_cli::{repl, CliConfig, Console, OutputFormat};
use reel_player::{SeededRandom, VideoPlayer};
use std::{io, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "reel")]
#[command(about = "Interactive video catalogue and playlist player", long_about = None)]
struct Cli {
    /// Catalogue file, one `title | id | tags` record per line
    #[arg(short = 'C', long)]
    catalogue: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write one JSON object per outcome instead of plain text
    #[arg(long)]
    json: bool,

    /// Seed PLAY_RANDOM for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.catalogue {
        config.catalogue_path = Some(path);
    }
    if cli.json {
        config.output = OutputFormat::Json;
    }
    config.validate()?;

    // Initialize tracing (stderr, so stdout carries only status text)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let catalogue = config.load_catalogue()?;
    tracing::debug!(videos = catalogue.len(), "starting session");

    let mut console = Console::new(io::stdout().lock(), config.output);
    let input = io::stdin().lock();

    match cli.seed {
        Some(seed) => {
            tracing::info!(seed, "seeded random selection");
            let mut player = VideoPlayer::new(catalogue, SeededRandom::new(seed));
            repl::run(&mut player, input, &mut console, &config.prompt)?;
        }
        None => {
            let mut player = VideoPlayer::with_catalogue(catalogue);
            repl::run(&mut player, input, &mut console, &config.prompt)?;
        }
    }

    Ok(())
}
