use std::fs::File;
use std::sync::Arc;

use clap::Parser;
use gamelist_core::i18n::Catalog;
use gamelist_core::plan::GameListOptions;
use gamelist_core::prefs::{GAME_LIST_THRESHOLD, PreferenceStore};
use gamelist_core::user::Viewer;
use tracing_subscriber::EnvFilter;

mod app;
mod tui;

#[derive(Parser)]
#[command(name = "gamelist")]
#[command(about = "Browse a sortable list of games in the terminal", long_about = None)]
struct Cli {
    /// JSON array of games (default: generated demo games)
    #[arg(short, long)]
    games: Option<String>,

    /// Player id of the logged-in user
    #[arg(short, long)]
    viewer: Option<u64>,

    /// Username shown for the viewer in demo games
    #[arg(long, default_value = "you")]
    username: String,

    /// JSON preferences file
    #[arg(short, long)]
    prefs: Option<String>,

    /// Override the game-list-threshold preference
    #[arg(short, long)]
    threshold: Option<u64>,

    /// JSON label → translation map
    #[arg(long)]
    catalog: Option<String>,

    /// Show opponent and clock columns relative to the viewer
    #[arg(short, long)]
    opponent_style: bool,

    /// Keep games in input order and make the header inert
    #[arg(long)]
    disable_sort: bool,

    /// Message shown when there are no games
    #[arg(long, default_value = "No games to show.")]
    empty_message: String,

    /// Number of demo games when no games file is given
    #[arg(long, default_value_t = 24)]
    demo_count: usize,

    /// Append logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    log_file: Option<String>,
}

fn init_logging(path: &str) -> std::io::Result<()> {
    let file = File::options().create(true).append(true).open(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file
        && let Err(e) = init_logging(path)
    {
        eprintln!("Error: could not open log file {}: {}", path, e);
    }

    let mut preferences = match &cli.prefs {
        Some(path) => match PreferenceStore::load(path) {
            Ok(prefs) => prefs,
            Err(e) => {
                eprintln!("Error: {}", e);
                return;
            }
        },
        None => PreferenceStore::new(),
    };
    if let Some(threshold) = cli.threshold {
        preferences.set(GAME_LIST_THRESHOLD, threshold);
    }

    let catalog = match &cli.catalog {
        Some(path) => match Catalog::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Error: {}", e);
                return;
            }
        },
        None => Catalog::default(),
    };

    let viewer = cli.viewer.map(|id| Viewer {
        id,
        username: cli.username.clone(),
    });

    let source = match cli.games {
        Some(path) => app::GameSource::File(path),
        None => app::GameSource::Demo {
            viewer: viewer.clone().unwrap_or_else(|| Viewer {
                id: 1,
                username: cli.username.clone(),
            }),
            count: cli.demo_count,
        },
    };

    let startup = app::Startup {
        source,
        options: GameListOptions {
            empty_message: Some(cli.empty_message),
            opponent_style: cli.opponent_style,
            disable_sort: cli.disable_sort,
        },
        preferences,
        catalog,
        viewer,
    };

    if let Err(e) = app::start(startup).await {
        eprintln!("Error: {}", e);
    }
}
