//! Terminal orchestrator: loads the list inputs and drives the TUI.
//!
//! This module owns the event loop; everything it renders comes from
//! [`crate::tui::ListContext`].

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use gamelist_core::demo::sample_games;
use gamelist_core::error::DataError;
use gamelist_core::i18n::Catalog;
use gamelist_core::live::LiveGames;
use gamelist_core::plan::GameListOptions;
use gamelist_core::prefs::PreferenceStore;
use gamelist_core::record::{GameRecord, load_games};
use gamelist_core::user::Viewer;

use crate::tui::{ListContext, Tui, UserIntent};

const INPUT_POLL: Duration = Duration::from_millis(50);

/// Where the games come from.
pub enum GameSource {
    File(String),
    Demo { viewer: Viewer, count: usize },
}

impl GameSource {
    fn load(&self) -> Result<Vec<GameRecord>, DataError> {
        match self {
            GameSource::File(path) => load_games(path),
            GameSource::Demo { viewer, count } => Ok(sample_games(viewer, *count, now_ms())),
        }
    }
}

pub struct Startup {
    pub source: GameSource,
    pub options: GameListOptions,
    pub preferences: PreferenceStore,
    pub catalog: Catalog,
    pub viewer: Option<Viewer>,
}

pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

/// Load the games, then run the TUI until the user quits.
pub async fn start(startup: Startup) -> Result<(), Box<dyn std::error::Error>> {
    let games = startup.source.load()?;
    tracing::info!(games = games.len(), "loaded game list");

    let mut ctx = ListContext {
        live: games.iter().collect::<LiveGames>(),
        games,
        options: startup.options,
        preferences: startup.preferences,
        catalog: startup.catalog,
        viewer: startup.viewer.map(|v| v.id),
    };

    let mut tui = Tui::setup()?;
    let result = run_event_loop(&mut tui, &mut ctx, &startup.source).await;
    tui.teardown()?;
    result
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

async fn run_event_loop(
    tui: &mut Tui,
    ctx: &mut ListContext,
    source: &GameSource,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tui.render(ctx, now_ms())?;

        tokio::time::sleep(INPUT_POLL).await;

        match tui.poll_and_handle_input()? {
            UserIntent::Quit => break,
            UserIntent::Reload => match source.load() {
                Ok(games) => {
                    tracing::info!(games = games.len(), "reloaded game list");
                    ctx.replace_games(games);
                }
                Err(e) => tracing::error!(error = %e, "reload failed, keeping current list"),
            },
            UserIntent::None => {}
        }
    }

    Ok(())
}
