//! Root application component for the web frontend.
//!
//! Hosts a demo game list over generated games. The list threshold is kept
//! in `localStorage` so it survives a page reload; clocks tick once a second.

use dioxus::prelude::*;
use gamelist_core::demo::sample_games;
use gamelist_core::i18n::Catalog;
use gamelist_core::live::LiveGames;
use gamelist_core::prefs::{GAME_LIST_THRESHOLD, PreferenceStore};
use gamelist_core::user::Viewer;
use gamelist_ui::ListServices;
use gamelist_ui::components::{game_list, list_controls};

const GAME_LIST_CSS: Asset = asset!("/assets/game_list.css");

/// Interval between clock refreshes.
const TICK_MS: u32 = 1_000;

/// Number of generated games shown on first load.
const INITIAL_GAMES: usize = 14;

// ---------------------------------------------------------------------------
// Browser helpers
// ---------------------------------------------------------------------------

/// Epoch milliseconds from the page's performance timer.
fn now_ms() -> i64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| (p.time_origin() + p.now()) as i64)
        .unwrap_or_default()
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Preferences stored by a previous visit, over the built-in defaults.
fn load_preferences() -> PreferenceStore {
    let mut prefs = PreferenceStore::new();
    if let Some(value) = local_storage().and_then(|s| s.get_item(GAME_LIST_THRESHOLD).ok()?) {
        // Storage only holds strings; numeric strings are accepted as-is.
        prefs.set(GAME_LIST_THRESHOLD, value);
    }
    prefs
}

fn save_threshold(threshold: usize) {
    if let Some(storage) = local_storage()
        && storage
            .set_item(GAME_LIST_THRESHOLD, &threshold.to_string())
            .is_err()
    {
        tracing::warn!(key = GAME_LIST_THRESHOLD, "could not persist preference");
    }
}

fn demo_viewer() -> Viewer {
    Viewer {
        id: 1,
        username: "you".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Root component
// ---------------------------------------------------------------------------

#[component]
pub fn App() -> Element {
    let viewer = demo_viewer();
    let games = use_signal(|| sample_games(&viewer, INITIAL_GAMES, now_ms()));
    let opponent_style = use_signal(|| true);
    let disable_sort = use_signal(|| false);

    let services = use_context_provider(|| {
        ListServices::new(
            load_preferences(),
            Some(viewer.clone()),
            Catalog::default(),
            games.read().iter().collect::<LiveGames>(),
            now_ms(),
        )
    });

    // Keep countdowns moving.
    use_future(move || async move {
        let mut now = services.now;
        loop {
            gloo_timers::future::TimeoutFuture::new(TICK_MS).await;
            now.set(now_ms());
        }
    });

    rsx! {
        document::Stylesheet { href: GAME_LIST_CSS }
        div { class: "page",
            h1 { "Active games" }
            list_controls::ListControls {
                games,
                opponent_style,
                disable_sort,
                on_threshold: move |threshold| save_threshold(threshold),
            }
            game_list::GameList {
                list: games.read().clone(),
                empty_message: "You have no active games.".to_string(),
                opponent_style: *opponent_style.read(),
                disable_sort: *disable_sort.read(),
            }
        }
    }
}
