//! Root application component: loads settings, provides the list services,
//! ticks the clock.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use dioxus::prelude::*;
use gamelist_core::live::LiveGames;
use gamelist_ui::ListServices;
use gamelist_ui::components::{game_list, list_controls};

use crate::settings::Settings;

const GAME_LIST_CSS: Asset = asset!("/assets/game_list.css");

const TICK: Duration = Duration::from_secs(1);

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

/// Root `<App>` component.
#[component]
pub fn App() -> Element {
    let settings = use_hook(Settings::from_env);
    let loaded = use_hook(|| settings.load(now_ms()));

    let games = use_signal(|| loaded.games.clone());
    let opponent_style = use_signal(|| true);
    let disable_sort = use_signal(|| false);

    let services = use_context_provider(|| {
        ListServices::new(
            loaded.preferences.clone(),
            loaded.viewer.clone(),
            loaded.catalog.clone(),
            loaded.games.iter().collect::<LiveGames>(),
            now_ms(),
        )
    });

    use_future(move || async move {
        let mut now = services.now;
        loop {
            tokio::time::sleep(TICK).await;
            now.set(now_ms());
        }
    });

    let prefs_path = settings.prefs_path.clone();
    let save_preferences = move |_threshold: usize| {
        let Some(path) = prefs_path.as_deref() else {
            return;
        };
        if let Err(e) = services.preferences.read().save(path) {
            tracing::warn!(error = %e, "could not save preferences");
        }
    };

    rsx! {
        document::Stylesheet { href: GAME_LIST_CSS }
        div { class: "page",
            list_controls::ListControls {
                games,
                opponent_style,
                disable_sort,
                on_threshold: save_preferences,
            }
            game_list::GameList {
                list: games.read().clone(),
                empty_message: "No games to show.".to_string(),
                opponent_style: *opponent_style.read(),
                disable_sort: *disable_sort.read(),
            }
        }
    }
}
