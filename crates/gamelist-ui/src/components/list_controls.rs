//! Toolbar for the demo hosts: threshold, layout flags, and list size.

use dioxus::prelude::*;
use gamelist_core::demo::sample_games;
use gamelist_core::prefs::{GAME_LIST_THRESHOLD, Preferences};
use gamelist_core::record::GameRecord;
use gamelist_core::user::Viewer;

use crate::ListServices;

/// Replace the shared game list with `count` sample games, keeping the live
/// directory in step.
fn regenerate(services: ListServices, mut games: Signal<Vec<GameRecord>>, count: usize) {
    let viewer = services.viewer.read().clone().unwrap_or(Viewer {
        id: 0,
        username: "guest".to_string(),
    });
    let list = sample_games(&viewer, count, *services.now.read());
    let mut live = services.live;
    live.set(list.iter().collect());
    games.set(list);
}

#[component]
pub fn ListControls(
    games: Signal<Vec<GameRecord>>,
    opponent_style: Signal<bool>,
    disable_sort: Signal<bool>,
    on_threshold: EventHandler<usize>,
) -> Element {
    let mut opponent_style = opponent_style;
    let mut disable_sort = disable_sort;
    let services: ListServices = use_context();
    let threshold = services.preferences.read().game_list_threshold();
    let count = games.read().len();

    rsx! {
        div { class: "ListControls",
            label {
                "Threshold "
                input {
                    r#type: "number",
                    min: "0",
                    value: "{threshold}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse::<usize>() {
                            let mut prefs = services.preferences;
                            prefs.write().set(GAME_LIST_THRESHOLD, value as u64);
                            on_threshold.call(value);
                        }
                    },
                }
            }
            label {
                input {
                    r#type: "checkbox",
                    checked: *opponent_style.read(),
                    onchange: move |evt| opponent_style.set(evt.checked()),
                }
                " Opponent style"
            }
            label {
                input {
                    r#type: "checkbox",
                    checked: *disable_sort.read(),
                    onchange: move |evt| disable_sort.set(evt.checked()),
                }
                " Disable sort"
            }
            div { class: "count",
                button {
                    disabled: count == 0,
                    onclick: move |_| regenerate(services, games, count.saturating_sub(1)),
                    "−"
                }
                span { " {count} games " }
                button {
                    onclick: move |_| regenerate(services, games, count + 1),
                    "+"
                }
                button {
                    onclick: move |_| regenerate(services, games, 0),
                    "Clear"
                }
            }
        }
    }
}
