//! Game list: a sortable summary table for long lists, a gallery of live
//! mini-boards for short ones.

use dioxus::prelude::*;
use gamelist_core::layout::HeaderCell;
use gamelist_core::plan::{GameListOptions, GameListPlan, plan_game_list};
use gamelist_core::record::GameRecord;
use gamelist_core::sort::SortOrder;

use super::line_summary::LineSummary;
use super::mini_board::MiniBoard;
use crate::ListServices;

/// The game list.
///
/// `list` is never reordered in place; the sort order is held per instance
/// and starts at `clock`. With `disable_sort` the list renders in input
/// order and the header (opponent style only) has no click targets.
#[component]
pub fn GameList(
    list: Vec<GameRecord>,
    empty_message: Option<String>,
    opponent_style: bool,
    #[props(default)] disable_sort: bool,
) -> Element {
    let sort_order = use_signal(SortOrder::default);
    let services: ListServices = use_context();

    let options = GameListOptions {
        empty_message,
        opponent_style,
        disable_sort,
    };
    let order = *sort_order.read();
    let prefs = services.preferences.read();
    let viewer = services.viewer.read();
    let catalog = services.catalog.read();
    let plan = plan_game_list(&list, &options, order, &*prefs, &*viewer, &*catalog);

    match plan {
        GameListPlan::Empty { message } => {
            let text = message.unwrap_or_default();
            rsx! {
                div { class: "container", "{text}" }
            }
        }
        GameListPlan::Summary { header, rows } => rsx! {
            div { class: "GameList LineSummaryContainer",
                div { class: "LineSummaryContainerHeader",
                    for cell in header {
                        HeaderButton { cell, sort_order }
                    }
                }
                for row in rows {
                    LineSummary {
                        key: "{row.id}",
                        id: row.id,
                        black: row.black.cloned(),
                        white: row.white.cloned(),
                        opponent_style: row.opponent_style,
                    }
                }
            }
        },
        GameListPlan::Gallery { tiles } => rsx! {
            div { class: "GameList",
                for tile in tiles {
                    MiniBoard {
                        key: "{tile.id}",
                        id: tile.id,
                        black: tile.black.cloned(),
                        white: tile.white.cloned(),
                        width: tile.width,
                        height: tile.height,
                    }
                }
            }
        },
    }
}

/// One header cell. Clicking a sortable cell toggles its column.
#[component]
fn HeaderButton(cell: HeaderCell, sort_order: Signal<SortOrder>) -> Element {
    let key = cell.sort_key;
    let mut sort_order = sort_order;

    rsx! {
        div {
            class: "{cell.class}",
            onclick: move |_| {
                if let Some(key) = key {
                    tracing::debug!(%key, "header clicked");
                    sort_order.write().toggle(key);
                }
            },
            "{cell.label}"
        }
    }
}
