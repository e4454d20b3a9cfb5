//! Compact one-line summary of a game, used by the table layout.

use dioxus::prelude::*;
use gamelist_core::line::summary_cells;
use gamelist_core::record::{GameId, GameRecord, Player};
use gamelist_core::user::CurrentUser;

use crate::ListServices;

/// Class for the cell at `index`, matching the header's alignment.
fn cell_class(index: usize, opponent_style: bool) -> &'static str {
    match (opponent_style, index) {
        (_, 0) => "move-number",
        (_, 1) => "game-name text-align-left",
        (true, 2) => "player text-align-left",
        (false, 2 | 4) => "player text-align-left",
        _ => "clock",
    }
}

#[component]
pub fn LineSummary(
    id: GameId,
    #[props(!optional)] black: Option<Player>,
    #[props(!optional)] white: Option<Player>,
    opponent_style: bool,
) -> Element {
    let services: ListServices = use_context();
    let viewer = services.viewer.read().current_user();
    let now = *services.now.read();

    let mut game = services
        .live
        .read()
        .get(id)
        .cloned()
        .unwrap_or_else(|| GameRecord::new(id, ""));
    game.black = black;
    game.white = white;

    let cells = summary_cells(&game, viewer, opponent_style, now);

    rsx! {
        div { class: "LineSummary",
            for (i, text) in cells.into_iter().enumerate() {
                div { class: cell_class(i, opponent_style), "{text}" }
            }
        }
    }
}
