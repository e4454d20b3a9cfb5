//! Mini-board thumbnail for the gallery layout.

use dioxus::prelude::*;
use gamelist_core::board::{BoardPosition, Stone};
use gamelist_core::line::clock_text;
use gamelist_core::record::{GameId, Player};

use crate::ListServices;

fn point_class(stone: Option<Stone>, last: bool) -> &'static str {
    match (stone, last) {
        (Some(Stone::Black), false) => "point black",
        (Some(Stone::Black), true) => "point black last",
        (Some(Stone::White), false) => "point white",
        (Some(Stone::White), true) => "point white last",
        (None, _) => "point",
    }
}

#[component]
pub fn MiniBoard(
    id: GameId,
    #[props(!optional)] black: Option<Player>,
    #[props(!optional)] white: Option<Player>,
    width: u32,
    height: u32,
) -> Element {
    let services: ListServices = use_context();
    let now = *services.now.read();
    let live = services.live.read();
    let game = live.get(id);

    let position = BoardPosition::thumbnail(width, height, game.and_then(|g| g.moves.as_deref()));
    let columns = position.as_ref().map_or(1, |p| p.width);
    let mut points = Vec::new();
    if let Some(position) = &position {
        for (y, row) in position.rows().enumerate() {
            for (x, stone) in row.iter().enumerate() {
                let last = position.last_move == Some((x as u32, y as u32));
                points.push(point_class(*stone, last));
            }
        }
    }
    let board_class = if position.is_some() { "board" } else { "board unavailable" };

    let title = game.map(|g| g.name.clone()).unwrap_or_default();
    let black_name = black.map(|p| p.username).unwrap_or_default();
    let white_name = white.map(|p| p.username).unwrap_or_default();
    let clock = game
        .and_then(|g| g.clock)
        .map(|c| clock_text(c.expiration, now))
        .unwrap_or_default();

    rsx! {
        div { class: "MiniBoard",
            div { class: "title", "{title}" }
            div {
                class: board_class,
                style: "grid-template-columns: repeat({columns}, 1fr);",
                if position.is_none() {
                    "{width}x{height}"
                }
                for class in points {
                    div { class }
                }
            }
            div { class: "names",
                span { class: "black", "{black_name}" }
                " vs "
                span { class: "white", "{white_name}" }
            }
            div { class: "clock", "{clock}" }
        }
    }
}
