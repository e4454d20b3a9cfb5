//! Cell text for one summary-table row.
//!
//! The columns line up with [`header_cells`](crate::layout::header_cells):
//! opponent style yields move, game, opponent, viewer's clock and opponent's
//! clock; the plain style yields move, game, black, black's clock, white and
//! white's clock. Only the running side's clock has a value; the paused side
//! shows blank.

use crate::record::{GameRecord, Player, PlayerId};

const MS_PER_SECOND: i64 = 1_000;
const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_DAY: i64 = 86_400;

/// Remaining time until `expiration`, both in epoch milliseconds.
///
/// `2d 5h` past a day, `1:02:03` past an hour, `4:05` below that, and `0:00`
/// once the deadline has passed.
pub fn clock_text(expiration: i64, now: i64) -> String {
    let remaining = expiration
        .saturating_sub(now)
        .max(0)
        .saturating_add(MS_PER_SECOND - 1)
        / MS_PER_SECOND;
    let days = remaining / SECONDS_PER_DAY;
    let hours = remaining % SECONDS_PER_DAY / SECONDS_PER_HOUR;
    let minutes = remaining % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
    let seconds = remaining % SECONDS_PER_MINUTE;

    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Clock text for `side` when its timer is the one running.
fn side_clock(game: &GameRecord, side: Option<&Player>, now: i64) -> String {
    match (game.clock.as_ref(), side) {
        (Some(clock), Some(p)) if clock.current_player == p.id => clock_text(clock.expiration, now),
        _ => String::new(),
    }
}

fn username(p: Option<&Player>) -> String {
    p.map(|p| p.username.clone()).unwrap_or_default()
}

/// The row's cells, in header order.
pub fn summary_cells(
    game: &GameRecord,
    viewer: Option<PlayerId>,
    opponent_style: bool,
    now: i64,
) -> Vec<String> {
    let move_number = game
        .move_count()
        .map(|n| n.to_string())
        .unwrap_or_default();
    let mut cells = vec![move_number, game.name.clone()];

    if opponent_style {
        let black = game.black.as_ref();
        let white = game.white.as_ref();
        let viewer_is_black = black.is_some_and(|p| Some(p.id) == viewer);
        let (mine, theirs) = if viewer_is_black {
            (black, white)
        } else {
            (white, black)
        };
        cells.push(username(theirs));
        cells.push(side_clock(game, mine, now));
        cells.push(side_clock(game, theirs, now));
    } else {
        for side in [game.black.as_ref(), game.white.as_ref()] {
            cells.push(username(side));
            cells.push(side_clock(game, side, now));
        }
    }
    cells
}
