//! Deterministic sample games for the demo hosts.

use crate::record::{GameRecord, Move, Player};
use crate::user::Viewer;

const OPPONENTS: [&str; 8] = [
    "Honinbo", "kaya", "Tengen", "atari_annie", "Meijin", "shusaku", "Zed", "lee",
];
const NAMES: [&str; 6] = [
    "Friendly Match",
    "ranked 19x19",
    "Teaching game",
    "Ladder challenge",
    "blitz",
    "Tournament round",
];
const SIZES: [(u32, u32); 3] = [(19, 19), (13, 13), (9, 9)];

/// `count` games between `viewer` and a rotating cast of opponents, with
/// clocks expiring some minutes to days after `now`.
pub fn sample_games(viewer: &Viewer, count: usize, now: i64) -> Vec<GameRecord> {
    let me = Player::new(viewer.id, viewer.username.clone());
    (0..count)
        .map(|i| {
            let n = i as u64;
            let opponent = Player::new(1_000 + n % OPPONENTS.len() as u64, OPPONENTS[i % OPPONENTS.len()]);
            let (width, height) = SIZES[i % SIZES.len()];
            let viewer_black = i % 2 == 0;
            let (black, white) = if viewer_black {
                (me.clone(), opponent.clone())
            } else {
                (opponent.clone(), me.clone())
            };

            let move_count = (n * 37 + 11) % (width as u64 * 3);
            let moves = (0..move_count)
                .map(|m| {
                    let x = (m * 7 + n * 3) % width as u64;
                    let y = (m * 11 + n * 5) % height as u64;
                    Move(x as i32, y as i32)
                })
                .collect();

            // Black to play on even move counts.
            let black_to_play = move_count % 2 == 0;
            let current = if black_to_play { black.id } else { white.id };
            let expiration = now + ((n * 7_919 + 13) % 172_800) as i64 * 1_000;

            GameRecord::new(20_000 + n, format!("{} #{}", NAMES[i % NAMES.len()], i + 1))
                .with_players(black, white)
                .with_size(width, height)
                .with_clock(current, expiration)
                .with_moves(moves)
        })
        .collect()
}
