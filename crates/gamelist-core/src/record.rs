//! Game records as supplied by the game-state layer.
//!
//! The list only ever reads these. Seats, the clock and the move list may be
//! missing on partially loaded games; the accessors report that as a
//! [`RecordError`] instead of panicking.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DataError, RecordError};

pub type GameId = u64;
pub type PlayerId = u64;

/// One side of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub username: String,
}

impl Player {
    pub fn new(id: PlayerId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}

/// Clock snapshot: whose timer runs and when it runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    pub current_player: PlayerId,
    /// Absolute deadline in epoch milliseconds.
    pub expiration: i64,
}

/// A single move as `[x, y]`. Negative coordinates encode a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move(pub i32, pub i32);

impl Move {
    pub fn is_pass(self) -> bool {
        self.0 < 0 || self.1 < 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub black: Option<Player>,
    #[serde(default)]
    pub white: Option<Player>,
    #[serde(default = "default_board_size")]
    pub width: u32,
    #[serde(default = "default_board_size")]
    pub height: u32,
    #[serde(default)]
    pub clock: Option<Clock>,
    #[serde(default)]
    pub moves: Option<Vec<Move>>,
}

fn default_board_size() -> u32 {
    19
}

impl GameRecord {
    /// An empty 19x19 game with no players, clock or moves.
    pub fn new(id: GameId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            black: None,
            white: None,
            width: default_board_size(),
            height: default_board_size(),
            clock: None,
            moves: None,
        }
    }

    pub fn with_players(mut self, black: Player, white: Player) -> Self {
        self.black = Some(black);
        self.white = Some(white);
        self
    }

    pub fn with_clock(mut self, current_player: PlayerId, expiration: i64) -> Self {
        self.clock = Some(Clock {
            current_player,
            expiration,
        });
        self
    }

    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = Some(moves);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn clock(&self) -> Result<&Clock, RecordError> {
        self.clock.as_ref().ok_or(RecordError::MissingClock(self.id))
    }

    pub fn move_count(&self) -> Result<usize, RecordError> {
        self.moves
            .as_ref()
            .map(Vec::len)
            .ok_or(RecordError::MissingMoves(self.id))
    }

    pub fn black(&self) -> Result<&Player, RecordError> {
        self.black.as_ref().ok_or(RecordError::MissingPlayer(self.id))
    }

    pub fn white(&self) -> Result<&Player, RecordError> {
        self.white.as_ref().ok_or(RecordError::MissingPlayer(self.id))
    }

    /// The side that is not `viewer`: white when the viewer plays black,
    /// black otherwise (including when nobody is logged in).
    pub fn opponent_of(&self, viewer: Option<PlayerId>) -> Result<&Player, RecordError> {
        let black = self.black()?;
        if viewer == Some(black.id) {
            self.white()
        } else {
            Ok(black)
        }
    }

    /// True when the running clock belongs to `viewer`.
    pub fn is_viewer_turn(&self, viewer: Option<PlayerId>) -> Result<bool, RecordError> {
        let clock = self.clock()?;
        Ok(viewer == Some(clock.current_player))
    }
}

/// Parse a JSON array of game records.
pub fn parse_games(json: &str, origin: &str) -> Result<Vec<GameRecord>, DataError> {
    serde_json::from_str(json).map_err(|e| DataError::json(origin, e))
}

/// Read a JSON array of game records from disk.
pub fn load_games(path: &str) -> Result<Vec<GameRecord>, DataError> {
    let text = std::fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
    parse_games(&text, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_on_parse() {
        let games = parse_games(r#"[{"id": 7, "name": "Friendly"}]"#, "inline").unwrap();
        assert_eq!(games.len(), 1);
        let g = &games[0];
        assert_eq!((g.width, g.height), (19, 19));
        assert_eq!(g.clock(), Err(RecordError::MissingClock(7)));
        assert_eq!(g.move_count(), Err(RecordError::MissingMoves(7)));
    }

    #[test]
    fn parses_full_record() {
        let json = r#"[{
            "id": 1, "name": "Ranked", "width": 9, "height": 9,
            "black": {"id": 10, "username": "ann"},
            "white": {"id": 20, "username": "bob"},
            "clock": {"current_player": 20, "expiration": 1700000000000},
            "moves": [[2, 2], [6, 6], [-1, -1]]
        }]"#;
        let g = &parse_games(json, "inline").unwrap()[0];
        assert_eq!(g.move_count(), Ok(3));
        assert!(g.moves.as_ref().unwrap()[2].is_pass());
        assert_eq!(g.clock().unwrap().current_player, 20);
    }

    #[test]
    fn opponent_depends_on_viewer_seat() {
        let g = GameRecord::new(1, "g").with_players(Player::new(10, "ann"), Player::new(20, "bob"));
        assert_eq!(g.opponent_of(Some(10)).unwrap().username, "bob");
        assert_eq!(g.opponent_of(Some(20)).unwrap().username, "ann");
        assert_eq!(g.opponent_of(None).unwrap().username, "ann");
    }

    #[test]
    fn bad_json_reports_origin() {
        let err = parse_games("{not json", "games.json").unwrap_err();
        assert!(err.to_string().contains("games.json"));
    }
}
