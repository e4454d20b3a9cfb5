//! Directory of live games, keyed by id.
//!
//! Renderers only receive a game's id and seats; everything else they show
//! (name, move count, clock) is looked up here so that a refreshed game
//! re-renders without the list itself changing.

use std::collections::HashMap;

use crate::record::{GameId, GameRecord};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveGames {
    games: HashMap<GameId, GameRecord>,
}

impl LiveGames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: GameId) -> Option<&GameRecord> {
        self.games.get(&id)
    }

    /// Insert or replace a game. Returns the previous snapshot, if any.
    pub fn upsert(&mut self, game: GameRecord) -> Option<GameRecord> {
        self.games.insert(game.id, game)
    }

    pub fn remove(&mut self, id: GameId) -> Option<GameRecord> {
        self.games.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl FromIterator<GameRecord> for LiveGames {
    fn from_iter<I: IntoIterator<Item = GameRecord>>(iter: I) -> Self {
        Self {
            games: iter.into_iter().map(|g| (g.id, g)).collect(),
        }
    }
}

impl<'a> FromIterator<&'a GameRecord> for LiveGames {
    fn from_iter<I: IntoIterator<Item = &'a GameRecord>>(iter: I) -> Self {
        iter.into_iter().cloned().collect()
    }
}
