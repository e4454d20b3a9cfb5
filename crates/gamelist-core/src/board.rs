//! Stone positions for mini-board thumbnails.
//!
//! Moves are replayed in order with black first. There is no rules engine
//! behind this: captures are not removed, a later stone on an occupied point
//! replaces the earlier one, and off-board coordinates are skipped.

use crate::record::Move;

/// Largest side length drawn as a grid. Bigger boards are clamped.
pub const MAX_BOARD_SIZE: u32 = 52;

/// Whether a `width` x `height` board can be drawn as a thumbnail.
pub fn is_drawable(width: u32, height: u32) -> bool {
    (1..=MAX_BOARD_SIZE).contains(&width) && (1..=MAX_BOARD_SIZE).contains(&height)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stone {
    Black,
    White,
}

impl Stone {
    pub fn other(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

/// A `width` x `height` grid of points, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPosition {
    pub width: u32,
    pub height: u32,
    points: Vec<Option<Stone>>,
    pub last_move: Option<(u32, u32)>,
}

impl BoardPosition {
    pub fn empty(width: u32, height: u32) -> Self {
        let width = width.min(MAX_BOARD_SIZE);
        let height = height.min(MAX_BOARD_SIZE);
        Self {
            width,
            height,
            points: vec![None; (width * height) as usize],
            last_move: None,
        }
    }

    pub fn replay(width: u32, height: u32, moves: &[Move]) -> Self {
        let mut board = Self::empty(width, height);
        let mut to_play = Stone::Black;
        for &mv in moves {
            if !mv.is_pass() {
                board.place(mv.0 as u32, mv.1 as u32, to_play);
            }
            to_play = to_play.other();
        }
        board
    }

    /// The thumbnail position for a game, or `None` when the board is not
    /// drawable.
    pub fn thumbnail(width: u32, height: u32, moves: Option<&[Move]>) -> Option<Self> {
        if !is_drawable(width, height) {
            return None;
        }
        Some(match moves {
            Some(moves) => Self::replay(width, height, moves),
            None => Self::empty(width, height),
        })
    }

    fn place(&mut self, x: u32, y: u32, stone: Stone) {
        if x < self.width && y < self.height {
            self.points[(y * self.width + x) as usize] = Some(stone);
            self.last_move = Some((x, y));
        }
    }

    pub fn at(&self, x: u32, y: u32) -> Option<Stone> {
        if x < self.width && y < self.height {
            self.points[(y * self.width + x) as usize]
        } else {
            None
        }
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Stone>]> {
        self.points.chunks(self.width.max(1) as usize)
    }

    pub fn stone_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_alternates_colours_and_skips_passes() {
        let moves = [Move(0, 0), Move(-1, -1), Move(1, 0), Move(2, 2)];
        let board = BoardPosition::replay(3, 3, &moves);
        assert_eq!(board.at(0, 0), Some(Stone::Black));
        assert_eq!(board.at(1, 0), Some(Stone::Black));
        assert_eq!(board.at(2, 2), Some(Stone::White));
        assert_eq!(board.last_move, Some((2, 2)));
        assert_eq!(board.stone_count(), 3);
    }

    #[test]
    fn off_board_moves_are_ignored() {
        let board = BoardPosition::replay(2, 2, &[Move(5, 0), Move(0, 1)]);
        assert_eq!(board.stone_count(), 1);
        assert_eq!(board.at(0, 1), Some(Stone::White));
        assert_eq!(board.rows().count(), 2);
    }

    #[test]
    fn oversized_boards_are_clamped_not_drawn() {
        let board = BoardPosition::empty(70_000, 70_000);
        assert_eq!((board.width, board.height), (MAX_BOARD_SIZE, MAX_BOARD_SIZE));
        assert_eq!(board.rows().count(), MAX_BOARD_SIZE as usize);

        let board = BoardPosition::replay(u32::MAX, 3, &[Move(i32::MAX, 1), Move(1, 1)]);
        assert_eq!(board.stone_count(), 1);

        assert!(BoardPosition::thumbnail(70_000, 70_000, None).is_none());
        assert!(BoardPosition::thumbnail(0, 19, None).is_none());
        let small = BoardPosition::thumbnail(9, 9, Some(&[Move(4, 4)][..])).unwrap();
        assert_eq!(small.at(4, 4), Some(Stone::Black));
    }
}
