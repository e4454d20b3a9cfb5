//! The per-render computation behind the game list.
//!
//! [`plan_game_list`] turns the caller's props, the held sort order and the
//! collaborators into a [`GameListPlan`]. Frontends draw the plan and own
//! nothing else but the sort order itself.

use crate::i18n::Translate;
use crate::layout::{HeaderCell, Layout, header_cells, select_layout};
use crate::prefs::Preferences;
use crate::record::{GameId, GameRecord, Player};
use crate::sort::{SortOrder, sort_games};
use crate::user::CurrentUser;

/// Caller-controlled display options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameListOptions {
    pub empty_message: Option<String>,
    pub opponent_style: bool,
    pub disable_sort: bool,
}

/// What the line-summary renderer receives for one game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow<'a> {
    pub id: GameId,
    pub black: Option<&'a Player>,
    pub white: Option<&'a Player>,
    pub opponent_style: bool,
}

/// What the mini-board renderer receives for one game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardTile<'a> {
    pub id: GameId,
    pub black: Option<&'a Player>,
    pub white: Option<&'a Player>,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameListPlan<'a> {
    Empty {
        message: Option<String>,
    },
    Summary {
        header: Vec<HeaderCell>,
        rows: Vec<SummaryRow<'a>>,
    },
    Gallery {
        tiles: Vec<BoardTile<'a>>,
    },
}

impl GameListPlan<'_> {
    pub fn layout(&self) -> Layout {
        match self {
            GameListPlan::Empty { .. } => Layout::Empty,
            GameListPlan::Summary { .. } => Layout::Summary,
            GameListPlan::Gallery { .. } => Layout::Gallery,
        }
    }

    /// Game ids in display order.
    pub fn ids(&self) -> Vec<GameId> {
        match self {
            GameListPlan::Empty { .. } => Vec::new(),
            GameListPlan::Summary { rows, .. } => rows.iter().map(|r| r.id).collect(),
            GameListPlan::Gallery { tiles } => tiles.iter().map(|t| t.id).collect(),
        }
    }
}

pub fn plan_game_list<'a>(
    list: &'a [GameRecord],
    options: &GameListOptions,
    order: SortOrder,
    prefs: &dyn Preferences,
    user: &dyn CurrentUser,
    tr: &dyn Translate,
) -> GameListPlan<'a> {
    if list.is_empty() {
        return GameListPlan::Empty {
            message: options.empty_message.clone(),
        };
    }

    let games: Vec<&GameRecord> = if options.disable_sort {
        list.iter().collect()
    } else {
        sort_games(list, order, user.current_user())
    };

    match select_layout(games.len(), prefs.game_list_threshold()) {
        Layout::Empty => GameListPlan::Empty {
            message: options.empty_message.clone(),
        },
        Layout::Summary => GameListPlan::Summary {
            header: header_cells(options.opponent_style, !options.disable_sort, order, tr),
            rows: games
                .into_iter()
                .map(|g| SummaryRow {
                    id: g.id,
                    black: g.black.as_ref(),
                    white: g.white.as_ref(),
                    opponent_style: options.opponent_style,
                })
                .collect(),
        },
        Layout::Gallery => GameListPlan::Gallery {
            tiles: games
                .into_iter()
                .map(|g| BoardTile {
                    id: g.id,
                    black: g.black.as_ref(),
                    white: g.white.as_ref(),
                    width: g.width,
                    height: g.height,
                })
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;
    use crate::prefs::{GAME_LIST_THRESHOLD, PreferenceStore};
    use crate::sort::SortKey;

    const ME: u64 = 1;

    fn prefs(threshold: usize) -> PreferenceStore {
        let mut p = PreferenceStore::new();
        p.set(GAME_LIST_THRESHOLD, threshold as u64);
        p
    }

    fn games(n: u64) -> Vec<GameRecord> {
        (1..=n)
            .map(|id| GameRecord::new(id, format!("game {id}")).with_clock(99, (100 - id) as i64))
            .collect()
    }

    fn plan<'a>(
        list: &'a [GameRecord],
        options: &GameListOptions,
        order: SortOrder,
        threshold: usize,
    ) -> GameListPlan<'a> {
        plan_game_list(list, options, order, &prefs(threshold), &Some(ME), &Catalog::default())
    }

    #[test]
    fn empty_list_only_shows_message() {
        let options = GameListOptions {
            empty_message: Some("No games".into()),
            opponent_style: true,
            ..Default::default()
        };
        let p = plan(&[], &options, SortOrder::default(), 10);
        assert_eq!(p, GameListPlan::Empty { message: Some("No games".into()) });

        let p = plan(&[], &GameListOptions::default(), SortOrder::default(), 10);
        assert_eq!(p, GameListPlan::Empty { message: None });
        assert!(p.ids().is_empty());
    }

    #[test]
    fn plan_outlives_its_options() {
        let list = games(2);
        let p = plan(&list, &GameListOptions::default(), SortOrder::default(), 10);
        let q = plan(&[], &GameListOptions::default(), SortOrder::default(), 10);
        assert_eq!(p.ids(), vec![2, 1]);
        assert_eq!(q.layout(), Layout::Empty);
    }

    #[test]
    fn threshold_selects_layout() {
        let options = GameListOptions::default();
        let list = games(4);
        assert_eq!(plan(&list, &options, SortOrder::default(), 4).layout(), Layout::Gallery);
        assert_eq!(plan(&list, &options, SortOrder::default(), 3).layout(), Layout::Summary);
    }

    #[test]
    fn sorted_by_clock_by_default() {
        let list = games(3);
        let p = plan(&list, &GameListOptions::default(), SortOrder::default(), 10);
        assert_eq!(p.ids(), vec![3, 2, 1]);
    }

    #[test]
    fn disable_sort_keeps_input_order() {
        let list = games(5);
        let options = GameListOptions {
            opponent_style: true,
            disable_sort: true,
            ..Default::default()
        };
        for order in [SortOrder::default(), SortOrder::descending(SortKey::Name)] {
            for threshold in [2, 10] {
                assert_eq!(plan(&list, &options, order, threshold).ids(), vec![1, 2, 3, 4, 5]);
            }
        }

        match plan(&list, &options, SortOrder::default(), 2) {
            GameListPlan::Summary { header, .. } => {
                assert_eq!(header.len(), 5);
                assert!(header.iter().all(|c| !c.is_sortable()));
            }
            other => panic!("expected summary, got {other:?}"),
        }
    }

    #[test]
    fn summary_rows_carry_style_and_players() {
        let list = vec![
            GameRecord::new(7, "a")
                .with_players(Player::new(ME, "me"), Player::new(2, "them"))
                .with_clock(ME, 10),
            GameRecord::new(8, "b").with_clock(2, 5),
        ];
        let options = GameListOptions {
            opponent_style: true,
            ..Default::default()
        };
        let GameListPlan::Summary { rows, .. } = plan(&list, &options, SortOrder::default(), 1) else {
            panic!("expected summary");
        };
        assert_eq!(rows[0].id, 7);
        assert_eq!(rows[0].white.map(|p| p.username.as_str()), Some("them"));
        assert!(rows.iter().all(|r| r.opponent_style));
        assert!(rows[1].black.is_none());
    }

    #[test]
    fn gallery_tiles_carry_board_size() {
        let list = vec![GameRecord::new(1, "small").with_size(9, 13)];
        let GameListPlan::Gallery { tiles } = plan(&list, &GameListOptions::default(), SortOrder::default(), 10) else {
            panic!("expected gallery");
        };
        assert_eq!((tiles[0].width, tiles[0].height), (9, 13));
    }
}
