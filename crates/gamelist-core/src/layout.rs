//! Layout selection and the summary-table header.

use crate::i18n::Translate;
use crate::sort::{SortDirection, SortKey, SortOrder};

/// How a list of a given size is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Nothing to show but the empty-state message.
    Empty,
    /// One live mini-board per game.
    Gallery,
    /// Header row plus one compact row per game.
    Summary,
}

/// Lists longer than `threshold` become a table; anything else non-empty is
/// a gallery.
pub fn select_layout(len: usize, threshold: usize) -> Layout {
    if len == 0 {
        Layout::Empty
    } else if len > threshold {
        Layout::Summary
    } else {
        Layout::Gallery
    }
}

pub const SORTABLE_CLASS: &str = "sortable";
pub const LEFT_ALIGN_CLASS: &str = "text-align-left";

/// Marker class for `key`'s header under `order`. The active ascending
/// column carries `sorted-desc` and the active descending one `sorted-asc`;
/// the stylesheet draws the arrow pointing at the next click's direction.
pub fn sort_marker(order: SortOrder, key: SortKey) -> Option<&'static str> {
    if order.key != key {
        return None;
    }
    Some(match order.direction {
        SortDirection::Ascending => "sorted-desc",
        SortDirection::Descending => "sorted-asc",
    })
}

/// One header cell of the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Translated label; empty for spacer cells.
    pub label: String,
    /// Column toggled by a click, when sorting is enabled.
    pub sort_key: Option<SortKey>,
    /// Direction shown for the active column.
    pub active: Option<SortDirection>,
    pub class: String,
}

impl HeaderCell {
    fn plain(label: String, left_aligned: bool) -> Self {
        let class = if left_aligned { LEFT_ALIGN_CLASS } else { "" };
        Self {
            label,
            sort_key: None,
            active: None,
            class: class.to_string(),
        }
    }

    pub fn is_sortable(&self) -> bool {
        self.sort_key.is_some()
    }
}

/// Header row for the summary table.
///
/// Opponent style lists Move, Game, Opponent, Clock and Opponent's Clock,
/// each sortable unless sorting is disabled. The plain style lists Move,
/// Game, Black and White with spacer cells after each player column and is
/// never sortable.
pub fn header_cells(
    opponent_style: bool,
    sort_enabled: bool,
    order: SortOrder,
    tr: &dyn Translate,
) -> Vec<HeaderCell> {
    if !opponent_style {
        return vec![
            HeaderCell::plain(tr.translate("Move"), false),
            HeaderCell::plain(tr.translate("Game"), false),
            HeaderCell::plain(tr.translate("Black"), true),
            HeaderCell::plain(String::new(), false),
            HeaderCell::plain(tr.translate("White"), true),
            HeaderCell::plain(String::new(), false),
        ];
    }

    let columns = [
        ("Move", SortKey::MoveNumber, false),
        ("Game", SortKey::Name, true),
        ("Opponent", SortKey::Opponent, true),
        ("Clock", SortKey::Clock, false),
        ("Opponent's Clock", SortKey::OpponentClock, false),
    ];

    columns
        .into_iter()
        .map(|(label, key, left_aligned)| {
            let label = tr.translate(label);
            if !sort_enabled {
                return HeaderCell::plain(label, left_aligned);
            }
            let class = [
                Some(SORTABLE_CLASS),
                sort_marker(order, key),
                left_aligned.then_some(LEFT_ALIGN_CLASS),
            ]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
            HeaderCell {
                label,
                sort_key: Some(key),
                active: (order.key == key).then_some(order.direction),
                class,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;

    #[test]
    fn threshold_boundary_is_inclusive_below() {
        assert_eq!(select_layout(0, 10), Layout::Empty);
        assert_eq!(select_layout(1, 10), Layout::Gallery);
        assert_eq!(select_layout(10, 10), Layout::Gallery);
        assert_eq!(select_layout(11, 10), Layout::Summary);
        assert_eq!(select_layout(0, 0), Layout::Empty);
        assert_eq!(select_layout(1, 0), Layout::Summary);
    }

    #[test]
    fn opponent_header_marks_active_column() {
        let cells = header_cells(true, true, SortOrder::ascending(SortKey::Name), &Catalog::default());
        let labels: Vec<&str> = cells.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Move", "Game", "Opponent", "Clock", "Opponent's Clock"]);

        assert_eq!(cells[0].class, "sortable");
        assert_eq!(cells[1].class, "sortable sorted-desc text-align-left");
        assert_eq!(cells[2].class, "sortable text-align-left");
        assert_eq!(cells[1].active, Some(SortDirection::Ascending));
        assert!(cells.iter().all(HeaderCell::is_sortable));

        let cells = header_cells(true, true, SortOrder::descending(SortKey::OpponentClock), &Catalog::default());
        assert_eq!(cells[4].class, "sortable sorted-asc");
        assert_eq!(cells[4].sort_key, Some(SortKey::OpponentClock));
    }

    #[test]
    fn disabled_sort_keeps_header_without_affordances() {
        let cells = header_cells(true, false, SortOrder::default(), &Catalog::default());
        assert_eq!(cells.len(), 5);
        assert!(cells.iter().all(|c| !c.is_sortable() && c.active.is_none()));
        assert_eq!(cells[3].class, "");
        assert_eq!(cells[2].class, "text-align-left");
    }

    #[test]
    fn plain_header_is_never_sortable() {
        let cells = header_cells(false, true, SortOrder::default(), &Catalog::default());
        let labels: Vec<&str> = cells.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Move", "Game", "Black", "", "White", ""]);
        assert!(cells.iter().all(|c| !c.is_sortable()));
    }

    #[test]
    fn labels_go_through_translation() {
        let catalog = Catalog::from_json(r#"{"Clock": "Uhr"}"#, "de.json").unwrap();
        let cells = header_cells(true, true, SortOrder::default(), &catalog);
        assert_eq!(cells[3].label, "Uhr");
    }
}
