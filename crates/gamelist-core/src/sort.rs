//! Sort state and the comparators behind each sortable column.
//!
//! A descending order is produced by sorting ascending and then reversing the
//! whole list, never by negating the comparator. The two are not equivalent
//! once a comparator reports `Equal` for a malformed pair, and the list must
//! behave the same either way a user reaches a given order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use thiserror::Error;

use crate::error::RecordError;
use crate::record::{GameRecord, PlayerId};

/// A sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Clock,
    OpponentClock,
    Name,
    Opponent,
    MoveNumber,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::MoveNumber,
        SortKey::Name,
        SortKey::Opponent,
        SortKey::Clock,
        SortKey::OpponentClock,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Clock => "clock",
            SortKey::OpponentClock => "opponent-clock",
            SortKey::Name => "name",
            SortKey::Opponent => "opponent",
            SortKey::MoveNumber => "move-number",
        }
    }

    /// Compare two games under this key, surfacing missing fields.
    pub fn compare(
        self,
        a: &GameRecord,
        b: &GameRecord,
        viewer: Option<PlayerId>,
    ) -> Result<Ordering, RecordError> {
        match self {
            SortKey::Clock => compare_clock(a, b, viewer, true),
            SortKey::OpponentClock => compare_clock(a, b, viewer, false),
            SortKey::Name => Ok(locale_compare(&a.name, &b.name).then(a.id.cmp(&b.id))),
            SortKey::Opponent => {
                let a_opp = a.opponent_of(viewer)?;
                let b_opp = b.opponent_of(viewer)?;
                Ok(locale_compare(&a_opp.username, &b_opp.username).then(a.id.cmp(&b.id)))
            }
            SortKey::MoveNumber => {
                Ok(a.move_count()?.cmp(&b.move_count()?).then(a.id.cmp(&b.id)))
            }
        }
    }

    /// Like [`compare`](Self::compare), but a malformed pair is logged and
    /// treated as equal so the rest of the list still sorts.
    pub fn compare_or_equal(self, a: &GameRecord, b: &GameRecord, viewer: Option<PlayerId>) -> Ordering {
        match self.compare(a, b, viewer) {
            Ok(ord) => ord,
            Err(e) => {
                tracing::error!(key = self.as_str(), a = a.id, b = b.id, error = %e, "could not compare games");
                Ordering::Equal
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// The active column and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::ascending(SortKey::Clock)
    }
}

impl SortOrder {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }

    /// The order after a click on `key`'s column header.
    ///
    /// Clicking the active ascending column flips it to descending; every
    /// other click selects `key` ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        if self == Self::ascending(key) {
            Self::descending(key)
        } else {
            Self::ascending(key)
        }
    }

    pub fn toggle(&mut self, key: SortKey) {
        *self = self.toggled(key);
        tracing::debug!(order = %self, "sort order changed");
    }

    pub fn is_descending(self) -> bool {
        self.direction == SortDirection::Descending
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_descending() {
            f.write_str("-")?;
        }
        f.write_str(self.key.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order `{0}`")]
pub struct ParseSortOrderError(pub String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (direction, name) = match s.strip_prefix('-') {
            Some(rest) => (SortDirection::Descending, rest),
            None => (SortDirection::Ascending, s),
        };
        let key = SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == name)
            .ok_or_else(|| ParseSortOrderError(s.to_string()))?;
        Ok(Self { key, direction })
    }
}

/// Clock ordering. With `viewer_first` the viewer's running clocks lead the
/// list; without it they trail. Ties fall back to the earliest expiration,
/// then the lowest id.
fn compare_clock(
    a: &GameRecord,
    b: &GameRecord,
    viewer: Option<PlayerId>,
    viewer_first: bool,
) -> Result<Ordering, RecordError> {
    let a_turn = a.is_viewer_turn(viewer)?;
    let b_turn = b.is_viewer_turn(viewer)?;
    if a_turn != b_turn {
        let ord = if a_turn { Ordering::Less } else { Ordering::Greater };
        return Ok(if viewer_first { ord } else { ord.reverse() });
    }
    let a_exp = a.clock()?.expiration;
    let b_exp = b.clock()?.expiration;
    Ok(a_exp.cmp(&b_exp).then(a.id.cmp(&b.id)))
}

thread_local! {
    static COLLATOR: Option<CollatorBorrowed<'static>> = root_collator();
}

fn root_collator() -> Option<CollatorBorrowed<'static>> {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(CollatorPreferences::default(), options) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(error = %e, "collation data unavailable, comparing case-folded text");
            None
        }
    }
}

/// Root-locale collation at tertiary strength: accents and case only break
/// ties, lower-case sorts before upper-case, and punctuation sorts before
/// digits and letters.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => folded_compare(a, b),
    })
}

fn folded_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.chars().map(char::is_uppercase).cmp(b.chars().map(char::is_uppercase)))
}

/// Return `list` ordered by `order`, leaving `list` untouched.
pub fn sort_games<'a>(
    list: &'a [GameRecord],
    order: SortOrder,
    viewer: Option<PlayerId>,
) -> Vec<&'a GameRecord> {
    let mut sorted: Vec<&GameRecord> = list.iter().collect();
    merge_sort(&mut sorted, &mut |a, b| order.key.compare_or_equal(a, b, viewer));
    if order.is_descending() {
        sorted.reverse();
    }
    sorted
}

// Stable, and safe with comparators that are not total orders (a malformed
// record compares equal to everything); `slice::sort_by` may panic on those.
fn merge_sort<T: Copy, F: FnMut(T, T) -> Ordering>(items: &mut Vec<T>, cmp: &mut F) {
    if items.len() <= 1 {
        return;
    }
    let mut right = items.split_off(items.len() / 2);
    let mut left = std::mem::take(items);
    merge_sort(&mut left, cmp);
    merge_sort(&mut right, cmp);

    items.reserve(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if cmp(right[j], left[i]) == Ordering::Less {
            items.push(right[j]);
            j += 1;
        } else {
            items.push(left[i]);
            i += 1;
        }
    }
    items.extend_from_slice(&left[i..]);
    items.extend_from_slice(&right[j..]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Move, Player};

    const ME: PlayerId = 1;

    fn game(id: u64, name: &str) -> GameRecord {
        GameRecord::new(id, name)
    }

    fn ids(list: &[&GameRecord]) -> Vec<u64> {
        list.iter().map(|g| g.id).collect()
    }

    fn clocked(id: u64, current: PlayerId, expiration: i64) -> GameRecord {
        game(id, "g").with_clock(current, expiration)
    }

    #[test]
    fn toggle_cycles_between_directions() {
        let mut order = SortOrder::default();
        assert_eq!(order, SortOrder::ascending(SortKey::Clock));

        order.toggle(SortKey::Clock);
        assert_eq!(order, SortOrder::descending(SortKey::Clock));
        order.toggle(SortKey::Clock);
        assert_eq!(order, SortOrder::ascending(SortKey::Clock));
    }

    #[test]
    fn toggle_other_column_resets_to_ascending() {
        let order = SortOrder::descending(SortKey::Clock).toggled(SortKey::Name);
        assert_eq!(order, SortOrder::ascending(SortKey::Name));

        let order = SortOrder::ascending(SortKey::Name).toggled(SortKey::Opponent);
        assert_eq!(order, SortOrder::ascending(SortKey::Opponent));
    }

    #[test]
    fn sort_order_spelling() {
        for key in SortKey::ALL {
            for order in [SortOrder::ascending(key), SortOrder::descending(key)] {
                assert_eq!(order.to_string().parse::<SortOrder>(), Ok(order));
            }
        }
        assert_eq!("-move-number".parse::<SortOrder>(), Ok(SortOrder::descending(SortKey::MoveNumber)));
        assert!("--clock".parse::<SortOrder>().is_err());
        assert!("score".parse::<SortOrder>().is_err());
    }

    #[test]
    fn clock_puts_viewer_turn_first() {
        let list = vec![clocked(1, 99, 100), clocked(2, ME, 5_000)];
        let sorted = sort_games(&list, SortOrder::ascending(SortKey::Clock), Some(ME));
        assert_eq!(ids(&sorted), vec![2, 1]);

        let sorted = sort_games(&list, SortOrder::descending(SortKey::Clock), Some(ME));
        assert_eq!(ids(&sorted), vec![1, 2]);
    }

    #[test]
    fn clock_orders_by_expiration_then_id() {
        let list = vec![clocked(3, 99, 300), clocked(2, 98, 100), clocked(1, 97, 300)];
        let sorted = sort_games(&list, SortOrder::ascending(SortKey::Clock), Some(ME));
        assert_eq!(ids(&sorted), vec![2, 1, 3]);
    }

    #[test]
    fn opponent_clock_puts_viewer_turn_last() {
        let list = vec![clocked(1, ME, 100), clocked(2, 99, 5_000), clocked(3, 99, 200)];
        let sorted = sort_games(&list, SortOrder::ascending(SortKey::OpponentClock), Some(ME));
        assert_eq!(ids(&sorted), vec![3, 2, 1]);
    }

    #[test]
    fn clock_without_viewer_orders_by_expiration() {
        let list = vec![clocked(1, ME, 900), clocked(2, 99, 100)];
        let sorted = sort_games(&list, SortOrder::ascending(SortKey::Clock), None);
        assert_eq!(ids(&sorted), vec![2, 1]);
    }

    #[test]
    fn name_is_case_insensitive_with_id_tiebreak() {
        let list = vec![game(4, "Beta"), game(3, "alpha"), game(2, "Beta"), game(1, "gamma")];
        let sorted = sort_games(&list, SortOrder::ascending(SortKey::Name), None);
        assert_eq!(ids(&sorted), vec![3, 2, 4, 1]);
    }

    #[test]
    fn locale_compare_orders_lower_before_upper_on_tie() {
        assert_eq!(locale_compare("alpha", "Beta"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("Same", "Same"), Ordering::Equal);
        assert_eq!(folded_compare("a", "A"), Ordering::Less);
        assert_eq!(folded_compare("alpha", "Beta"), Ordering::Less);
    }

    #[test]
    fn locale_compare_collates_accents_and_punctuation() {
        assert_eq!(locale_compare("émile", "zed"), Ordering::Less);
        assert_eq!(locale_compare("emile", "émile"), Ordering::Less);
        assert_eq!(locale_compare("Émile", "eve"), Ordering::Less);
        assert_eq!(locale_compare("atari_annie", "atari2"), Ordering::Less);
        assert_eq!(locale_compare("atari2", "atarib"), Ordering::Less);
    }

    #[test]
    fn names_with_accents_sort_among_plain_names() {
        let list = vec![game(1, "zed"), game(2, "émile"), game(3, "Edgar"), game(4, "émile")];
        let sorted = sort_games(&list, SortOrder::ascending(SortKey::Name), None);
        assert_eq!(ids(&sorted), vec![3, 2, 4, 1]);
    }

    #[test]
    fn opponent_resolves_viewer_seat() {
        let p = |id, name: &str| Player::new(id, name);
        let list = vec![
            game(1, "x").with_players(p(ME, "me"), p(50, "zed")),
            game(2, "y").with_players(p(51, "Amy"), p(ME, "me")),
            game(3, "z").with_players(p(ME, "me"), p(52, "bob")),
        ];
        let sorted = sort_games(&list, SortOrder::ascending(SortKey::Opponent), Some(ME));
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn move_number_orders_by_length() {
        let list = vec![
            game(1, "a").with_moves(vec![Move(0, 0); 12]),
            game(2, "b").with_moves(vec![]),
            game(3, "c").with_moves(vec![Move(1, 1); 3]),
        ];
        let sorted = sort_games(&list, SortOrder::ascending(SortKey::MoveNumber), None);
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn second_click_reverses_and_third_restores() {
        let list = vec![clocked(5, 99, 50), clocked(1, ME, 400), clocked(9, 98, 10), clocked(2, 97, 50)];
        let first = SortOrder::default();
        let second = first.toggled(SortKey::Clock);
        let third = second.toggled(SortKey::Clock);

        let a = ids(&sort_games(&list, first, Some(ME)));
        let mut b = ids(&sort_games(&list, second, Some(ME)));
        let c = ids(&sort_games(&list, third, Some(ME)));

        b.reverse();
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    fn without(sorted: &[&GameRecord], broken: u64) -> Vec<u64> {
        ids(sorted).into_iter().filter(|&id| id != broken).collect()
    }

    #[test]
    fn missing_clock_does_not_abort_sort() {
        let list = vec![
            clocked(1, 99, 300),
            game(2, "broken"),
            clocked(3, 99, 100),
            clocked(4, ME, 900),
        ];
        let sorted = sort_games(&list, SortOrder::ascending(SortKey::Clock), Some(ME));
        assert_eq!(ids(&sorted), vec![4, 3, 1, 2]);
        assert_eq!(without(&sorted, 2), vec![4, 3, 1]);
        assert!(SortKey::Clock.compare(&list[0], &list[1], Some(ME)).is_err());
        assert_eq!(SortKey::Clock.compare_or_equal(&list[0], &list[1], Some(ME)), Ordering::Equal);
    }

    #[test]
    fn missing_seat_does_not_abort_opponent_sort() {
        let p = |id, name: &str| Player::new(id, name);
        let list = vec![
            game(1, "a").with_players(p(ME, "me"), p(60, "carol")),
            game(2, "seatless"),
            game(3, "c").with_players(p(ME, "me"), p(61, "alice")),
            game(4, "d").with_players(p(ME, "me"), p(62, "bob")),
        ];
        let sorted = sort_games(&list, SortOrder::ascending(SortKey::Opponent), Some(ME));
        assert_eq!(ids(&sorted), vec![3, 4, 1, 2]);
        assert_eq!(without(&sorted, 2), vec![3, 4, 1]);
        assert_eq!(
            SortKey::Opponent.compare(&list[1], &list[0], Some(ME)),
            Err(RecordError::MissingPlayer(2))
        );
    }

    #[test]
    fn missing_moves_does_not_abort_move_number_sort() {
        let list = vec![
            game(1, "a").with_moves(vec![Move(0, 0); 12]),
            game(2, "unloaded"),
            game(3, "c").with_moves(vec![Move(1, 1); 3]),
            game(4, "d").with_moves(vec![]),
        ];
        let sorted = sort_games(&list, SortOrder::ascending(SortKey::MoveNumber), None);
        assert_eq!(ids(&sorted), vec![4, 3, 1, 2]);
        assert_eq!(without(&sorted, 2), vec![4, 3, 1]);
        assert_eq!(
            SortKey::MoveNumber.compare(&list[0], &list[1], None),
            Err(RecordError::MissingMoves(2))
        );
    }

    #[test]
    fn all_malformed_keeps_input_order() {
        let list: Vec<GameRecord> = (0..40).rev().map(|id| game(id, "x")).collect();
        let sorted = sort_games(&list, SortOrder::ascending(SortKey::MoveNumber), None);
        let expected: Vec<u64> = (0..40).rev().collect();
        assert_eq!(ids(&sorted), expected);
    }

    #[test]
    fn input_is_not_mutated() {
        let list = vec![game(2, "b"), game(1, "a")];
        let _ = sort_games(&list, SortOrder::ascending(SortKey::Name), None);
        assert_eq!(list[0].id, 2);
    }
}
