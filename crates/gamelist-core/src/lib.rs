//! Core of the sortable game list: records, sort state and comparators,
//! layout selection, and the collaborators the list reads from.
//!
//! Nothing here depends on a UI framework. The Dioxus components in
//! `gamelist-ui` and the terminal frontend in `gamelist-tui` both draw the
//! [`plan::GameListPlan`] produced by [`plan::plan_game_list`].

pub mod board;
pub mod demo;
pub mod error;
pub mod i18n;
pub mod layout;
pub mod line;
pub mod live;
pub mod plan;
pub mod prefs;
pub mod record;
pub mod sort;
pub mod user;
