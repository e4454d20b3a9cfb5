//! Shared Dioxus components for the game list.
//!
//! This crate is platform-agnostic: hosts (`gamelist-web`, `gamelist-gui`)
//! provide a [`ListServices`] context and render
//! [`GameList`](components::game_list::GameList) wherever they need one.

pub mod components;

use dioxus::prelude::*;
use gamelist_core::i18n::Catalog;
use gamelist_core::live::LiveGames;
use gamelist_core::prefs::PreferenceStore;
use gamelist_core::user::Viewer;

// ---------------------------------------------------------------------------
// Shared context
// ---------------------------------------------------------------------------

/// Collaborators read at render time. Provide once near the root with
/// `use_context_provider(|| services)`.
#[derive(Clone, Copy, PartialEq)]
pub struct ListServices {
    pub preferences: Signal<PreferenceStore>,
    pub viewer: Signal<Option<Viewer>>,
    pub catalog: Signal<Catalog>,
    /// Live game snapshots, looked up by the row and board renderers.
    pub live: Signal<LiveGames>,
    /// Wall clock in epoch milliseconds, ticked by the host.
    pub now: Signal<i64>,
}

impl ListServices {
    /// Create the signals in the current scope.
    pub fn new(
        preferences: PreferenceStore,
        viewer: Option<Viewer>,
        catalog: Catalog,
        live: LiveGames,
        now: i64,
    ) -> Self {
        Self {
            preferences: Signal::new(preferences),
            viewer: Signal::new(viewer),
            catalog: Signal::new(catalog),
            live: Signal::new(live),
            now: Signal::new(now),
        }
    }
}
