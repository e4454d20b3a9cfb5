//! Desktop configuration from environment variables.
//!
//! | Variable           | Meaning                                              |
//! |--------------------|------------------------------------------------------|
//! | `GAMELIST_GAMES`   | JSON array of games (default: generated demo games)  |
//! | `GAMELIST_PREFS`   | JSON preferences file, rewritten on threshold change |
//! | `GAMELIST_CATALOG` | JSON label → translation map                         |
//! | `GAMELIST_VIEWER`  | `id` or `id:username` of the logged-in player        |

use gamelist_core::demo::sample_games;
use gamelist_core::i18n::Catalog;
use gamelist_core::prefs::PreferenceStore;
use gamelist_core::record::{GameRecord, load_games};
use gamelist_core::user::Viewer;

const DEMO_GAMES: usize = 14;
/// Seat the demo games are built around when nobody is logged in.
const DEMO_SEAT: u64 = 1;

#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub games_path: Option<String>,
    pub prefs_path: Option<String>,
    pub catalog_path: Option<String>,
    pub viewer: Option<Viewer>,
}

/// Everything the app needs at startup.
#[derive(Clone)]
pub struct Loaded {
    pub games: Vec<GameRecord>,
    pub preferences: PreferenceStore,
    pub catalog: Catalog,
    pub viewer: Option<Viewer>,
}

/// Parse `id` or `id:username`.
pub fn parse_viewer(value: &str) -> Option<Viewer> {
    let (id, username) = match value.split_once(':') {
        Some((id, name)) => (id, name.to_string()),
        None => (value, format!("player {value}")),
    };
    let id = id.trim().parse().ok()?;
    Some(Viewer { id, username })
}

impl Settings {
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            games_path: var("GAMELIST_GAMES"),
            prefs_path: var("GAMELIST_PREFS"),
            catalog_path: var("GAMELIST_CATALOG"),
            viewer: var("GAMELIST_VIEWER").and_then(|v| parse_viewer(&v)),
        }
    }

    /// Load the configured files. Unreadable files are logged and replaced
    /// by defaults so the window still opens.
    pub fn load(&self, now: i64) -> Loaded {
        let viewer = self.viewer.clone();

        let games = match &self.games_path {
            Some(path) => load_games(path).unwrap_or_else(|e| {
                tracing::error!(error = %e, "could not load games");
                Vec::new()
            }),
            None => {
                let seat = viewer.clone().unwrap_or_else(|| Viewer {
                    id: DEMO_SEAT,
                    username: "demo".to_string(),
                });
                sample_games(&seat, DEMO_GAMES, now)
            }
        };

        let preferences = match &self.prefs_path {
            Some(path) if std::path::Path::new(path).exists() => {
                PreferenceStore::load(path).unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "using default preferences");
                    PreferenceStore::new()
                })
            }
            _ => PreferenceStore::new(),
        };

        let catalog = match &self.catalog_path {
            Some(path) => Catalog::load(path).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "labels will not be translated");
                Catalog::default()
            }),
            None => Catalog::default(),
        };

        tracing::info!(games = games.len(), viewer = ?viewer.as_ref().map(|v| v.id), "loaded game list");
        Loaded {
            games,
            preferences,
            catalog,
            viewer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_forms() {
        assert_eq!(
            parse_viewer("42:kaya"),
            Some(Viewer {
                id: 42,
                username: "kaya".into()
            })
        );
        assert_eq!(parse_viewer("7").map(|v| v.id), Some(7));
        assert_eq!(parse_viewer("abc"), None);
    }

    #[test]
    fn defaults_to_demo_games() {
        let loaded = Settings::default().load(0);
        assert_eq!(loaded.games.len(), DEMO_GAMES);
        assert_eq!(loaded.viewer, None);
        assert!(loaded.catalog.is_empty());
    }

    #[test]
    fn configured_viewer_is_kept() {
        let settings = Settings {
            viewer: parse_viewer("42:kaya"),
            ..Default::default()
        };
        let loaded = settings.load(0);
        assert_eq!(loaded.viewer.map(|v| v.id), Some(42));
        assert_eq!(loaded.games.len(), DEMO_GAMES);
    }
}
