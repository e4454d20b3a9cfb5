//! User preferences.
//!
//! Hosts keep preferences wherever suits the platform (`localStorage` on the
//! web, a JSON file for native builds); the list only needs a keyed read.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::DataError;

/// Preference key holding the largest list size still drawn as mini-boards.
pub const GAME_LIST_THRESHOLD: &str = "game-list-threshold";

/// Threshold used when the preference is missing or unusable.
pub const DEFAULT_GAME_LIST_THRESHOLD: usize = 10;

/// Read access to a preference store.
pub trait Preferences {
    fn get(&self, key: &str) -> Option<Value>;

    /// The gallery/table switch-over size.
    fn game_list_threshold(&self) -> usize {
        match self.get(GAME_LIST_THRESHOLD) {
            Some(value) => parse_threshold(&value).unwrap_or_else(|| {
                tracing::warn!(key = GAME_LIST_THRESHOLD, %value, "ignoring unusable preference");
                DEFAULT_GAME_LIST_THRESHOLD
            }),
            None => DEFAULT_GAME_LIST_THRESHOLD,
        }
    }
}

/// Accept non-negative integers, non-negative floats (floored) and numeric
/// strings, which is how browser storage hands values back.
fn parse_threshold(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.floor() as u64))
            .map(|n| n as usize),
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(|f| {
            (f >= 0.0).then(|| f.floor() as usize)
        }),
        _ => None,
    }
}

/// In-memory preference map layered over built-in defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreferenceStore {
    values: HashMap<String, Value>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    /// Build a store from a JSON object. Non-object documents are rejected.
    pub fn from_json(json: &str, origin: &str) -> Result<Self, DataError> {
        let values: HashMap<String, Value> =
            serde_json::from_str(json).map_err(|e| DataError::json(origin, e))?;
        Ok(Self { values })
    }

    pub fn load(path: &str) -> Result<Self, DataError> {
        let text = std::fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
        Self::from_json(&text, path)
    }

    pub fn to_json(&self) -> String {
        // A string-keyed map of JSON values always serializes.
        serde_json::to_string_pretty(&self.values).unwrap_or_default()
    }

    pub fn save(&self, path: &str) -> Result<(), DataError> {
        std::fs::write(path, self.to_json()).map_err(|e| DataError::io(path, e))
    }
}

impl Preferences for PreferenceStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn threshold_defaults_when_unset() {
        assert_eq!(PreferenceStore::new().game_list_threshold(), DEFAULT_GAME_LIST_THRESHOLD);
    }

    #[test]
    fn threshold_reads_numbers_and_numeric_strings() {
        let mut prefs = PreferenceStore::new();
        prefs.set(GAME_LIST_THRESHOLD, 25);
        assert_eq!(prefs.game_list_threshold(), 25);

        prefs.set(GAME_LIST_THRESHOLD, json!(3.7));
        assert_eq!(prefs.game_list_threshold(), 3);

        prefs.set(GAME_LIST_THRESHOLD, "7");
        assert_eq!(prefs.game_list_threshold(), 7);
    }

    #[test]
    fn threshold_falls_back_on_garbage() {
        let mut prefs = PreferenceStore::new();
        prefs.set(GAME_LIST_THRESHOLD, json!({"nested": true}));
        assert_eq!(prefs.game_list_threshold(), DEFAULT_GAME_LIST_THRESHOLD);

        prefs.set(GAME_LIST_THRESHOLD, -4);
        assert_eq!(prefs.game_list_threshold(), DEFAULT_GAME_LIST_THRESHOLD);
    }

    #[test]
    fn from_json_object() {
        let prefs = PreferenceStore::from_json(r#"{"game-list-threshold": 0}"#, "prefs.json").unwrap();
        assert_eq!(prefs.game_list_threshold(), 0);
        assert!(PreferenceStore::from_json("[1, 2]", "prefs.json").is_err());
    }

    #[test]
    fn json_round_trip_keeps_values() {
        let mut prefs = PreferenceStore::new();
        prefs.set(GAME_LIST_THRESHOLD, 4);
        let restored = PreferenceStore::from_json(&prefs.to_json(), "memory").unwrap();
        assert_eq!(restored, prefs);
    }
}
