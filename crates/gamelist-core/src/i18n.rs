//! Label translation.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::DataError;

/// Maps a literal UI label to its display string.
pub trait Translate {
    fn translate(&self, label: &str) -> String;
}

/// A flat label → translation table. Labels without an entry come back
/// unchanged, so an empty catalog is the identity translation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Arc<HashMap<String, String>>,
}

impl Catalog {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    pub fn from_json(json: &str, origin: &str) -> Result<Self, DataError> {
        let entries = serde_json::from_str(json).map_err(|e| DataError::json(origin, e))?;
        Ok(Self::new(entries))
    }

    pub fn load(path: &str) -> Result<Self, DataError> {
        let text = std::fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
        Self::from_json(&text, path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translate for Catalog {
    fn translate(&self, label: &str) -> String {
        self.entries
            .get(label)
            .cloned()
            .unwrap_or_else(|| label.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_label() {
        let catalog = Catalog::from_json(r#"{"Move": "Coup", "Opponent's Clock": "Horloge adverse"}"#, "fr.json").unwrap();
        assert_eq!(catalog.translate("Move"), "Coup");
        assert_eq!(catalog.translate("Opponent's Clock"), "Horloge adverse");
        assert_eq!(catalog.translate("Game"), "Game");
        assert_eq!(Catalog::default().translate("White"), "White");
    }
}
