//! In-memory store of named option sets
//!
//! The store keeps sets and the theme preference as two separate fields.
//! On disk they share one flat JSON object: every key is a set name mapping
//! to an array of strings, except [`THEME_KEY`] which maps to the theme name.
//! The custom serde impls below translate between the two shapes.

use std::collections::BTreeMap;

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::constants::storage::THEME_KEY;
use crate::error::{ChooserError, ChooserResult};
use crate::theme::Theme;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    /// Set name → options in insertion order. BTreeMap keeps names sorted.
    sets: BTreeMap<String, Vec<String>>,
    theme: Theme,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set names in lexicographic order. The reserved theme key never appears.
    pub fn set_names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    pub fn first_set(&self) -> Option<&str> {
        self.set_names().next()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sets.contains_key(name)
    }

    pub fn options(&self, name: &str) -> Option<&[String]> {
        self.sets.get(name).map(Vec::as_slice)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Create an empty set. The name is trimmed; the stored name is returned.
    pub fn create_set(&mut self, name: &str) -> ChooserResult<String> {
        let name = name.trim();
        // Blank names and the reserved key count as taken
        if name.is_empty() || name == THEME_KEY || self.sets.contains_key(name) {
            return Err(ChooserError::DuplicateName(name.to_string()));
        }

        self.sets.insert(name.to_string(), Vec::new());
        info!(set = %name, "Created set");
        Ok(name.to_string())
    }

    /// Remove a set and all its options. Returns false if it did not exist.
    pub fn delete_set(&mut self, name: &str) -> bool {
        let removed = self.sets.remove(name).is_some();
        if removed {
            info!(set = %name, "Deleted set");
        }
        removed
    }

    /// Append an option to a set. The text is trimmed before the checks.
    pub fn add_option(&mut self, set: &str, text: &str) -> ChooserResult<()> {
        let options = self.sets.get_mut(set).ok_or(ChooserError::NoSetSelected)?;
        let text = text.trim();
        if text.is_empty() {
            return Err(ChooserError::EmptyInput);
        }
        if options.iter().any(|existing| existing == text) {
            return Err(ChooserError::DuplicateOption(text.to_string()));
        }

        options.push(text.to_string());
        info!(set = %set, option = %text, count = options.len(), "Added option");
        Ok(())
    }

    /// Remove the matching option from a set. Returns false if nothing matched.
    pub fn remove_option(&mut self, set: &str, text: &str) -> bool {
        let Some(options) = self.sets.get_mut(set) else {
            return false;
        };
        match options.iter().position(|existing| existing == text) {
            Some(idx) => {
                options.remove(idx);
                info!(set = %set, option = %text, count = options.len(), "Removed option");
                true
            }
            None => false,
        }
    }
}

impl Serialize for Store {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sets.len() + 1))?;
        for (name, options) in &self.sets {
            map.serialize_entry(name, options)?;
        }
        map.serialize_entry(THEME_KEY, self.theme.name())?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Store {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let document = serde_json::Map::<String, Value>::deserialize(deserializer)?;
        Ok(Store::from_document(document))
    }
}

impl Store {
    /// Build a store from a parsed top-level object, skipping entries that
    /// do not fit the expected shape instead of rejecting the whole file.
    fn from_document(document: serde_json::Map<String, Value>) -> Self {
        let mut store = Store::new();

        for (key, value) in document {
            if key == THEME_KEY {
                match value {
                    Value::String(name) => store.theme = Theme::from_name(&name),
                    other => warn!(value = %other, "Ignoring non-string theme entry"),
                }
                continue;
            }

            let Value::Array(items) = value else {
                warn!(set = %key, "Ignoring entry that is not a list of options");
                continue;
            };

            let mut options: Vec<String> = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(text) if text.trim().is_empty() => {
                        warn!(set = %key, "Dropping blank option");
                    }
                    Value::String(text) if options.contains(&text) => {
                        warn!(set = %key, option = %text, "Dropping duplicate option");
                    }
                    Value::String(text) => options.push(text),
                    other => warn!(set = %key, value = %other, "Dropping non-string option"),
                }
            }
            store.sets.insert(key, options);
        }

        store
    }
}
