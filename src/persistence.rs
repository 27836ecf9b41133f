//! JSON data file holding every set and the theme preference
//!
//! The file is rewritten in full after every mutation. A missing or
//! unparsable file loads as an empty store rather than an error.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::constants::storage::INDENT;
use crate::store::Store;

#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the store. A missing file or content that is not a JSON object
    /// (including bytes that are not UTF-8) yields an empty store; any other
    /// read failure is returned so the file is never overwritten blindly.
    pub fn load(&self) -> Result<Store> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!(path = ?self.path, "Data file not found, starting with no sets");
                return Ok(Store::new());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read data file {:?}", self.path));
            }
        };

        match serde_json::from_slice::<Store>(&bytes) {
            Ok(store) => {
                info!(path = ?self.path, sets = store.len(), theme = %store.theme(), "Loaded data file");
                Ok(store)
            }
            Err(err) => {
                warn!(path = ?self.path, error = %err, "Data file is malformed, starting with no sets");
                Ok(Store::new())
            }
        }
    }

    /// Overwrite the data file with the full store
    pub fn save(&self, store: &Store) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }

        let json = to_pretty_json(store).context("Failed to serialize sets to JSON")?;

        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write data file {:?}", self.path))?;

        info!(path = ?self.path, sets = store.len(), "Saved data file");
        Ok(())
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use tempfile::TempDir;

    fn data_file(dir: &TempDir) -> DataFile {
        DataFile::new(dir.path().join("sets.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = data_file(&dir).load().unwrap();
        assert!(store.is_empty());
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let file = data_file(&dir);
        fs::write(file.path(), "{ not json").unwrap();
        assert!(file.load().unwrap().is_empty());

        fs::write(file.path(), "").unwrap();
        assert!(file.load().unwrap().is_empty());

        fs::write(file.path(), r#"["a", "b"]"#).unwrap();
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_non_utf8_file_is_malformed() {
        let dir = TempDir::new().unwrap();
        let file = data_file(&dir);
        fs::write(file.path(), b"{\"Fruits\": [\"Apple\"], \"Menu\": [\"Caf\xE9\"]}").unwrap();
        assert!(file.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_unreadable_path_is_error() {
        let dir = TempDir::new().unwrap();
        // A directory in place of the file can't be read as one
        let file = DataFile::new(dir.path());
        let err = file.load().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read data file"));
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let file = data_file(&dir);

        let mut store = Store::new();
        store.create_set("Fruits").unwrap();
        for option in ["Pear", "Apple", "Plum"] {
            store.add_option("Fruits", option).unwrap();
        }
        store.create_set("Empty").unwrap();
        store.set_theme(Theme::Dark);

        file.save(&store).unwrap();
        let loaded = file.load().unwrap();

        assert_eq!(loaded, store);
        assert_eq!(loaded.options("Fruits").unwrap(), ["Pear", "Apple", "Plum"]);
        assert_eq!(loaded.theme(), Theme::Dark);
    }

    #[test]
    fn test_save_writes_indented_utf8() {
        let dir = TempDir::new().unwrap();
        let file = data_file(&dir);

        let mut store = Store::new();
        store.create_set("Città").unwrap();
        store.add_option("Città", "Perù").unwrap();
        file.save(&store).unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        assert!(contents.contains("\n    \"Città\": [\n        \"Perù\"\n    ]"));
        assert!(contents.contains("\"__theme__\": \"light\""));
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let file = DataFile::new(dir.path().join("nested").join("sets.json"));
        file.save(&Store::new()).unwrap();
        assert!(file.path().exists());
    }

    #[test]
    fn test_load_file_without_theme_key() {
        let dir = TempDir::new().unwrap();
        let file = data_file(&dir);
        fs::write(file.path(), r#"{"Fruits": ["Apple", "Pear"], "Colors": []}"#).unwrap();

        let store = file.load().unwrap();
        assert_eq!(store.set_names().collect::<Vec<_>>(), vec!["Colors", "Fruits"]);
        assert_eq!(store.theme(), Theme::Light);
    }
}
