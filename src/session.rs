//! Session state: the store, its data file and the active set
//!
//! Every mutating call writes the data file before returning, so the file
//! always mirrors what the user sees. The GUI and the command line drive
//! the application exclusively through this type.

use rand::Rng;
use tracing::{debug, info};

use crate::chooser;
use crate::error::ChooserError;
use crate::persistence::DataFile;
use crate::store::Store;
use crate::theme::Theme;

/// Failure of a session operation: either a user-facing validation error
/// or a failed write of the data file.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Chooser(#[from] ChooserError),

    #[error(transparent)]
    Save(#[from] anyhow::Error),
}

impl SessionError {
    /// Short dialog title for this error
    pub fn title(&self) -> &'static str {
        match self {
            SessionError::Chooser(err) => err.title(),
            SessionError::Save(_) => "Save failed",
        }
    }
}

pub type SessionResult<T> = Result<T, SessionError>;

pub struct Session {
    store: Store,
    file: DataFile,
    /// Active set name; transient, never persisted
    selected: Option<String>,
}

impl Session {
    /// Load the store from `file` and select the first set, if any.
    /// Fails if the file exists but cannot be read.
    pub fn open(file: DataFile) -> anyhow::Result<Self> {
        let store = file.load()?;
        let selected = store.first_set().map(str::to_string);
        info!(path = ?file.path(), selected = ?selected, "Opened session");
        Ok(Self { store, file, selected })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn file(&self) -> &DataFile {
        &self.file
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Options of the active set, empty when nothing is selected
    pub fn selected_options(&self) -> &[String] {
        self.selected
            .as_deref()
            .and_then(|name| self.store.options(name))
            .unwrap_or(&[])
    }

    pub fn theme(&self) -> Theme {
        self.store.theme()
    }

    /// Make `name` the active set. Unknown names are ignored.
    pub fn select(&mut self, name: &str) {
        if self.store.contains(name) {
            debug!(set = %name, "Selected set");
            self.selected = Some(name.to_string());
        }
    }

    /// Create a set and make it active
    pub fn create_set(&mut self, name: &str) -> SessionResult<()> {
        let name = self.store.create_set(name)?;
        self.selected = Some(name);
        self.persist()
    }

    /// Delete the active set. The selection falls back to the first
    /// remaining set. Does nothing when no set is selected.
    pub fn delete_selected(&mut self) -> SessionResult<()> {
        let Some(name) = self.selected.take() else {
            return Ok(());
        };
        self.store.delete_set(&name);
        self.selected = self.store.first_set().map(str::to_string);
        self.persist()
    }

    /// Append an option to the active set
    pub fn add_option(&mut self, text: &str) -> SessionResult<()> {
        let set = self.selected.as_deref().ok_or(ChooserError::NoSetSelected)?;
        self.store.add_option(set, text)?;
        self.persist()
    }

    /// Remove an option from the active set. No-op without a selection or
    /// when the option is not present.
    pub fn remove_option(&mut self, text: &str) -> SessionResult<()> {
        let Some(set) = self.selected.as_deref() else {
            return Ok(());
        };
        if self.store.remove_option(set, text) {
            self.persist()?;
        }
        Ok(())
    }

    /// Draw a random option from the active set. Never mutates the session.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, ChooserError> {
        let set = self.selected.as_deref().ok_or(ChooserError::NoSetSelected)?;
        let picked = chooser::choose(set, self.selected_options(), rng)?;
        info!(set = %set, option = %picked, "Chose option");
        Ok(picked)
    }

    /// Switch between the light and dark presets and persist the choice
    pub fn toggle_theme(&mut self) -> SessionResult<Theme> {
        let theme = self.store.theme().toggled();
        self.store.set_theme(theme);
        self.persist()?;
        Ok(theme)
    }

    fn persist(&self) -> SessionResult<()> {
        self.file.save(&self.store)?;
        Ok(())
    }
}
