//! Error types for set and option manipulation

/// Alias for `Result<T, ChooserError>`.
pub type ChooserResult<T> = Result<T, ChooserError>;

/// Recoverable, user-facing errors. None of these are fatal: each one is
/// reported in a dialog and the user corrects the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChooserError {
    /// A set with the same name already exists (or the name is reserved).
    #[error("set \"{0}\" already exists")]
    DuplicateName(String),

    /// Input was blank after trimming.
    #[error("input must not be empty")]
    EmptyInput,

    /// The option is already present in the set.
    #[error("option \"{0}\" is already in the set")]
    DuplicateOption(String),

    /// An operation needed an active set but none is selected.
    #[error("no set selected")]
    NoSetSelected,

    /// The set has no options to choose from.
    #[error("set \"{0}\" has no options")]
    EmptySet(String),
}

impl ChooserError {
    /// Short dialog title for this error
    pub fn title(&self) -> &'static str {
        match self {
            ChooserError::DuplicateName(_) => "Duplicate set",
            ChooserError::EmptyInput => "Empty value",
            ChooserError::DuplicateOption(_) => "Duplicate option",
            ChooserError::NoSetSelected => "No set selected",
            ChooserError::EmptySet(_) => "Empty set",
        }
    }
}
