use thiserror::Error;

/// Errors reported by the fallible `Option` accessors.
#[derive(Debug, Error)]
pub enum OptionError {
    /// A value was requested from `None`.
    #[error("no such element: the Option is None")]
    NoSuchElement,

    /// The payload could not be rendered as JSON.
    #[error("failed to serialize Option: {0}")]
    Serialization(#[from] serde_json::Error),
}
