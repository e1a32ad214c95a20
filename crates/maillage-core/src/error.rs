// crates/maillage-core/src/error.rs
use thiserror::Error;

/// Errors produced by the mesh resolver and its reference store.
///
/// The first four variants are the resolver's own error kinds. The remaining
/// ones only come out of dataset loading and configuration.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Identifier is not exactly 9 ASCII digits.
    #[error("invalid mesh identifier {id:?}: {reason}")]
    InvalidIdentifier { id: String, reason: &'static str },

    /// No unit exists for the given code and level.
    #[error("no {niveau} found with code {code:?}")]
    NotFound { code: String, niveau: String },

    /// A `centre` value that is none of the admissible shapes.
    ///
    /// Recoverable: callers exclude the record from distance ranking.
    #[error("unrecognized centre geometry: {0}")]
    UnrecognizedGeometry(String),

    /// The backing store could not answer the query.
    #[error("mesh store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cache encoding error: {0}")]
    Bincode(#[from] bincode::Error),
}

impl MeshError {
    pub(crate) fn not_found(code: &str, niveau: impl ToString) -> Self {
        MeshError::NotFound {
            code: code.to_owned(),
            niveau: niveau.to_string(),
        }
    }

    /// True for the errors a caller should treat as "nothing there".
    pub fn is_not_found(&self) -> bool {
        matches!(self, MeshError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, MeshError>;
