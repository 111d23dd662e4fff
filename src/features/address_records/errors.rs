use thiserror::Error;

/// Failures of record store operations.
///
/// The `Display` text is the message reported to clients in the response
/// envelope; the fields are for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("Address record already exists.")]
    DuplicateName {
        /// Normalized name that is already live
        name: String,
    },

    #[error("State invalid.")]
    InvalidState {
        /// State code as supplied by the caller
        state: String,
        /// Country the state was checked against
        country: String,
    },

    #[error("Address record not found.")]
    NotFound {
        /// Normalized name that has no live record
        name: String,
    },
}
