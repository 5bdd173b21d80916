use crypto::HashParseError;

/// Type alias for checkpoint operations that may result in an error
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for checkpoint operations
///
/// These all indicate a wiring or build defect. Ordinary outcomes such as a block failing a
/// checkpoint are reported through return values instead
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when asked for a network that has no checkpoint dataset
    #[error("Unrecognised network \"{0}\"")]
    UnknownNetwork(String),

    /// Returned when a checkpoint dataset has no entries
    #[error("Checkpoint dataset has no entries")]
    EmptyDataset,

    /// Returned when checkpoint heights are not strictly increasing
    #[error("Checkpoint at height {height} follows checkpoint at height {previous}")]
    NonIncreasingHeight {
        /// Height of the preceding entry
        previous: u64,
        /// Height of the offending entry
        height: u64,
    },

    /// Returned when a hardcoded checkpoint hash cannot be parsed
    #[error("Invalid hash for checkpoint at height {height}")]
    InvalidHash {
        /// Height of the offending entry
        height: u64,
        /// Parse failure
        source: HashParseError,
    },

    /// Returned when the post-checkpoint transaction rate is not a positive number
    #[error("Estimated transactions per day must be positive, got {0}")]
    InvalidTransactionRate(f64),

    /// Returned when the signature check verification factor is not a positive number
    #[error("Signature check verification factor must be positive, got {0}")]
    InvalidSigcheckFactor(f64),
}
