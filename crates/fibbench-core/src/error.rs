//! Error type shared by the sequence printer, benchmark, and session.

use crate::sequence::Width;

/// Error type for benchmark sessions.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    /// A term would not fit the selected integer width.
    #[error("F({index}) overflows the {width} width")]
    Overflow {
        /// Index of the first term that does not fit.
        index: u64,
        /// Width that was in use.
        width: Width,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
