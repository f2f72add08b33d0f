//! # Error Types

/// Errors from bertpiece operations.
///
/// Every variant is raised while building a tokenizer;
/// tokenization and encoding themselves are total.
#[derive(Debug, thiserror::Error)]
pub enum BertPieceError {
    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// A configured special token is not present in the vocabulary.
    #[error("special token {token:?} is missing from the vocabulary")]
    MissingSpecialToken {
        /// The literal special token string.
        token: String,
    },

    /// A configured special token is the empty string.
    #[error("special tokens must be non-empty")]
    EmptySpecialToken,

    /// I/O error; includes vocabulary sources which are not valid UTF-8.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for bertpiece operations.
pub type BPResult<T> = core::result::Result<T, BertPieceError>;
