use thiserror::Error;

/// Errors produced while tokenizing a descriptor document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("unexpected character '{found}' at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },

    #[error("invalid string literal at offset {offset}")]
    InvalidString { offset: usize },

    #[error("invalid number at offset {offset}")]
    InvalidNumber { offset: usize },
}

/// Errors produced while selecting a clause from a descriptor.
///
/// Every descriptor-format variant names the context index the descriptor was
/// being evaluated against, so a failure on one shard is attributable.
/// Selection never yields a partial result: the first error aborts the whole
/// decode.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("[{context}] descriptor does not support field '{field}'")]
    UnknownField { context: String, field: String },

    #[error("[{context}] descriptor requires a '{field}' element")]
    MissingClause { context: String, field: String },

    #[error("[{context}] descriptor requires an 'indices' element")]
    MissingIndices { context: String },

    #[error("[{context}] indices already specified")]
    DuplicateIndices { context: String },

    #[error("[{context}] index pattern must be a string")]
    InvalidPattern { context: String },

    #[error("[{context}] field '{field}' must hold a clause object")]
    ExpectedClause { context: String, field: String },

    #[error("[{context}] '{value}' is not a valid {field} shorthand")]
    UnknownSentinel {
        context: String,
        field: String,
        value: String,
    },

    #[error("[{context}] expected a descriptor object")]
    ExpectedDescriptor { context: String },

    #[error(transparent)]
    Token(#[from] TokenError),

    /// An error raised by a nested [`ClauseDecoder`](crate::ClauseDecoder)
    /// while materializing a clause, passed through unchanged.
    #[error("{0}")]
    Clause(Box<dyn std::error::Error + Send + Sync>),
}

impl SelectError {
    /// Wrap a clause-decoder error for propagation through the selector.
    pub fn clause(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        SelectError::Clause(Box::new(err))
    }
}
