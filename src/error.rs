use thiserror::Error;

/// Errors raised while parsing stimulus filenames or building the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Empty stimulus filename")]
    EmptyFilename,

    #[error("Filename '{0}' does not match {{emotion}}_{{sex}}{{utterance}}[_rvbN].wav")]
    MalformedFilename(String),

    #[error("Unknown emotion code '{0}'")]
    UnknownEmotion(String),

    #[error("Unknown sex marker '{0}', expected F or M")]
    UnknownSex(String),

    #[error("Unsupported reverb suffix '{0}'")]
    UnsupportedReverb(String),

    #[error("Utterance id '{0}' must be a non-empty run of digits")]
    InvalidUtteranceId(String),

    #[error("Discrimination pair {file_a} / {file_b}: {reason}")]
    MismatchedPair {
        file_a: String,
        file_b: String,
        reason: String,
    },

    #[error("Stage list holds {actual} filenames, expected {expected}")]
    UnexpectedCount { expected: usize, actual: usize },

    #[error("Duplicate stimulus filename '{0}'")]
    DuplicateFilename(String),
}

/// Type alias for catalog results
pub type CatalogResult<T> = Result<T, CatalogError>;
