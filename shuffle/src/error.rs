use thiserror::Error;

/// Everything that can go wrong before a shuffle starts. Once the seed and the
/// input have been validated, shuffling itself can't fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShuffleError {
    #[error("missing input: expected a delimited list of integers")]
    MissingInput,

    #[error("invalid RAND_SEED value: {0}")]
    InvalidSeed(String),

    #[error("invalid integer '{0}'")]
    InvalidElement(String),
}
