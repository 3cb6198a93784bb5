//! Errors raised while building or checking vectors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("{context}: {actual} bytes exceed buffer capacity of {capacity}")]
    Capacity {
        context: &'static str,
        capacity: usize,
        actual: usize,
    },

    #[error("description of {actual} chars exceeds {max}: {description:?}")]
    DescriptionTooLong {
        description: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("{description:?}: {algorithm} is not defined for {key_type}")]
    IncompatibleAlgorithm {
        description: &'static str,
        key_type: &'static str,
        algorithm: &'static str,
    },

    #[error("{description:?}: expected output length {expected} exceeds output capacity {capacity}")]
    OutputExceedsCapacity {
        description: &'static str,
        expected: usize,
        capacity: usize,
    },

    #[error("{description:?}: {iv} IV bytes plus {body} ciphertext bytes do not make {expected}")]
    CiphertextLength {
        description: &'static str,
        iv: usize,
        body: usize,
        expected: usize,
    },

    #[error("unknown feature flag: {0}")]
    UnknownFeature(String),
}

pub type Result<T> = std::result::Result<T, TableError>;
