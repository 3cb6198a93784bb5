//! A single encrypt/decrypt scenario and its expected outcome

use cipher_vectors_api::{
    cipher_iv_length, Algorithm, KeyAttributes, KeyType, KeyUsage, Status,
};

use crate::buffer::FixedBuf;
use crate::error::{Result, TableError};
use crate::feature::Gate;

/// Capacity of the key, input and expected-output buffers
pub const VECTOR_BUFFER_SIZE: usize = 32;

/// Longest description a vector may carry
pub const DESCRIPTION_MAX_LEN: usize = 74;

/// One known-answer scenario
///
/// On success `expected_output_length` counts the IV written ahead of the
/// ciphertext, while `expected_output` holds the ciphertext alone. On
/// failure only `expected_status` is binding, plus a zero
/// `expected_output_length` where the record states one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestVector {
    pub description: &'static str,
    pub key_type: KeyType,
    pub key_material: FixedBuf<VECTOR_BUFFER_SIZE>,
    pub usage: KeyUsage,
    pub algorithm: Algorithm,
    pub input: FixedBuf<VECTOR_BUFFER_SIZE>,
    pub output_capacity: usize,
    pub expected_output: FixedBuf<VECTOR_BUFFER_SIZE>,
    pub expected_output_length: usize,
    pub expected_status: Status,
    pub gate: Gate,
}

impl TestVector {
    /// Bound a description at compile time
    pub const fn describe(description: &'static str) -> &'static str {
        assert!(
            description.len() <= DESCRIPTION_MAX_LEN,
            "vector description too long"
        );
        description
    }

    pub fn key_length(&self) -> usize {
        self.key_material.len()
    }

    pub fn key(&self) -> &[u8] {
        self.key_material.as_slice()
    }

    pub fn input_length(&self) -> usize {
        self.input.len()
    }

    pub fn expects_success(&self) -> bool {
        self.expected_status.is_success()
    }

    /// Attributes used to provision the vector's key
    pub fn key_attributes(&self) -> KeyAttributes {
        KeyAttributes::new(self.key_type, self.key_length(), self.usage, self.algorithm)
    }

    /// IV length the implementation writes ahead of the ciphertext
    pub fn iv_length(&self) -> usize {
        cipher_iv_length(self.key_type, self.algorithm)
    }

    /// Expected ciphertext following the IV, when the call should succeed
    pub fn expected_ciphertext(&self) -> Option<&[u8]> {
        self.expects_success().then(|| self.expected_output.as_slice())
    }

    /// Check the structural invariants of the record
    pub fn validate(&self) -> Result<()> {
        if self.description.len() > DESCRIPTION_MAX_LEN {
            return Err(TableError::DescriptionTooLong {
                description: self.description,
                max: DESCRIPTION_MAX_LEN,
                actual: self.description.len(),
            });
        }

        if !self.algorithm.is_compatible_with(self.key_type) {
            return Err(TableError::IncompatibleAlgorithm {
                description: self.description,
                key_type: self.key_type.name(),
                algorithm: self.algorithm.name(),
            });
        }

        if !self.expects_success() {
            return Ok(());
        }

        if self.expected_output_length > self.output_capacity {
            return Err(TableError::OutputExceedsCapacity {
                description: self.description,
                expected: self.expected_output_length,
                capacity: self.output_capacity,
            });
        }

        let iv = self.iv_length();
        if iv + self.expected_output.len() != self.expected_output_length {
            return Err(TableError::CiphertextLength {
                description: self.description,
                iv,
                body: self.expected_output.len(),
                expected: self.expected_output_length,
            });
        }

        Ok(())
    }
}
