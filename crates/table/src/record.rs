//! Serializable view of a vector for reports and exports

use serde::{Deserialize, Serialize};

use crate::vector::TestVector;

/// A [`TestVector`] flattened to names, numbers and hex strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorRecord {
    pub description: String,
    pub key_type: String,
    pub key: String,
    pub key_length: usize,
    pub usage: u32,
    pub algorithm: String,
    pub input: String,
    pub input_length: usize,
    pub output_capacity: usize,
    pub expected_output: String,
    pub expected_output_length: usize,
    pub expected_status: String,
    pub expected_status_code: i32,
}

impl From<&TestVector> for VectorRecord {
    fn from(v: &TestVector) -> Self {
        Self {
            description: v.description.to_string(),
            key_type: v.key_type.name().to_string(),
            key: v.key_material.to_hex(),
            key_length: v.key_length(),
            usage: v.usage.bits(),
            algorithm: v.algorithm.name().to_string(),
            input: v.input.to_hex(),
            input_length: v.input_length(),
            output_capacity: v.output_capacity,
            expected_output: v.expected_output.to_hex(),
            expected_output_length: v.expected_output_length,
            expected_status: v.expected_status.name().to_string(),
            expected_status_code: v.expected_status.code(),
        }
    }
}

impl TestVector {
    pub fn to_record(&self) -> VectorRecord {
        VectorRecord::from(self)
    }
}
