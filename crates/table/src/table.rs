//! The gated, ordered view of the vector data

use core::ops::Index;

use once_cell::sync::Lazy;

use crate::data::CIPHER_ENCRYPT_VECTORS;
use crate::error::Result;
use crate::feature::FeatureSet;
use crate::vector::TestVector;

/// Cipher entry point a table's vectors are written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntryPoint {
    Encrypt,
    Decrypt,
}

impl EntryPoint {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Encrypt => "psa_cipher_encrypt",
            Self::Decrypt => "psa_cipher_decrypt",
        }
    }
}

/// Vectors selected for one feature configuration
///
/// The table borrows the static records; it never copies or mutates them.
#[derive(Debug, Clone)]
pub struct VectorTable {
    entry_point: EntryPoint,
    features: FeatureSet,
    vectors: Vec<&'static TestVector>,
}

/// The table for the flags this crate was compiled with
pub static BUILD_TABLE: Lazy<VectorTable> = Lazy::new(VectorTable::from_build);

impl VectorTable {
    /// Encrypt vectors whose gate holds under `features`, in source order
    pub fn select(features: FeatureSet) -> Self {
        Self::from_records(EntryPoint::Encrypt, &CIPHER_ENCRYPT_VECTORS, features)
    }

    /// Encrypt vectors for the cargo features this crate was built with
    pub fn from_build() -> Self {
        Self::select(FeatureSet::from_build())
    }

    /// Gate an arbitrary record list
    pub fn from_records(
        entry_point: EntryPoint,
        records: &'static [TestVector],
        features: FeatureSet,
    ) -> Self {
        let vectors = records
            .iter()
            .filter(|v| v.gate.is_satisfied_by(features))
            .collect();
        Self {
            entry_point,
            features,
            vectors,
        }
    }

    /// Number of vectors selected
    pub fn size(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Vector at `index`
    ///
    /// # Panics
    ///
    /// Panics unless `index < self.size()`.
    pub fn get(&self, index: usize) -> &'static TestVector {
        self.vectors[index]
    }

    pub fn try_get(&self, index: usize) -> Option<&'static TestVector> {
        self.vectors.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static TestVector> + '_ {
        self.vectors.iter().copied()
    }

    pub fn entry_point(&self) -> EntryPoint {
        self.entry_point
    }

    pub fn features(&self) -> FeatureSet {
        self.features
    }

    /// Check every selected record's structural invariants
    pub fn validate(&self) -> Result<()> {
        self.iter().try_for_each(TestVector::validate)
    }
}

impl Index<usize> for VectorTable {
    type Output = TestVector;

    fn index(&self, index: usize) -> &TestVector {
        self.get(index)
    }
}

impl<'a> IntoIterator for &'a VectorTable {
    type Item = &'static TestVector;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, &'static TestVector>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter().copied()
    }
}
