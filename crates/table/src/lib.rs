//! Known-answer vectors for single-shot symmetric cipher calls
//!
//! The crate holds an ordered, immutable table of [`TestVector`] records.
//! Each record carries a [`Gate`] naming the algorithm families and cipher
//! modes it needs; a [`VectorTable`] is the subset whose gates hold for a
//! given [`FeatureSet`]. [`FeatureSet::from_build`] reads the cargo features
//! of this crate, so a build that disables a flag never selects its vectors.
//!
//! ```
//! use cipher_vectors_table::{FeatureSet, VectorTable};
//!
//! let table = VectorTable::select(FeatureSet::AES_128 | FeatureSet::CBC_NO_PADDING);
//! assert_eq!(table.size(), 3);
//! assert!(table.iter().all(|v| v.algorithm.name() == "PSA_ALG_CBC_NO_PADDING"));
//! ```

#![forbid(unsafe_code)]

pub mod buffer;
pub mod data;
pub mod error;
pub mod feature;
#[cfg(feature = "serde")]
pub mod record;
pub mod table;
pub mod vector;

// Re-export main types for convenience
pub use buffer::FixedBuf;
pub use data::CIPHER_ENCRYPT_VECTORS;
pub use error::{Result, TableError};
pub use feature::{Feature, FeatureSet, Gate};
#[cfg(feature = "serde")]
pub use record::VectorRecord;
pub use table::{EntryPoint, VectorTable, BUILD_TABLE};
pub use vector::{TestVector, DESCRIPTION_MAX_LEN, VECTOR_BUFFER_SIZE};

pub use cipher_vectors_api as api;
