//! # cipher-vectors
//!
//! Known-answer vectors for single-shot symmetric cipher entry points, in
//! the vocabulary of the PSA Crypto API.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cipher-vectors = { version = "0.3", default-features = false, features = ["std", "aes-128", "cbc-pkcs7"] }
//! ```
//!
//! ## Features
//!
//! Each algorithm family and cipher mode an implementation supports has its
//! own flag. A vector is built into [`BUILD_TABLE`] only when every flag its
//! gate names is enabled.
//!
//! - `aes-128`, `aria`, `des-1key`, `des-2key`, `des-3key`, `chacha20`,
//!   `xchacha20`: algorithm families
//! - `cbc-no-padding`, `cbc-pkcs7`, `cipher-mode-ctr`, `ccm-star-no-tag`:
//!   cipher modes
//! - `full` (default): every flag above
//! - `serde`: hex-encoded [`table::VectorRecord`] export
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`api`]: key types, algorithms, usage flags, status codes and the
//!   [`CipherApi`] trait an implementation under test provides
//! - [`table`]: the vector records and the feature-gated table
//!
//! ```
//! use cipher_vectors::prelude::*;
//!
//! for vector in BUILD_TABLE.iter() {
//!     assert!(vector.output_capacity <= 64);
//!     assert!(vector.key_attributes().bits >= 64);
//! }
//! ```

pub use cipher_vectors_api as api;
pub use cipher_vectors_table as table;

pub use api::{CipherApi, Status};
pub use table::{EntryPoint, FeatureSet, TestVector, VectorTable, BUILD_TABLE};

/// Common imports for harness authors
pub mod prelude {
    pub use crate::api::{
        cipher_encrypt_output_max_size, cipher_encrypt_output_size, cipher_iv_length, Algorithm,
        CipherApi, KeyAttributes, KeyId, KeyType, KeyUsage, Status,
    };

    pub use crate::table::{
        EntryPoint, Feature, FeatureSet, Gate, TableError, TestVector, VectorTable, BUILD_TABLE,
    };
}
