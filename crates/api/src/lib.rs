//! Public vocabulary of the symmetric cipher API exercised by cipher-vectors
//!
//! This crate names everything a vector refers to without implementing any
//! cryptography: key types, key usage flags, cipher algorithms, status codes,
//! and the output-size rules a caller uses to dimension buffers. The
//! [`CipherApi`] trait is the seam an implementation under test plugs into.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod sizes;
pub mod status;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use sizes::*;
pub use status::Status;
pub use traits::CipherApi;
pub use types::*;
