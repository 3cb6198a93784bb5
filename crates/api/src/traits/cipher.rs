//! Single-shot symmetric cipher entry points
//!
//! The trait mirrors the shape of `psa_import_key`, `psa_cipher_encrypt`,
//! `psa_cipher_decrypt` and `psa_destroy_key`. Failures are reported as a
//! [`Status`] value, exactly as the C API would return them, so a harness can
//! compare them against expectations without any mapping.

use crate::status::Status;
use crate::types::{Algorithm, KeyAttributes, KeyId};

/// A symmetric cipher implementation that vectors can be run against
///
/// The trait is object safe; a harness may hold it as `&dyn CipherApi`.
pub trait CipherApi {
    /// Provision `data` as a key with the given attributes
    fn import_key(&mut self, attributes: &KeyAttributes, data: &[u8]) -> Result<KeyId, Status>;

    /// Release a key previously returned by [`CipherApi::import_key`]
    fn destroy_key(&mut self, key: KeyId) -> Result<(), Status>;

    /// Encrypt `input`, writing the generated IV followed by the ciphertext
    ///
    /// Returns the number of bytes written to `output`. The implementation
    /// must not write past `output.len()`.
    fn cipher_encrypt(
        &mut self,
        key: KeyId,
        alg: Algorithm,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<usize, Status>;

    /// Decrypt `input`, whose first bytes are the IV
    ///
    /// Returns the number of plaintext bytes written to `output`.
    fn cipher_decrypt(
        &mut self,
        key: KeyId,
        alg: Algorithm,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<usize, Status>;
}
