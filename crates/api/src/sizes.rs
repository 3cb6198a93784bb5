//! Key sizes and output-size rules for single-shot cipher calls
//!
//! A single-shot encrypt writes the generated IV followed by the
//! ciphertext, so every size here includes the IV.

use crate::types::{Algorithm, KeyType};

/// AES-128 key size in bytes
pub const AES_16B_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES_24B_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES_32B_KEY_SIZE: usize = 32;

/// Single DES key size in bytes
pub const DES_8B_KEY_SIZE: usize = 8;

/// Two-key triple DES key size in bytes
pub const DES3_2B_KEY_SIZE: usize = 16;

/// Three-key triple DES key size in bytes
pub const DES3_3B_KEY_SIZE: usize = 24;

/// Largest block size of any supported block cipher
pub const BLOCK_CIPHER_BLOCK_MAX_SIZE: usize = 16;

/// Largest IV or nonce any supported cipher generates (XChaCha20's nonce)
pub const CIPHER_IV_MAX_SIZE: usize = 24;

/// Nonce length used by CCM* without tag
pub const CCM_STAR_NONCE_SIZE: usize = 13;

/// ChaCha20 nonce length
pub const CHACHA20_NONCE_SIZE: usize = 12;

/// XChaCha20 nonce length
pub const XCHACHA20_NONCE_SIZE: usize = 24;

const fn round_up_to_multiple(block: usize, len: usize) -> usize {
    len.div_ceil(block) * block
}

/// Output buffer size sufficient for encrypting `input_length` bytes with
/// any supported block cipher mode
///
/// Mirrors `PSA_CIPHER_ENCRYPT_OUTPUT_MAX_SIZE`: room for one extra padding
/// block plus the largest IV or nonce.
pub const fn cipher_encrypt_output_max_size(input_length: usize) -> usize {
    round_up_to_multiple(BLOCK_CIPHER_BLOCK_MAX_SIZE, input_length + 1) + CIPHER_IV_MAX_SIZE
}

/// IV or nonce length generated for `alg` with a key of `key_type`
///
/// Returns 0 when the pairing is undefined or takes no IV.
pub const fn cipher_iv_length(key_type: KeyType, alg: Algorithm) -> usize {
    if !alg.is_compatible_with(key_type) {
        return 0;
    }
    match alg {
        Algorithm::CbcNoPadding
        | Algorithm::CbcPkcs7
        | Algorithm::Ctr
        | Algorithm::Cfb
        | Algorithm::Ofb => key_type.block_size(),
        Algorithm::EcbNoPadding => 0,
        Algorithm::CcmStarNoTag => CCM_STAR_NONCE_SIZE,
        Algorithm::StreamCipher => match key_type {
            KeyType::Xchacha20 => XCHACHA20_NONCE_SIZE,
            _ => CHACHA20_NONCE_SIZE,
        },
    }
}

/// Exact number of bytes an encrypt of `input_length` bytes writes
///
/// Returns 0 when the pairing is undefined.
pub const fn cipher_encrypt_output_size(
    key_type: KeyType,
    alg: Algorithm,
    input_length: usize,
) -> usize {
    if !alg.is_compatible_with(key_type) {
        return 0;
    }
    let payload = if alg.is_padded() {
        round_up_to_multiple(key_type.block_size(), input_length + 1)
    } else {
        input_length
    };
    cipher_iv_length(key_type, alg) + payload
}

/// Exact number of bytes a decrypt of `input_length` bytes may write
///
/// The IV prefix is consumed; padded modes may write up to the payload size.
pub const fn cipher_decrypt_output_size(
    key_type: KeyType,
    alg: Algorithm,
    input_length: usize,
) -> usize {
    let iv = cipher_iv_length(key_type, alg);
    if !alg.is_compatible_with(key_type) || input_length < iv {
        return 0;
    }
    input_length - iv
}
