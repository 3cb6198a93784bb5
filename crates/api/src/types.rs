//! Tags naming keys and cipher algorithms
//!
//! Every tag carries its PSA Crypto encoding so vectors and results can be
//! exchanged with an implementation written against the C API.

use core::fmt;

use crate::error::{Error, Result};

/// Algorithm family a symmetric key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyType {
    Aes,
    Aria,
    Camellia,
    Des,
    Chacha20,
    Xchacha20,
}

impl KeyType {
    pub const ALL: [KeyType; 6] = [
        KeyType::Aes,
        KeyType::Aria,
        KeyType::Camellia,
        KeyType::Des,
        KeyType::Chacha20,
        KeyType::Xchacha20,
    ];

    /// PSA `psa_key_type_t` encoding
    pub const fn value(self) -> u16 {
        match self {
            Self::Aes => 0x2400,
            Self::Aria => 0x2406,
            Self::Camellia => 0x2403,
            Self::Des => 0x2301,
            Self::Chacha20 => 0x2004,
            Self::Xchacha20 => 0x2007,
        }
    }

    pub fn from_value(value: u16) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kt| kt.value() == value)
            .ok_or(Error::UnknownEncoding {
                context: "key type",
                value: u32::from(value),
            })
    }

    /// Block size in bytes; stream ciphers report 1
    pub const fn block_size(self) -> usize {
        match self {
            Self::Aes | Self::Aria | Self::Camellia => 16,
            Self::Des => 8,
            Self::Chacha20 | Self::Xchacha20 => 1,
        }
    }

    pub const fn is_block_cipher(self) -> bool {
        self.block_size() > 1
    }

    /// Whether a key of `len` bytes is a legal size for this family
    ///
    /// DES accepts single, two-key and three-key material.
    pub const fn is_valid_key_size(self, len: usize) -> bool {
        match self {
            Self::Aes | Self::Aria | Self::Camellia => matches!(len, 16 | 24 | 32),
            Self::Des => matches!(len, 8 | 16 | 24),
            Self::Chacha20 | Self::Xchacha20 => len == 32,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Aes => "PSA_KEY_TYPE_AES",
            Self::Aria => "PSA_KEY_TYPE_ARIA",
            Self::Camellia => "PSA_KEY_TYPE_CAMELLIA",
            Self::Des => "PSA_KEY_TYPE_DES",
            Self::Chacha20 => "PSA_KEY_TYPE_CHACHA20",
            Self::Xchacha20 => "PSA_KEY_TYPE_XCHACHA20",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Operations a provisioned key may be used for
    ///
    /// Encodings match `psa_key_usage_t`. Only `ENCRYPT` and `DECRYPT` are
    /// consulted by the cipher entry points; the rest exist so that keys
    /// carrying extra permissions can be described faithfully.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct KeyUsage: u32 {
        const EXPORT = 0x0000_0001;
        const COPY = 0x0000_0002;
        const CACHE = 0x0000_0004;
        const ENCRYPT = 0x0000_0100;
        const DECRYPT = 0x0000_0200;
        const SIGN_MESSAGE = 0x0000_0400;
        const VERIFY_MESSAGE = 0x0000_0800;
        const SIGN_HASH = 0x0000_1000;
        const VERIFY_HASH = 0x0000_2000;
        const DERIVE = 0x0000_4000;
    }
}

/// Cipher mode or stream cipher selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    CbcNoPadding,
    CbcPkcs7,
    Ctr,
    Cfb,
    Ofb,
    EcbNoPadding,
    StreamCipher,
    CcmStarNoTag,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::CbcNoPadding,
        Algorithm::CbcPkcs7,
        Algorithm::Ctr,
        Algorithm::Cfb,
        Algorithm::Ofb,
        Algorithm::EcbNoPadding,
        Algorithm::StreamCipher,
        Algorithm::CcmStarNoTag,
    ];

    /// PSA `psa_algorithm_t` encoding
    pub const fn value(self) -> u32 {
        match self {
            Self::CbcNoPadding => 0x0440_4000,
            Self::CbcPkcs7 => 0x0440_4100,
            Self::EcbNoPadding => 0x0440_4400,
            Self::Ctr => 0x04C0_1000,
            Self::Cfb => 0x04C0_1100,
            Self::Ofb => 0x04C0_1200,
            Self::CcmStarNoTag => 0x04C0_1300,
            Self::StreamCipher => 0x0480_0100,
        }
    }

    pub fn from_value(value: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.value() == value)
            .ok_or(Error::UnknownEncoding {
                context: "algorithm",
                value,
            })
    }

    /// Modes that only accept whole blocks of input
    pub const fn requires_whole_blocks(self) -> bool {
        matches!(self, Self::CbcNoPadding | Self::EcbNoPadding)
    }

    pub const fn is_padded(self) -> bool {
        matches!(self, Self::CbcPkcs7)
    }

    /// Whether the algorithm is defined for keys of the given family
    pub const fn is_compatible_with(self, key_type: KeyType) -> bool {
        match self {
            Self::CbcNoPadding
            | Self::CbcPkcs7
            | Self::EcbNoPadding
            | Self::Ctr
            | Self::Cfb
            | Self::Ofb => key_type.is_block_cipher(),
            Self::CcmStarNoTag => key_type.block_size() == 16,
            Self::StreamCipher => !key_type.is_block_cipher(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::CbcNoPadding => "PSA_ALG_CBC_NO_PADDING",
            Self::CbcPkcs7 => "PSA_ALG_CBC_PKCS7",
            Self::EcbNoPadding => "PSA_ALG_ECB_NO_PADDING",
            Self::Ctr => "PSA_ALG_CTR",
            Self::Cfb => "PSA_ALG_CFB",
            Self::Ofb => "PSA_ALG_OFB",
            Self::CcmStarNoTag => "PSA_ALG_CCM_STAR_NO_TAG",
            Self::StreamCipher => "PSA_ALG_STREAM_CIPHER",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Attributes supplied when provisioning a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyAttributes {
    pub key_type: KeyType,
    pub bits: usize,
    pub usage: KeyUsage,
    pub algorithm: Algorithm,
}

impl KeyAttributes {
    /// Attributes for `key_len` bytes of material of the given family
    pub fn new(key_type: KeyType, key_len: usize, usage: KeyUsage, algorithm: Algorithm) -> Self {
        Self {
            key_type,
            bits: key_len * 8,
            usage,
            algorithm,
        }
    }
}

/// Opaque identifier of a provisioned key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(pub u32);
