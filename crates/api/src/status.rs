//! Status codes returned by the cipher API under test
//!
//! Values follow the PSA Certified Crypto API encoding so that results
//! reported by a C implementation can be compared without translation.

use core::fmt;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::{Error, Result};

/// Outcome classification of one API call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum Status {
    Success = 0,
    GenericError = -132,
    NotPermitted = -133,
    NotSupported = -134,
    InvalidArgument = -135,
    InvalidHandle = -136,
    BadState = -137,
    BufferTooSmall = -138,
    AlreadyExists = -139,
    DoesNotExist = -140,
    InsufficientMemory = -141,
    InsufficientStorage = -142,
    InsufficientData = -143,
    CommunicationFailure = -145,
    StorageFailure = -146,
    HardwareFailure = -147,
    InsufficientEntropy = -148,
    InvalidSignature = -149,
    InvalidPadding = -150,
    CorruptionDetected = -151,
    DataCorrupt = -152,
    DataInvalid = -153,
}

impl Status {
    /// Decode a raw status code
    pub fn from_code(code: i32) -> Result<Self> {
        Self::try_from(code).map_err(|_| Error::UnknownStatus { value: code })
    }

    /// Raw status code
    pub fn code(self) -> i32 {
        self.into()
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    /// Upper-case name used by the C API (`PSA_ERROR_BUFFER_TOO_SMALL`, ...)
    pub fn name(self) -> &'static str {
        match self {
            Self::Success => "PSA_SUCCESS",
            Self::GenericError => "PSA_ERROR_GENERIC_ERROR",
            Self::NotPermitted => "PSA_ERROR_NOT_PERMITTED",
            Self::NotSupported => "PSA_ERROR_NOT_SUPPORTED",
            Self::InvalidArgument => "PSA_ERROR_INVALID_ARGUMENT",
            Self::InvalidHandle => "PSA_ERROR_INVALID_HANDLE",
            Self::BadState => "PSA_ERROR_BAD_STATE",
            Self::BufferTooSmall => "PSA_ERROR_BUFFER_TOO_SMALL",
            Self::AlreadyExists => "PSA_ERROR_ALREADY_EXISTS",
            Self::DoesNotExist => "PSA_ERROR_DOES_NOT_EXIST",
            Self::InsufficientMemory => "PSA_ERROR_INSUFFICIENT_MEMORY",
            Self::InsufficientStorage => "PSA_ERROR_INSUFFICIENT_STORAGE",
            Self::InsufficientData => "PSA_ERROR_INSUFFICIENT_DATA",
            Self::CommunicationFailure => "PSA_ERROR_COMMUNICATION_FAILURE",
            Self::StorageFailure => "PSA_ERROR_STORAGE_FAILURE",
            Self::HardwareFailure => "PSA_ERROR_HARDWARE_FAILURE",
            Self::InsufficientEntropy => "PSA_ERROR_INSUFFICIENT_ENTROPY",
            Self::InvalidSignature => "PSA_ERROR_INVALID_SIGNATURE",
            Self::InvalidPadding => "PSA_ERROR_INVALID_PADDING",
            Self::CorruptionDetected => "PSA_ERROR_CORRUPTION_DETECTED",
            Self::DataCorrupt => "PSA_ERROR_DATA_CORRUPT",
            Self::DataInvalid => "PSA_ERROR_DATA_INVALID",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}
