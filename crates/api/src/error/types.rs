//! Error type definitions for decoding API tags

/// Errors raised while decoding numeric encodings into tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A numeric encoding does not name any known tag
    UnknownEncoding {
        context: &'static str,
        value: u32,
    },

    /// A status code is not part of the API's status space
    UnknownStatus {
        value: i32,
    },
}

/// Result type for vocabulary conversions
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownEncoding { context, value } => {
                write!(f, "{}: unknown encoding {:#010x}", context, value)
            }
            Self::UnknownStatus { value } => {
                write!(f, "unknown status code {}", value)
            }
        }
    }
}
