//! Fixed-capacity byte buffer with an explicit used length

use core::fmt;
use core::ops::Deref;

use crate::error::{Result, TableError};

/// A byte buffer of capacity `N` whose first `len` bytes are meaningful
///
/// The backing store may hold initialiser bytes beyond `len`; they are kept
/// so a record can be reproduced exactly but never appear in
/// [`FixedBuf::as_slice`]. Const construction rejects oversized input at
/// compile time.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedBuf<const N: usize> {
    data: [u8; N],
    len: usize,
}

impl<const N: usize> FixedBuf<N> {
    pub const CAPACITY: usize = N;

    /// Buffer whose used length is the initialiser length
    pub const fn new(init: &[u8]) -> Self {
        Self::with_len(init, init.len())
    }

    /// Buffer holding `init` with a separately declared used length
    ///
    /// `len` may be shorter than `init`; the surplus bytes stay in the
    /// backing store only.
    pub const fn with_len(init: &[u8], len: usize) -> Self {
        assert!(init.len() <= N, "initialiser exceeds buffer capacity");
        assert!(len <= N, "declared length exceeds buffer capacity");

        let mut data = [0u8; N];
        let mut i = 0;
        while i < init.len() {
            data[i] = init[i];
            i += 1;
        }
        Self { data, len }
    }

    /// Buffer holding only the first `len` bytes of `init`
    pub const fn truncated(init: &[u8], len: usize) -> Self {
        assert!(len <= init.len(), "truncation past end of initialiser");
        assert!(len <= N, "declared length exceeds buffer capacity");

        let mut data = [0u8; N];
        let mut i = 0;
        while i < len {
            data[i] = init[i];
            i += 1;
        }
        Self { data, len }
    }

    /// Copy a runtime slice, if it fits
    pub fn try_from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() > N {
            return Err(TableError::Capacity {
                context: "FixedBuf::try_from_slice",
                capacity: N,
                actual: slice.len(),
            });
        }
        Ok(Self::new(slice))
    }

    pub const fn empty() -> Self {
        Self { data: [0u8; N], len: 0 }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// The meaningful prefix
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// The whole backing store, including bytes past the used length
    pub fn backing(&self) -> &[u8; N] {
        &self.data
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.as_slice())
    }
}

impl<const N: usize> Default for FixedBuf<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const N: usize> Deref for FixedBuf<N> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<const N: usize> AsRef<[u8]> for FixedBuf<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<const N: usize> fmt::Debug for FixedBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedBuf<{}>[{}; {}]", N, self.len, self.to_hex())
    }
}
