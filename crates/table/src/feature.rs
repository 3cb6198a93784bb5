//! Build flags and the gates that select vectors from them

use core::fmt;
use core::str::FromStr;

use crate::error::TableError;

/// One algorithm family or cipher mode an implementation may support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    Aes128,
    Des1Key,
    Des2Key,
    Des3Key,
    Aria,
    Chacha20,
    Xchacha20,
    CbcNoPadding,
    CbcPkcs7,
    CipherModeCtr,
    CcmStarNoTag,
}

impl Feature {
    pub const ALL: [Feature; 11] = [
        Feature::Aes128,
        Feature::Des1Key,
        Feature::Des2Key,
        Feature::Des3Key,
        Feature::Aria,
        Feature::Chacha20,
        Feature::Xchacha20,
        Feature::CbcNoPadding,
        Feature::CbcPkcs7,
        Feature::CipherModeCtr,
        Feature::CcmStarNoTag,
    ];

    pub const fn flag(self) -> FeatureSet {
        match self {
            Self::Aes128 => FeatureSet::AES_128,
            Self::Des1Key => FeatureSet::DES_1KEY,
            Self::Des2Key => FeatureSet::DES_2KEY,
            Self::Des3Key => FeatureSet::DES_3KEY,
            Self::Aria => FeatureSet::ARIA,
            Self::Chacha20 => FeatureSet::CHACHA20,
            Self::Xchacha20 => FeatureSet::XCHACHA20,
            Self::CbcNoPadding => FeatureSet::CBC_NO_PADDING,
            Self::CbcPkcs7 => FeatureSet::CBC_PKCS7,
            Self::CipherModeCtr => FeatureSet::CIPHER_MODE_CTR,
            Self::CcmStarNoTag => FeatureSet::CCM_STAR_NO_TAG,
        }
    }

    /// Cargo feature name (`aes-128`, `cbc-no-padding`, ...)
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aes128 => "aes-128",
            Self::Des1Key => "des-1key",
            Self::Des2Key => "des-2key",
            Self::Des3Key => "des-3key",
            Self::Aria => "aria",
            Self::Chacha20 => "chacha20",
            Self::Xchacha20 => "xchacha20",
            Self::CbcNoPadding => "cbc-no-padding",
            Self::CbcPkcs7 => "cbc-pkcs7",
            Self::CipherModeCtr => "cipher-mode-ctr",
            Self::CcmStarNoTag => "ccm-star-no-tag",
        }
    }

    /// Preprocessor spelling used by C build configurations
    pub const fn macro_name(self) -> &'static str {
        match self {
            Self::Aes128 => "ARCH_TEST_AES_128",
            Self::Des1Key => "ARCH_TEST_DES_1KEY",
            Self::Des2Key => "ARCH_TEST_DES_2KEY",
            Self::Des3Key => "ARCH_TEST_DES_3KEY",
            Self::Aria => "ARCH_TEST_ARIA",
            Self::Chacha20 => "ARCH_TEST_CHACHA20",
            Self::Xchacha20 => "ARCH_TEST_XCHACHA20",
            Self::CbcNoPadding => "ARCH_TEST_CBC_NO_PADDING",
            Self::CbcPkcs7 => "ARCH_TEST_CBC_PKCS7",
            Self::CipherModeCtr => "ARCH_TEST_CIPHER_MODE_CTR",
            Self::CcmStarNoTag => "ARCH_TEST_CCM_STAR_NO_TAG",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = TableError;

    /// Accepts either the cargo spelling or the C macro spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s || f.macro_name() == s)
            .ok_or_else(|| TableError::UnknownFeature(s.to_string()))
    }
}

bitflags::bitflags! {
    /// Set of flags an implementation under test claims to support
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FeatureSet: u16 {
        const AES_128 = 1 << 0;
        const DES_1KEY = 1 << 1;
        const DES_2KEY = 1 << 2;
        const DES_3KEY = 1 << 3;
        const ARIA = 1 << 4;
        const CHACHA20 = 1 << 5;
        const XCHACHA20 = 1 << 6;
        const CBC_NO_PADDING = 1 << 7;
        const CBC_PKCS7 = 1 << 8;
        const CIPHER_MODE_CTR = 1 << 9;
        const CCM_STAR_NO_TAG = 1 << 10;
    }
}

impl FeatureSet {
    /// Flags enabled by this crate's cargo features
    pub const fn from_build() -> Self {
        let mut set = Self::empty();
        if cfg!(feature = "aes-128") {
            set = set.union(Self::AES_128);
        }
        if cfg!(feature = "des-1key") {
            set = set.union(Self::DES_1KEY);
        }
        if cfg!(feature = "des-2key") {
            set = set.union(Self::DES_2KEY);
        }
        if cfg!(feature = "des-3key") {
            set = set.union(Self::DES_3KEY);
        }
        if cfg!(feature = "aria") {
            set = set.union(Self::ARIA);
        }
        if cfg!(feature = "chacha20") {
            set = set.union(Self::CHACHA20);
        }
        if cfg!(feature = "xchacha20") {
            set = set.union(Self::XCHACHA20);
        }
        if cfg!(feature = "cbc-no-padding") {
            set = set.union(Self::CBC_NO_PADDING);
        }
        if cfg!(feature = "cbc-pkcs7") {
            set = set.union(Self::CBC_PKCS7);
        }
        if cfg!(feature = "cipher-mode-ctr") {
            set = set.union(Self::CIPHER_MODE_CTR);
        }
        if cfg!(feature = "ccm-star-no-tag") {
            set = set.union(Self::CCM_STAR_NO_TAG);
        }
        set
    }

    pub fn has(self, feature: Feature) -> bool {
        self.contains(feature.flag())
    }

    /// The individual features in this set, in declaration order
    pub fn features(self) -> impl Iterator<Item = Feature> {
        Feature::ALL.into_iter().filter(move |f| self.has(*f))
    }

    /// Parse a list of feature names, cargo or C spelling
    pub fn from_names<I, S>(names: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().try_fold(Self::empty(), |set, name| {
            Ok(set | name.as_ref().parse::<Feature>()?.flag())
        })
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), |set, f| set | f.flag())
    }
}

/// Condition under which a vector is part of the table
///
/// Gates nest the way the source configuration nests: a record needing a
/// base family and a mode is `All([Flag(family), Flag(mode)])`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Always,
    Flag(Feature),
    All(&'static [Gate]),
    Any(&'static [Gate]),
}

impl Gate {
    pub fn is_satisfied_by(&self, set: FeatureSet) -> bool {
        match self {
            Gate::Always => true,
            Gate::Flag(f) => set.has(*f),
            Gate::All(gates) => gates.iter().all(|g| g.is_satisfied_by(set)),
            Gate::Any(gates) => gates.iter().any(|g| g.is_satisfied_by(set)),
        }
    }

    /// Every flag the gate mentions
    pub fn mentions(&self) -> FeatureSet {
        match self {
            Gate::Always => FeatureSet::empty(),
            Gate::Flag(f) => f.flag(),
            Gate::All(gates) | Gate::Any(gates) => gates
                .iter()
                .fold(FeatureSet::empty(), |set, g| set | g.mentions()),
        }
    }
}
