//! API versions.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{RegistryError, Result};

/// A `major.minor` API version, or the "all versions" wildcard.
///
/// The wildcard compares equal to every version, so [`Version::compare`] is
/// not a total order and `Version` does not implement `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Version {
    /// A concrete release.
    Release { major: u32, minor: u32 },
    /// Every version at once.
    All,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self::Release { major, minor }
    }

    /// Parse a `"major.minor"` or `"all"` version string.
    pub fn parse(version: &str) -> Result<Self> {
        if version == "all" {
            return Ok(Self::All);
        }
        let invalid = || RegistryError::InvalidVersionString(version.to_string());
        let (major, minor) = version.split_once('.').ok_or_else(invalid)?;
        Ok(Self::new(
            parse_component(major).ok_or_else(invalid)?,
            parse_component(minor).ok_or_else(invalid)?,
        ))
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Compare two versions; the wildcard is equal to everything.
    pub fn compare(&self, other: &Version) -> Ordering {
        match (self, other) {
            (Self::All, _) | (_, Self::All) => Ordering::Equal,
            (
                Self::Release { major, minor },
                Self::Release {
                    major: other_major,
                    minor: other_minor,
                },
            ) => (major, minor).cmp(&(other_major, other_minor)),
        }
    }

    /// True when a feature at `feature` belongs to a package at this version.
    pub fn includes(&self, feature: &Version) -> bool {
        self.compare(feature) != Ordering::Less
    }
}

/// Digits only; `u32::from_str` alone would also take a leading `+`.
fn parse_component(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl FromStr for Version {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Release { major, minor } => write!(f, "{major}.{minor}"),
            Self::All => f.write_str("all"),
        }
    }
}
