//! MTConnect standard versions.
//!
//! Documents declare the version they conform to in their XML namespace
//! (`urn:mtconnect.org:MTConnectDevices:1.7`) while agents report their own
//! build in the header (`1.7.0.3`). Both forms reduce to a `major.minor` pair.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use serde::{Serialize, Serializer};

/// A `major.minor` MTConnect standard version.
///
/// Versions order numerically, so `Version::V1_10 > Version::V1_2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const V1_0: Version = Version::new(1, 0);
    pub const V1_1: Version = Version::new(1, 1);
    pub const V1_2: Version = Version::new(1, 2);
    pub const V1_3: Version = Version::new(1, 3);
    pub const V1_4: Version = Version::new(1, 4);
    pub const V1_5: Version = Version::new(1, 5);
    pub const V1_6: Version = Version::new(1, 6);
    pub const V1_7: Version = Version::new(1, 7);
    pub const V1_8: Version = Version::new(1, 8);
    pub const V2_0: Version = Version::new(2, 0);
    pub const V2_1: Version = Version::new(2, 1);
    pub const V2_2: Version = Version::new(2, 2);

    /// The most recent version known to this crate.
    pub const LATEST: Version = Version::V2_2;

    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Extracts the version from an MTConnect namespace URI.
    ///
    /// Accepts `urn:mtconnect.org:MTConnectDevices:1.7` and the equivalent
    /// namespaces of the other document types. Returns `None` if the URI is
    /// not an MTConnect namespace or carries no version.
    pub fn from_namespace(namespace: &str) -> Option<Self> {
        let namespace = namespace.trim();
        if !namespace.starts_with("urn:mtconnect.org:") {
            return None;
        }
        let (_, version) = namespace.rsplit_once(':')?;
        version.parse().ok()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Error type for a string that is not a `major.minor[...]` version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVersionError(pub String);

impl fmt::Display for ParseVersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid MTConnect version: '{}'", self.0)
    }
}

impl core::error::Error for ParseVersionError {}

impl FromStr for Version {
    type Err = ParseVersionError;

    /// Parses `"1.7"`, `"2.0.1"` or an agent build string such as `"1.7.0.3"`.
    /// Components after the minor version are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError(s.into());
        let mut parts = s.trim().split('.');

        let major = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(err)?;
        let minor = parts
            .next()
            .and_then(|p| p.parse::<u32>().ok())
            .ok_or_else(err)?;

        Ok(Version { major, minor })
    }
}
