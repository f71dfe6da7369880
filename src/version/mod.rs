
use crate::resource::{CodeUnit, ResourceError, read_resource_to_string};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Resource consulted by [`Version::detect`]
pub const VERSION_RESOURCE: &str = "version.properties";
/// Used when a code unit carries no version information
pub const UNKNOWN_VERSION: &str = "X.Y.Z";

#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Empty version string")]
    Empty,

    #[error("Version '{0}' has no minor component")]
    MissingMinor(String),

    #[error("Failed to read version resource: {0}")]
    Resource(#[from] ResourceError),
}

/// A dotted version string split into its parts.
///
/// `1.4.2-SNAPSHOT` has major `1`, minor `4`, patch `2` and snapshot
/// `SNAPSHOT`. Components are kept as strings; nothing here compares versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Version {
    raw: String,
    major: String,
    minor: String,
    patch: Option<String>,
    snapshot: Option<String>,
}

impl Version {
    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        if raw.is_empty() {
            return Err(VersionError::Empty);
        }

        let mut parts = raw.split('.');
        let major = parts.next().unwrap_or_default();
        let minor = parts
            .next()
            .filter(|minor| !minor.is_empty())
            .ok_or_else(|| VersionError::MissingMinor(raw.to_string()))?;

        // Only the first two dash-separated pieces of the third component count
        let mut tail = parts.next().unwrap_or_default().split('-');
        let patch = tail.next().filter(|patch| !patch.is_empty());
        let snapshot = tail.next().filter(|snapshot| !snapshot.is_empty());

        Ok(Self {
            raw: raw.to_string(),
            major: major.to_string(),
            minor: minor.to_string(),
            patch: patch.map(str::to_string),
            snapshot: snapshot.map(str::to_string),
        })
    }

    /// Version of this crate
    pub fn current() -> Self {
        Self::parse(env!("CARGO_PKG_VERSION")).unwrap_or_else(|_| Self::unknown())
    }

    /// Read `version=` from the unit's `version.properties`, or fall back to
    /// `X.Y.Z` when the unit doesn't ship one.
    pub fn detect(unit: &CodeUnit) -> Result<Self, VersionError> {
        let Some(properties) = read_resource_to_string(unit, VERSION_RESOURCE)? else {
            tracing::debug!(unit = unit.name(), "no {} resource", VERSION_RESOURCE);
            return Ok(Self::unknown());
        };

        match property(&properties, "version") {
            Some(raw) => Self::parse(raw),
            None => Ok(Self::unknown()),
        }
    }

    fn unknown() -> Self {
        Self {
            raw: UNKNOWN_VERSION.to_string(),
            major: "X".to_string(),
            minor: "Y".to_string(),
            patch: Some("Z".to_string()),
            snapshot: None,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }

    pub fn patch(&self) -> Option<&str> {
        self.patch.as_deref()
    }

    pub fn snapshot(&self) -> Option<&str> {
        self.snapshot.as_deref()
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Look up `key` in `key=value` / `key: value` properties text
fn property<'a>(text: &'a str, key: &str) -> Option<&'a str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .find_map(|line| {
            let split = line.find(['=', ':'])?;
            let (name, value) = (line[..split].trim(), line[split + 1..].trim());
            (name == key).then_some(value)
        })
}
