use crate::resource::ResourceError;
use crate::security::PathSanitizer;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A `/`-separated location relative to a code unit's root.
///
/// Never carries a trailing slash; the empty path is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LogicalPath(String);

impl LogicalPath {
    /// The root of a code unit
    pub fn root() -> Self {
        Self(String::new())
    }

    /// Parse and normalize a raw path (rejects traversal and absolute paths)
    pub fn parse(raw: &str) -> Result<Self, ResourceError> {
        PathSanitizer::sanitize(raw).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Append one segment; joining onto the root yields the bare segment
    pub fn join(&self, name: &str) -> Self {
        if self.is_root() {
            Self(name.to_string())
        } else {
            Self(format!("{}/{}", self.0, name))
        }
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One direct child discovered at a logical path.
///
/// Equality and hashing only consider `name` and `is_file`; the parent path
/// is kept for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    name: String,
    parent_path: LogicalPath,
    is_file: bool,
}

impl Entry {
    pub fn new(
        name: impl Into<String>,
        parent_path: LogicalPath,
        is_file: bool,
    ) -> Result<Self, ResourceError> {
        let name = name.into();
        PathSanitizer::validate_segment(&name)?;
        Ok(Self {
            name,
            parent_path,
            is_file,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent_path(&self) -> &LogicalPath {
        &self.parent_path
    }

    pub fn is_file(&self) -> bool {
        self.is_file
    }

    pub fn is_directory(&self) -> bool {
        !self.is_file
    }

    /// Full logical path of this entry
    pub fn path(&self) -> LogicalPath {
        self.parent_path.join(&self.name)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.is_file == other.is_file
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.is_file.hash(state);
    }
}
