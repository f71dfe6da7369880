use crate::resource::loader::{
    ARCHIVE_SCHEME, ARCHIVE_SEPARATOR, FILE_SCHEME, ResourceHandle, decode_system_path,
};
use crate::resource::{CodeUnit, LogicalPath, ResourceError};
use std::path::PathBuf;

/// Where and how to read the children of a logical path.
///
/// Created fresh for every resolution; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedLocator {
    /// A directory reachable through ordinary filesystem calls, together with
    /// the logical path it was resolved for
    PlainDirectory {
        absolute_system_path: PathBuf,
        logical_path: LogicalPath,
    },
    /// An entry prefix inside a zip archive, opened lazily when listed
    ArchiveScope {
        archive_path: PathBuf,
        entry_prefix: LogicalPath,
    },
}

/// Resolve `path` under a code unit's root.
///
/// Returns `Ok(None)` when neither the path nor the unit's marker resource can
/// be located by the unit's loader.
pub fn resolve(
    unit: &CodeUnit,
    path: &LogicalPath,
) -> Result<Option<ResolvedLocator>, ResourceError> {
    let loader = unit.loader();

    let handle = match loader.find_resource(path.as_str())? {
        Some(handle) => handle,
        None => {
            // Directory roots inside archives are rarely listed on their own;
            // the unit's marker resource still reveals which container to open.
            let marker = unit.marker_resource();
            tracing::debug!(path = %path, marker = %marker, "path not found directly, locating container");
            match loader.find_resource(&marker)? {
                Some(handle) => handle,
                None => {
                    tracing::debug!(path = %path, unit = unit.name(), "no resource root found");
                    return Ok(None);
                }
            }
        }
    };

    locate(&handle, path).map(Some)
}

fn locate(handle: &ResourceHandle, path: &LogicalPath) -> Result<ResolvedLocator, ResourceError> {
    match handle.scheme() {
        FILE_SCHEME => Ok(ResolvedLocator::PlainDirectory {
            absolute_system_path: decode_system_path(handle.path()),
            logical_path: path.clone(),
        }),
        ARCHIVE_SCHEME => Ok(ResolvedLocator::ArchiveScope {
            archive_path: archive_location(handle)?,
            entry_prefix: path.clone(),
        }),
        other => Err(ResourceError::UnsupportedScheme {
            scheme: other.to_string(),
            location: handle.to_string(),
        }),
    }
}

/// Extract the archive's system path from `file:<archive>!/<entry>`
fn archive_location(handle: &ResourceHandle) -> Result<PathBuf, ResourceError> {
    let encoded = handle.path();
    let prefix = format!("{}:", FILE_SCHEME);

    let end = encoded.find(ARCHIVE_SEPARATOR).ok_or_else(|| {
        ResourceError::MalformedArchiveLocation(format!(
            "no '{}' separator in '{}'",
            ARCHIVE_SEPARATOR, handle
        ))
    })?;

    if !encoded.starts_with(&prefix) || end <= prefix.len() {
        return Err(ResourceError::MalformedArchiveLocation(format!(
            "archive location in '{}' is not a local file",
            handle
        )));
    }

    Ok(decode_system_path(&encoded[prefix.len()..end]))
}
