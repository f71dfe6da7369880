use crate::resource::ResourceError;

pub struct PathSanitizer;

impl PathSanitizer {
    /// Normalize a logical resource path so it matches both directory trees
    /// and archive entry tables.
    ///
    /// Segments are split on `/` only, whatever the host separator. Empty and
    /// `.` segments are dropped, so `./pkg//res/` becomes `pkg/res`; a path
    /// with nothing left is the root (`""`). Rejects:
    /// - absolute paths (`/etc/passwd`, `C:/Windows`)
    /// - parent traversal (`..`)
    /// - backslashes, which archives would store as part of a name
    pub fn sanitize(raw_path: &str) -> Result<String, ResourceError> {
        if raw_path.starts_with('/') || has_drive_prefix(raw_path) {
            return Err(ResourceError::InvalidArgument(format!(
                "Absolute path not allowed: {}",
                raw_path
            )));
        }

        let mut segments = Vec::new();
        for segment in raw_path.split('/') {
            match segment {
                "" | "." => continue,
                ".." => {
                    return Err(ResourceError::InvalidArgument(format!(
                        "Parent directory traversal not allowed: {}",
                        raw_path
                    )));
                }
                _ if segment.contains('\\') => {
                    return Err(ResourceError::InvalidArgument(format!(
                        "Backslash in resource path: {}",
                        raw_path
                    )));
                }
                _ => segments.push(segment),
            }
        }

        Ok(segments.join("/"))
    }

    /// Check a single path segment (an entry name): non-empty, no separator.
    pub fn validate_segment(name: &str) -> Result<&str, ResourceError> {
        if name.is_empty() {
            return Err(ResourceError::InvalidArgument(
                "Empty entry name".to_string(),
            ));
        }
        if name.contains('/') {
            return Err(ResourceError::InvalidArgument(format!(
                "Entry name contains a separator: {}",
                name
            )));
        }
        Ok(name)
    }
}

/// `C:` style prefix
fn has_drive_prefix(raw_path: &str) -> bool {
    let bytes = raw_path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
