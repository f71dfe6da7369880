use crate::resource::archive::ArchiveReader;
use crate::resource::{CodeUnit, Entry, LogicalPath, ResolvedLocator, ResourceError, resolve};
use std::collections::HashSet;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List the immediate children behind a resolved locator.
///
/// `Ok(None)` means the location does not exist (or is not a directory);
/// `Ok(Some(empty))` means it exists and has no children.
pub fn list_children(locator: &ResolvedLocator) -> Result<Option<HashSet<Entry>>, ResourceError> {
    match locator {
        ResolvedLocator::PlainDirectory {
            absolute_system_path,
            logical_path,
        } => list_directory(absolute_system_path, logical_path),
        ResolvedLocator::ArchiveScope {
            archive_path,
            entry_prefix,
        } => list_archive(archive_path, entry_prefix),
    }
}

/// Resolve `path` under the code unit and list its immediate children
pub fn list_resource(unit: &CodeUnit, path: &str) -> Result<Option<HashSet<Entry>>, ResourceError> {
    let path = LogicalPath::parse(path)?;
    match resolve(unit, &path)? {
        Some(locator) => list_children(&locator),
        None => Ok(None),
    }
}

/// Children of one directory plus the canonical directories above it
type Level = (HashSet<Entry>, Vec<PathBuf>);

/// Collect the relative paths of all files at `path`.
///
/// With `recursive`, directories are descended and their files reported as
/// `dir/.../file`. Returns `Ok(None)` when `path` itself does not exist; a
/// subdirectory that cannot be resolved contributes nothing.
pub fn list_all_files(
    unit: &CodeUnit,
    path: &str,
    recursive: bool,
) -> Result<Option<HashSet<String>>, ResourceError> {
    let root = LogicalPath::parse(path)?;

    let Some((children, ancestors)) = list_level(unit, &root, &[])? else {
        return Ok(None);
    };

    let mut files = HashSet::new();
    let mut pending: Vec<(String, HashSet<Entry>, Vec<PathBuf>)> =
        vec![(String::new(), children, ancestors)];

    while let Some((relative, children, ancestors)) = pending.pop() {
        for child in children {
            let child_relative = if relative.is_empty() {
                child.name().to_string()
            } else {
                format!("{}/{}", relative, child.name())
            };

            if child.is_file() {
                files.insert(child_relative);
            } else if recursive {
                if let Some((grandchildren, chain)) = list_level(unit, &child.path(), &ancestors)? {
                    pending.push((child_relative, grandchildren, chain));
                }
            }
        }
    }

    tracing::debug!(path = %root, recursive, files = files.len(), "enumerated resource files");
    Ok(Some(files))
}

/// Read a resource as text, one `\n` after every line.
///
/// `Ok(None)` when the unit's loader has no such resource.
pub fn read_resource_to_string(
    unit: &CodeUnit,
    path: &str,
) -> Result<Option<String>, ResourceError> {
    let path = LogicalPath::parse(path)?;
    if path.is_root() {
        return Err(ResourceError::InvalidArgument(
            "Resource path must not be empty".to_string(),
        ));
    }

    let Some(reader) = unit.loader().open_resource(path.as_str())? else {
        return Ok(None);
    };

    let mut contents = String::new();
    for line in BufReader::new(reader).lines() {
        let line = line.map_err(|e| ResourceError::io(path.as_str(), e))?;
        contents.push_str(&line);
        contents.push('\n');
    }
    Ok(Some(contents))
}

/// One level of a recursive walk.
///
/// A plain directory whose canonical path is already among `ancestors` links
/// back up the tree and is skipped. Aliases of sibling directories are not
/// ancestors and are listed like any other directory.
fn list_level(
    unit: &CodeUnit,
    path: &LogicalPath,
    ancestors: &[PathBuf],
) -> Result<Option<Level>, ResourceError> {
    let Some(locator) = resolve(unit, path)? else {
        return Ok(None);
    };

    let mut chain = ancestors.to_vec();
    if let ResolvedLocator::PlainDirectory {
        absolute_system_path,
        ..
    } = &locator
    {
        let canonical = std::fs::canonicalize(absolute_system_path)
            .unwrap_or_else(|_| absolute_system_path.clone());
        if chain.contains(&canonical) {
            tracing::debug!(path = %path, "directory links back to an ancestor, skipping");
            return Ok(None);
        }
        chain.push(canonical);
    }

    Ok(list_children(&locator)?.map(|children| (children, chain)))
}

fn list_directory(
    dir: &Path,
    parent: &LogicalPath,
) -> Result<Option<HashSet<Entry>>, ResourceError> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let mut entries = HashSet::new();

    for item in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let item = item.map_err(|e| ResourceError::io(dir, e.into()))?;
        let name = item.file_name().to_string_lossy().into_owned();
        // Follows symlinks, so a link to a file counts as a file
        let is_file = item.path().is_file();
        entries.insert(Entry::new(name, parent.clone(), is_file)?);
    }

    Ok(Some(entries))
}

fn list_archive(
    archive_path: &Path,
    entry_prefix: &LogicalPath,
) -> Result<Option<HashSet<Entry>>, ResourceError> {
    let archive = ArchiveReader::open(archive_path)?;

    let mut matched = false;
    let mut entries = HashSet::new();

    for name in archive.entry_names() {
        let Some(remainder) = strip_entry_prefix(name, entry_prefix.as_str()) else {
            continue;
        };
        matched = true;

        // Everything below an immediate subdirectory collapses into one child
        match remainder.split_once('/') {
            Some((child, _)) if !child.is_empty() => {
                entries.insert(Entry::new(child, entry_prefix.clone(), false)?);
            }
            Some(_) => {}
            None if !remainder.is_empty() => {
                entries.insert(Entry::new(remainder, entry_prefix.clone(), true)?);
            }
            None => {}
        }
    }

    if !matched {
        tracing::debug!(archive = %archive_path.display(), prefix = %entry_prefix, "no entries under prefix");
    }
    Ok(matched.then_some(entries))
}

/// Strip `prefix` from an entry name, only at a segment boundary
fn strip_entry_prefix<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return Some(name.strip_prefix('/').unwrap_or(name));
    }
    let rest = name.strip_prefix(prefix)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix('/')
    }
}
