use crate::resource::ResourceError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use zip::ZipArchive;
use zip::result::ZipError;

/// Read-only handle on a zip archive, scoped to a single call.
///
/// The underlying file is closed when the reader is dropped.
pub(crate) struct ArchiveReader {
    path: PathBuf,
    archive: ZipArchive<BufReader<File>>,
}

impl ArchiveReader {
    pub(crate) fn open(path: &Path) -> Result<Self, ResourceError> {
        let file = File::open(path).map_err(|e| ResourceError::io(path, e))?;
        let archive = ZipArchive::new(BufReader::new(file))
            .map_err(|e| ResourceError::archive(path, e))?;

        tracing::debug!(archive = %path.display(), entries = archive.len(), "opened archive");

        Ok(Self {
            path: path.to_path_buf(),
            archive,
        })
    }

    /// Names in the entry table, in stored order
    pub(crate) fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.archive.file_names()
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }

    /// Read a file entry fully, refusing more than `max_size` bytes.
    /// Directory entries and missing names yield `None`.
    pub(crate) fn read_entry(
        &mut self,
        name: &str,
        max_size: u64,
    ) -> Result<Option<Vec<u8>>, ResourceError> {
        let entry = match self.archive.by_name(name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(e) => return Err(ResourceError::archive(&self.path, e)),
        };

        if entry.is_dir() {
            return Ok(None);
        }

        let too_large = || ResourceError::EntryTooLarge {
            path: self.path.clone(),
            entry: name.to_string(),
            max: max_size,
        };

        // The header size is only a claim; the read itself is what gets bounded
        if entry.size() > max_size {
            return Err(too_large());
        }

        let mut contents = Vec::new();
        entry
            .take(max_size.saturating_add(1))
            .read_to_end(&mut contents)
            .map_err(|e| ResourceError::io(&self.path, e))?;

        if contents.len() as u64 > max_size {
            return Err(too_large());
        }
        Ok(Some(contents))
    }
}

impl Drop for ArchiveReader {
    fn drop(&mut self) {
        tracing::debug!(archive = %self.path.display(), "closed archive");
    }
}
