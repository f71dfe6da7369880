use crate::resource::ResourceError;
use crate::resource::archive::ArchiveReader;
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Scheme of handles pointing at plain filesystem locations
pub const FILE_SCHEME: &str = "file";
/// Scheme of handles pointing inside a zip archive
pub const ARCHIVE_SCHEME: &str = "jar";
/// Marker between the archive location and the entry name in an archive handle
pub const ARCHIVE_SEPARATOR: char = '!';
/// Suffix appended to a code unit's slash-separated name to find its marker resource
pub const MARKER_SUFFIX: &str = ".class";
/// Default cap on the bytes read from a single archive entry (50 MB)
pub const DEFAULT_MAX_ENTRY_SIZE: u64 = 50 * 1024 * 1024;

const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'!');

/// URL-like locating handle returned by a [`ResourceLoader`].
///
/// `file` handles carry a percent-encoded absolute path (`file:/srv/app/res`).
/// `jar` handles carry `file:<archive>!/<entry>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceHandle {
    scheme: String,
    path: String,
}

impl ResourceHandle {
    pub fn new(scheme: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            path: path.into(),
        }
    }

    /// Handle for a location on the local filesystem
    pub fn for_file(path: &Path) -> Self {
        Self::new(FILE_SCHEME, encode_system_path(path))
    }

    /// Handle for an entry inside a zip archive on the local filesystem
    pub fn for_archive_entry(archive: &Path, entry: &str) -> Self {
        Self::new(
            ARCHIVE_SCHEME,
            format!(
                "{}:{}{}/{}",
                FILE_SCHEME,
                encode_system_path(archive),
                ARCHIVE_SEPARATOR,
                entry
            ),
        )
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.scheme, self.path)
    }
}

fn encode_system_path(path: &Path) -> String {
    let raw = path.to_string_lossy().replace('\\', "/");
    let raw = if raw.starts_with('/') {
        raw
    } else {
        format!("/{}", raw)
    };
    utf8_percent_encode(&raw, PATH_ENCODE_SET).to_string()
}

/// Percent-decode the path part of a handle into a system path
pub(crate) fn decode_system_path(encoded: &str) -> PathBuf {
    PathBuf::from(percent_decode_str(encoded).decode_utf8_lossy().into_owned())
}

/// Loading context of a code unit: maps logical paths to handles and readers
pub trait ResourceLoader: Send + Sync {
    /// Locate `path`, or `Ok(None)` when no root provides it.
    ///
    /// A root that exists but cannot be read is an error, not a miss.
    fn find_resource(&self, path: &str) -> Result<Option<ResourceHandle>, ResourceError>;

    /// Open `path` for reading, or `Ok(None)` when no root provides it
    fn open_resource(&self, path: &str) -> Result<Option<Box<dyn Read>>, ResourceError>;
}

/// One searchable root of a [`ClassPath`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassPathRoot {
    Directory(PathBuf),
    Archive(PathBuf),
}

impl ClassPathRoot {
    /// Regular files are treated as archives, anything else as a directory
    pub fn detect(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.is_file() {
            Self::Archive(path)
        } else {
            Self::Directory(path)
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Directory(path) | Self::Archive(path) => path,
        }
    }

    fn find(&self, path: &str) -> Result<Option<ResourceHandle>, ResourceError> {
        match self {
            Self::Directory(dir) => {
                let target = if path.is_empty() {
                    dir.clone()
                } else {
                    dir.join(path)
                };
                Ok(target.exists().then(|| ResourceHandle::for_file(&target)))
            }
            Self::Archive(archive_path) => {
                let archive = ArchiveReader::open(archive_path)?;
                // Directories only resolve when the archive stores an explicit entry
                let found = path.is_empty()
                    || archive.contains(path)
                    || archive.contains(&format!("{}/", path));
                Ok(found.then(|| ResourceHandle::for_archive_entry(archive_path, path)))
            }
        }
    }

    fn open(
        &self,
        path: &str,
        max_entry_size: u64,
    ) -> Result<Option<Box<dyn Read>>, ResourceError> {
        match self {
            Self::Directory(dir) => {
                let target = dir.join(path);
                if !target.is_file() {
                    return Ok(None);
                }
                let file = File::open(&target).map_err(|e| ResourceError::io(&target, e))?;
                Ok(Some(Box::new(BufReader::new(file))))
            }
            Self::Archive(archive_path) => {
                let mut archive = ArchiveReader::open(archive_path)?;
                let contents = archive.read_entry(path, max_entry_size)?;
                Ok(contents.map(|bytes| Box::new(Cursor::new(bytes)) as Box<dyn Read>))
            }
        }
    }
}

/// Ordered list of directory and archive roots, searched first to last
#[derive(Debug, Clone)]
pub struct ClassPath {
    roots: Vec<ClassPathRoot>,
    max_entry_size: u64,
}

impl Default for ClassPath {
    fn default() -> Self {
        ClassPathBuilder::new().build()
    }
}

impl ClassPath {
    pub fn builder() -> ClassPathBuilder {
        ClassPathBuilder::new()
    }

    pub fn roots(&self) -> &[ClassPathRoot] {
        &self.roots
    }

    pub fn max_entry_size(&self) -> u64 {
        self.max_entry_size
    }
}

impl ResourceLoader for ClassPath {
    fn find_resource(&self, path: &str) -> Result<Option<ResourceHandle>, ResourceError> {
        for root in &self.roots {
            let found = root.find(path).inspect_err(|e| {
                tracing::warn!(root = %root.path().display(), error = %e, "class path root is unreadable");
            })?;
            if found.is_some() {
                return Ok(found);
            }
        }
        Ok(None)
    }

    fn open_resource(&self, path: &str) -> Result<Option<Box<dyn Read>>, ResourceError> {
        for root in &self.roots {
            if let Some(reader) = root.open(path, self.max_entry_size)? {
                return Ok(Some(reader));
            }
        }
        Ok(None)
    }
}

/// Mutable builder for constructing a class path
#[derive(Debug)]
pub struct ClassPathBuilder {
    roots: Vec<ClassPathRoot>,
    max_entry_size: u64,
}

impl Default for ClassPathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassPathBuilder {
    /// Create a builder with no roots and the default entry size limit
    pub fn new() -> Self {
        Self {
            roots: Vec::new(),
            max_entry_size: DEFAULT_MAX_ENTRY_SIZE,
        }
    }

    /// Set the maximum number of bytes read from one archive entry
    pub fn max_entry_size(mut self, size: u64) -> Self {
        self.max_entry_size = size;
        self
    }

    /// Add a directory root
    pub fn directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.roots.push(ClassPathRoot::Directory(path.into()));
        self
    }

    /// Add a zip archive root
    pub fn archive(mut self, path: impl Into<PathBuf>) -> Self {
        self.roots.push(ClassPathRoot::Archive(path.into()));
        self
    }

    /// Add a root, detecting its kind from the filesystem
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.roots.push(ClassPathRoot::detect(path));
        self
    }

    /// Add several roots, detecting each kind
    pub fn roots<I, P>(self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        paths.into_iter().fold(self, |builder, path| builder.root(path))
    }

    /// Build the class path. Relative roots are made absolute against the
    /// current directory so handles always carry absolute paths.
    pub fn build(self) -> ClassPath {
        let roots = self
            .roots
            .into_iter()
            .map(|root| match root {
                ClassPathRoot::Directory(path) => ClassPathRoot::Directory(absolutize(path)),
                ClassPathRoot::Archive(path) => ClassPathRoot::Archive(absolutize(path)),
            })
            .collect();
        ClassPath {
            roots,
            max_entry_size: self.max_entry_size,
        }
    }
}

fn absolutize(path: PathBuf) -> PathBuf {
    std::path::absolute(&path).unwrap_or(path)
}

/// A packaged unit of code and the loader it was loaded from
#[derive(Clone)]
pub struct CodeUnit {
    name: String,
    loader: Arc<dyn ResourceLoader>,
}

impl CodeUnit {
    /// `name` is the dotted fully-qualified name, e.g. `com.example.Widget`
    pub fn new(
        name: impl Into<String>,
        loader: Arc<dyn ResourceLoader>,
    ) -> Result<Self, ResourceError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ResourceError::InvalidArgument(
                "Code unit name must not be empty".to_string(),
            ));
        }
        Ok(Self { name, loader })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn loader(&self) -> &dyn ResourceLoader {
        self.loader.as_ref()
    }

    /// Resource that always exists inside the unit's container
    pub fn marker_resource(&self) -> String {
        format!("{}{}", self.name.replace('.', "/"), MARKER_SUFFIX)
    }
}

impl fmt::Debug for CodeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeUnit").field("name", &self.name).finish()
    }
}
