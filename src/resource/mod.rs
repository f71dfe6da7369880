//! Archive-transparent resource listing.
//!
//! A [`CodeUnit`]'s resources may live in a directory tree or inside a zip
//! archive; both are exposed through the same logical, `/`-separated view.

mod archive;
mod entry;
mod enumerator;
mod error;
mod loader;
mod locator;

pub use entry::{Entry, LogicalPath};
pub use enumerator::{list_all_files, list_children, list_resource, read_resource_to_string};
pub use error::ResourceError;
pub use loader::{
    ARCHIVE_SCHEME, ARCHIVE_SEPARATOR, ClassPath, ClassPathBuilder, ClassPathRoot, CodeUnit,
    DEFAULT_MAX_ENTRY_SIZE, FILE_SCHEME, MARKER_SUFFIX, ResourceHandle, ResourceLoader,
};
pub use locator::{ResolvedLocator, resolve};
