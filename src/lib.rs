// Public API exports
pub mod function;
pub mod resource;
pub mod security;
pub mod util;
pub mod version;

// Re-export main types for convenience
pub use resource::{
    ClassPath, ClassPathBuilder, ClassPathRoot, CodeUnit, Entry, LogicalPath, ResolvedLocator,
    ResourceError, ResourceHandle, ResourceLoader, list_all_files, list_children, list_resource,
    read_resource_to_string, resolve,
};
pub use security::PathSanitizer;

pub use util::{
    DuplicateKey, HexError, UniqueMap, UniqueMapExt, as_set, bytes_to_hex, display_or_null,
    format_placeholders, frozen_list, frozen_map, frozen_set, generate_string,
    generate_string_with, hex_to_bytes, merge_unique, quote_str, union,
};

pub use version::{Version, VersionError};
