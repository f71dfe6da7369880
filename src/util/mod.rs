mod collect;
mod collections;
mod encoding;
mod tests;
mod text;

pub use collect::{DuplicateKey, UniqueMap, UniqueMapExt, merge_unique};
pub use collections::{as_set, frozen_list, frozen_map, frozen_set, union};
pub use encoding::{HexError, bytes_to_hex, hex_to_bytes};
pub use text::{
    display_or_null, format_placeholders, generate_string, generate_string_with, quote_str,
};
