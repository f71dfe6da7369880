use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum HexError {
    #[error("Invalid hex string: {0}")]
    Invalid(#[from] hex::FromHexError),
}

/// Uppercase hex rendering, two characters per byte
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Parse a hex string (either case) back into bytes
pub fn hex_to_bytes(value: &str) -> Result<Vec<u8>, HexError> {
    Ok(hex::decode(value)?)
}
