use byteorder::{BigEndian, ByteOrder};
use thiserror::Error;

const WIDTH: usize = std::mem::size_of::<u128>();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexError {
    #[error("empty hex value")]
    Empty,
    #[error("invalid hex value {0:?}")]
    Invalid(String),
    #[error("hex value {0:?} does not fit in 128 bits")]
    TooWide(String),
}

/// Shortest big-endian byte string for `value`. Zero encodes as a single
/// zero byte.
pub fn minimal_be_bytes(value: u128) -> Vec<u8> {
    let mut buf = [0u8; WIDTH];
    BigEndian::write_u128(&mut buf, value);
    let skip = (value.leading_zeros() as usize / 8).min(WIDTH - 1);
    buf[skip..].to_vec()
}

fn digits(literal: &str) -> Result<String, HexError> {
    let trimmed = literal.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: String = body.chars().filter(|&c| c != '_').collect();
    if digits.is_empty() {
        return Err(HexError::Empty);
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(HexError::Invalid(literal.to_string()));
    }
    Ok(digits)
}

/// Parses a hex literal of any length into the minimal big-endian encoding
/// of the integer it denotes: leading zero digits are dropped and an odd
/// digit count gets a zero nibble in front.
pub fn parse_hex_bytes(literal: &str) -> Result<Vec<u8>, HexError> {
    let digits = digits(literal)?;
    let significant = digits.trim_start_matches('0');
    let padded = match significant.len() {
        0 => "00".to_string(),
        n if n % 2 == 1 => format!("0{significant}"),
        _ => significant.to_string(),
    };
    hex::decode(&padded).map_err(|_| HexError::Invalid(literal.to_string()))
}

pub fn parse_hex_u128(literal: &str) -> Result<u128, HexError> {
    let digits = digits(literal)?;
    u128::from_str_radix(&digits, 16).map_err(|_| HexError::TooWide(literal.to_string()))
}
