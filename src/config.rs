//! Validated run configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::encoding::{parse_hex_bytes, parse_hex_u128, HexError};
use crate::pattern::{FixedPattern, Pattern, RandomPattern, SequentialPattern};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("the file count must be a positive integer, got {0}")]
    NonPositiveCount(i64),
    #[error("file sizes must be positive integers, got {0}")]
    NonPositiveSize(i64),
    #[error("file size {0} exceeds the addressable memory of this platform")]
    SizeTooLarge(i64),
    #[error("no file sizes given")]
    NoSizes,
    #[error(transparent)]
    Hex(#[from] HexError),
}

/// How the caller asked for sizes, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeSpec {
    /// Processed in the given order; duplicates allowed.
    List(Vec<i64>),
    /// Inclusive, in either order.
    Range(i64, i64),
}

impl SizeSpec {
    /// Expands the request into the ordered list of sizes to generate. Every
    /// size must be strictly positive.
    pub fn resolve(&self) -> Result<Vec<usize>, ConfigError> {
        let raw: Vec<i64> = match *self {
            SizeSpec::List(ref sizes) => sizes.clone(),
            SizeSpec::Range(a, b) => {
                let (lo, hi) = (a.min(b), a.max(b));
                if lo <= 0 {
                    return Err(ConfigError::NonPositiveSize(lo));
                }
                (lo..=hi).collect()
            }
        };
        if raw.is_empty() {
            return Err(ConfigError::NoSizes);
        }
        raw.into_iter()
            .map(|size| {
                if size <= 0 {
                    return Err(ConfigError::NonPositiveSize(size));
                }
                usize::try_from(size).map_err(|_| ConfigError::SizeTooLarge(size))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMode {
    Random,
    /// Minimal big-endian encoding of the fixed value.
    Fixed(Vec<u8>),
    Sequential { start: u128, end: u128 },
}

impl ContentMode {
    pub fn fixed_from_hex(literal: &str) -> Result<Self, ConfigError> {
        Ok(ContentMode::Fixed(parse_hex_bytes(literal)?))
    }

    pub fn sequential_from_hex(start: &str, end: &str) -> Result<Self, ConfigError> {
        Ok(ContentMode::Sequential {
            start: parse_hex_u128(start)?,
            end: parse_hex_u128(end)?,
        })
    }

    pub fn pattern(&self) -> Box<dyn Pattern> {
        match self {
            ContentMode::Random => Box::new(RandomPattern::new()),
            ContentMode::Fixed(seed) => Box::new(FixedPattern::new(seed.clone())),
            ContentMode::Sequential { start, end } => {
                Box::new(SequentialPattern::new(*start, *end))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub sizes: Vec<usize>,
    pub count: usize,
    pub output: Option<PathBuf>,
    pub base_dir: PathBuf,
    pub mode: ContentMode,
}

impl RunConfig {
    pub fn new(
        sizes: &SizeSpec,
        count: i64,
        output: Option<PathBuf>,
        base_dir: PathBuf,
        mode: ContentMode,
    ) -> Result<Self, ConfigError> {
        if count <= 0 {
            return Err(ConfigError::NonPositiveCount(count));
        }
        let count = usize::try_from(count).map_err(|_| ConfigError::NonPositiveCount(count))?;
        Ok(Self {
            sizes: sizes.resolve()?,
            count,
            output,
            base_dir,
            mode,
        })
    }
}
