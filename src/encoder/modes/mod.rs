//! QR code data mode encoders
//!
//! This module contains encoders for the supported QR data modes:
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Upper-case letters, digits and ` $%*+-./:`
//! - Byte: 8-bit data (UTF-8 text is written as its raw bytes)
//!
//! A symbol carries exactly one segment; the cheapest mode able to represent
//! the whole input is chosen.

pub mod alphanumeric;
pub mod byte;
pub mod numeric;

use std::fmt;

use crate::encoder::bitstream::BitBuffer;
use crate::models::Version;
use alphanumeric::AlphanumericEncoder;
use byte::ByteEncoder;
use numeric::NumericEncoder;

/// Data encoding mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Mode 0001
    Numeric,
    /// Mode 0010
    Alphanumeric,
    /// Mode 0100
    Byte,
}

impl Mode {
    /// Cheapest mode that covers every character of `text`
    pub fn detect(text: &str) -> Self {
        if text.chars().all(NumericEncoder::is_encodable) {
            Mode::Numeric
        } else if text.chars().all(AlphanumericEncoder::is_encodable) {
            Mode::Alphanumeric
        } else {
            Mode::Byte
        }
    }

    /// Four-bit mode indicator
    pub fn indicator(&self) -> u32 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
        }
    }

    /// Width of the character count field for the version's range
    pub fn char_count_bits(&self, version: Version) -> usize {
        let ver = version.number();
        match self {
            Mode::Numeric => match ver {
                1..=9 => 10,
                10..=26 => 12,
                _ => 14,
            },
            Mode::Alphanumeric => match ver {
                1..=9 => 9,
                10..=26 => 11,
                _ => 13,
            },
            Mode::Byte => match ver {
                1..=9 => 8,
                _ => 16,
            },
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Numeric => "numeric",
            Mode::Alphanumeric => "alphanumeric",
            Mode::Byte => "byte",
        };
        f.write_str(name)
    }
}

/// One mode-tagged run of encoded payload bits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub mode: Mode,
    /// Characters for numeric/alphanumeric, bytes for byte mode
    pub char_count: usize,
    pub data: BitBuffer,
}

impl Segment {
    /// Encode the whole of `text` in the cheapest applicable mode
    pub fn from_text(text: &str) -> Self {
        let mode = Mode::detect(text);
        let mut data = BitBuffer::new();
        let char_count = match mode {
            Mode::Numeric => NumericEncoder::encode(text, &mut data),
            Mode::Alphanumeric => AlphanumericEncoder::encode(text, &mut data),
            Mode::Byte => ByteEncoder::encode(text.as_bytes(), &mut data),
        };
        Self {
            mode,
            char_count,
            data,
        }
    }
}
