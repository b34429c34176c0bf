/// Alphanumeric mode encoder (Mode 0010)
/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
use crate::encoder::bitstream::BitBuffer;

const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    pub fn char_value(c: char) -> Option<u32> {
        ALPHANUMERIC_TABLE
            .iter()
            .position(|&t| t == c)
            .map(|p| p as u32)
    }

    pub fn is_encodable(c: char) -> bool {
        Self::char_value(c).is_some()
    }

    /// Append `text` to `out`, returning the character count.
    /// Characters outside the table are a caller bug; they encode as 0.
    pub fn encode(text: &str, out: &mut BitBuffer) -> usize {
        let values: Vec<u32> = text
            .chars()
            .map(|c| {
                let value = Self::char_value(c);
                debug_assert!(value.is_some(), "{c:?} is not alphanumeric");
                value.unwrap_or(0)
            })
            .collect();

        for pair in values.chunks(2) {
            match pair {
                [first, second] => out.append_bits(first * 45 + second, 11),
                [single] => out.append_bits(*single, 6),
                _ => unreachable!(),
            }
        }
        values.len()
    }
}
