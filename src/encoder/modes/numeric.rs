/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use crate::encoder::bitstream::BitBuffer;

pub struct NumericEncoder;

impl NumericEncoder {
    pub fn is_encodable(c: char) -> bool {
        c.is_ascii_digit()
    }

    /// Append `digits` to `out`, returning the character count
    pub fn encode(digits: &str, out: &mut BitBuffer) -> usize {
        let bytes = digits.as_bytes();
        for group in bytes.chunks(3) {
            let value = group
                .iter()
                .fold(0u32, |acc, &d| acc * 10 + (d - b'0') as u32);
            out.append_bits(value, group.len() * 3 + 1);
        }
        bytes.len()
    }
}
