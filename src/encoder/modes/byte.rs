/// Byte mode encoder (Mode 0100) for 8-bit data
use crate::encoder::bitstream::BitBuffer;

pub struct ByteEncoder;

impl ByteEncoder {
    /// Append raw bytes, returning the byte count
    pub fn encode(bytes: &[u8], out: &mut BitBuffer) -> usize {
        for &byte in bytes {
            out.append_bits(byte as u32, 8);
        }
        bytes.len()
    }
}
