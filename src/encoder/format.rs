/// Format information: error correction level + mask pattern
use crate::models::{ECLevel, MaskPattern};

/// Format info is 15 bits (5 data + 10 ECC), XOR-masked with 0x5412.
/// Two copies sit next to the finder patterns.
pub struct FormatInfo {
    pub ec_level: ECLevel,
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// BCH(15,5) generator polynomial: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
    const GENERATOR: u32 = 0x537;
    const XOR_MASK: u16 = 0x5412;

    pub fn new(ec_level: ECLevel, mask_pattern: MaskPattern) -> Self {
        Self {
            ec_level,
            mask_pattern,
        }
    }

    /// Masked 15-bit word; bit 14 is the most significant data bit
    pub fn bits(&self) -> u16 {
        let data =
            ((self.ec_level.format_bits() as u32) << 3) | self.mask_pattern.index() as u32;
        let mut remainder = data;
        for _ in 0..10 {
            remainder = (remainder << 1) ^ ((remainder >> 9) * Self::GENERATOR);
        }
        (((data << 10) | (remainder & 0x3FF)) as u16) ^ Self::XOR_MASK
    }

    /// Module coordinates (x, y) of bit `i` (0 = least significant) in the
    /// copy around the top-left finder and in the split copy along the
    /// top-right and bottom-left finders
    pub fn positions(size: usize, i: usize) -> [(usize, usize); 2] {
        let first = match i {
            0..=5 => (8, i),
            6 => (8, 7),
            7 => (8, 8),
            8 => (7, 8),
            _ => (14 - i, 8),
        };
        let second = if i < 8 {
            (size - 1 - i, 8)
        } else {
            (8, size - 15 + i)
        };
        [first, second]
    }
}
