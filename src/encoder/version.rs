/// Version selection and version information (versions 7-40)
use crate::encoder::bitstream::segment_bit_length;
use crate::encoder::modes::Segment;
use crate::encoder::tables::data_capacity_bits;
use crate::error::{QrError, Result};
use crate::models::{ECLevel, Version};

/// Versions sharing one character-count width
const COUNT_WIDTH_RANGES: [(u8, u8); 3] = [(1, 9), (10, 26), (27, 40)];

/// Smallest version >= `min_version` whose data capacity holds `segment`.
///
/// The character count width depends on the version, so the bit length is
/// recomputed for each width range before searching that range.
pub fn select_version(
    segment: &Segment,
    ec_level: ECLevel,
    min_version: Version,
) -> Result<Version> {
    let mut required_bits = 0;
    for (first, last) in COUNT_WIDTH_RANGES {
        if last < min_version.number() {
            continue;
        }
        let start = first.max(min_version.number());
        let Some(first_version) = Version::new(start) else {
            continue;
        };
        required_bits = segment_bit_length(segment, first_version);
        if segment.char_count >= 1 << segment.mode.char_count_bits(first_version) {
            continue;
        }

        for number in start..=last {
            let Some(version) = Version::new(number) else {
                continue;
            };
            if required_bits <= data_capacity_bits(version, ec_level) {
                return Ok(version);
            }
        }
    }

    Err(QrError::InputTooLarge {
        required_bits,
        capacity_bits: data_capacity_bits(Version::MAX, ec_level),
        level: ec_level,
    })
}

/// Version information is 18 bits (6 data + 12 ECC)
pub struct VersionInfo;

impl VersionInfo {
    /// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
    const GENERATOR: u32 = 0x1F25;

    /// 18-bit version word for `version` (only meaningful for v7+)
    pub fn bits(version: Version) -> u32 {
        let data = version.number() as u32;
        let mut remainder = data;
        for _ in 0..12 {
            remainder = (remainder << 1) ^ ((remainder >> 11) * Self::GENERATOR);
        }
        (data << 12) | (remainder & 0xFFF)
    }

    /// Module coordinates (x, y) of bit `i` in the top-right block and its
    /// transposed copy in the bottom-left block
    pub fn positions(size: usize, i: usize) -> [(usize, usize); 2] {
        let a = size - 11 + i % 3;
        let b = i / 3;
        [(a, b), (b, a)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_version_info_bits() {
        assert_eq!(VersionInfo::bits(v(7)), 0x07C94);
        assert_eq!(VersionInfo::bits(v(40)), 0x28C69);
    }

    fn smallest(segment: &Segment, level: ECLevel) -> Version {
        select_version(segment, level, Version::MIN).unwrap()
    }

    #[test]
    fn test_select_smallest_version() {
        let segment = Segment::from_text("HELLO WORLD");
        assert_eq!(smallest(&segment, ECLevel::Q), v(1));

        // 1-H holds 7 bytes, 8 needs version 2
        let segment = Segment::from_text("abcdefg");
        assert_eq!(smallest(&segment, ECLevel::H), v(1));
        let segment = Segment::from_text("abcdefgh");
        assert_eq!(smallest(&segment, ECLevel::H), v(2));
    }

    #[test]
    fn test_count_width_boundary() {
        // 9-L holds 230 bytes with an 8-bit count; 231 bytes must use the
        // 16-bit count of version 10.
        let segment = Segment::from_text(&"x".repeat(230));
        assert_eq!(smallest(&segment, ECLevel::L), v(9));
        let segment = Segment::from_text(&"x".repeat(231));
        assert_eq!(smallest(&segment, ECLevel::L), v(10));
    }

    #[test]
    fn test_min_version_respected() {
        let segment = Segment::from_text("1");
        assert_eq!(select_version(&segment, ECLevel::L, v(12)).unwrap(), v(12));
    }

    #[test]
    fn test_capacity_limits() {
        let segment = Segment::from_text(&"7".repeat(7089));
        assert_eq!(smallest(&segment, ECLevel::L), v(40));
        let segment = Segment::from_text(&"7".repeat(7090));
        assert!(matches!(
            select_version(&segment, ECLevel::L, Version::MIN),
            Err(QrError::InputTooLarge { .. })
        ));

        let segment = Segment::from_text(&"a".repeat(3000));
        let err = select_version(&segment, ECLevel::H, Version::MIN).unwrap_err();
        assert!(matches!(
            err,
            QrError::InputTooLarge {
                required_bits: 24_020,
                capacity_bits: 10_208,
                level: ECLevel::H,
            }
        ));
    }
}
