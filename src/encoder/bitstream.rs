/// Bitstream assembly: MSB-first bit buffer plus terminator and padding
use crate::encoder::modes::Segment;
use crate::encoder::tables::data_capacity_bits;
use crate::error::{QrError, Result};
use crate::models::{ECLevel, Version};

/// Pad codewords appended alternately once the data is byte aligned
const PAD_CODEWORDS: [u8; 2] = [0xEC, 0x11];

/// Append-only sequence of bits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Append the low `len` bits of `value`, most significant first
    pub fn append_bits(&mut self, value: u32, len: usize) {
        debug_assert!(
            len <= 31 && value >> len == 0,
            "{value} does not fit {len} bits"
        );
        for i in (0..len).rev() {
            self.bits.push((value >> i) & 1 != 0);
        }
    }

    pub fn extend(&mut self, other: &BitBuffer) {
        self.bits.extend_from_slice(&other.bits);
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Pack into bytes, MSB first; a trailing partial byte is zero-filled
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |byte, (i, &bit)| byte | ((bit as u8) << (7 - i)))
            })
            .collect()
    }
}

/// Bits used by header + payload of `segment` at `version`
pub fn segment_bit_length(segment: &Segment, version: Version) -> usize {
    4 + segment.mode.char_count_bits(version) + segment.data.len()
}

/// Build the data codewords for `segment` at `version`/`ec_level`:
/// mode indicator, character count, payload, terminator, byte alignment and
/// 0xEC/0x11 padding up to the exact data capacity.
pub fn build_data_codewords(
    segment: &Segment,
    version: Version,
    ec_level: ECLevel,
) -> Result<Vec<u8>> {
    let capacity = data_capacity_bits(version, ec_level);
    let count_bits = segment.mode.char_count_bits(version);
    let required = segment_bit_length(segment, version);
    if required > capacity || segment.char_count >= 1 << count_bits {
        return Err(QrError::InputTooLarge {
            required_bits: required,
            capacity_bits: capacity,
            level: ec_level,
        });
    }

    let mut buffer = BitBuffer::with_capacity(capacity);
    buffer.append_bits(segment.mode.indicator(), 4);
    buffer.append_bits(segment.char_count as u32, count_bits);
    buffer.extend(&segment.data);

    let terminator = (capacity - buffer.len()).min(4);
    buffer.append_bits(0, terminator);
    let align = (8 - buffer.len() % 8) % 8;
    buffer.append_bits(0, align);

    for &pad in PAD_CODEWORDS.iter().cycle() {
        if buffer.len() >= capacity {
            break;
        }
        buffer.append_bits(pad as u32, 8);
    }
    debug_assert_eq!(buffer.len(), capacity);

    Ok(buffer.to_bytes())
}
