use crate::models::{ECLevel, Version};

/// Block structure of one version/level pair.
///
/// Group 1 blocks carry `group1_data` data codewords each, group 2 blocks one
/// more; every block carries `ecc_per_block` EC codewords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    pub ecc_per_block: usize,
    pub group1_blocks: usize,
    pub group1_data: usize,
    pub group2_blocks: usize,
    pub group2_data: usize,
}

impl BlockLayout {
    pub fn for_version(version: Version, ec_level: ECLevel) -> Self {
        let v = version.number() as usize;
        let idx = ec_level.table_index();
        let ecc_per_block = ECC_CODEWORDS_PER_BLOCK[idx][v] as usize;
        let num_blocks = NUM_ERROR_CORRECTION_BLOCKS[idx][v] as usize;
        let data_total = TOTAL_CODEWORDS[v] as usize - ecc_per_block * num_blocks;

        let group2_blocks = data_total % num_blocks;
        let group1_data = data_total / num_blocks;
        Self {
            ecc_per_block,
            group1_blocks: num_blocks - group2_blocks,
            group1_data,
            group2_blocks,
            group2_data: group1_data + 1,
        }
    }

    pub fn num_blocks(&self) -> usize {
        self.group1_blocks + self.group2_blocks
    }

    pub fn data_codewords(&self) -> usize {
        self.group1_blocks * self.group1_data + self.group2_blocks * self.group2_data
    }

    pub fn total_codewords(&self) -> usize {
        self.data_codewords() + self.num_blocks() * self.ecc_per_block
    }

    /// Data codewords of block `b` (group 1 blocks come first)
    pub fn data_len(&self, block: usize) -> usize {
        if block < self.group1_blocks {
            self.group1_data
        } else {
            self.group2_data
        }
    }
}

/// Data capacity in bits after error correction
pub fn data_capacity_bits(version: Version, ec_level: ECLevel) -> usize {
    BlockLayout::for_version(version, ec_level).data_codewords() * 8
}

/// Total codewords (data + EC) of a version
pub fn total_codewords(version: Version) -> usize {
    TOTAL_CODEWORDS[version.number() as usize] as usize
}

/// Light bits left over after the last codeword in the data area
pub fn remainder_bits(version: Version) -> usize {
    match version.number() {
        2..=6 => 7,
        14..=20 | 28..=34 => 3,
        21..=27 => 4,
        _ => 0,
    }
}

/// Alignment pattern center coordinates (rows and columns share the list)
pub fn alignment_pattern_positions(version: Version) -> &'static [usize] {
    ALIGNMENT_PATTERN_POSITIONS[version.number() as usize - 1]
}

// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

// Index: [version]
const TOTAL_CODEWORDS: [u16; 41] = [
    0, 26, 44, 70, 100, 134, 172, 196, 242, 292, 346, 404, 466, 532, 581, 655, 733, 815, 901, 991,
    1085, 1156, 1258, 1364, 1474, 1588, 1706, 1828, 1921, 2051, 2185, 2323, 2465, 2611, 2761, 2876,
    3034, 3196, 3362, 3532, 3706,
];

// Index: [version - 1]
const ALIGNMENT_PATTERN_POSITIONS: [&[usize]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_layouts_match_total_codewords() {
        for version in Version::MIN.up_to_max() {
            for level in ECLevel::ALL {
                let layout = BlockLayout::for_version(version, level);
                assert_eq!(layout.total_codewords(), total_codewords(version));
                assert!(layout.group1_blocks > 0);
            }
        }
    }

    #[test]
    fn test_published_block_structures() {
        // 1-Q: one block of 13 data + 13 EC
        let layout = BlockLayout::for_version(v(1), ECLevel::Q);
        assert_eq!(
            layout,
            BlockLayout {
                ecc_per_block: 13,
                group1_blocks: 1,
                group1_data: 13,
                group2_blocks: 0,
                group2_data: 14,
            }
        );

        // 5-Q: 2 blocks of 15 and 2 blocks of 16, 18 EC each
        let layout = BlockLayout::for_version(v(5), ECLevel::Q);
        assert_eq!(layout.ecc_per_block, 18);
        assert_eq!((layout.group1_blocks, layout.group1_data), (2, 15));
        assert_eq!((layout.group2_blocks, layout.group2_data), (2, 16));

        // 40-H: 20 x 15 and 61 x 16, 30 EC each
        let layout = BlockLayout::for_version(v(40), ECLevel::H);
        assert_eq!((layout.group1_blocks, layout.group1_data), (20, 15));
        assert_eq!((layout.group2_blocks, layout.group2_data), (61, 16));
        assert_eq!(layout.data_len(19), 15);
        assert_eq!(layout.data_len(20), 16);
    }

    #[test]
    fn test_capacity_bits() {
        assert_eq!(data_capacity_bits(v(1), ECLevel::L), 152);
        assert_eq!(data_capacity_bits(v(1), ECLevel::H), 72);
        assert_eq!(data_capacity_bits(v(40), ECLevel::L), 23648);
        assert_eq!(data_capacity_bits(v(40), ECLevel::H), 10208);
    }

    #[test]
    fn test_alignment_positions_span_symbol() {
        assert!(alignment_pattern_positions(v(1)).is_empty());
        for version in v(2).up_to_max() {
            let positions = alignment_pattern_positions(version);
            assert_eq!(positions.len(), version.number() as usize / 7 + 2);
            assert_eq!(positions[0], 6);
            assert_eq!(*positions.last().unwrap(), version.size() - 7);
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_remainder_bits() {
        assert_eq!(remainder_bits(v(1)), 0);
        assert_eq!(remainder_bits(v(2)), 7);
        assert_eq!(remainder_bits(v(7)), 0);
        assert_eq!(remainder_bits(v(14)), 3);
        assert_eq!(remainder_bits(v(21)), 4);
        assert_eq!(remainder_bits(v(34)), 3);
        assert_eq!(remainder_bits(v(40)), 0);
    }
}
