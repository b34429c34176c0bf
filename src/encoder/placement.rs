/// Codeword placement following the zigzag pattern
use crate::encoder::function_mask::{Module, ModuleGrid};

/// Every cell of a `size`x`size` symbol in codeword placement order:
/// column pairs from the right edge leftwards (column 6 skipped), bottom-up
/// in the first pair and alternating direction afterwards, right column of
/// each pair first. Function cells are included; callers filter them.
pub struct ZigZag {
    size: usize,
    col: usize,
    step: usize,
    upward: bool,
}

impl ZigZag {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            col: size - 1,
            step: 0,
            upward: true,
        }
    }
}

impl Iterator for ZigZag {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.col == 0 || self.col > self.size {
            return None;
        }
        if self.col == 6 {
            self.col = 5;
        }

        let vert = self.step / 2;
        let x = self.col - self.step % 2;
        let y = if self.upward {
            self.size - 1 - vert
        } else {
            vert
        };

        self.step += 1;
        if self.step == 2 * self.size {
            self.step = 0;
            self.upward = !self.upward;
            // wraps past zero once the last pair (columns 1 and 0) is done
            self.col = self.col.wrapping_sub(2);
        }
        Some((x, y))
    }
}

impl ModuleGrid {
    /// Phase 2: write codewords MSB-first into the data area, then light
    /// remainder bits.
    ///
    /// # Panics
    /// If the codewords plus `remainder_bits` do not exactly fill the
    /// data area.
    pub fn place_codewords(&mut self, codewords: &[u8], remainder_bits: usize) {
        let data_bits = codewords.len() * 8;
        assert_eq!(
            data_bits + remainder_bits,
            self.data_modules_count(),
            "codeword stream does not fill version {} data area",
            self.version()
        );

        let mut bit_idx = 0;
        for (x, y) in ZigZag::new(self.size()) {
            if self.get(x, y) != Module::Unset {
                continue;
            }
            let dark =
                bit_idx < data_bits && (codewords[bit_idx / 8] >> (7 - bit_idx % 8)) & 1 == 1;
            self.set(x, y, Module::Data(dark));
            bit_idx += 1;
        }
        debug_assert_eq!(bit_idx, data_bits + remainder_bits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::tables::{remainder_bits, total_codewords};
    use crate::models::Version;

    #[test]
    fn test_zigzag_visits_every_cell_outside_column_6_once() {
        let size = 25;
        let cells: Vec<(usize, usize)> = ZigZag::new(size).collect();
        assert_eq!(cells.len(), size * (size - 1));
        let mut seen = std::collections::HashSet::new();
        for &(x, y) in &cells {
            assert_ne!(x, 6);
            assert!(seen.insert((x, y)));
        }
    }

    #[test]
    fn test_zigzag_start_order() {
        let cells: Vec<(usize, usize)> = ZigZag::new(21).take(5).collect();
        assert_eq!(
            cells,
            vec![(20, 20), (19, 20), (20, 19), (19, 19), (20, 18)]
        );
        // second pair heads downward from the top
        let cells: Vec<(usize, usize)> = ZigZag::new(21).skip(42).take(3).collect();
        assert_eq!(cells, vec![(18, 0), (17, 0), (18, 1)]);
    }

    #[test]
    fn test_first_codeword_bits_land_bottom_right() {
        let version = Version::MIN;
        let mut grid = ModuleGrid::with_function_patterns(version);
        let mut codewords = vec![0u8; total_codewords(version)];
        codewords[0] = 0b1010_0000;
        grid.place_codewords(&codewords, remainder_bits(version));
        assert_eq!(grid.get(20, 20), Module::Data(true));
        assert_eq!(grid.get(19, 20), Module::Data(false));
        assert_eq!(grid.get(20, 19), Module::Data(true));
        assert_eq!(grid.get(19, 19), Module::Data(false));
        assert_eq!(grid.data_modules_count(), 208);
    }

    #[test]
    fn test_remainder_bits_are_light() {
        let version = Version::new(2).unwrap();
        let mut grid = ModuleGrid::with_function_patterns(version);
        let codewords = vec![0xFF; total_codewords(version)];
        grid.place_codewords(&codewords, remainder_bits(version));
        let light_data = (0..grid.size())
            .flat_map(|y| (0..grid.size()).map(move |x| (x, y)))
            .filter(|&(x, y)| grid.get(x, y) == Module::Data(false))
            .count();
        assert_eq!(light_data, 7);
    }

    #[test]
    #[should_panic(expected = "does not fill")]
    fn test_short_codeword_stream_panics() {
        let mut grid = ModuleGrid::with_function_patterns(Version::MIN);
        grid.place_codewords(&[0u8; 25], 0);
    }
}
