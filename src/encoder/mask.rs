/// Mask application, penalty scoring and mask selection
use rayon::prelude::*;
use tracing::trace;

use crate::config;
use crate::encoder::format::FormatInfo;
use crate::encoder::function_mask::{Module, ModuleGrid};
use crate::encoder::version::VersionInfo;
use crate::models::{BitMatrix, ECLevel, MaskPattern};

const PENALTY_N1: u32 = 3;
const PENALTY_N2: u32 = 3;
const PENALTY_N3: u32 = 40;
const PENALTY_N4: u32 = 10;

/// 1:1:3:1:1 finder-like run followed or preceded by four light modules
const FINDER_LIKE: [u16; 2] = [0b101_1101_0000, 0b000_0101_1101];

impl ModuleGrid {
    /// XOR the mask into data cells only
    pub fn apply_mask(&mut self, mask: MaskPattern) {
        let size = self.size();
        for y in 0..size {
            for x in 0..size {
                if let Module::Data(dark) = self.get(x, y) {
                    if mask.is_masked(y, x) {
                        self.set(x, y, Module::Data(!dark));
                    }
                }
            }
        }
    }

    /// Write both format information copies for `level`/`mask`
    pub fn write_format_info(&mut self, ec_level: ECLevel, mask: MaskPattern) {
        let bits = FormatInfo::new(ec_level, mask).bits();
        let size = self.size();
        for i in 0..15 {
            let dark = (bits >> i) & 1 != 0;
            for (x, y) in FormatInfo::positions(size, i) {
                self.write_reserved(x, y, dark);
            }
        }
    }

    /// Write both version information blocks (v7+; no-op below)
    pub fn write_version_info(&mut self) {
        let version = self.version();
        if !version.has_version_info() {
            return;
        }
        let bits = VersionInfo::bits(version);
        let size = self.size();
        for i in 0..18 {
            let dark = (bits >> i) & 1 != 0;
            for (x, y) in VersionInfo::positions(size, i) {
                self.write_reserved(x, y, dark);
            }
        }
    }

    /// Phase 3 for one candidate: masked copy with its information written
    pub fn finish_with_mask(&self, ec_level: ECLevel, mask: MaskPattern) -> ModuleGrid {
        let mut candidate = self.clone();
        candidate.apply_mask(mask);
        candidate.write_format_info(ec_level, mask);
        candidate.write_version_info();
        candidate
    }
}

/// Breakdown of the four penalty rules for one finished symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Penalty {
    pub runs: u32,
    pub blocks: u32,
    pub finder_like: u32,
    pub balance: u32,
}

impl Penalty {
    pub fn evaluate(matrix: &BitMatrix) -> Self {
        let size = matrix.width();
        let rows: Vec<Vec<bool>> = (0..size).map(|y| matrix.row(y)).collect();
        let cols: Vec<Vec<bool>> = (0..size)
            .map(|x| (0..size).map(|y| rows[y][x]).collect())
            .collect();

        let mut penalty = Penalty::default();
        for line in rows.iter().chain(cols.iter()) {
            penalty.runs += run_penalty(line);
            penalty.finder_like += finder_like_penalty(line);
        }

        for y in 0..size.saturating_sub(1) {
            for x in 0..size - 1 {
                let c = rows[y][x];
                if c == rows[y][x + 1] && c == rows[y + 1][x] && c == rows[y + 1][x + 1] {
                    penalty.blocks += PENALTY_N2;
                }
            }
        }

        penalty.balance = balance_penalty(matrix.count_dark(), size * size);
        penalty
    }

    pub fn total(&self) -> u32 {
        self.runs + self.blocks + self.finder_like + self.balance
    }
}

/// N1 + (len - 5) for every same-color run of five or more
fn run_penalty(line: &[bool]) -> u32 {
    let mut penalty = 0;
    let mut run_len = 0;
    let mut run_color = None;
    for &module in line {
        if Some(module) == run_color {
            run_len += 1;
        } else {
            if run_len >= 5 {
                penalty += PENALTY_N1 + (run_len - 5);
            }
            run_color = Some(module);
            run_len = 1;
        }
    }
    if run_len >= 5 {
        penalty += PENALTY_N1 + (run_len - 5);
    }
    penalty
}

/// N3 for every 11-module window matching a finder-like pattern
fn finder_like_penalty(line: &[bool]) -> u32 {
    if line.len() < 11 {
        return 0;
    }
    let mut window: u16 = 0;
    let mut penalty = 0;
    for (i, &module) in line.iter().enumerate() {
        window = ((window << 1) | module as u16) & 0x7FF;
        if i >= 10 && FINDER_LIKE.contains(&window) {
            penalty += PENALTY_N3;
        }
    }
    penalty
}

/// N4 for each full 5% step the dark ratio deviates from 50%.
///
/// Computes `floor(|pct - 50| / 5)` in integers. This differs from the
/// `|ceil(pct / 5) - 10|` form some encoders use: at 52% dark this scores
/// 0 where that form scores 1. Either choice yields a valid symbol.
fn balance_penalty(dark: usize, total: usize) -> u32 {
    let deviation = (dark * 100).abs_diff(total * 50);
    (deviation / (total * 5)) as u32 * PENALTY_N4
}

/// Index of the lowest score; ties go to the lower index
pub fn choose_lowest(scores: &[u32]) -> usize {
    scores
        .iter()
        .enumerate()
        .min_by_key(|&(idx, &score)| (score, idx))
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

/// Outcome of the mask search
#[derive(Debug, Clone)]
pub struct MaskChoice {
    pub mask: MaskPattern,
    pub matrix: BitMatrix,
    /// Total penalty of each of the eight candidates, by mask index
    pub scores: [u32; 8],
}

/// Finish `grid` with each of the eight masks and keep the lowest penalty
pub fn select_mask(grid: &ModuleGrid, ec_level: ECLevel) -> MaskChoice {
    let evaluate = |mask: MaskPattern| {
        let matrix = grid.finish_with_mask(ec_level, mask).freeze();
        let penalty = Penalty::evaluate(&matrix);
        trace!(
            mask = mask.index(),
            ?penalty,
            total = penalty.total(),
            "mask candidate"
        );
        (matrix, penalty.total())
    };

    let mut candidates: Vec<(BitMatrix, u32)> = if config::parallel_masks() {
        MaskPattern::ALL.par_iter().map(|&m| evaluate(m)).collect()
    } else {
        MaskPattern::ALL.iter().map(|&m| evaluate(m)).collect()
    };

    let mut scores = [0u32; 8];
    for (slot, (_, score)) in scores.iter_mut().zip(&candidates) {
        *slot = *score;
    }
    let best = choose_lowest(&scores);
    let (matrix, _) = candidates.swap_remove(best);

    MaskChoice {
        mask: MaskPattern::ALL[best],
        matrix,
        scores,
    }
}
