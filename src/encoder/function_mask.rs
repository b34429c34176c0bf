use crate::encoder::format::FormatInfo;
use crate::encoder::tables::alignment_pattern_positions;
use crate::encoder::version::VersionInfo;
use crate::models::{BitMatrix, Version};

/// State of one cell while a symbol is being built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    /// Nothing placed yet
    Unset,
    /// Held for format/version information, written after mask selection
    Reserved,
    /// Finder, separator, timing, alignment, dark module or written info
    Function(bool),
    /// Codeword (or remainder) bit
    Data(bool),
}

impl Module {
    pub fn is_dark(&self) -> bool {
        matches!(self, Module::Function(true) | Module::Data(true))
    }
}

/// Symbol under construction.
///
/// Built in three phases: function patterns and reservations
/// ([`ModuleGrid::with_function_patterns`]), codeword placement
/// ([`ModuleGrid::place_codewords`]), then masking plus format/version
/// information. [`ModuleGrid::freeze`] turns the result into a [`BitMatrix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    version: Version,
    size: usize,
    cells: Vec<Module>,
}

impl ModuleGrid {
    pub fn new(version: Version) -> Self {
        let size = version.size();
        Self {
            version,
            size,
            cells: vec![Module::Unset; size * size],
        }
    }

    /// Phase 1: every function pattern placed, info areas reserved
    pub fn with_function_patterns(version: Version) -> Self {
        let mut grid = Self::new(version);
        let size = grid.size;

        // Finder patterns + separators, clipped to bounds
        grid.place_finder(3, 3);
        grid.place_finder(size - 4, 3);
        grid.place_finder(3, size - 4);

        // Timing patterns (row 6 and column 6) between the finders
        for i in 0..size {
            if grid.get(6, i) == Module::Unset {
                grid.set_function(6, i, i % 2 == 0);
            }
            if grid.get(i, 6) == Module::Unset {
                grid.set_function(i, 6, i % 2 == 0);
            }
        }

        let align = alignment_pattern_positions(version);
        if let Some(&last) = align.last() {
            for &cx in align {
                for &cy in align {
                    // Skip the three finder corners
                    if (cx == 6 && cy == 6) || (cx == 6 && cy == last) || (cx == last && cy == 6) {
                        continue;
                    }
                    grid.place_alignment(cx, cy);
                }
            }
        }

        for i in 0..15 {
            for (x, y) in FormatInfo::positions(size, i) {
                grid.reserve(x, y);
            }
        }

        // Dark module
        grid.set_function(8, size - 8, true);

        if version.has_version_info() {
            for i in 0..18 {
                for (x, y) in VersionInfo::positions(size, i) {
                    grid.reserve(x, y);
                }
            }
        }

        grid
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> Module {
        self.cells[y * self.size + x]
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, module: Module) {
        self.cells[y * self.size + x] = module;
    }

    /// Place a function module. Overwriting anything but an identical
    /// function module is a construction bug.
    pub(crate) fn set_function(&mut self, x: usize, y: usize, dark: bool) {
        let current = self.get(x, y);
        debug_assert!(
            current == Module::Unset || current == Module::Function(dark),
            "function module at ({x}, {y}) would overwrite {current:?}"
        );
        self.set(x, y, Module::Function(dark));
    }

    fn reserve(&mut self, x: usize, y: usize) {
        let current = self.get(x, y);
        debug_assert!(
            current == Module::Unset,
            "reservation at ({x}, {y}) would overwrite {current:?}"
        );
        self.set(x, y, Module::Reserved);
    }

    /// Fill a reserved cell with its final information bit
    pub(crate) fn write_reserved(&mut self, x: usize, y: usize, dark: bool) {
        let current = self.get(x, y);
        debug_assert!(
            matches!(current, Module::Reserved | Module::Function(_)),
            "info bit at ({x}, {y}) would overwrite {current:?}"
        );
        self.set(x, y, Module::Function(dark));
    }

    /// True for any cell that is not part of the data area
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Module::Function(_) | Module::Reserved)
    }

    pub fn data_modules_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|m| matches!(m, Module::Unset | Module::Data(_)))
            .count()
    }

    /// Convert to the final matrix. Panics if any cell is still unset or
    /// reserved, since such a symbol would be undecodable.
    pub fn freeze(&self) -> BitMatrix {
        let mut matrix = BitMatrix::square(self.size);
        for y in 0..self.size {
            for x in 0..self.size {
                let module = self.get(x, y);
                assert!(
                    !matches!(module, Module::Unset | Module::Reserved),
                    "module ({x}, {y}) left {module:?} in a finished symbol"
                );
                matrix.set(x, y, module.is_dark());
            }
        }
        matrix
    }

    fn place_finder(&mut self, cx: usize, cy: usize) {
        for dy in -4isize..=4 {
            for dx in -4isize..=4 {
                let x = cx as isize + dx;
                let y = cy as isize + dy;
                if x < 0 || y < 0 || x >= self.size as isize || y >= self.size as isize {
                    continue;
                }
                let dist = dx.abs().max(dy.abs());
                self.set_function(x as usize, y as usize, dist != 2 && dist != 4);
            }
        }
    }

    fn place_alignment(&mut self, cx: usize, cy: usize) {
        for dy in -2isize..=2 {
            for dx in -2isize..=2 {
                let x = (cx as isize + dx) as usize;
                let y = (cy as isize + dy) as usize;
                self.set_function(x, y, dx.abs().max(dy.abs()) != 1);
            }
        }
    }
}

/// Function module mask for a specific QR version.
/// true = function module (not data), false = data module.
pub struct FunctionMask {
    mask: BitMatrix,
}

impl FunctionMask {
    pub fn new(version: Version) -> Self {
        let grid = ModuleGrid::with_function_patterns(version);
        let size = grid.size();
        let mut mask = BitMatrix::square(size);
        for y in 0..size {
            for x in 0..size {
                mask.set(x, y, grid.is_function(x, y));
            }
        }
        Self { mask }
    }

    pub fn size(&self) -> usize {
        self.mask.width()
    }

    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.mask.get(x, y)
    }

    pub fn data_modules_count(&self) -> usize {
        self.size() * self.size() - self.mask.count_dark()
    }
}
