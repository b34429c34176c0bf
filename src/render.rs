//! Rasterizer: module matrix to an RGBA image

use std::fmt;
use std::str::FromStr;

use image::{Rgba, RgbaImage};

use crate::error::{QrError, Result};
use crate::models::BitMatrix;

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const BLACK: Color = Color([0, 0, 0, 255]);
    pub const WHITE: Color = Color([255, 255, 255, 255]);

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional)
    pub fn parse(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || QrError::InvalidParameter(format!("invalid color: {s:?}"));
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let digits: Vec<u8> = match hex.len() {
            // Short forms double every digit
            3 | 4 => hex.chars().flat_map(|c| [c, c]).map(|c| c as u8).collect(),
            6 | 8 => hex.bytes().collect(),
            _ => return Err(invalid()),
        };

        let mut rgba = [255u8; 4];
        for (slot, pair) in rgba.iter_mut().zip(digits.chunks(2)) {
            let pair = std::str::from_utf8(pair).map_err(|_| invalid())?;
            *slot = u8::from_str_radix(pair, 16).map_err(|_| invalid())?;
        }
        Ok(Color(rgba))
    }

    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.0;
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl FromStr for Color {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Output image parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Requested image side in pixels
    pub size: u32,
    /// Light border width in modules
    pub quiet_zone: u32,
    pub dark: Color,
    pub light: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: 300,
            quiet_zone: 4,
            dark: Color::BLACK,
            light: Color::WHITE,
        }
    }
}

/// Largest image side [`render`] will allocate, in pixels
pub const MAX_IMAGE_SIDE: u32 = 8192;

/// Pixel geometry derived from the matrix width and [`RenderOptions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Pixels per module
    pub scale: u32,
    /// Image side in pixels
    pub side: u32,
    /// Light margin before the quiet zone starts
    pub offset: u32,
}

impl Layout {
    pub fn compute(modules: u32, options: &RenderOptions) -> Result<Self> {
        if options.size == 0 {
            return Err(QrError::InvalidParameter("size must be at least 1".into()));
        }
        if options.size > MAX_IMAGE_SIDE {
            return Err(QrError::InvalidParameter(format!(
                "size must be at most {MAX_IMAGE_SIDE}, got {}",
                options.size
            )));
        }
        let total = options
            .quiet_zone
            .checked_mul(2)
            .and_then(|border| border.checked_add(modules))
            .filter(|&total| total > 0)
            .ok_or_else(|| {
                QrError::InvalidParameter(format!(
                    "cannot lay out {modules} modules with a {} module quiet zone",
                    options.quiet_zone
                ))
            })?;
        let scale = (options.size / total).max(1);
        let symbol = scale
            .checked_mul(total)
            .filter(|&symbol| symbol <= MAX_IMAGE_SIDE)
            .ok_or_else(|| {
                QrError::InvalidParameter(format!(
                    "{total} modules do not fit in {MAX_IMAGE_SIDE} pixels"
                ))
            })?;
        let side = options.size.max(symbol);
        let offset = (side - symbol) / 2;
        Ok(Self {
            scale,
            side,
            offset,
        })
    }
}

/// Rasterize `matrix` into a square image.
///
/// Each module becomes a `scale`x`scale` block, surrounded by the quiet
/// zone and centered in an image at least `options.size` pixels wide.
pub fn render(matrix: &BitMatrix, options: &RenderOptions) -> Result<RgbaImage> {
    let modules = u32::try_from(matrix.width()).map_err(|_| {
        QrError::InvalidParameter("matrix too large to render".into())
    })?;
    let layout = Layout::compute(modules, options)?;
    let mut image = RgbaImage::from_pixel(layout.side, layout.side, Rgba(options.light.0));
    let dark = Rgba(options.dark.0);

    let origin = layout.offset + options.quiet_zone * layout.scale;
    for y in 0..modules {
        for x in 0..modules {
            if !matrix.get(x as usize, y as usize) {
                continue;
            }
            let px = origin + x * layout.scale;
            let py = origin + y * layout.scale;
            for dy in 0..layout.scale {
                for dx in 0..layout.scale {
                    image.put_pixel(px + dx, py + dy, dark);
                }
            }
        }
    }
    Ok(image)
}
