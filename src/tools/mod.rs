//! Output helpers shared by the CLI, tests and benches

use std::fmt::Write as _;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, ImageFormat, RgbaImage};

use crate::error::Result;
use crate::models::BitMatrix;
use crate::render::Color;

/// Encode an image as PNG in memory.
pub fn to_png_bytes(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgba8,
    )?;
    Ok(bytes)
}

/// PNG as a `data:image/png;base64,...` URL, ready for an `<img src>`.
pub fn to_data_url(image: &RgbaImage) -> Result<String> {
    let png_bytes = to_png_bytes(image)?;
    Ok(format!(
        "data:image/png;base64,{}",
        general_purpose::STANDARD.encode(&png_bytes)
    ))
}

/// Write an image to `path` as PNG.
pub fn save_png<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Render the matrix as text, two characters per module so the symbol
/// keeps its aspect ratio in a terminal.
pub fn to_ascii(matrix: &BitMatrix, quiet_zone: usize) -> String {
    let size = matrix.width();
    let total = size + 2 * quiet_zone;
    let mut out = String::with_capacity(total * (2 * total + 1) * 3);
    for y in 0..total {
        for x in 0..total {
            let dark = x >= quiet_zone
                && y >= quiet_zone
                && x < quiet_zone + size
                && y < quiet_zone + size
                && matrix.get(x - quiet_zone, y - quiet_zone);
            out.push_str(if dark { "██" } else { "  " });
        }
        out.push('\n');
    }
    out
}

/// Render the matrix as a standalone SVG document, one unit per module.
pub fn to_svg_string(
    matrix: &BitMatrix,
    quiet_zone: usize,
    dark: Color,
    light: Color,
) -> String {
    let size = matrix.width();
    let total = size + 2 * quiet_zone;

    let mut path = String::new();
    for y in 0..size {
        let mut x = 0;
        while x < size {
            if !matrix.get(x, y) {
                x += 1;
                continue;
            }
            // Merge horizontal runs into one rectangle
            let start = x;
            while x < size && matrix.get(x, y) {
                x += 1;
            }
            let _ = write!(
                path,
                "M{},{}h{}v1h-{}z",
                start + quiet_zone,
                y + quiet_zone,
                x - start,
                x - start
            );
        }
    }

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {total} {total}\" shape-rendering=\"crispEdges\">\
<rect width=\"{total}\" height=\"{total}\" fill=\"{light}\"/>\
<path fill=\"{dark}\" d=\"{path}\"/></svg>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal(size: usize) -> BitMatrix {
        let mut matrix = BitMatrix::square(size);
        for i in 0..size {
            matrix.set(i, i, true);
        }
        matrix
    }

    #[test]
    fn test_ascii_layout() {
        let text = to_ascii(&diagonal(2), 1);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "        ");
        assert_eq!(lines[1], "  ██    ");
        assert_eq!(lines[2], "    ██  ");
    }

    #[test]
    fn test_svg_merges_runs() {
        let mut matrix = BitMatrix::square(3);
        matrix.set(0, 1, true);
        matrix.set(1, 1, true);
        let svg = to_svg_string(&matrix, 2, Color::BLACK, Color::WHITE);
        assert!(svg.contains("viewBox=\"0 0 7 7\""));
        assert!(svg.contains("d=\"M2,3h2v1h-2z\""));
        assert!(svg.contains("fill=\"#ffffff\""));
    }

    #[test]
    fn test_png_bytes_signature() {
        let image = RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 0, 255]));
        let bytes = to_png_bytes(&image).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_data_url_carries_png() {
        let image = RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        let url = to_data_url(&image).unwrap();
        let payload = url
            .strip_prefix("data:image/png;base64,")
            .expect("png data url prefix");
        let decoded = general_purpose::STANDARD.decode(payload).unwrap();
        assert_eq!(decoded, to_png_bytes(&image).unwrap());

        let round_trip = image::load_from_memory(&decoded).unwrap().to_rgba8();
        assert_eq!(round_trip, image);
    }
}
