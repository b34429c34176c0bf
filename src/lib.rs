//! rust_qr_gen - QR code symbol generation in pure Rust
//!
//! Turns text into a Model 2 QR symbol (versions 1-40, levels L/M/Q/H) and
//! rasterizes it into an RGBA image. The smallest fitting version and the
//! lowest-penalty mask are chosen automatically unless fixed by the caller.
//!
//! ```no_run
//! let code = rust_qr_gen::encode("HELLO WORLD")?;
//! let image = rust_qr_gen::render(&code.modules, &rust_qr_gen::RenderOptions::default())?;
//! rust_qr_gen::tools::save_png(&image, "hello.png")?;
//! # Ok::<(), rust_qr_gen::QrError>(())
//! ```

/// Environment-driven defaults
pub mod config;
/// QR code encoding modules (modes, error correction, matrix construction)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (QrCode, BitMatrix, Version, etc.)
pub mod models;
/// Matrix to image rasterization
pub mod render;
/// PNG, ASCII and SVG output helpers
pub mod tools;

use rayon::prelude::*;

pub use encoder::modes::Mode;
pub use encoder::qr_encoder::{EncodeOptions, EncodeReport, QrEncoder};
pub use error::{QrError, Result};
pub use models::{BitMatrix, ECLevel, MaskPattern, QrCode, Version};
pub use render::{Color, RenderOptions, render};

/// Encode `text` at error correction level M
pub fn encode(text: &str) -> Result<QrCode> {
    QrEncoder::encode(text, &EncodeOptions::default())
}

/// Encode `text` with an explicit level, version or mask
pub fn encode_with(text: &str, options: &EncodeOptions) -> Result<QrCode> {
    QrEncoder::encode(text, options)
}

/// Encode many inputs in parallel; results keep the input order
pub fn encode_batch(texts: &[&str], options: &EncodeOptions) -> Vec<Result<QrCode>> {
    texts
        .par_iter()
        .map(|text| QrEncoder::encode(text, options))
        .collect()
}
