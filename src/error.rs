//! Error types for QR code generation

use thiserror::Error;

use crate::models::ECLevel;

/// Result type alias for encoder and renderer operations
pub type Result<T> = std::result::Result<T, QrError>;

/// Errors surfaced by the encoding pipeline and the rasterizer
#[derive(Error, Debug)]
pub enum QrError {
    /// The encoded bitstream does not fit any allowed version at this level
    #[error(
        "input too large: needs {required_bits} bits, at most {capacity_bits} available at level {level}"
    )]
    InputTooLarge {
        /// Bits needed by the smallest encoding of the input
        required_bits: usize,
        /// Largest data capacity (bits) that was tried
        capacity_bits: usize,
        /// Requested error correction level
        level: ECLevel,
    },

    /// GF(256) division by zero (internal arithmetic misuse)
    #[error("division by zero in GF(256)")]
    DivideByZero,

    /// Out-of-range size, unknown level, malformed color and similar
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Image encoding failure
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
