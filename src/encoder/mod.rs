//! QR code encoding modules
//!
//! This module contains the whole text-to-matrix pipeline:
//! - Data mode encoding (numeric, alphanumeric, byte) and bitstream assembly
//! - Version selection and capacity tables
//! - Reed-Solomon error correction and block interleaving
//! - Function patterns, codeword placement, masking and format/version info

/// Bitstream assembly (header, payload, terminator, padding)
pub mod bitstream;
/// Block split, Reed-Solomon and interleaving
pub mod codewords;
/// Format information (EC level + mask pattern)
pub mod format;
/// Function module placement (finder/timing/alignment/reserved areas)
pub mod function_mask;
/// GF(256) arithmetic
pub mod gf256;
/// Mask application, penalty rules and mask selection
pub mod mask;
/// Data mode encoders (numeric, alphanumeric, byte)
pub mod modes;
/// Zig-zag codeword placement
pub mod placement;
/// Main QR encoder that orchestrates the pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction
pub mod reed_solomon;
/// ISO 18004 tables (ECC codewords/blocks, alignment positions)
pub mod tables;
/// Version selection and version information (versions 7-40)
pub mod version;
