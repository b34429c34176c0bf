/// Main QR encoder - wires the pipeline together
use tracing::debug;

use crate::encoder::bitstream::build_data_codewords;
use crate::encoder::codewords::assemble;
use crate::encoder::function_mask::ModuleGrid;
use crate::encoder::mask::{Penalty, select_mask};
use crate::encoder::modes::Segment;
use crate::encoder::tables::{BlockLayout, remainder_bits};
use crate::encoder::version::select_version;
use crate::error::{QrError, Result};
use crate::models::{ECLevel, MaskPattern, QrCode, Version};

/// Knobs for a single encode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    /// Error correction level (default M)
    pub ec_level: ECLevel,
    /// Use exactly this version number instead of the smallest that fits
    pub version: Option<u8>,
    /// Apply this mask instead of searching for the lowest penalty
    pub mask: Option<MaskPattern>,
}

impl EncodeOptions {
    pub fn with_level(ec_level: ECLevel) -> Self {
        Self {
            ec_level,
            ..Self::default()
        }
    }
}

/// Encoded symbol plus the penalty of every mask candidate
#[derive(Debug, Clone)]
pub struct EncodeReport {
    pub code: QrCode,
    /// Penalty totals by mask index; `None` when the mask was forced
    pub mask_scores: Option<[u32; 8]>,
}

/// Main QR encoder that turns text into a finished symbol
pub struct QrEncoder;

impl QrEncoder {
    /// Encode `text` into a QR symbol
    pub fn encode(text: &str, options: &EncodeOptions) -> Result<QrCode> {
        Self::encode_with_report(text, options).map(|report| report.code)
    }

    /// Same as [`QrEncoder::encode`] but keeps the mask penalties
    pub fn encode_with_report(text: &str, options: &EncodeOptions) -> Result<EncodeReport> {
        if text.is_empty() {
            return Err(QrError::InvalidParameter("text is required".into()));
        }
        let ec_level = options.ec_level;

        let segment = Segment::from_text(text);
        let version = match options.version {
            Some(number) => Version::new(number).ok_or_else(|| {
                QrError::InvalidParameter(format!("version must be 1-40, got {number}"))
            })?,
            None => select_version(&segment, ec_level, Version::MIN)?,
        };
        debug!(
            mode = %segment.mode,
            chars = segment.char_count,
            %version,
            level = %ec_level,
            "selected version"
        );

        // Fails with InputTooLarge when a fixed version is too small
        let data = build_data_codewords(&segment, version, ec_level)?;
        let layout = BlockLayout::for_version(version, ec_level);
        let codewords = assemble(&data, &layout);

        let mut grid = ModuleGrid::with_function_patterns(version);
        grid.place_codewords(&codewords, remainder_bits(version));

        let (mask_pattern, modules, mask_scores) = match options.mask {
            Some(mask) => {
                let modules = grid.finish_with_mask(ec_level, mask).freeze();
                debug!(
                    mask = mask.index(),
                    penalty = Penalty::evaluate(&modules).total(),
                    "using forced mask"
                );
                (mask, modules, None)
            }
            None => {
                let choice = select_mask(&grid, ec_level);
                debug!(
                    mask = choice.mask.index(),
                    penalty = choice.scores[choice.mask.index() as usize],
                    "selected mask"
                );
                (choice.mask, choice.matrix, Some(choice.scores))
            }
        };

        Ok(EncodeReport {
            code: QrCode {
                modules,
                version,
                error_correction: ec_level,
                mask_pattern,
                mode: segment.mode,
            },
            mask_scores,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::modes::Mode;

    #[test]
    fn test_hello_world_quartile() {
        let options = EncodeOptions::with_level(ECLevel::Q);
        let code = QrEncoder::encode("HELLO WORLD", &options).unwrap();
        assert_eq!(code.version, Version::MIN);
        assert_eq!(code.mode, Mode::Alphanumeric);
        assert_eq!(code.size(), 21);
        assert_eq!(code.error_correction, ECLevel::Q);
    }

    #[test]
    fn test_empty_text_rejected() {
        let err = QrEncoder::encode("", &EncodeOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            QrError::InvalidParameter(ref msg) if msg == "text is required"
        ));
    }

    #[test]
    fn test_fixed_version() {
        let options = EncodeOptions {
            version: Some(10),
            ..EncodeOptions::default()
        };
        let code = QrEncoder::encode("hi", &options).unwrap();
        assert_eq!(code.version.number(), 10);
        assert_eq!(code.size(), 57);

        let options = EncodeOptions {
            version: Some(41),
            ..EncodeOptions::default()
        };
        assert!(matches!(
            QrEncoder::encode("hi", &options),
            Err(QrError::InvalidParameter(_))
        ));

        let options = EncodeOptions {
            version: Some(1),
            ec_level: ECLevel::H,
            ..EncodeOptions::default()
        };
        assert!(matches!(
            QrEncoder::encode("this will not fit in 1-H", &options),
            Err(QrError::InputTooLarge { .. })
        ));
    }

    #[test]
    fn test_forced_mask_matches_search_candidate() {
        let searched = QrEncoder::encode_with_report("forced mask", &EncodeOptions::default())
            .unwrap();
        let scores = searched.mask_scores.unwrap();
        assert_eq!(
            scores[searched.code.mask_pattern.index() as usize],
            *scores.iter().min().unwrap()
        );

        for mask in MaskPattern::ALL {
            let options = EncodeOptions {
                mask: Some(mask),
                ..EncodeOptions::default()
            };
            let report = QrEncoder::encode_with_report("forced mask", &options).unwrap();
            assert!(report.mask_scores.is_none());
            assert_eq!(report.code.mask_pattern, mask);
            assert_eq!(
                Penalty::evaluate(&report.code.modules).total(),
                scores[mask.index() as usize]
            );
            if mask == searched.code.mask_pattern {
                assert_eq!(report.code, searched.code);
            }
        }
    }
}
