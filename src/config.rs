//! Environment-driven settings, each read once per process

use std::sync::OnceLock;

use crate::models::ECLevel;

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

fn parse_env_bool_u8(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
        .map(|v| v != 0)
        .unwrap_or(default)
}

static PARALLEL_MASKS: OnceLock<bool> = OnceLock::new();

/// Score the eight mask candidates on the rayon pool (`QR_PARALLEL_MASKS`)
pub fn parallel_masks() -> bool {
    *PARALLEL_MASKS.get_or_init(|| parse_env_bool_u8("QR_PARALLEL_MASKS", true))
}

static DEFAULT_SIZE: OnceLock<u32> = OnceLock::new();

/// Default rendered image side in pixels (`QR_DEFAULT_SIZE`)
pub fn default_size() -> u32 {
    *DEFAULT_SIZE.get_or_init(|| parse_env_u32("QR_DEFAULT_SIZE", 300).max(1))
}

static DEFAULT_MARGIN: OnceLock<u32> = OnceLock::new();

/// Default quiet zone in modules (`QR_DEFAULT_MARGIN`)
pub fn default_margin() -> u32 {
    *DEFAULT_MARGIN.get_or_init(|| parse_env_u32("QR_DEFAULT_MARGIN", 4).min(64))
}

static DEFAULT_EC_LEVEL: OnceLock<ECLevel> = OnceLock::new();

/// Default error correction level for the CLI (`QR_DEFAULT_EC_LEVEL`)
pub fn default_ec_level() -> ECLevel {
    *DEFAULT_EC_LEVEL.get_or_init(|| {
        std::env::var("QR_DEFAULT_EC_LEVEL")
            .ok()
            .and_then(|v| v.parse::<ECLevel>().ok())
            .unwrap_or_default()
    })
}
