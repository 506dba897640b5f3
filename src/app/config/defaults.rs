// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Site**: where page documents are read from
//! - **News**: carousel slide and image rotation intervals

// ==========================================================================
// Site Defaults
// ==========================================================================

/// Site root used when neither the CLI nor the settings file names one.
pub const DEFAULT_SITE_DIR: &str = ".";

// ==========================================================================
// News Carousel Defaults
// ==========================================================================

/// Interval between automatic slide changes (in milliseconds).
pub const DEFAULT_AUTO_ROTATE_MS: u64 = 7_000;

/// Minimum slide interval.
pub const MIN_AUTO_ROTATE_MS: u64 = 1_000;

/// Maximum slide interval.
pub const MAX_AUTO_ROTATE_MS: u64 = 120_000;

/// Interval between image changes inside the active slide (in milliseconds).
pub const DEFAULT_IMAGE_ROTATE_MS: u64 = 2_000;

/// Minimum image interval.
pub const MIN_IMAGE_ROTATE_MS: u64 = 500;

/// Maximum image interval.
pub const MAX_IMAGE_ROTATE_MS: u64 = 60_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_AUTO_ROTATE_MS > 0);
    assert!(DEFAULT_AUTO_ROTATE_MS >= MIN_AUTO_ROTATE_MS);
    assert!(DEFAULT_AUTO_ROTATE_MS <= MAX_AUTO_ROTATE_MS);

    assert!(MIN_IMAGE_ROTATE_MS > 0);
    assert!(DEFAULT_IMAGE_ROTATE_MS >= MIN_IMAGE_ROTATE_MS);
    assert!(DEFAULT_IMAGE_ROTATE_MS <= MAX_IMAGE_ROTATE_MS);
};
