// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Application**: Names used for the settings directory and file
//! - **Lanes**: Bounce animation periods per lane speed
//! - **Featured lane**: Visibility default

// ==========================================================================
// Application
// ==========================================================================

/// Directory name under the platform config dir.
pub const APP_NAME: &str = "F2PShowcase";

/// Settings file name.
pub const CONFIG_FILE: &str = "settings.toml";

/// File name of the catalog bundled into the binary.
pub const BUNDLED_CATALOG_FILE: &str = "games.toml";

// ==========================================================================
// Lane Defaults
// ==========================================================================

/// Period of a slow lane bounce (in seconds).
pub const SLOW_LANE_PERIOD_SECS: u32 = 8;

/// Period of a medium lane bounce (in seconds).
pub const MEDIUM_LANE_PERIOD_SECS: u32 = 7;

/// Period of a fast lane bounce (in seconds).
pub const FAST_LANE_PERIOD_SECS: u32 = 6;

// ==========================================================================
// Featured Lane Defaults
// ==========================================================================

/// Whether the cross-game image lane is shown above the platform lanes.
pub const DEFAULT_SHOW_FEATURED_LANE: bool = true;
