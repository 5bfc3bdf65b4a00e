use serde::{Deserialize, Serialize};

use cutlayout::geometry::PixelScale;
use cutlayout::io::svg::SvgDrawOptions;
use cutlayout::util::ScanConfig;

/// Key under which progress is saved when none is configured
pub const DEFAULT_SNAPSHOT_KEY: &str = "workshopProgress";

/// Configuration of a workshop session
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WorkshopConfig {
    /// Conversion between cm and the pixel space cuts are placed in
    #[serde(default)]
    pub pixel_scale: PixelScale,
    /// Configuration of the placement scanner
    #[serde(default)]
    pub scan_config: ScanConfig,
    /// Key of the saved progress in the key-value store
    #[serde(default = "default_snapshot_key")]
    pub snapshot_key: String,
    /// What to do with restored cuts that overlap or leave the base
    #[serde(default)]
    pub restore_policy: RestorePolicy,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_snapshot_key() -> String {
    DEFAULT_SNAPSHOT_KEY.to_owned()
}

impl Default for WorkshopConfig {
    fn default() -> Self {
        Self {
            pixel_scale: PixelScale::default(),
            scan_config: ScanConfig::default(),
            snapshot_key: default_snapshot_key(),
            restore_policy: RestorePolicy::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

/// How the positions of restored cuts are treated when loading saved progress
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RestorePolicy {
    /// Take the cuts over without checking them
    Trust,
    /// Check the cuts and log every overlap or out-of-bounds cut, but keep them
    #[default]
    Flag,
    /// Refuse saved progress with overlapping or out-of-bounds cuts
    Reject,
}
