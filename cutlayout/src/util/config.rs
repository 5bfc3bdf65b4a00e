use serde::{Deserialize, Serialize};

///Configuration of the placement scanner
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ScanConfig {
    ///Distance between two neighbouring candidate positions on the scan grid, in pixels
    pub step_px: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { step_px: 5.0 }
    }
}
