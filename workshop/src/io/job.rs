use serde::{Deserialize, Serialize};

use cutlayout::entities::{BaseConfig, CutSpec, ShapeType};

/// A batch of workshop actions: choose a shape type, create a base and request cuts in order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtJob {
    pub shape_type: ShapeType,
    pub base: BaseConfig,
    #[serde(default)]
    pub cuts: Vec<ExtJobCut>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtJobCut {
    #[serde(flatten)]
    pub spec: CutSpec,
    /// Number of times the cut is requested
    #[serde(default = "default_qty")]
    pub qty: usize,
}

fn default_qty() -> usize {
    1
}
