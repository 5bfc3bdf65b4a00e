use serde::{Deserialize, Serialize};

use crate::entities::ShapeType;

/// External representation of a [`WorkshopSnapshot`](crate::entities::WorkshopSnapshot).
/// This is the persisted progress blob.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtWorkshopSnapshot {
    /// Chosen shape type, `null` if none was chosen
    pub shape_type: Option<ShapeType>,
    /// The base, `null` if none was created
    pub base_config: Option<ExtBasePlate>,
    /// Placed cuts, in order of placement
    #[serde(default)]
    pub cuts: Vec<ExtCutPiece>,
    #[serde(default)]
    pub remaining_weight: f64,
}

/// External representation of a [`BasePlate`](crate::entities::BasePlate).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtBasePlate {
    /// Width (plates) or length (shafts) in cm
    pub width: f64,
    /// Height in cm
    pub height: f64,
    pub weight: f64,
    pub color: String,
}

/// External representation of a [`CutPiece`](crate::entities::CutPiece).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtCutPiece {
    /// Width in cm
    pub width: f64,
    /// Height in cm
    pub height: f64,
    pub color: String,
    /// Left edge in pixel space
    pub x: f64,
    /// Top edge in pixel space
    pub y: f64,
}
