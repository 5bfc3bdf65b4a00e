use serde::{Deserialize, Serialize};

use crate::entities::base_plate::{color_or, positive};
use crate::entities::{BasePlate, ShapeType};
use crate::error::WorkshopError;
use crate::geometry::primitives::Point;

/// Color token of a cut when none is given
pub const DEFAULT_CUT_COLOR: &str = "#4682B4";

/// A request to cut a piece from the base, in cm.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct CutSpec {
    /// Width (2D) or length (1D) in cm
    pub width: f64,
    /// Height in cm. Required on plates, ignored on shafts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CutSpec {
    pub fn new(width: f64, height: f64) -> Self {
        CutSpec {
            width,
            height: Some(height),
            color: None,
        }
    }

    /// A length-only cut for shafts
    pub fn length(width: f64) -> Self {
        CutSpec {
            width,
            height: None,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Validated dimensions (cm) of the cut on `base`.
    /// On shafts the height is always the base's cross dimension.
    pub fn dimensions(
        &self,
        shape_type: ShapeType,
        base: &BasePlate,
    ) -> Result<(f64, f64), WorkshopError> {
        let width = positive("cut width", self.width)?;
        let height = match (shape_type, self.height) {
            (ShapeType::OneD, _) => base.height,
            (ShapeType::TwoD, Some(h)) => positive("cut height", h)?,
            (ShapeType::TwoD, None) => {
                return Err(WorkshopError::validation(
                    "cut height",
                    "a plate cut requires a height",
                ));
            }
        };
        Ok((width, height))
    }

    pub fn color(&self) -> Result<String, WorkshopError> {
        color_or("cut color", self.color.as_deref(), DEFAULT_CUT_COLOR)
    }
}

/// A piece that has been placed on a base.
/// Its size is in cm, its position is the top-left corner in pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct CutPiece {
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub x: f64,
    pub y: f64,
}

impl CutPiece {
    pub fn top_left(&self) -> Point {
        Point(self.x, self.y)
    }

    /// Area of the cut in cm²
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
