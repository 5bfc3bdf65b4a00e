use serde::{Deserialize, Serialize};

use crate::entities::ShapeType;
use crate::error::WorkshopError;
use crate::geometry::PixelScale;
use crate::geometry::primitives::Rect;

/// Cross dimension (cm) of a shaft when none is given
pub const DEFAULT_SHAFT_HEIGHT: f64 = 10.0;

/// Color token of a base when none is given
pub const DEFAULT_BASE_COLOR: &str = "#C0C0C0";

/// User input for creating a base, before validation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct BaseConfig {
    /// Width (2D) or length (1D) in cm
    pub width: f64,
    /// Height in cm. Required for plates, defaults to [`DEFAULT_SHAFT_HEIGHT`] for shafts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Declared weight of the full base
    #[serde(default)]
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// The raw stock (plate or shaft) cuts are taken from.
#[derive(Clone, Debug, PartialEq)]
pub struct BasePlate {
    /// Width (2D) or length (1D) in cm
    pub width: f64,
    /// Height in cm, the fixed cross dimension for shafts
    pub height: f64,
    pub weight: f64,
    pub color: String,
}

impl BasePlate {
    pub fn try_new(shape_type: ShapeType, config: &BaseConfig) -> Result<Self, WorkshopError> {
        let width = positive("base width", config.width)?;
        let height = match (shape_type, config.height) {
            (_, Some(h)) => positive("base height", h)?,
            (ShapeType::OneD, None) => DEFAULT_SHAFT_HEIGHT,
            (ShapeType::TwoD, None) => {
                return Err(WorkshopError::validation(
                    "base height",
                    "a plate requires a height",
                ));
            }
        };
        let weight = non_negative("base weight", config.weight)?;
        let color = color_or("base color", config.color.as_deref(), DEFAULT_BASE_COLOR)?;

        Ok(BasePlate {
            width,
            height,
            weight,
            color,
        })
    }

    /// Usable region of the base in pixel space
    pub fn bbox(&self, scale: &PixelScale) -> Rect {
        scale.base_rect(self.width, self.height)
    }

    /// Area of the base in cm², used as denominator for plate accounting
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64, WorkshopError> {
    match value.is_finite() && value > 0.0 {
        true => Ok(value),
        false => Err(WorkshopError::validation(
            field,
            format!("expected a positive number, got {value}"),
        )),
    }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, WorkshopError> {
    match value.is_finite() && value >= 0.0 {
        true => Ok(value),
        false => Err(WorkshopError::validation(
            field,
            format!("expected a non-negative number, got {value}"),
        )),
    }
}

pub(crate) fn color_or(
    field: &'static str,
    color: Option<&str>,
    default: &str,
) -> Result<String, WorkshopError> {
    match color.map(str::trim) {
        None => Ok(default.to_owned()),
        Some("") => Err(WorkshopError::validation(field, "color must not be empty")),
        Some(c) => Ok(c.to_owned()),
    }
}
