use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Whether the base is a plate (cuts vary in width and height) or a shaft (cuts only vary in length).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// Shaft with a fixed cross dimension
    #[serde(rename = "1D")]
    OneD,
    /// Plate
    #[serde(rename = "2D")]
    TwoD,
}

impl Display for ShapeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeType::OneD => write!(f, "1D"),
            ShapeType::TwoD => write!(f, "2D"),
        }
    }
}
