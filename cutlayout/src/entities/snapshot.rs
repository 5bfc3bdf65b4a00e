use crate::entities::{BasePlate, CutPiece, Layout, ShapeType};
use crate::error::WorkshopError;
use crate::util::assertions;

/// Immutable and complete representation of a workshop's state.
/// Can be used to restore a workshop back to a previous state.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkshopSnapshot {
    /// `None` if no shape type was chosen yet
    pub shape_type: Option<ShapeType>,
    /// `None` if no base was created yet
    pub base: Option<BasePlate>,
    pub cuts: Vec<CutPiece>,
    pub remaining_weight: f64,
}

impl WorkshopSnapshot {
    /// Snapshot of a workshop in which no shape type was chosen
    pub fn empty() -> Self {
        WorkshopSnapshot {
            shape_type: None,
            base: None,
            cuts: vec![],
            remaining_weight: 0.0,
        }
    }

    /// Snapshot of a workshop with a chosen shape type but no base
    pub fn without_base(shape_type: ShapeType) -> Self {
        WorkshopSnapshot {
            shape_type: Some(shape_type),
            ..WorkshopSnapshot::empty()
        }
    }

    pub fn from_layout(layout: &Layout) -> Self {
        let snapshot = WorkshopSnapshot {
            shape_type: Some(layout.shape_type),
            base: Some(layout.base.clone()),
            cuts: layout.cuts.clone(),
            remaining_weight: layout.remaining_weight(),
        };
        debug_assert!(assertions::snapshot_matches_layout(&snapshot, layout));
        snapshot
    }

    /// Rebuilds the layout described by the snapshot, `None` if the snapshot holds no base.
    /// Cut positions are taken over as-is, see [`Layout::violations`] to verify them.
    pub fn to_layout(&self) -> Result<Option<Layout>, WorkshopError> {
        match (self.shape_type, &self.base) {
            (_, None) if !self.cuts.is_empty() => Err(WorkshopError::corrupt(format!(
                "{} cuts without a base",
                self.cuts.len()
            ))),
            (_, None) => Ok(None),
            (None, Some(_)) => Err(WorkshopError::corrupt("base without a shape type")),
            (Some(shape_type), Some(base)) => {
                let layout = Layout {
                    shape_type,
                    base: base.clone(),
                    cuts: self.cuts.clone(),
                };
                Ok(Some(layout))
            }
        }
    }
}
