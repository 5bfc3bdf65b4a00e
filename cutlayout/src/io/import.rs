use crate::entities::base_plate::{non_negative, positive};
use crate::entities::{BasePlate, CutPiece, WorkshopSnapshot};
use crate::error::WorkshopError;
use crate::io::ext_repr::{ExtBasePlate, ExtCutPiece, ExtWorkshopSnapshot};

/// Converts a persisted snapshot into its internal representation.
///
/// Numbers which no workshop could have produced (non-finite values, non-positive dimensions, negative weights)
/// are rejected as [`WorkshopError::SnapshotCorrupt`]. The positions of the cuts are not checked against each other.
pub fn import_snapshot(ext: &ExtWorkshopSnapshot) -> Result<WorkshopSnapshot, WorkshopError> {
    let base = ext
        .base_config
        .as_ref()
        .map(import_base)
        .transpose()
        .map_err(|e| WorkshopError::corrupt(format!("base: {e}")))?;

    let cuts = ext
        .cuts
        .iter()
        .enumerate()
        .map(|(i, ext_cut)| {
            import_cut(ext_cut).map_err(|e| WorkshopError::corrupt(format!("cut #{i}: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let remaining_weight = non_negative("remaining weight", ext.remaining_weight)
        .map_err(|e| WorkshopError::corrupt(e.to_string()))?;

    Ok(WorkshopSnapshot {
        shape_type: ext.shape_type,
        base,
        cuts,
        remaining_weight,
    })
}

pub fn import_base(ext: &ExtBasePlate) -> Result<BasePlate, WorkshopError> {
    Ok(BasePlate {
        width: positive("base width", ext.width)?,
        height: positive("base height", ext.height)?,
        weight: non_negative("base weight", ext.weight)?,
        color: ext.color.clone(),
    })
}

pub fn import_cut(ext: &ExtCutPiece) -> Result<CutPiece, WorkshopError> {
    Ok(CutPiece {
        width: positive("cut width", ext.width)?,
        height: positive("cut height", ext.height)?,
        color: ext.color.clone(),
        x: finite("cut x", ext.x)?,
        y: finite("cut y", ext.y)?,
    })
}

fn finite(field: &'static str, value: f64) -> Result<f64, WorkshopError> {
    match value.is_finite() {
        true => Ok(value),
        false => Err(WorkshopError::validation(
            field,
            format!("expected a finite number, got {value}"),
        )),
    }
}
