use crate::entities::{BasePlate, CutPiece, WorkshopSnapshot};
use crate::io::ext_repr::{ExtBasePlate, ExtCutPiece, ExtWorkshopSnapshot};

pub fn export_snapshot(snapshot: &WorkshopSnapshot) -> ExtWorkshopSnapshot {
    ExtWorkshopSnapshot {
        shape_type: snapshot.shape_type,
        base_config: snapshot.base.as_ref().map(export_base),
        cuts: snapshot.cuts.iter().map(export_cut).collect(),
        remaining_weight: snapshot.remaining_weight,
    }
}

pub fn export_base(base: &BasePlate) -> ExtBasePlate {
    ExtBasePlate {
        width: base.width,
        height: base.height,
        weight: base.weight,
        color: base.color.clone(),
    }
}

pub fn export_cut(cut: &CutPiece) -> ExtCutPiece {
    ExtCutPiece {
        width: cut.width,
        height: cut.height,
        color: cut.color.clone(),
        x: cut.x,
        y: cut.y,
    }
}
