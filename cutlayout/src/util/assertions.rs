use float_cmp::approx_eq;
use log::error;

use crate::entities::{Layout, WorkshopSnapshot};
use crate::geometry::PixelScale;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

pub fn layout_is_feasible(layout: &Layout, scale: &PixelScale) -> bool {
    let violations = layout.violations(scale);
    for v in violations.iter() {
        error!("layout violation: {v}");
    }
    violations.is_empty()
}

pub fn snapshot_matches_layout(snapshot: &WorkshopSnapshot, layout: &Layout) -> bool {
    let WorkshopSnapshot {
        shape_type,
        base,
        cuts,
        remaining_weight,
    } = snapshot;

    *shape_type == Some(layout.shape_type)
        && base.as_ref() == Some(&layout.base)
        && *cuts == layout.cuts
        && approx_eq!(f64, *remaining_weight, layout.remaining_weight())
}
