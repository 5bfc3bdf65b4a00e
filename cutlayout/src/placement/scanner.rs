use itertools::Itertools;
use log::debug;

use crate::collision_detection::{cut_bbox, overlaps};
use crate::entities::{BasePlate, CutPiece, ShapeType};
use crate::geometry::PixelScale;
use crate::geometry::primitives::{Point, Rect};
use crate::util::ScanConfig;

/// Slack (in steps) tolerated on the last grid index, so a cut that fits exactly is not lost to rounding
const GRID_TOLERANCE: f64 = 1e-9;

/// Searches the first free top-left position for a `width` × `height` (cm) cut on `base`.
///
/// Candidates lie on a grid with spacing [`ScanConfig::step_px`], starting at the base's top-left corner,
/// and are visited row by row: top to bottom, left to right within a row.
/// The first candidate which does not overlap any of the `existing` cuts is returned.
/// On shafts the cut's height is replaced by the cross dimension of the base.
///
/// This is a first-fit search: no rotation, no backtracking. It can miss room that a smarter packer would find.
/// Every probed candidate increments `probe_counter`.
#[allow(clippy::too_many_arguments)]
pub fn find_slot(
    width: f64,
    height: f64,
    base: &BasePlate,
    shape_type: ShapeType,
    existing: &[CutPiece],
    scale: &PixelScale,
    config: &ScanConfig,
    probe_counter: &mut usize,
) -> Option<Point> {
    debug_assert!(config.step_px > 0.0);
    let step = config.step_px;
    let height = match shape_type {
        ShapeType::OneD => base.height,
        ShapeType::TwoD => height,
    };

    let bbox = base.bbox(scale);
    let (cand_w, cand_h) = (scale.to_px(width), scale.to_px(height));

    //the cut is larger than the base in at least one dimension
    let n_cols = grid_steps(bbox.width() - cand_w, step)?;
    let n_rows = grid_steps(bbox.height() - cand_h, step)?;

    let existing_bboxes = existing
        .iter()
        .map(|cut| cut_bbox(cut, base, shape_type, scale))
        .collect_vec();

    for row in 0..=n_rows {
        let y = bbox.y_min + row as f64 * step;
        for col in 0..=n_cols {
            let x = bbox.x_min + col as f64 * step;
            *probe_counter += 1;
            let candidate = Rect {
                x_min: x,
                y_min: y,
                x_max: x + cand_w,
                y_max: y + cand_h,
            };
            if !overlaps(&candidate, &existing_bboxes) {
                debug!(
                    "[SCAN] free slot for {width} x {height} cm at ({x}, {y}) [row {row}/{n_rows}, col {col}/{n_cols}]"
                );
                return Some(Point(x, y));
            }
        }
    }

    debug!(
        "[SCAN] no free slot for {width} x {height} cm among {} candidates",
        (n_rows + 1) * (n_cols + 1)
    );
    None
}

/// Number of steps that fit in `slack` pixels, `None` if the slack is negative.
fn grid_steps(slack: f64, step: f64) -> Option<usize> {
    let n = slack / step;
    match n >= -GRID_TOLERANCE {
        true => Some((n + GRID_TOLERANCE).floor() as usize),
        false => None,
    }
}
