use crate::entities::{BasePlate, CutPiece, ShapeType};
use crate::geometry::PixelScale;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Rect;

/// Pixel-space bounding box of a placed cut.
/// On shafts a cut always spans the full cross dimension of the base, regardless of its stored height.
pub fn cut_bbox(
    cut: &CutPiece,
    base: &BasePlate,
    shape_type: ShapeType,
    scale: &PixelScale,
) -> Rect {
    let height = match shape_type {
        ShapeType::OneD => base.height,
        ShapeType::TwoD => cut.height,
    };
    scale.rect_at(cut.top_left(), cut.width, height)
}

/// Returns true if `candidate` shares interior area with any of the `existing` rectangles.
/// Touching edges do not count as an overlap.
#[inline(always)]
pub fn overlaps<'a>(candidate: &Rect, existing: impl IntoIterator<Item = &'a Rect>) -> bool {
    existing
        .into_iter()
        .any(|other| candidate.collides_with(other))
}
