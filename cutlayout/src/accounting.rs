use crate::entities::{BasePlate, CutPiece, ShapeType};

/// Weight of the base that is not yet allocated to any of the `cuts`.
///
/// Each cut consumes a share of the base's weight proportional to its length (shafts) or area (plates).
/// The result is never negative, and is 0 for a base without weight.
pub fn remaining_weight(base: &BasePlate, shape_type: ShapeType, cuts: &[CutPiece]) -> f64 {
    let weight = base.weight;
    if !(weight > 0.0) {
        return 0.0;
    }
    let consumed = cuts
        .iter()
        .map(|cut| cut_fraction(cut, base, shape_type) * weight)
        .sum::<f64>();
    f64::max(0.0, weight - consumed)
}

/// Fraction of the base's length (shafts) or area (plates) taken up by the `cuts`.
/// Only restored layouts with overlapping cuts can exceed 1.
pub fn consumed_fraction(base: &BasePlate, shape_type: ShapeType, cuts: &[CutPiece]) -> f64 {
    cuts.iter()
        .map(|cut| cut_fraction(cut, base, shape_type))
        .sum()
}

fn cut_fraction(cut: &CutPiece, base: &BasePlate, shape_type: ShapeType) -> f64 {
    match shape_type {
        ShapeType::OneD => cut.width / non_zero(base.width),
        ShapeType::TwoD => cut.area() / non_zero(base.area()),
    }
}

//a degenerate base would otherwise turn the accounting into NaN
fn non_zero(denominator: f64) -> f64 {
    match denominator == 0.0 {
        true => 1.0,
        false => denominator,
    }
}
