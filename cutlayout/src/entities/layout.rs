use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::debug;

use crate::accounting;
use crate::collision_detection::cut_bbox;
use crate::entities::{BasePlate, CutPiece, CutSpec, ShapeType};
use crate::error::WorkshopError;
use crate::geometry::PixelScale;
use crate::geometry::geo_traits::{AlmostEncloses, CollidesWith};
use crate::geometry::primitives::{Point, Rect};
use crate::placement;
use crate::util::{ScanConfig, assertions};

/// A [`Layout`] is the set of cuts that have been placed on a single base.
/// Cuts placed through [`Layout::place_cut`] never overlap and never leave the base.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub shape_type: ShapeType,
    pub base: BasePlate,
    /// Placed cuts, in order of placement
    pub cuts: Vec<CutPiece>,
}

impl Layout {
    pub fn new(shape_type: ShapeType, base: BasePlate) -> Self {
        Layout {
            shape_type,
            base,
            cuts: vec![],
        }
    }

    /// Pixel-space bounding box of the base
    pub fn bbox(&self, scale: &PixelScale) -> Rect {
        self.base.bbox(scale)
    }

    /// Pixel-space bounding boxes of all placed cuts, in order of placement
    pub fn cut_bboxes<'a>(&'a self, scale: &'a PixelScale) -> impl Iterator<Item = Rect> + 'a {
        self.cuts
            .iter()
            .map(|cut| cut_bbox(cut, &self.base, self.shape_type, scale))
    }

    /// Searches a free slot for `spec` without modifying the layout.
    /// Returns `Ok(None)` if the cut is valid but does not fit anywhere.
    pub fn find_slot(
        &self,
        spec: &CutSpec,
        scale: &PixelScale,
        config: &ScanConfig,
        probe_counter: &mut usize,
    ) -> Result<Option<Point>, WorkshopError> {
        let (width, height) = spec.dimensions(self.shape_type, &self.base)?;
        Ok(placement::find_slot(
            width,
            height,
            &self.base,
            self.shape_type,
            &self.cuts,
            scale,
            config,
            probe_counter,
        ))
    }

    /// Places a cut in the first free slot and returns it.
    /// If the cut is invalid or does not fit, the layout is left unchanged.
    pub fn place_cut(
        &mut self,
        spec: &CutSpec,
        scale: &PixelScale,
        config: &ScanConfig,
        probe_counter: &mut usize,
    ) -> Result<&CutPiece, WorkshopError> {
        let (width, height) = spec.dimensions(self.shape_type, &self.base)?;
        let color = spec.color()?;

        let Point(x, y) = placement::find_slot(
            width,
            height,
            &self.base,
            self.shape_type,
            &self.cuts,
            scale,
            config,
            probe_counter,
        )
        .ok_or(WorkshopError::NoSpace { width, height })?;

        self.cuts.push(CutPiece {
            width,
            height,
            color,
            x,
            y,
        });
        debug!(
            "placed cut #{} at {}",
            self.cuts.len() - 1,
            Point(x, y)
        );

        debug_assert!(assertions::layout_is_feasible(self, scale));

        Ok(&self.cuts[self.cuts.len() - 1])
    }

    /// Weight of the base not yet allocated to placed cuts
    pub fn remaining_weight(&self) -> f64 {
        accounting::remaining_weight(&self.base, self.shape_type, &self.cuts)
    }

    /// Fraction of the base's length (shafts) or area (plates) taken up by the cuts
    pub fn density(&self) -> f64 {
        accounting::consumed_fraction(&self.base, self.shape_type, &self.cuts)
    }

    pub fn n_cuts(&self) -> usize {
        self.cuts.len()
    }

    /// True if no cuts are placed
    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Lists every pair of overlapping cuts and every cut which is not fully on the base.
    pub fn violations(&self, scale: &PixelScale) -> Vec<LayoutViolation> {
        let base_bbox = self.bbox(scale);
        let bboxes = self.cut_bboxes(scale).collect_vec();

        let out_of_bounds = bboxes
            .iter()
            .positions(|bbox| !base_bbox.almost_encloses(bbox))
            .map(|index| LayoutViolation::OutOfBounds { index });

        let overlaps = bboxes
            .iter()
            .enumerate()
            .tuple_combinations()
            .filter(|((_, a), (_, b))| a.collides_with(*b))
            .map(|((first, _), (second, _))| LayoutViolation::Overlap { first, second });

        out_of_bounds.chain(overlaps).collect()
    }

    /// Returns true if no cuts overlap and all of them lie on the base
    pub fn is_feasible(&self, scale: &PixelScale) -> bool {
        self.violations(scale).is_empty()
    }
}

/// A broken layout invariant, referring to cuts by their index in [`Layout::cuts`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutViolation {
    /// Two cuts share interior area
    Overlap { first: usize, second: usize },
    /// A cut extends beyond the base
    OutOfBounds { index: usize },
}

impl Display for LayoutViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutViolation::Overlap { first, second } => {
                write!(f, "cut #{first} overlaps cut #{second}")
            }
            LayoutViolation::OutOfBounds { index } => {
                write!(f, "cut #{index} extends beyond the base")
            }
        }
    }
}
