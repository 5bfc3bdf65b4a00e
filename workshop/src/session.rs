use std::time::Instant;

use float_cmp::approx_eq;
use log::{debug, info, warn};
use svg::Document;
use thousands::Separable;

use cutlayout::entities::{
    BaseConfig, BasePlate, CutPiece, CutSpec, Layout, LayoutViolation, ShapeType,
    WorkshopSnapshot,
};
use cutlayout::error::WorkshopError;
use cutlayout::io::ext_repr::ExtWorkshopSnapshot;
use cutlayout::io::svg::layout_to_svg;
use cutlayout::io::{export, import};
use cutlayout::util::assertions;

use crate::config::{RestorePolicy, WorkshopConfig};
use crate::store::KeyValueStore;

/// Where a [`Workshop`] is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkshopState {
    NoShapeChosen,
    /// A shape type was chosen, but no base exists yet
    NoBase,
    /// A base exists without any cuts on it
    BaseEmpty,
    BaseWithCuts,
}

/// Outcome of restoring saved progress
#[derive(Clone, Debug, PartialEq)]
pub struct LoadReport {
    pub state: WorkshopState,
    pub n_cuts: usize,
    /// Overlapping or out-of-bounds cuts found in the restored layout.
    /// Always empty under [`RestorePolicy::Trust`].
    pub violations: Vec<LayoutViolation>,
}

/// A single workshop session: one shape type, at most one base and the cuts placed on it.
///
/// Every operation either succeeds completely or leaves the session untouched.
pub struct Workshop<S: KeyValueStore> {
    pub config: WorkshopConfig,
    store: S,
    shape_type: Option<ShapeType>,
    layout: Option<Layout>,
    remaining_weight: f64,
    /// Number of scan positions probed since the session started
    pub probe_counter: usize,
}

impl<S: KeyValueStore> Workshop<S> {
    pub fn new(config: WorkshopConfig, store: S) -> Self {
        assert!(config.scan_config.step_px > 0.0);
        assert!(config.pixel_scale.scale > 0.0);
        assert!(config.pixel_scale.pad.is_finite());
        Workshop {
            config,
            store,
            shape_type: None,
            layout: None,
            remaining_weight: 0.0,
            probe_counter: 0,
        }
    }

    /// Selects the kind of stock to work with.
    /// Any existing base and cuts are discarded, even if the shape type does not change.
    pub fn choose_shape_type(&mut self, shape_type: ShapeType) {
        if let Some(layout) = &self.layout {
            info!(
                "[WS] discarding {} base with {} cuts",
                layout.shape_type,
                layout.n_cuts()
            );
        }
        self.shape_type = Some(shape_type);
        self.layout = None;
        self.remaining_weight = 0.0;
        info!("[WS] shape type {shape_type} chosen");
    }

    /// Creates a new base from `config`, replacing the current base and its cuts.
    pub fn create_base(&mut self, config: &BaseConfig) -> Result<&BasePlate, WorkshopError> {
        let shape_type = self
            .shape_type
            .ok_or(WorkshopError::Precondition("choose a shape type before creating a base"))?;
        let base = BasePlate::try_new(shape_type, config)?;

        let layout = self.layout.insert(Layout::new(shape_type, base));
        self.remaining_weight = layout.remaining_weight();
        info!(
            "[WS] created {shape_type} base of {} x {} cm weighing {:.3}",
            layout.base.width, layout.base.height, layout.base.weight
        );
        Ok(&layout.base)
    }

    /// Places a cut at the first free slot of the current base.
    /// On failure the base, its cuts and the remaining weight are left unchanged.
    pub fn add_cut(&mut self, spec: &CutSpec) -> Result<&CutPiece, WorkshopError> {
        let layout = self
            .layout
            .as_mut()
            .ok_or(WorkshopError::Precondition("create a base before adding cuts"))?;

        let start = Instant::now();
        let mut n_probes = 0;
        let placed = layout.place_cut(
            spec,
            &self.config.pixel_scale,
            &self.config.scan_config,
            &mut n_probes,
        );
        self.probe_counter += n_probes;

        if let Err(err) = placed {
            info!(
                "[WS] cut rejected after {} probes: {err}",
                n_probes.separate_with_commas()
            );
            return Err(err);
        }

        self.remaining_weight = layout.remaining_weight();
        let cut = &layout.cuts[layout.cuts.len() - 1];
        info!(
            "[WS] placed cut #{} of {} x {} cm at ({}, {}) in {:.3}ms ({} probes), remaining weight {:.3}",
            layout.cuts.len() - 1,
            cut.width,
            cut.height,
            cut.x,
            cut.y,
            start.elapsed().as_secs_f64() * 1000.0,
            n_probes.separate_with_commas(),
            self.remaining_weight
        );
        Ok(cut)
    }

    /// Persists the current state under the configured snapshot key.
    pub fn save_progress(&mut self) -> Result<(), WorkshopError> {
        let snapshot = self.snapshot();
        if let Some(layout) = &self.layout {
            debug_assert!(assertions::snapshot_matches_layout(&snapshot, layout));
        }
        let blob = serde_json::to_string(&export::export_snapshot(&snapshot))
            .map_err(|e| WorkshopError::Store(e.to_string()))?;
        self.store.set_item(&self.config.snapshot_key, &blob)?;
        info!(
            "[WS] progress saved under {:?} ({} cuts)",
            self.config.snapshot_key,
            snapshot.cuts.len()
        );
        Ok(())
    }

    /// Replaces the current state with the progress saved under the configured snapshot key.
    pub fn load_progress(&mut self) -> Result<LoadReport, WorkshopError> {
        let blob = self
            .store
            .get_item(&self.config.snapshot_key)?
            .ok_or(WorkshopError::SnapshotNotFound)?;
        let ext_snapshot: ExtWorkshopSnapshot =
            serde_json::from_str(&blob).map_err(|e| WorkshopError::corrupt(e.to_string()))?;
        let snapshot = import::import_snapshot(&ext_snapshot)?;
        self.restore(&snapshot)
    }

    /// Restores the session to `snapshot`.
    /// The remaining weight is recomputed from the restored cuts rather than taken over.
    pub fn restore(&mut self, snapshot: &WorkshopSnapshot) -> Result<LoadReport, WorkshopError> {
        let layout = snapshot.to_layout()?;
        let policy = self.config.restore_policy;

        let violations = match (&layout, policy) {
            (Some(layout), RestorePolicy::Flag | RestorePolicy::Reject) => {
                layout.violations(&self.config.pixel_scale)
            }
            _ => vec![],
        };
        if let Some(first) = violations.first() {
            match policy {
                RestorePolicy::Reject => {
                    return Err(WorkshopError::corrupt(format!(
                        "{} layout violations, first: {first}",
                        violations.len()
                    )));
                }
                _ => violations
                    .iter()
                    .for_each(|v| warn!("[WS] restored layout is infeasible: {v}")),
            }
        }

        let remaining_weight = layout.as_ref().map_or(0.0, |l| l.remaining_weight());
        if !approx_eq!(f64, remaining_weight, snapshot.remaining_weight) {
            warn!(
                "[WS] saved remaining weight {} does not match the restored cuts, using {remaining_weight}",
                snapshot.remaining_weight
            );
        }

        self.shape_type = snapshot.shape_type;
        self.layout = layout;
        self.remaining_weight = remaining_weight;

        let report = LoadReport {
            state: self.state(),
            n_cuts: self.cut_count(),
            violations,
        };
        debug!("[WS] restored: {report:?}");
        Ok(report)
    }

    /// Immutable copy of the current state
    pub fn snapshot(&self) -> WorkshopSnapshot {
        match (&self.layout, self.shape_type) {
            (Some(layout), _) => WorkshopSnapshot {
                remaining_weight: self.remaining_weight,
                ..WorkshopSnapshot::from_layout(layout)
            },
            (None, Some(shape_type)) => WorkshopSnapshot::without_base(shape_type),
            (None, None) => WorkshopSnapshot::empty(),
        }
    }

    pub fn state(&self) -> WorkshopState {
        match (&self.layout, self.shape_type) {
            (Some(layout), _) if layout.is_empty() => WorkshopState::BaseEmpty,
            (Some(_), _) => WorkshopState::BaseWithCuts,
            (None, Some(_)) => WorkshopState::NoBase,
            (None, None) => WorkshopState::NoShapeChosen,
        }
    }

    pub fn remaining_weight(&self) -> f64 {
        self.remaining_weight
    }

    pub fn cut_count(&self) -> usize {
        self.layout.as_ref().map_or(0, |l| l.n_cuts())
    }

    pub fn shape_type(&self) -> Option<ShapeType> {
        self.shape_type
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Renders the base and its cuts, or a placeholder if there is no base
    pub fn to_svg(&self, title: &str) -> Document {
        layout_to_svg(
            self.layout.as_ref(),
            &self.config.pixel_scale,
            self.config.svg_draw_options,
            title,
        )
    }
}
