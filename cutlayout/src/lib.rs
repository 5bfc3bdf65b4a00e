//! `cutlayout` places rectangular and length-only cuts on a base plate or shaft
//! with a deterministic first-fit scan, and tracks how much of the base's weight
//! remains unallocated.

/// Remaining-weight accounting
pub mod accounting;

/// Overlap tests between cuts and candidate slots
pub mod collision_detection;

/// Base plates, cut pieces, layouts and snapshots
pub mod entities;

/// The error taxonomy shared by all workshop operations
pub mod error;

/// Geometric primitives and the unit-to-pixel conversion
pub mod geometry;

/// External (serializable) representation and rendering
pub mod io;

/// First-fit slot search on the pixel grid
pub mod placement;

/// Helper functions which do not belong to any specific module
pub mod util;
