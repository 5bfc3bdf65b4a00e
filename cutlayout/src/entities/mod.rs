pub(crate) mod base_plate;
mod cut_piece;
mod layout;
mod shape_type;
mod snapshot;

#[doc(inline)]
pub use base_plate::BaseConfig;

#[doc(inline)]
pub use base_plate::BasePlate;

#[doc(inline)]
pub use base_plate::DEFAULT_SHAFT_HEIGHT;

#[doc(inline)]
pub use cut_piece::CutPiece;

#[doc(inline)]
pub use cut_piece::CutSpec;

#[doc(inline)]
pub use layout::Layout;

#[doc(inline)]
pub use layout::LayoutViolation;

#[doc(inline)]
pub use shape_type::ShapeType;

#[doc(inline)]
pub use snapshot::WorkshopSnapshot;
