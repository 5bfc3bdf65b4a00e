mod overlap;

#[doc(inline)]
pub use overlap::cut_bbox;
#[doc(inline)]
pub use overlap::overlaps;
