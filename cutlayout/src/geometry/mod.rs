mod pixel_scale;

pub mod geo_traits;
pub mod primitives;

#[doc(inline)]
pub use pixel_scale::PixelScale;
