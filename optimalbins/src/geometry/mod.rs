mod geo_enums;
mod rect;

#[doc(inline)]
pub use geo_enums::GeoRelation;
#[doc(inline)]
pub use rect::Rect;
