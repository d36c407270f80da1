mod bin;
mod item;
mod placed_item;

#[doc(inline)]
pub use bin::Bin;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use item::Orientation;
#[doc(inline)]
pub use placed_item::PlacedItem;
#[doc(inline)]
pub use placed_item::Position;
