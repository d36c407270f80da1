/// External (serializable) representations of instances and solutions.
pub mod ext_repr;

mod export;
mod import;

/// All logic for drawing [`Bin`](crate::entities::Bin)s as SVG
pub mod svg;

#[doc(inline)]
pub use export::{export_layout, export_solution};
#[doc(inline)]
pub use import::{import_bin, import_instance, import_item};
