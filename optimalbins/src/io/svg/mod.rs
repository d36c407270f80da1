mod bin_to_svg;
mod svg_util;

#[doc(inline)]
pub use bin_to_svg::bin_to_svg;
#[doc(inline)]
pub use svg_util::{SvgDrawOptions, SvgTheme, SvgThemes};
