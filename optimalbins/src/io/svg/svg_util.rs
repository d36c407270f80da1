use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgThemes,
    /// Draws the free rectangles of the bin as dashed outlines
    #[serde(default)]
    pub free_rects: bool,
    /// Writes the id of each item at its center
    #[serde(default = "default_labels")]
    pub labels: bool,
}

fn default_labels() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgThemes::default(),
            free_rects: false,
            labels: true,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub enum SvgThemes {
    #[default]
    EarthTones,
    Gray,
}

impl SvgThemes {
    pub fn theme(&self) -> SvgTheme {
        match self {
            SvgThemes::EarthTones => EARTH_TONES_THEME,
            SvgThemes::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgTheme {
    pub stroke_width_multiplier: f32,
    pub bin_fill: &'static str,
    pub item_fill: &'static str,
    pub free_rect_stroke: &'static str,
}

pub static EARTH_TONES_THEME: SvgTheme = SvgTheme {
    stroke_width_multiplier: 2.0,
    bin_fill: "#CC824A",
    item_fill: "#FFC879",
    free_rect_stroke: "#2D2D2D",
};

pub static GRAY_THEME: SvgTheme = SvgTheme {
    stroke_width_multiplier: 2.5,
    bin_fill: "#C3C3C3",
    item_fill: "#8F8F8F",
    free_rect_stroke: "#FF0000",
};
