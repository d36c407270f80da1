use serde::{Deserialize, Serialize};

use crate::entities::Orientation;
use crate::heuristics::HeuristicMetrics;

/// External representation of a problem instance: a set of bins and a set of items to pack in them.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Bins available at the start. The first one also serves as template for overflow bins
    pub bins: Vec<ExtBin>,
    /// Items to pack, in order
    pub items: Vec<ExtItem>,
}

/// External representation of a [`Bin`](crate::entities::Bin).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtBin {
    pub id: String,
    pub width: f32,
    pub height: f32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub depth: Option<f32>,
}

/// External representation of an [`Item`](crate::entities::Item).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtItem {
    pub id: String,
    pub width: f32,
    pub height: f32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub depth: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub weight: Option<f32>,
    /// Whether the item may be rotated, allowed if not specified
    #[serde(default = "default_rotations_allowed")]
    pub rotations_allowed: bool,
}

fn default_rotations_allowed() -> bool {
    true
}

/// External representation of a [`PackingResult`](crate::result::PackingResult).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// One layout per bin used
    pub layouts: Vec<ExtLayout>,
    /// The heuristic which produced the solution
    pub metrics: HeuristicMetrics,
    pub n_bins: usize,
    /// Total placed item area divided by the total bin area
    pub density: f32,
    /// Wall-clock time of the packing run
    pub run_time_ms: u64,
}

/// A single bin and its contents
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtLayout {
    pub bin_id: String,
    pub width: f32,
    pub height: f32,
    pub density: f32,
    pub placed_items: Vec<ExtPlacedItem>,
    /// Free rectangles at the end of the run, only for heuristics that track them
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub free_rects: Vec<ExtRect>,
}

/// An item, positioned by the bottom-left corner of its footprint
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacedItem {
    pub item_id: String,
    pub x: f32,
    pub y: f32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub z: Option<f32>,
    pub width: f32,
    pub height: f32,
    pub orientation: Orientation,
}

/// Axis-aligned rectangle with its bottom-left corner at (x, y)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}
