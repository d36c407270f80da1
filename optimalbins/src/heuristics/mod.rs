mod bottom_left;
mod first_fit;
mod guillotine;
mod max_rects;

#[doc(inline)]
pub use bottom_left::BottomLeft;
#[doc(inline)]
pub use first_fit::FirstFit;
#[doc(inline)]
pub use guillotine::{Guillotine, GuillotineSplit};
#[doc(inline)]
pub use max_rects::{MaxRects, MaxRectsRule};

use serde::{Deserialize, Serialize};

use crate::config::PackConfig;
use crate::entities::{Bin, Item, Position};
use crate::error::{PackError, Result};

/// Contract shared by all placement heuristics.
///
/// A heuristic decides where an item goes within a single bin.
/// It only mutates the bin (its items and free space) when the item is actually placed.
pub trait PlacementHeuristic {
    /// Name and configuration of the heuristic
    fn metrics(&self) -> HeuristicMetrics;

    /// Resets whatever free-space state the heuristic keeps for `bin`.
    /// Called once per bin before the first placement of a packing run.
    fn prepare_bin(&self, _bin: &mut Bin) {}

    /// Searches a position for `item` in `bin`.
    /// If one is found, the item is placed there and the position is returned.
    fn place(&self, item: &Item, bin: &mut Bin) -> Option<Position>;

    /// Places `item` at the origin of the empty `bin` without any validation.
    fn place_at_origin(&self, item: &Item, bin: &mut Bin) -> Position {
        debug_assert!(bin.is_empty());
        bin.place_item(item.clone(), Position::ORIGIN);
        Position::ORIGIN
    }
}

/// Metadata identifying a heuristic, reported alongside the packed bins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicMetrics {
    pub algorithm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heuristic: Option<String>,
    pub description: String,
}

/// All available placement heuristics
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Strategy {
    FirstFit(FirstFit),
    BottomLeft(BottomLeft),
    Guillotine(Guillotine),
    MaxRects(MaxRects),
}

impl Strategy {
    /// Builds the strategy selected by `config`, rejecting unknown or unsupported names.
    pub fn from_config(config: &PackConfig) -> Result<Self> {
        config.check_dimension()?;
        Strategy::from_names(&config.algorithm, config.heuristic.as_deref(), config.strict)
    }

    /// Builds a strategy from an algorithm name and an optional heuristic name.
    /// Names are compared case-insensitively, ignoring underscores, dashes and spaces.
    pub fn from_names(algorithm: &str, heuristic: Option<&str>, strict: bool) -> Result<Self> {
        let no_heuristic = |algo: &str| match heuristic.map(normalize_name).as_deref() {
            None | Some("default") => Ok(()),
            Some(_) => Err(PackError::UnknownHeuristic {
                algorithm: algo.to_string(),
                name: heuristic.unwrap_or_default().to_string(),
            }),
        };

        match normalize_name(algorithm).as_str() {
            "firstfit" | "firstfit2d" => {
                no_heuristic("first_fit")?;
                Ok(Strategy::FirstFit(FirstFit { strict }))
            }
            "bottomleft" | "bottomleft2d" => {
                no_heuristic("bottom_left")?;
                Ok(Strategy::BottomLeft(BottomLeft))
            }
            "guillotine" | "guillotine2d" => {
                let split = match heuristic {
                    None => GuillotineSplit::default(),
                    Some(name) => name.parse()?,
                };
                Ok(Strategy::Guillotine(Guillotine { split }))
            }
            "maxrects" | "maxrects2d" => {
                let rule = match heuristic {
                    None => MaxRectsRule::default(),
                    Some(name) => name.parse()?,
                };
                Ok(Strategy::MaxRects(MaxRects { rule }))
            }
            _ => Err(PackError::UnknownAlgorithm(algorithm.to_string())),
        }
    }

    fn heuristic(&self) -> &dyn PlacementHeuristic {
        match self {
            Strategy::FirstFit(h) => h,
            Strategy::BottomLeft(h) => h,
            Strategy::Guillotine(h) => h,
            Strategy::MaxRects(h) => h,
        }
    }
}

impl PlacementHeuristic for Strategy {
    fn metrics(&self) -> HeuristicMetrics {
        self.heuristic().metrics()
    }

    fn prepare_bin(&self, bin: &mut Bin) {
        self.heuristic().prepare_bin(bin)
    }

    fn place(&self, item: &Item, bin: &mut Bin) -> Option<Position> {
        self.heuristic().place(item, bin)
    }

    fn place_at_origin(&self, item: &Item, bin: &mut Bin) -> Position {
        self.heuristic().place_at_origin(item, bin)
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::BottomLeft(BottomLeft)
    }
}

/// Lowercase, without underscores, dashes or spaces: `"Bottom_Left"` becomes `"bottomleft"`.
pub(crate) fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
