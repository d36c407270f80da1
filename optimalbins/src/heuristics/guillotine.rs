use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::entities::{Bin, Item, Position};
use crate::error::PackError;
use crate::free_rects::FreeRectSet;
use crate::geometry::Rect;
use crate::heuristics::{HeuristicMetrics, PlacementHeuristic, normalize_name};
use crate::util::assertions;

/// Places an item in the first free rectangle able to hold it.
/// The rectangle is consumed and its leftover is split in two by a single guillotine cut.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Guillotine {
    pub split: GuillotineSplit,
}

/// Decides how the leftover of a consumed free rectangle is divided.
///
/// With the item in the bottom-left corner of the free rectangle, the leftover consists of
/// a region right of the item and a region above it. They share a corner block which
/// is assigned to exactly one of both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GuillotineSplit {
    /// Right region spans the item's height, top region the full width
    #[default]
    Default,
    /// Right region spans the full height, top region the item's width
    Alternative,
    /// Cut along the shorter leftover: the corner block joins the region with the larger leftover
    ShorterSide,
    /// Cut along the longer leftover: the corner block joins the region with the smaller leftover
    LongerSide,
}

impl GuillotineSplit {
    /// The leftover of `free` after placing an item of `width` x `height` in its bottom-left corner.
    /// Regions without area are omitted, regions sticking out of `free` are clipped to it.
    pub fn split(&self, free: &Rect, width: f32, height: f32) -> impl Iterator<Item = Rect> {
        let (x, y) = (free.x_min, free.y_min);
        let right_leftover = free.x_max - (x + width);
        let top_leftover = free.y_max - (y + height);

        let right = |h: f32| Rect::from_xywh(x + width, y, right_leftover, h);
        let top = |w: f32| Rect::from_xywh(x, y + height, w, top_leftover);

        let wide_top = [right(height), top(free.width())];
        let tall_right = [top(width), right(free.height())];

        let regions = match self {
            GuillotineSplit::Default => wide_top,
            GuillotineSplit::Alternative => [right(free.height()), top(width)],
            GuillotineSplit::ShorterSide => match right_leftover <= top_leftover {
                true => wide_top,
                false => tall_right,
            },
            GuillotineSplit::LongerSide => match right_leftover >= top_leftover {
                true => wide_top,
                false => tall_right,
            },
        };
        let free = *free;
        regions
            .into_iter()
            .filter_map(move |r| Rect::intersection(&r, &free))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GuillotineSplit::Default => "default",
            GuillotineSplit::Alternative => "alternative",
            GuillotineSplit::ShorterSide => "shorter_side",
            GuillotineSplit::LongerSide => "longer_side",
        }
    }
}

impl FromStr for GuillotineSplit {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "default" => Ok(GuillotineSplit::Default),
            "alternative" => Ok(GuillotineSplit::Alternative),
            "shorterside" | "shorter" => Ok(GuillotineSplit::ShorterSide),
            "longerside" | "longer" => Ok(GuillotineSplit::LongerSide),
            _ => Err(PackError::UnknownHeuristic {
                algorithm: "guillotine".to_string(),
                name: s.to_string(),
            }),
        }
    }
}

impl Display for GuillotineSplit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PlacementHeuristic for Guillotine {
    fn metrics(&self) -> HeuristicMetrics {
        HeuristicMetrics {
            algorithm: "guillotine".to_string(),
            heuristic: Some(self.split.to_string()),
            description: "Consumes the first fitting free rectangle and splits its leftover with a guillotine cut"
                .to_string(),
        }
    }

    fn prepare_bin(&self, bin: &mut Bin) {
        let mut rects = vec![bin.rect()];
        // items already present before the run
        for pi in &bin.placed_items {
            let occupied = pi.rect();
            rects = rects
                .iter()
                .flat_map(|free| carve(free, &occupied))
                .collect();
        }
        bin.free_rects = Some(FreeRectSet::from_rects(rects));
        debug_assert!(assertions::free_space_covers_bin(bin));
    }

    fn place(&self, item: &Item, bin: &mut Bin) -> Option<Position> {
        let frs = bin.free_rects_mut();
        let index = frs
            .rects()
            .iter()
            .position(|fr| fr.fits(item.width, item.height))?;

        let free = frs.take(index);
        frs.extend(self.split.split(&free, item.width, item.height));

        let position = Position::new(free.x_min, free.y_min);
        debug!("[GT] placing {} at {:?} in {}", item.id, position, bin.id);
        bin.place_item(item.clone(), position);

        debug_assert!(assertions::free_space_covers_bin(bin));
        Some(position)
    }

    fn place_at_origin(&self, item: &Item, bin: &mut Bin) -> Position {
        debug_assert!(bin.is_empty());
        let mut frs = FreeRectSet::initialize(bin);
        let free = frs.take(0);
        frs.extend(self.split.split(&free, item.width, item.height));
        bin.free_rects = Some(frs);
        bin.place_item(item.clone(), Position::ORIGIN);
        Position::ORIGIN
    }
}

/// Cuts `occupied` out of `free`, leaving mutually disjoint regions:
/// full-height strips left and right of `occupied`, and the parts below and above it in between.
fn carve(free: &Rect, occupied: &Rect) -> Vec<Rect> {
    let Some(cut) = Rect::intersection(free, occupied) else {
        return vec![*free];
    };
    [
        Rect::new(free.x_min, free.y_min, cut.x_min, free.y_max),
        Rect::new(cut.x_min, free.y_min, cut.x_max, cut.y_min),
        Rect::new(cut.x_min, cut.y_max, cut.x_max, free.y_max),
        Rect::new(cut.x_max, free.y_min, free.x_max, free.y_max),
    ]
    .into_iter()
    .filter(Rect::has_area)
    .collect()
}
