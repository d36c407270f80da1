use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::entities::{Bin, Item, Position};
use crate::error::PackError;
use crate::free_rects::FreeRectSet;
use crate::geometry::Rect;
use crate::heuristics::{HeuristicMetrics, PlacementHeuristic, normalize_name};
use crate::util::assertions;

/// Places an item in the best scoring free rectangle, according to a [`MaxRectsRule`].
/// Afterwards every free rectangle overlapping the item is split around it, and the set is pruned.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct MaxRects {
    pub rule: MaxRectsRule,
}

/// Scoring rule used to select a free rectangle for an item.
/// Ties are broken in favour of the rectangle encountered first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MaxRectsRule {
    /// Minimizes the smaller of both leftovers
    #[default]
    BestShortSideFit,
    /// Selects the largest of the bigger leftovers
    BestLongSideFit,
    /// Minimizes the unused area of the free rectangle
    BestAreaFit,
    /// Minimizes `y * 10000 + x` of the free rectangle's corner
    BottomLeft,
    /// Minimizes the negated perimeter half-sum, `-(width + height)`, of the free rectangle
    ContactPointRule,
}

impl MaxRectsRule {
    /// Score of placing an item of `width` x `height` in `free`.
    pub fn score(&self, free: &Rect, width: f32, height: f32) -> f32 {
        let leftover_w = free.width() - width;
        let leftover_h = free.height() - height;
        match self {
            MaxRectsRule::BestShortSideFit => f32::min(leftover_w, leftover_h),
            MaxRectsRule::BestLongSideFit => f32::max(leftover_w, leftover_h),
            MaxRectsRule::BestAreaFit => free.area() - width * height,
            MaxRectsRule::BottomLeft => free.y_min * 10000.0 + free.x_min,
            MaxRectsRule::ContactPointRule => -(free.width() + free.height()),
        }
    }

    /// Whether `score` strictly improves upon `best`.
    pub fn improves(&self, score: f32, best: f32) -> bool {
        match self {
            MaxRectsRule::BestLongSideFit => score > best,
            _ => score < best,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MaxRectsRule::BestShortSideFit => "best_short_side_fit",
            MaxRectsRule::BestLongSideFit => "best_long_side_fit",
            MaxRectsRule::BestAreaFit => "best_area_fit",
            MaxRectsRule::BottomLeft => "bottom_left",
            MaxRectsRule::ContactPointRule => "contact_point_rule",
        }
    }
}

impl FromStr for MaxRectsRule {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "bestshortsidefit" | "bssf" => Ok(MaxRectsRule::BestShortSideFit),
            "bestlongsidefit" | "blsf" => Ok(MaxRectsRule::BestLongSideFit),
            "bestareafit" | "baf" => Ok(MaxRectsRule::BestAreaFit),
            "bottomleft" | "bl" => Ok(MaxRectsRule::BottomLeft),
            "contactpointrule" | "contactpoint" | "cp" => Ok(MaxRectsRule::ContactPointRule),
            _ => Err(PackError::UnknownHeuristic {
                algorithm: "max_rects".to_string(),
                name: s.to_string(),
            }),
        }
    }
}

impl Display for MaxRectsRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PlacementHeuristic for MaxRects {
    fn metrics(&self) -> HeuristicMetrics {
        HeuristicMetrics {
            algorithm: "max_rects".to_string(),
            heuristic: Some(self.rule.to_string()),
            description: "Selects the best scoring maximal free rectangle and splits all free rectangles it overlaps"
                .to_string(),
        }
    }

    fn prepare_bin(&self, bin: &mut Bin) {
        let mut frs = FreeRectSet::initialize(bin);
        // items already present before the run
        for pi in &bin.placed_items {
            frs.update(&pi.rect());
        }
        bin.free_rects = Some(frs);
    }

    fn place(&self, item: &Item, bin: &mut Bin) -> Option<Position> {
        let frs = bin.free_rects_mut();

        let mut best: Option<(&Rect, f32)> = None;
        for free in frs.rects().iter().filter(|fr| fr.fits(item.width, item.height)) {
            let score = self.rule.score(free, item.width, item.height);
            match best {
                Some((_, best_score)) if !self.rule.improves(score, best_score) => {}
                _ => best = Some((free, score)),
            }
        }
        let (free, score) = best?;

        let position = Position::new(free.x_min, free.y_min);
        let placed = Rect::from_xywh(position.x, position.y, item.width, item.height);
        frs.update(&placed);

        debug!(
            "[MR] placing {} at {:?} in {} (score: {score})",
            item.id, position, bin.id
        );
        bin.place_item(item.clone(), position);

        debug_assert!(assertions::free_space_covers_bin(bin));
        Some(position)
    }

    fn place_at_origin(&self, item: &Item, bin: &mut Bin) -> Position {
        debug_assert!(bin.is_empty());
        let mut frs = FreeRectSet::initialize(bin);
        frs.update(&Rect::from_xywh(0.0, 0.0, item.width, item.height));
        bin.free_rects = Some(frs);
        bin.place_item(item.clone(), Position::ORIGIN);
        Position::ORIGIN
    }
}
