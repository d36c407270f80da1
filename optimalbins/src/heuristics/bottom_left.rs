use log::debug;
use ordered_float::OrderedFloat;

use crate::entities::{Bin, Item, Position};
use crate::geometry::Rect;
use crate::heuristics::{HeuristicMetrics, PlacementHeuristic};

/// Places an item at the lowest (then leftmost) candidate position where it stays within the bin
/// and does not overlap any placed item.
///
/// Candidates are the origin plus, for every placed item, its bottom-right and top-left corners.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BottomLeft;

impl PlacementHeuristic for BottomLeft {
    fn metrics(&self) -> HeuristicMetrics {
        HeuristicMetrics {
            algorithm: "bottom_left".to_string(),
            heuristic: None,
            description: "Places each item at the lowest, then leftmost, free corner of a bin"
                .to_string(),
        }
    }

    fn place(&self, item: &Item, bin: &mut Bin) -> Option<Position> {
        // min_by_key keeps the first of equally low candidates
        let position = candidate_positions(bin)
            .filter(|pos| fits_at(bin, item, pos))
            .min_by_key(|pos| (OrderedFloat(pos.y), OrderedFloat(pos.x)))?;

        debug!("[BL] placing {} at {:?} in {}", item.id, position, bin.id);
        bin.place_item(item.clone(), position);
        Some(position)
    }
}

/// The origin, followed by the bottom-right and top-left corner of every placed item, in placement order.
pub(crate) fn candidate_positions(bin: &Bin) -> impl Iterator<Item = Position> + '_ {
    let corners = bin.placed_items.iter().flat_map(|pi| {
        let r = pi.rect();
        [Position::new(r.x_max, r.y_min), Position::new(r.x_min, r.y_max)]
    });
    std::iter::once(Position::ORIGIN).chain(corners)
}

/// Whether `item` placed at `pos` stays within `bin` and does not overlap any of its placed items.
pub(crate) fn fits_at(bin: &Bin, item: &Item, pos: &Position) -> bool {
    let rect = Rect::from_xywh(pos.x, pos.y, item.width, item.height);
    bin.rect().contains(&rect) && !bin.placed_items.iter().any(|pi| pi.rect().overlaps(&rect))
}
