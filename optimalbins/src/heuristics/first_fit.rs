use log::debug;

use crate::entities::{Bin, Item, Position};
use crate::heuristics::bottom_left::{candidate_positions, fits_at};
use crate::heuristics::{HeuristicMetrics, PlacementHeuristic};

/// Places an item at the origin of the first bin whose dimensions admit it.
///
/// By default only the dimensions of the bin are checked, so several items can end up stacked on
/// the origin of the same bin. In `strict` mode the item is instead placed at the first free slot
/// (origin, then the corners of the already placed items) where it stays within the bin and does not overlap.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FirstFit {
    pub strict: bool,
}

impl PlacementHeuristic for FirstFit {
    fn metrics(&self) -> HeuristicMetrics {
        let description = match self.strict {
            false => "Places each item at the origin of the first bin large enough to contain it",
            true => "Places each item at the first free slot of the first bin with room for it",
        };
        HeuristicMetrics {
            algorithm: "first_fit".to_string(),
            heuristic: None,
            description: description.to_string(),
        }
    }

    fn place(&self, item: &Item, bin: &mut Bin) -> Option<Position> {
        let position = match self.strict {
            false => bin.can_fit(item).then_some(Position::ORIGIN),
            true => candidate_positions(bin).find(|pos| fits_at(bin, item, pos)),
        }?;

        debug!("[FF] placing {} at {:?} in {}", item.id, position, bin.id);
        bin.place_item(item.clone(), position);
        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, w: f32, h: f32) -> Item {
        Item::new(id, w, h).unwrap()
    }

    #[test]
    fn places_at_origin_when_dimensions_allow() {
        let mut bin = Bin::new("bin_1", 5.0, 5.0).unwrap();
        let ff = FirstFit::default();
        assert_eq!(ff.place(&item("a", 3.0, 3.0), &mut bin), Some(Position::ORIGIN));
        // dimensions alone are checked, the second item lands on top of the first one
        assert_eq!(ff.place(&item("b", 3.0, 3.0), &mut bin), Some(Position::ORIGIN));
        assert_eq!(bin.n_items(), 2);
    }

    #[test]
    fn rejects_items_larger_than_the_bin() {
        let mut bin = Bin::new("bin_1", 5.0, 5.0).unwrap();
        let ff = FirstFit::default();
        assert_eq!(ff.place(&item("a", 6.0, 2.0), &mut bin), None);
        assert_eq!(ff.place(&item("b", 2.0, 6.0), &mut bin), None);
        assert!(bin.is_empty());
    }

    #[test]
    fn strict_mode_avoids_overlap() {
        let mut bin = Bin::new("bin_1", 5.0, 5.0).unwrap();
        let ff = FirstFit { strict: true };
        assert_eq!(ff.place(&item("a", 3.0, 3.0), &mut bin), Some(Position::ORIGIN));
        assert_eq!(
            ff.place(&item("b", 2.0, 2.0), &mut bin),
            Some(Position::new(3.0, 0.0))
        );
        assert_eq!(ff.place(&item("c", 3.0, 3.0), &mut bin), None);
        assert_eq!(bin.n_items(), 2);
    }
}
