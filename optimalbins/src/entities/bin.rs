use crate::entities::item::check_dimension;
use crate::entities::{Item, PlacedItem, Position};
use crate::error::Result;
use crate::free_rects::FreeRectSet;
use crate::geometry::Rect;

/// A `Bin` is a fixed-size container in which items can be placed.
#[derive(Clone, Debug, PartialEq)]
pub struct Bin {
    pub id: String,
    pub width: f32,
    pub height: f32,
    /// Present if the bin has a third dimension
    pub depth: Option<f32>,
    /// Items in the bin, in placement order
    pub placed_items: Vec<PlacedItem>,
    /// Unoccupied space, only tracked by heuristics that need it
    pub free_rects: Option<FreeRectSet>,
}

impl Bin {
    pub fn new(id: impl Into<String>, width: f32, height: f32) -> Result<Self> {
        let id = id.into();
        check_dimension(&id, "width", width)?;
        check_dimension(&id, "height", height)?;
        Ok(Bin {
            id,
            width,
            height,
            depth: None,
            placed_items: vec![],
            free_rects: None,
        })
    }

    pub fn with_depth(mut self, depth: f32) -> Result<Self> {
        check_dimension(&self.id, "depth", depth)?;
        self.depth = Some(depth);
        Ok(self)
    }

    /// An empty bin with the same dimensions as `self`.
    pub fn empty_like(&self, id: impl Into<String>) -> Self {
        Bin {
            id: id.into(),
            width: self.width,
            height: self.height,
            depth: self.depth,
            placed_items: vec![],
            free_rects: None,
        }
    }

    /// The full extent of the bin, with its bottom-left corner at the origin.
    pub fn rect(&self) -> Rect {
        Rect::from_xywh(0.0, 0.0, self.width, self.height)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn placed_item_area(&self) -> f32 {
        self.placed_items.iter().map(|pi| pi.item.area()).sum()
    }

    /// Ratio of the area occupied by items to the area of the bin.
    pub fn density(&self) -> f32 {
        self.placed_item_area() / self.area()
    }

    pub fn is_empty(&self) -> bool {
        self.placed_items.is_empty()
    }

    pub fn n_items(&self) -> usize {
        self.placed_items.len()
    }

    /// Capacity check on the 2D footprint alone, placed items are not considered.
    /// Depth is carried along but plays no part in packing.
    pub fn can_fit(&self, item: &Item) -> bool {
        item.width <= self.width && item.height <= self.height
    }

    /// Records `item` at `position`. No feasibility checks are performed.
    pub fn place_item(&mut self, item: Item, position: Position) -> &PlacedItem {
        let index = self.placed_items.len();
        self.placed_items.push(PlacedItem::new(item, position));
        &self.placed_items[index]
    }

    /// The tracked free space of the bin, starting to track it if it was not yet.
    pub fn free_rects_mut(&mut self) -> &mut FreeRectSet {
        let bin_rect = self.rect();
        self.free_rects
            .get_or_insert_with(|| FreeRectSet::from_rects(vec![bin_rect]))
    }

    /// The free rectangles of the bin, empty if free space is not tracked.
    pub fn free_rects(&self) -> &[Rect] {
        match &self.free_rects {
            Some(frs) => frs.rects(),
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_check_ignores_placed_items() {
        let mut bin = Bin::new("b", 5.0, 5.0).unwrap();
        let item = Item::new("a", 5.0, 5.0).unwrap();
        assert!(bin.can_fit(&item));
        bin.place_item(item.clone(), Position::ORIGIN);
        assert!(bin.can_fit(&item));
        assert!(!bin.can_fit(&Item::new("w", 6.0, 1.0).unwrap()));
    }

    #[test]
    fn capacity_check_ignores_depth() {
        let bin = Bin::new("b", 5.0, 5.0).unwrap().with_depth(5.0).unwrap();
        let flat = Item::new("a", 5.0, 5.0).unwrap();
        let deep = Item::new("b", 1.0, 1.0).unwrap().with_depth(6.0).unwrap();
        assert!(bin.can_fit(&flat));
        assert!(bin.can_fit(&deep));
        assert!(!bin.can_fit(&Item::new("c", 1.0, 6.0).unwrap()));
    }

    #[test]
    fn empty_like_copies_dimensions_only() {
        let mut bin = Bin::new("b", 4.0, 3.0).unwrap();
        bin.place_item(Item::new("a", 1.0, 1.0).unwrap(), Position::ORIGIN);
        let copy = bin.empty_like("bin_2");
        assert_eq!(copy.id, "bin_2");
        assert_eq!((copy.width, copy.height), (4.0, 3.0));
        assert!(copy.is_empty());
    }

    #[test]
    fn density_of_half_filled_bin() {
        let mut bin = Bin::new("b", 4.0, 4.0).unwrap();
        bin.place_item(Item::new("a", 4.0, 2.0).unwrap(), Position::ORIGIN);
        assert_eq!(bin.density(), 0.5);
        assert_eq!(bin.placed_items[0].rect(), Rect::from_xywh(0.0, 0.0, 4.0, 2.0));
    }
}
