use crate::entities::Bin;
use crate::geometry::{GeoRelation, Rect};
use crate::util::assertions;

/// Unoccupied space of a single bin, represented as a list of free rectangles.
///
/// The rectangles may overlap each other, each one is an independent candidate for placing an item.
/// Together they cover exactly the part of the bin not occupied by items.
/// Rectangles fully contained in another one are redundant and removed by [`FreeRectSet::prune`].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FreeRectSet {
    rects: Vec<Rect>,
}

impl FreeRectSet {
    /// A set containing a single rectangle spanning the entire bin.
    pub fn initialize(bin: &Bin) -> Self {
        FreeRectSet {
            rects: vec![bin.rect()],
        }
    }

    pub fn from_rects(rects: Vec<Rect>) -> Self {
        FreeRectSet { rects }
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// The parts of `free` left uncovered by `placed`: the maximal sub-rectangles
    /// above, below, left and right of `placed`, clipped to `free`.
    /// Only sub-rectangles with a strictly positive width and height are returned.
    pub fn split_around(free: &Rect, placed: &Rect) -> impl Iterator<Item = Rect> + use<> {
        let above = Rect::new(free.x_min, placed.y_max, free.x_max, free.y_max);
        let below = Rect::new(free.x_min, free.y_min, free.x_max, placed.y_min);
        let left = Rect::new(free.x_min, free.y_min, placed.x_min, free.y_max);
        let right = Rect::new(placed.x_max, free.y_min, free.x_max, free.y_max);

        [above, below, left, right].into_iter().filter(Rect::has_area)
    }

    /// Splits every rectangle intersecting `placed` around it, keeps all others unchanged and prunes the result.
    pub fn update(&mut self, placed: &Rect) {
        let mut updated = Vec::with_capacity(self.rects.len() + 4);
        for free in &self.rects {
            match free.relation_to(placed) {
                GeoRelation::Disjoint => updated.push(*free),
                GeoRelation::Enclosed => {} //fully occupied
                GeoRelation::Intersecting | GeoRelation::Surrounding => {
                    updated.extend(FreeRectSet::split_around(free, placed))
                }
            }
        }
        self.rects = updated;
        self.prune();
    }

    /// Removes every rectangle fully contained in another rectangle of the set.
    /// Of a group of identical rectangles, only the first one is kept.
    pub fn prune(&mut self) {
        let rects = &self.rects;
        let is_redundant = |i: usize| {
            rects.iter().enumerate().any(|(j, other)| {
                j != i && other.contains(&rects[i]) && (j < i || *other != rects[i])
            })
        };
        self.rects = (0..rects.len())
            .filter(|&i| !is_redundant(i))
            .map(|i| rects[i])
            .collect();

        debug_assert!(assertions::free_rects_pruned(&self.rects));
    }

    /// Removes and returns the rectangle at `index`, the order of the remaining rectangles is preserved.
    pub fn take(&mut self, index: usize) -> Rect {
        self.rects.remove(index)
    }

    /// Appends rectangles to the back of the set, without pruning.
    pub fn extend(&mut self, rects: impl IntoIterator<Item = Rect>) {
        self.rects.extend(rects)
    }

    /// Total free area, overlapping regions are counted once.
    pub fn free_area(&self) -> f32 {
        Rect::union_area(&self.rects)
    }
}
