use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::geometry::GeoRelation;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl Rect {
    pub fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Self {
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Creates a rectangle from its bottom-left corner and its size.
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + width,
            y_max: y + height,
        }
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Whether both the width and the height are strictly positive.
    pub fn has_area(&self) -> bool {
        self.x_min < self.x_max && self.y_min < self.y_max
    }

    /// Whether a rectangle of `width` x `height` fits inside `self`.
    pub fn fits(&self, width: f32, height: f32) -> bool {
        width <= self.width() && height <= self.height()
    }

    /// Two rectangles overlap unless one lies entirely to the left, right, above or below the other.
    /// Rectangles sharing only an edge (or a corner) do not overlap.
    #[inline(always)]
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.x_max <= other.x_min
            || other.x_max <= self.x_min
            || self.y_max <= other.y_min
            || other.y_max <= self.y_min)
    }

    /// Whether a free rectangle must be split around `other`. Same rule as [`Rect::overlaps`].
    #[inline(always)]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.overlaps(other)
    }

    /// Whether all four corners of `inner` lie within `self`, bounds inclusive.
    #[inline(always)]
    pub fn contains(&self, inner: &Rect) -> bool {
        inner.x_min >= self.x_min
            && inner.y_min >= self.y_min
            && inner.x_max <= self.x_max
            && inner.y_max <= self.y_max
    }

    /// Returns the geometric relation between `self` and another [`Rect`].
    /// Optimized for `GeoRelation::Disjoint`
    #[inline(always)]
    pub fn relation_to(&self, other: &Rect) -> GeoRelation {
        if !self.overlaps(other) {
            return GeoRelation::Disjoint;
        }
        if self.contains(other) {
            return GeoRelation::Surrounding;
        }
        if other.contains(self) {
            return GeoRelation::Enclosed;
        }
        GeoRelation::Intersecting
    }

    /// Returns the largest rectangle that is contained in both `a` and `b`.
    pub fn intersection(a: &Rect, b: &Rect) -> Option<Rect> {
        let r = Rect {
            x_min: f32::max(a.x_min, b.x_min),
            y_min: f32::max(a.y_min, b.y_min),
            x_max: f32::min(a.x_max, b.x_max),
            y_max: f32::min(a.y_max, b.y_max),
        };
        r.has_area().then_some(r)
    }

    /// Area of the union of `rects`, counting overlapping regions once.
    ///
    /// Compresses the coordinates into a grid and sums every cell covered by at least one rectangle.
    pub fn union_area(rects: &[Rect]) -> f32 {
        let xs = rects
            .iter()
            .flat_map(|r| [r.x_min, r.x_max])
            .sorted_by_key(|x| OrderedFloat(*x))
            .dedup()
            .collect_vec();
        let ys = rects
            .iter()
            .flat_map(|r| [r.y_min, r.y_max])
            .sorted_by_key(|y| OrderedFloat(*y))
            .dedup()
            .collect_vec();

        let mut area = 0.0;
        for (x0, x1) in xs.iter().tuple_windows() {
            for (y0, y1) in ys.iter().tuple_windows() {
                let cell = Rect::new(*x0, *y0, *x1, *y1);
                if rects.iter().any(|r| r.contains(&cell)) {
                    area += cell.area();
                }
            }
        }
        area
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}x{})",
            self.x_min,
            self.y_min,
            self.width(),
            self.height()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::from_xywh(0.0, 0.0, 2.0, 3.0);
        let right = Rect::from_xywh(2.0, 0.0, 3.0, 2.0);
        let above = Rect::from_xywh(0.0, 3.0, 1.0, 1.0);
        let corner = Rect::from_xywh(2.0, 3.0, 1.0, 1.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&above));
        assert!(!a.overlaps(&corner));
        assert!(!right.overlaps(&a));
        assert_eq!(a.relation_to(&right), GeoRelation::Disjoint);
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = Rect::from_xywh(0.0, 0.0, 4.0, 4.0);
        let b = Rect::from_xywh(3.0, 3.0, 4.0, 4.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(a.intersects(&b));
        assert_eq!(a.relation_to(&b), GeoRelation::Intersecting);
    }

    #[test]
    fn containment_is_inclusive() {
        let outer = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        assert!(outer.contains(&outer));
        assert!(outer.contains(&Rect::from_xywh(0.0, 0.0, 10.0, 1.0)));
        assert!(outer.contains(&Rect::from_xywh(9.0, 9.0, 1.0, 1.0)));
        assert!(!outer.contains(&Rect::from_xywh(9.0, 9.0, 2.0, 1.0)));
        assert_eq!(
            outer.relation_to(&Rect::from_xywh(2.0, 2.0, 1.0, 1.0)),
            GeoRelation::Surrounding
        );
        assert_eq!(
            Rect::from_xywh(2.0, 2.0, 1.0, 1.0).relation_to(&outer),
            GeoRelation::Enclosed
        );
    }

    #[test]
    fn intersection_of_disjoint_rects_is_none() {
        let a = Rect::from_xywh(0.0, 0.0, 2.0, 2.0);
        let b = Rect::from_xywh(2.0, 0.0, 2.0, 2.0);
        assert_eq!(Rect::intersection(&a, &b), None);
        let c = Rect::from_xywh(1.0, 1.0, 2.0, 2.0);
        assert_eq!(
            Rect::intersection(&a, &c),
            Some(Rect::new(1.0, 1.0, 2.0, 2.0))
        );
    }

    #[test]
    fn union_area_counts_overlap_once() {
        let rects = [
            Rect::from_xywh(0.0, 0.0, 4.0, 4.0),
            Rect::from_xywh(2.0, 2.0, 4.0, 4.0),
            Rect::from_xywh(0.0, 0.0, 1.0, 1.0),
        ];
        assert_eq!(Rect::union_area(&rects), 16.0 + 16.0 - 4.0);
        assert_eq!(Rect::union_area(&[]), 0.0);
    }
}
