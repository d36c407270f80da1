use itertools::Itertools;
use log::error;

use crate::entities::Bin;
use crate::geometry::Rect;
use crate::util::FPA;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

/// No two items placed in the same bin overlap.
pub fn no_overlapping_items(bin: &Bin) -> bool {
    for (a, b) in bin.placed_items.iter().tuple_combinations() {
        if a.rect().overlaps(&b.rect()) {
            error!(
                "items {} {} and {} {} overlap in bin {}",
                a.item_id(),
                a.rect(),
                b.item_id(),
                b.rect(),
                bin.id
            );
            return false;
        }
    }
    true
}

/// Every item lies within the bounds of its bin.
pub fn all_items_in_bounds(bin: &Bin) -> bool {
    let bin_rect = bin.rect();
    for pi in &bin.placed_items {
        if !bin_rect.contains(&pi.rect()) {
            error!("item {} {} exceeds bin {}", pi.item_id(), pi.rect(), bin.id);
            return false;
        }
    }
    true
}

/// Items and free rectangles together cover the bin exactly:
/// free rectangles stay within the bin, never overlap an item,
/// and their union plus the occupied area equals the area of the bin.
pub fn free_space_covers_bin(bin: &Bin) -> bool {
    let Some(free_rects) = &bin.free_rects else {
        return true;
    };
    let bin_rect = bin.rect();
    let item_rects = bin
        .placed_items
        .iter()
        .filter_map(|pi| Rect::intersection(&pi.rect(), &bin_rect))
        .collect_vec();

    for fr in free_rects.rects() {
        if !bin_rect.contains(fr) {
            error!("free rectangle {fr} exceeds bin {}", bin.id);
            return false;
        }
        if let Some(ir) = item_rects.iter().find(|ir| ir.overlaps(fr)) {
            error!("free rectangle {fr} overlaps item {ir} in bin {}", bin.id);
            return false;
        }
    }

    let covered = free_rects.free_area() + Rect::union_area(&item_rects);
    if FPA(covered / bin.area()) != FPA(1.0) {
        error!(
            "free space and items cover {covered} of bin {} with area {}",
            bin.id,
            bin.area()
        );
        return false;
    }
    true
}

/// No free rectangle is contained in another one.
pub fn free_rects_pruned(rects: &[Rect]) -> bool {
    rects
        .iter()
        .enumerate()
        .all(|(i, r)| !rects.iter().enumerate().any(|(j, o)| i != j && o.contains(r)))
}

/// All items in bounds and overlap-free, in every bin.
pub fn bins_feasible(bins: &[Bin]) -> bool {
    bins.iter()
        .all(|b| no_overlapping_items(b) && all_items_in_bounds(b))
}
