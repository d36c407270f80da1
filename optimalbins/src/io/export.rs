use crate::entities::Bin;
use crate::geometry::Rect;
use crate::io::ext_repr::{ExtLayout, ExtPlacedItem, ExtRect, ExtSolution};
use crate::result::PackingResult;
use crate::util::round_to_decimals;

/// Exports a [`PackingResult`], rounding all coordinates to `number_of_decimals`.
pub fn export_solution(
    result: &PackingResult,
    number_of_decimals: u32,
    run_time_ms: u64,
) -> ExtSolution {
    ExtSolution {
        layouts: result
            .bins
            .iter()
            .map(|bin| export_layout(bin, number_of_decimals))
            .collect(),
        metrics: result.metrics.clone(),
        n_bins: result.n_bins(),
        density: result.density(),
        run_time_ms,
    }
}

pub fn export_layout(bin: &Bin, number_of_decimals: u32) -> ExtLayout {
    let round = |v: f32| round_to_decimals(v, number_of_decimals);
    let placed_items = bin
        .placed_items
        .iter()
        .map(|pi| {
            let [width, height, _] = pi.item.dimensions(pi.orientation);
            ExtPlacedItem {
                item_id: pi.item_id().to_string(),
                x: round(pi.position.x),
                y: round(pi.position.y),
                z: pi.position.z.map(round),
                width: round(width),
                height: round(height),
                orientation: pi.orientation,
            }
        })
        .collect();

    ExtLayout {
        bin_id: bin.id.clone(),
        width: bin.width,
        height: bin.height,
        density: bin.density(),
        placed_items,
        free_rects: bin
            .free_rects()
            .iter()
            .map(|r| export_rect(r, number_of_decimals))
            .collect(),
    }
}

fn export_rect(rect: &Rect, number_of_decimals: u32) -> ExtRect {
    let round = |v: f32| round_to_decimals(v, number_of_decimals);
    ExtRect {
        x: round(rect.x_min),
        y: round(rect.y_min),
        width: round(rect.width()),
        height: round(rect.height()),
    }
}
