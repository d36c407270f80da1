use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use crate::entities::Bin;
use crate::geometry::Rect;
use crate::io::svg::SvgDrawOptions;

/// Draws a bin with its placed items and, if enabled, its free rectangles.
/// The y-axis points upwards, as in the bin's own coordinate system.
pub fn bin_to_svg(bin: &Bin, options: SvgDrawOptions) -> Document {
    let theme = options.theme.theme();
    let margin = f32::max(bin.width, bin.height) * 0.025;
    let stroke_width = f32::min(bin.width, bin.height) * 0.001 * theme.stroke_width_multiplier;
    let font_size = f32::min(bin.width, bin.height) * 0.04;

    let bin_group = Group::new().set("id", "bin").add(
        svg_rect(bin, &bin.rect())
            .set("fill", theme.bin_fill)
            .set("stroke", "black")
            .set("stroke-width", 2.0 * stroke_width)
            .add(Title::new(format!(
                "bin, id: {}, size: {}x{}, density: {:.3}",
                bin.id,
                bin.width,
                bin.height,
                bin.density()
            ))),
    );

    let mut items_group = Group::new().set("id", "items");
    for pi in &bin.placed_items {
        let rect = pi.rect();
        items_group = items_group.add(
            svg_rect(bin, &rect)
                .set("fill", theme.item_fill)
                .set("stroke", "black")
                .set("stroke-width", stroke_width)
                .set("opacity", 0.9)
                .add(Title::new(format!("item, id: {}, rect: {}", pi.item_id(), rect))),
        );
        if options.labels {
            let (cx, cy) = (
                rect.x_min + rect.width() / 2.0,
                bin.height - (rect.y_min + rect.height() / 2.0),
            );
            items_group = items_group.add(
                Text::new(pi.item_id())
                    .set("x", cx)
                    .set("y", cy)
                    .set("font-size", font_size)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle"),
            );
        }
    }

    let mut document = Document::new()
        .set(
            "viewBox",
            (
                -margin,
                -margin,
                bin.width + 2.0 * margin,
                bin.height + 2.0 * margin,
            ),
        )
        .add(bin_group)
        .add(items_group);

    if options.free_rects {
        let free_rects_group = bin.free_rects().iter().fold(
            Group::new().set("id", "free_rects"),
            |group, fr| {
                group.add(
                    svg_rect(bin, fr)
                        .set("fill", "none")
                        .set("stroke", theme.free_rect_stroke)
                        .set("stroke-width", stroke_width)
                        .set("stroke-dasharray", 5.0 * stroke_width)
                        .add(Title::new(format!("free rectangle: {fr}"))),
                )
            },
        );
        document = document.add(free_rects_group);
    }
    document
}

/// SVG rectangle for `rect`, mirrored vertically within `bin`.
fn svg_rect(bin: &Bin, rect: &Rect) -> Rectangle {
    Rectangle::new()
        .set("x", rect.x_min)
        .set("y", bin.height - rect.y_max)
        .set("width", rect.width())
        .set("height", rect.height())
}
