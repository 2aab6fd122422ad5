use crate::core::data::canvas_rect::CanvasRect;
use crate::core::data::point::Point;
use crate::core::data::region::Region;
use crate::core::layout::CANVAS_MARGIN;

/// Largest centered square that fits the region inside the margin.
/// Seed for the Hilbert curve.
#[must_use]
pub fn fit_square(region: Region) -> CanvasRect {
    let available_width = region.width() - 2.0 * CANVAS_MARGIN;
    let available_height = region.height() - 2.0 * CANVAS_MARGIN;
    let size = available_width.min(available_height);

    let center = Point {
        x: region.width() / 2.0,
        y: region.height() / 2.0,
    };

    CanvasRect::square_around(center, size)
}
