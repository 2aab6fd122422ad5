use crate::core::data::canvas_rect::CanvasRect;
use crate::core::data::point::Point;
use crate::core::data::segment::Segment;
use crate::core::fractals::hilbert::orientation::Orientation;

// Pen position threaded through the traversal. Starts unset, so the
// first visited cell sets the position without emitting a segment.
#[derive(Debug, Default)]
struct PenState {
    last: Option<Point>,
}

/// Emits the Hilbert curve filling the given square: a connected
/// polyline through the centers of the depth-level quadrant cells,
/// visited in the order given by the orientation table. Depth 0 visits
/// a single point and emits nothing.
///
/// Every call owns its pen state, so concurrent invocations cannot
/// interfere.
pub fn trace_hilbert(depth: u32, square: CanvasRect, emit: &mut impl FnMut(Segment)) {
    let mut pen = PenState::default();
    trace_quadrants(depth, square, Orientation::Up, &mut pen, emit);
}

fn trace_quadrants(
    depth: u32,
    rect: CanvasRect,
    orientation: Orientation,
    pen: &mut PenState,
    emit: &mut impl FnMut(Segment),
) {
    if depth == 0 {
        let center = rect.center();
        if let Some(last) = pen.last {
            emit(Segment::new(last, center));
        }
        pen.last = Some(center);
        return;
    }

    for (quadrant, sub_orientation) in orientation.visit_order() {
        trace_quadrants(
            depth - 1,
            rect.quadrant(quadrant),
            sub_orientation,
            pen,
            emit,
        );
    }
}
