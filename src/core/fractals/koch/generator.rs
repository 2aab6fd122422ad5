use crate::core::data::point::Point;
use crate::core::data::segment::Segment;
use crate::core::data::triangle::Triangle;

/// Emits one Koch curve along the directed edge a→b. Depth 0 is the
/// plain edge; each level replaces an edge with four: first and last
/// thirds kept, the middle third replaced by the two sides of an
/// equilateral bump.
pub fn trace_koch_edge(depth: u32, a: Point, b: Point, emit: &mut impl FnMut(Segment)) {
    if depth == 0 {
        emit(Segment::new(a, b));
        return;
    }

    let p1 = a.lerp(b, 1.0 / 3.0);
    let p3 = a.lerp(b, 2.0 / 3.0);
    let center = a.midpoint(b);

    // Bump apex: the a→b vector rotated a quarter turn and scaled by
    // 1/(2*sqrt(3)), the height of an equilateral triangle over the
    // middle third.
    let scale = 1.0 / (2.0 * 3.0_f64.sqrt());
    let dx = (b.x - a.x) * scale;
    let dy = (b.y - a.y) * scale;
    let p2 = Point {
        x: center.x - dy,
        y: center.y + dx,
    };

    trace_koch_edge(depth - 1, a, p1, emit);
    trace_koch_edge(depth - 1, p1, p2, emit);
    trace_koch_edge(depth - 1, p2, p3, emit);
    trace_koch_edge(depth - 1, p3, b, emit);
}

/// Emits the full snowflake: one Koch curve per seed edge, in edge
/// traversal order. For the apex-up seeds produced by layout this
/// direction points every bump outward.
pub fn trace_koch_snowflake(depth: u32, seed: Triangle, emit: &mut impl FnMut(Segment)) {
    for edge in seed.edges() {
        trace_koch_edge(depth, edge.start, edge.end, emit);
    }
}
