use crate::core::data::point::Point;
use crate::core::data::segment::Segment;
use crate::core::data::triangle::Triangle;

/// Emits the Sierpinski triangle for the given seed: the three seed
/// edges once, then the recursive midpoint subdivision. Segment order is
/// deterministic and part of the contract.
pub fn trace_sierpinski(depth: u32, seed: Triangle, emit: &mut impl FnMut(Segment)) {
    for edge in seed.edges() {
        emit(edge);
    }

    subdivide(depth, seed.a, seed.b, seed.c, emit);
}

// Each level emits the midpoint triangle, then recurses into the three
// corner triangles. The corner vertex always leads the argument list.
fn subdivide(depth: u32, a: Point, b: Point, c: Point, emit: &mut impl FnMut(Segment)) {
    if depth == 0 {
        return;
    }

    let ab = a.midpoint(b);
    let bc = b.midpoint(c);
    let ac = a.midpoint(c);

    emit(Segment::new(ab, bc));
    emit(Segment::new(bc, ac));
    emit(Segment::new(ab, ac));

    subdivide(depth - 1, a, ac, ab, emit);
    subdivide(depth - 1, b, ab, bc, emit);
    subdivide(depth - 1, c, ac, bc, emit);
}
