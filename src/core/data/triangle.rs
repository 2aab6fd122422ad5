use crate::core::data::point::Point;
use crate::core::data::segment::Segment;

/// Seed triangle for the triangle-based curves. Vertex roles: `a` apex,
/// `b` bottom-left, `c` bottom-right for the seeds produced by layout.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    /// Edges in traversal order `(a,b), (b,c), (c,a)`. This order is what
    /// makes the Koch bumps point outward for an apex-up seed.
    #[must_use]
    pub fn edges(&self) -> [Segment; 3] {
        [
            Segment::new(self.a, self.b),
            Segment::new(self.b, self.c),
            Segment::new(self.c, self.a),
        ]
    }
}
