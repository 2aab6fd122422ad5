use crate::core::data::point::Point;

// Directed: start/end order is part of the emission contract.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }
}
