use crate::core::data::colour::Colour;

/// Cosmetic line style passed through to the sink with every segment.
/// Never influences geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub colour: Colour,
    pub width: f64,
}

impl Stroke {
    #[must_use]
    pub fn new(colour: Colour, width: f64) -> Self {
        Self { colour, width }
    }
}
