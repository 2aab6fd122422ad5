pub mod square_fit;
pub mod triangle_fit;

/// Inset between the region edge and the drawable area, on all four
/// sides, in surface units.
pub const CANVAS_MARGIN: f64 = 20.0;
