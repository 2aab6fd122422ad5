pub mod curve_kind;
pub mod hilbert;
pub mod koch;
pub mod sierpinski;
