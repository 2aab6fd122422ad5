pub mod canvas_rect;
pub mod colour;
pub mod point;
pub mod region;
pub mod segment;
pub mod sketch;
pub mod sketch_request;
pub mod stroke;
pub mod triangle;
