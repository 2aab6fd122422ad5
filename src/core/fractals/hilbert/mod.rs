pub mod generator;
pub mod orientation;
