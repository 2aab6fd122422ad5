pub mod ports;
pub mod sketch;
