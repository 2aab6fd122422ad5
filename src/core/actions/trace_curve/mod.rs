pub mod ports;
pub mod trace_curve;
