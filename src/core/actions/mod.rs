pub mod trace_curve;
pub mod trace_sketch;
