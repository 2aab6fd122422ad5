pub mod trace_sketch;
pub mod trace_sketch_parallel_rayon;
