pub mod segment_sink;
