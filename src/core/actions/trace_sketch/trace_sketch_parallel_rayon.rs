use rayon::prelude::*;

use crate::core::actions::trace_sketch::trace_sketch::trace_sketch;
use crate::core::data::sketch::Sketch;
use crate::core::data::sketch_request::SketchRequest;

/// Renders a batch of requests in parallel using rayon's work-stealing
/// scheduler.
///
/// Output order matches input order, and each render owns its pen and
/// recorder state, so the result is exactly what the serial
/// [`trace_sketch`] calls would produce.
#[must_use]
pub fn trace_sketches_parallel_rayon(requests: &[SketchRequest]) -> Vec<Sketch> {
    requests
        .par_iter()
        .map(|request| trace_sketch(*request))
        .collect()
}
