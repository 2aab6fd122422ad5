use crate::core::actions::trace_curve::trace_curve::trace_curve;
use crate::core::data::segment::Segment;
use crate::core::data::sketch::Sketch;
use crate::core::data::sketch_request::SketchRequest;
use crate::core::data::stroke::Stroke;

/// Runs one render to completion and records it as a [`Sketch`].
///
/// The segment vector is pre-sized from the closed-form count for the
/// requested kind and depth, so recording does not reallocate.
#[must_use]
pub fn trace_sketch(request: SketchRequest) -> Sketch {
    let expected = request.kind().expected_segment_count(request.depth());
    let mut segments: Vec<Segment> = Vec::with_capacity(expected as usize);

    trace_curve(request, &mut |segment: Segment, _stroke: Stroke| {
        segments.push(segment);
    });

    Sketch::new(request, request.kind().stroke(), segments)
}
