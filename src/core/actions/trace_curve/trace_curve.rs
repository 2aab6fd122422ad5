use crate::core::actions::trace_curve::ports::segment_sink::SegmentSink;
use crate::core::data::segment::Segment;
use crate::core::data::sketch_request::SketchRequest;
use crate::core::fractals::curve_kind::CurveKind;
use crate::core::fractals::hilbert::generator::trace_hilbert;
use crate::core::fractals::koch::generator::trace_koch_snowflake;
use crate::core::fractals::sierpinski::generator::trace_sierpinski;
use crate::core::layout::square_fit::fit_square;
use crate::core::layout::triangle_fit::{fit_snowflake_triangle, fit_triangle};

/// Renders one curve into the sink: fits the seed shape for the
/// requested kind, then runs its generator, forwarding every segment
/// together with the kind's stroke.
///
/// Never fails for a valid request. A degenerate region produces the
/// structurally correct number of zero-length segments.
pub fn trace_curve<S: SegmentSink>(request: SketchRequest, sink: &mut S) {
    let stroke = request.kind().stroke();
    let mut emit = |segment: Segment| sink.draw_line(segment, stroke);

    match request.kind() {
        CurveKind::SierpinskiTriangle => {
            trace_sierpinski(request.depth(), fit_triangle(request.region()), &mut emit);
        }
        CurveKind::KochSnowflake => {
            trace_koch_snowflake(
                request.depth(),
                fit_snowflake_triangle(request.region()),
                &mut emit,
            );
        }
        CurveKind::HilbertCurve => {
            trace_hilbert(request.depth(), fit_square(request.region()), &mut emit);
        }
    }
}
