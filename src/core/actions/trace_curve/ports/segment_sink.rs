use crate::core::data::segment::Segment;
use crate::core::data::stroke::Stroke;

/// Receiver for traced line segments. Called once per segment, in
/// emission order, with the stroke of the curve being traced.
///
/// Infallible and synchronous. One render drives one sink from one
/// thread; batch parallelism happens across renders, each with its own
/// sink, so no `Send`/`Sync` bound is needed here.
pub trait SegmentSink {
    fn draw_line(&mut self, segment: Segment, stroke: Stroke);
}

impl<F> SegmentSink for F
where
    F: FnMut(Segment, Stroke),
{
    #[inline]
    fn draw_line(&mut self, segment: Segment, stroke: Stroke) {
        self(segment, stroke)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    #[test]
    fn closure_sink_receives_segment_and_stroke() {
        let mut received = Vec::new();
        let mut sink = |segment: Segment, stroke: Stroke| received.push((segment, stroke));

        let segment = Segment::new(Point { x: 0.0, y: 0.0 }, Point { x: 1.0, y: 1.0 });
        let stroke = Stroke::new(Colour::RED, 1.0);
        sink.draw_line(segment, stroke);

        assert_eq!(received, vec![(segment, stroke)]);
    }

    #[test]
    fn struct_sink_counts_calls() {
        struct CountingSink {
            calls: usize,
        }

        impl SegmentSink for CountingSink {
            fn draw_line(&mut self, _segment: Segment, _stroke: Stroke) {
                self.calls += 1;
            }
        }

        let mut sink = CountingSink { calls: 0 };
        let segment = Segment::new(Point { x: 0.0, y: 0.0 }, Point { x: 2.0, y: 0.0 });

        sink.draw_line(segment, Stroke::new(Colour::BLACK, 1.0));
        sink.draw_line(segment, Stroke::new(Colour::BLACK, 1.0));

        assert_eq!(sink.calls, 2);
    }
}
