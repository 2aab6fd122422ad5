use crate::core::data::segment::Segment;
use crate::core::data::sketch_request::SketchRequest;
use crate::core::data::stroke::Stroke;

/// The recorded product of one completed render: the request it came
/// from, the stroke used, and every segment in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sketch {
    request: SketchRequest,
    stroke: Stroke,
    segments: Vec<Segment>,
}

impl Sketch {
    #[must_use]
    pub fn new(request: SketchRequest, stroke: Stroke, segments: Vec<Segment>) -> Self {
        Self {
            request,
            stroke,
            segments,
        }
    }

    #[must_use]
    pub fn request(&self) -> SketchRequest {
        self.request
    }

    #[must_use]
    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}
