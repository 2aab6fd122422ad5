mod controllers;
mod core;
mod presenters;

pub use crate::core::actions::trace_curve::ports::segment_sink::SegmentSink;
pub use crate::core::actions::trace_curve::trace_curve::trace_curve;
pub use crate::core::actions::trace_sketch::trace_sketch::trace_sketch;
pub use crate::core::actions::trace_sketch::trace_sketch_parallel_rayon::trace_sketches_parallel_rayon;
pub use crate::core::data::canvas_rect::{CanvasRect, CanvasRectError, Quadrant};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::point::Point;
pub use crate::core::data::region::{Region, RegionError};
pub use crate::core::data::segment::Segment;
pub use crate::core::data::sketch::Sketch;
pub use crate::core::data::sketch_request::{MAX_TRACE_DEPTH, SketchRequest, SketchRequestError};
pub use crate::core::data::stroke::Stroke;
pub use crate::core::data::triangle::Triangle;
pub use crate::core::fractals::curve_kind::CurveKind;
pub use crate::core::fractals::hilbert::generator::trace_hilbert;
pub use crate::core::fractals::hilbert::orientation::Orientation;
pub use crate::core::fractals::koch::generator::{trace_koch_edge, trace_koch_snowflake};
pub use crate::core::fractals::sierpinski::generator::trace_sierpinski;
pub use crate::core::layout::CANVAS_MARGIN;
pub use crate::core::layout::square_fit::fit_square;
pub use crate::core::layout::triangle_fit::{fit_snowflake_triangle, fit_triangle};

pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::sketch::SketchController;
pub use presenters::file::svg::SvgFilePresenter;
