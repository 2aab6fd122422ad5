use crate::core::data::colour::Colour;
use crate::core::data::stroke::Stroke;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum CurveKind {
    #[default]
    SierpinskiTriangle,
    KochSnowflake,
    HilbertCurve,
}

impl CurveKind {
    pub const ALL: &'static [Self] = &[
        Self::SierpinskiTriangle,
        Self::KochSnowflake,
        Self::HilbertCurve,
    ];

    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::SierpinskiTriangle => "Sierpinski triangle",
            Self::KochSnowflake => "Koch snowflake",
            Self::HilbertCurve => "Hilbert curve",
        }
    }

    #[must_use]
    pub const fn file_stem(&self) -> &'static str {
        match self {
            Self::SierpinskiTriangle => "sierpinski_triangle",
            Self::KochSnowflake => "koch_snowflake",
            Self::HilbertCurve => "hilbert_curve",
        }
    }

    #[must_use]
    pub const fn stroke(&self) -> Stroke {
        match self {
            Self::SierpinskiTriangle | Self::KochSnowflake => Stroke {
                colour: Colour::BLACK,
                width: 1.0,
            },
            Self::HilbertCurve => Stroke {
                colour: Colour::RED,
                width: 1.0,
            },
        }
    }

    /// Closed-form segment count for one render at the given depth.
    /// Used to pre-size recorders and pinned by the generator tests.
    #[must_use]
    pub fn expected_segment_count(&self, depth: u32) -> u64 {
        match self {
            Self::SierpinskiTriangle => 3 + 3 * (3u64.pow(depth) - 1) / 2,
            Self::KochSnowflake => 3 * 4u64.pow(depth),
            Self::HilbertCurve => 4u64.pow(depth) - 1,
        }
    }
}
