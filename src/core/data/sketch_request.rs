use crate::core::data::region::Region;
use crate::core::fractals::curve_kind::CurveKind;
use std::error::Error;
use std::fmt;

/// Segment counts grow exponentially with depth (~4^depth for the worst
/// kinds), so requests refuse depths past this point.
pub const MAX_TRACE_DEPTH: u32 = 12;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SketchRequestError {
    DepthExceedsMax { depth: u32, max: u32 },
}

impl fmt::Display for SketchRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthExceedsMax { depth, max } => {
                write!(f, "trace depth {} exceeds maximum {}", depth, max)
            }
        }
    }
}

impl Error for SketchRequestError {}

/// Validated parameters for one curve render.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SketchRequest {
    region: Region,
    depth: u32,
    kind: CurveKind,
}

impl SketchRequest {
    pub fn new(region: Region, depth: u32, kind: CurveKind) -> Result<Self, SketchRequestError> {
        if depth > MAX_TRACE_DEPTH {
            return Err(SketchRequestError::DepthExceedsMax {
                depth,
                max: MAX_TRACE_DEPTH,
            });
        }

        Ok(Self {
            region,
            depth,
            kind,
        })
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn kind(&self) -> CurveKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_region() -> Region {
        Region::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn test_sketch_request_new_valid() {
        let request =
            SketchRequest::new(create_region(), 5, CurveKind::KochSnowflake).unwrap();

        assert_eq!(request.region(), create_region());
        assert_eq!(request.depth(), 5);
        assert_eq!(request.kind(), CurveKind::KochSnowflake);
    }

    #[test]
    fn test_sketch_request_accepts_depth_zero() {
        let request = SketchRequest::new(create_region(), 0, CurveKind::HilbertCurve);

        assert!(request.is_ok());
    }

    #[test]
    fn test_sketch_request_accepts_max_depth() {
        let request =
            SketchRequest::new(create_region(), MAX_TRACE_DEPTH, CurveKind::SierpinskiTriangle);

        assert!(request.is_ok());
    }

    #[test]
    fn test_sketch_request_rejects_excessive_depth() {
        let request =
            SketchRequest::new(create_region(), MAX_TRACE_DEPTH + 1, CurveKind::HilbertCurve);

        assert_eq!(
            request,
            Err(SketchRequestError::DepthExceedsMax {
                depth: MAX_TRACE_DEPTH + 1,
                max: MAX_TRACE_DEPTH,
            })
        );
    }
}
