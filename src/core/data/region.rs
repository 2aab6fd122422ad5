use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RegionError {
    NonFiniteSize { width: f64, height: f64 },
}

impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteSize { width, height } => {
                write!(f, "region size must be finite: {}x{}", width, height)
            }
        }
    }
}

impl Error for RegionError {}

/// Target drawing area in surface units, origin top-left, y growing down.
///
/// Zero or negative dimensions are accepted: they describe a degenerate
/// region and produce degenerate (zero-length) output downstream.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Region {
    width: f64,
    height: f64,
}

impl Region {
    pub fn new(width: f64, height: f64) -> Result<Self, RegionError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(RegionError::NonFiniteSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}
