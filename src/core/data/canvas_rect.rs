use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CanvasRectError {
    InvertedBounds { width: f64, height: f64 },
}

impl fmt::Display for CanvasRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedBounds { width, height } => {
                write!(
                    f,
                    "canvas rect bounds must not be inverted: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for CanvasRectError {}

/// Rectangle quadrants on the drawing surface, where y grows down:
/// `TopLeft` is the minimum corner and `BottomRight` the maximum.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Axis-aligned rectangle in drawing-surface coordinates.
///
/// Zero-size rects are valid (a degenerate seed collapses to a point);
/// only inverted bounds are rejected.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasRect {
    top_left: Point,
    bottom_right: Point,
}

impl CanvasRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, CanvasRectError> {
        let width = bottom_right.x - top_left.x;
        let height = bottom_right.y - top_left.y;

        if width < 0.0 || height < 0.0 {
            return Err(CanvasRectError::InvertedBounds { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Axis-aligned square of the given size centered on `center`.
    /// Negative sizes clamp to zero, so this cannot produce inverted
    /// bounds.
    #[must_use]
    pub fn square_around(center: Point, size: f64) -> Self {
        let half = size.max(0.0) / 2.0;

        Self {
            top_left: Point {
                x: center.x - half,
                y: center.y - half,
            },
            bottom_right: Point {
                x: center.x + half,
                y: center.y + half,
            },
        }
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.y - self.top_left.y
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.top_left.midpoint(self.bottom_right)
    }

    #[must_use]
    pub fn quadrant(&self, quadrant: Quadrant) -> Self {
        let center = self.center();

        // Halving an ordered rect keeps the bounds ordered.
        let (top_left, bottom_right) = match quadrant {
            Quadrant::TopLeft => (self.top_left, center),
            Quadrant::TopRight => (
                Point {
                    x: center.x,
                    y: self.top_left.y,
                },
                Point {
                    x: self.bottom_right.x,
                    y: center.y,
                },
            ),
            Quadrant::BottomLeft => (
                Point {
                    x: self.top_left.x,
                    y: center.y,
                },
                Point {
                    x: center.x,
                    y: self.bottom_right.y,
                },
            ),
            Quadrant::BottomRight => (center, self.bottom_right),
        };

        Self {
            top_left,
            bottom_right,
        }
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_rect_new_valid() {
        let top_left = Point { x: 20.0, y: 20.0 };
        let bottom_right = Point { x: 580.0, y: 580.0 };

        let rect = CanvasRect::new(top_left, bottom_right);
        let value = rect.unwrap();

        assert!(rect.is_ok());
        assert!(value.top_left() == top_left);
        assert!(value.bottom_right() == bottom_right);
    }

    #[test]
    fn test_canvas_rect_accepts_zero_size() {
        let point = Point { x: 400.0, y: 300.0 };
        let rect = CanvasRect::new(point, point).unwrap();

        assert_eq!(rect.width(), 0.0);
        assert_eq!(rect.height(), 0.0);
        assert_eq!(rect.center(), point);
    }

    #[test]
    fn test_square_around_is_centered() {
        let center = Point { x: 400.0, y: 300.0 };
        let square = CanvasRect::square_around(center, 560.0);

        assert_eq!(square.top_left(), Point { x: 120.0, y: 20.0 });
        assert_eq!(square.bottom_right(), Point { x: 680.0, y: 580.0 });
        assert_eq!(square.center(), center);
    }

    #[test]
    fn test_square_around_clamps_negative_size() {
        let center = Point { x: 5.0, y: 5.0 };
        let square = CanvasRect::square_around(center, -30.0);

        assert_eq!(square.width(), 0.0);
        assert_eq!(square.height(), 0.0);
        assert_eq!(square.center(), center);
    }

    #[test]
    fn test_canvas_rect_rejects_inverted_bounds() {
        let inverted_x = CanvasRect::new(Point { x: 10.0, y: 0.0 }, Point { x: 0.0, y: 10.0 });
        let inverted_y = CanvasRect::new(Point { x: 0.0, y: 10.0 }, Point { x: 10.0, y: 0.0 });

        assert_eq!(
            inverted_x,
            Err(CanvasRectError::InvertedBounds {
                width: -10.0,
                height: 10.0
            })
        );
        assert_eq!(
            inverted_y,
            Err(CanvasRectError::InvertedBounds {
                width: 10.0,
                height: -10.0
            })
        );
    }

    #[test]
    fn test_canvas_rect_dimensions_and_center() {
        let rect = CanvasRect::new(Point { x: 100.0, y: 50.0 }, Point { x: 300.0, y: 250.0 })
            .unwrap();

        assert_eq!(rect.width(), 200.0);
        assert_eq!(rect.height(), 200.0);
        assert_eq!(rect.center(), Point { x: 200.0, y: 150.0 });
    }

    #[test]
    fn test_quadrants_split_at_center() {
        let rect =
            CanvasRect::new(Point { x: 0.0, y: 0.0 }, Point { x: 8.0, y: 4.0 }).unwrap();

        let top_left = rect.quadrant(Quadrant::TopLeft);
        let top_right = rect.quadrant(Quadrant::TopRight);
        let bottom_left = rect.quadrant(Quadrant::BottomLeft);
        let bottom_right = rect.quadrant(Quadrant::BottomRight);

        assert_eq!(top_left.top_left(), Point { x: 0.0, y: 0.0 });
        assert_eq!(top_left.bottom_right(), Point { x: 4.0, y: 2.0 });
        assert_eq!(top_right.top_left(), Point { x: 4.0, y: 0.0 });
        assert_eq!(top_right.bottom_right(), Point { x: 8.0, y: 2.0 });
        assert_eq!(bottom_left.top_left(), Point { x: 0.0, y: 2.0 });
        assert_eq!(bottom_left.bottom_right(), Point { x: 4.0, y: 4.0 });
        assert_eq!(bottom_right.top_left(), Point { x: 4.0, y: 2.0 });
        assert_eq!(bottom_right.bottom_right(), Point { x: 8.0, y: 4.0 });
    }

    #[test]
    fn test_quadrant_centers_stay_inside_parent() {
        let rect =
            CanvasRect::new(Point { x: 20.0, y: 20.0 }, Point { x: 120.0, y: 120.0 }).unwrap();

        for quadrant in [
            Quadrant::TopLeft,
            Quadrant::TopRight,
            Quadrant::BottomLeft,
            Quadrant::BottomRight,
        ] {
            assert!(rect.contains_point(rect.quadrant(quadrant).center()));
        }
    }

    #[test]
    fn test_contains_point() {
        let rect = CanvasRect::new(Point { x: -10.0, y: -5.0 }, Point { x: 100.0, y: 200.0 })
            .unwrap();

        assert!(rect.contains_point(Point { x: 50.0, y: 50.0 }));
        assert!(rect.contains_point(Point { x: -10.0, y: -5.0 }));
        assert!(rect.contains_point(Point { x: 100.0, y: 200.0 }));
        assert!(!rect.contains_point(Point { x: 101.0, y: 50.0 }));
        assert!(!rect.contains_point(Point { x: 50.0, y: 201.0 }));
    }
}
