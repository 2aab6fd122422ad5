use crate::core::data::point::Point;
use crate::core::data::region::Region;
use crate::core::data::triangle::Triangle;
use crate::core::layout::CANVAS_MARGIN;

/// Largest centered equilateral triangle that fits the region inside the
/// margin, apex up. Seed for the Sierpinski triangle.
#[must_use]
pub fn fit_triangle(region: Region) -> Triangle {
    let height_per_side = 3.0_f64.sqrt() / 2.0;
    let side = fitted_side(region, height_per_side);
    let triangle_height = height_per_side * side;
    let apex_y = region.height() / 2.0 - triangle_height / 2.0;

    apex_up_triangle(region, side, apex_y, triangle_height)
}

/// Seed triangle for the Koch snowflake. The finished snowflake is taller
/// than its seed: the base edge's bump adds a third of the triangle
/// height below the base, for a total vertical extent of 4/3 of the
/// triangle height. The side bumps add no width (their apexes fall on
/// the verticals through the base corners), so only the vertical axis
/// needs the compensation: the seed is scaled to the 4/3 extent and the
/// apex raised so that extent is centered.
#[must_use]
pub fn fit_snowflake_triangle(region: Region) -> Triangle {
    let height_per_side = 3.0_f64.sqrt() / 2.0;
    let extent_per_side = 4.0 / 3.0 * height_per_side;
    let side = fitted_side(region, extent_per_side);
    let triangle_height = height_per_side * side;
    let apex_y = region.height() / 2.0 - 2.0 * triangle_height / 3.0;

    apex_up_triangle(region, side, apex_y, triangle_height)
}

// Undersized regions clamp to a zero seed rather than erroring.
fn fitted_side(region: Region, height_per_side: f64) -> f64 {
    let available_width = region.width() - 2.0 * CANVAS_MARGIN;
    let available_height = region.height() - 2.0 * CANVAS_MARGIN;

    available_width
        .min(available_height / height_per_side)
        .max(0.0)
}

fn apex_up_triangle(region: Region, side: f64, apex_y: f64, triangle_height: f64) -> Triangle {
    let center_x = region.width() / 2.0;
    let base_y = apex_y + triangle_height;

    Triangle {
        a: Point {
            x: center_x,
            y: apex_y,
        },
        b: Point {
            x: center_x - side / 2.0,
            y: base_y,
        },
        c: Point {
            x: center_x + side / 2.0,
            y: base_y,
        },
    }
}
