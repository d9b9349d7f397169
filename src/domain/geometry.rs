//! Geometry kernel for landmark coordinates
//!
//! Pure functions shared by the overlay renderer, the correction controller
//! and the metrics assembler. Coordinates are surface pixels with y pointing down.

use serde::{Deserialize, Serialize};

use crate::error::{PostureError, Result};

/// A position on the drawing surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point from coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: Point) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Check if another point lies strictly inside a square box of the given
    /// half-size centred on this point
    pub fn within_box(&self, other: Point, half_size: f32) -> bool {
        (self.x - other.x).abs() < half_size && (self.y - other.y).abs() < half_size
    }
}

/// Arithmetic mean of two points
#[inline]
pub fn midpoint(p1: Point, p2: Point) -> Point {
    Point {
        x: (p1.x + p2.x) / 2.0,
        y: (p1.y + p2.y) / 2.0,
    }
}

/// Angle ABC in radians, measured at vertex `b` with the law of cosines.
///
/// Fails with [`PostureError::DegenerateGeometry`] when `b` coincides with
/// `a` or `c`. The cosine is clamped so collinear points never produce NaN.
pub fn angle_at_vertex(a: Point, b: Point, c: Point) -> Result<f64> {
    let ab = a.distance(b);
    let bc = b.distance(c);
    let ac = a.distance(c);

    if ab <= f64::EPSILON || bc <= f64::EPSILON {
        return Err(PostureError::DegenerateGeometry("zero-length side at vertex"));
    }

    let cos = (bc * bc + ab * ab - ac * ac) / (2.0 * bc * ab);
    Ok(cos.clamp(-1.0, 1.0).acos())
}

/// Convert radians to degrees at full precision
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}

/// Round to two decimal places for report display
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build a vertical reference line at `anchor_x`.
///
/// The line starts `vertical_offset` above `top` and ends level with `bottom`.
pub fn reference_line_endpoints(
    anchor_x: f32,
    top: Point,
    bottom: Point,
    vertical_offset: f32,
) -> (Point, Point) {
    (
        Point::new(anchor_x, top.y - vertical_offset),
        Point::new(anchor_x, bottom.y),
    )
}
