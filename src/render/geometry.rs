//! Shared geometry calculations for overlay drawing
//!
//! This module contains constants and math shared between the live overlay
//! and the report image. Nothing here depends on a drawing surface.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::domain::Point;

/// Keypoint and skeleton constants
pub mod keypoint {
    /// Keypoint circle radius in surface pixels
    pub const RADIUS: f32 = 4.0;
    /// Stroke width for outlines, skeleton edges and overlay lines
    pub const LINE_WIDTH: f32 = 2.0;
}

/// Reference line constants
pub mod reference {
    /// Distance the reference lines extend above the nose
    pub const OFFSET: f32 = 100.0;
    /// Dash pattern of the gravity line (on, off)
    pub const GRAVITY_DASH: [f32; 2] = [5.0, 3.0];
}

/// Overlay colors as RGBA8
pub mod color {
    pub const WHITE: [u8; 4] = [255, 255, 255, 255];
    pub const RED: [u8; 4] = [255, 0, 0, 255];
    /// CSS "Green", not lime
    pub const GREEN: [u8; 4] = [0, 128, 0, 255];
    pub const ORANGE: [u8; 4] = [255, 165, 0, 255];
    /// Vertex to right landmark
    pub const ANGLE_ARM: [u8; 4] = [0x2a, 0xaa, 0x8a, 255];
    /// Vertex to reference point, and the arc itself
    pub const ANGLE_REFERENCE: [u8; 4] = [0xff, 0xa5, 0x00, 255];
    pub const GRAVITY_LINE: [u8; 4] = [0x4a, 0xa0, 0x2c, 255];
    pub const SHOULDER_LINE: [u8; 4] = [0xff, 0x00, 0x00, 255];
}

/// Angle arc math following 2D canvas `arc()` semantics (y axis down,
/// positive angles turn clockwise on screen)
pub mod arc {
    use super::*;

    /// Cubic bezier segment: (control1, control2, end)
    pub type BezierSegment = (Point, Point, Point);

    /// End angle and direction for the angle arc between `p1` and `p3`.
    ///
    /// When `p3` sits lower than `p1` the arc sweeps to the negated angle
    /// counter-clockwise, otherwise clockwise to the angle.
    pub fn orientation(p1: Point, p3: Point, angle: f32) -> (f32, bool) {
        let counter_clockwise = p3.y > p1.y;
        let end = if counter_clockwise { -angle } else { angle };
        (end, counter_clockwise)
    }

    /// Signed sweep a canvas arc from `start` to `end` covers
    pub fn canvas_sweep(start: f32, end: f32, counter_clockwise: bool) -> f32 {
        if counter_clockwise {
            let delta = start - end;
            if delta >= TAU {
                -TAU
            } else {
                -delta.rem_euclid(TAU)
            }
        } else {
            let delta = end - start;
            if delta >= TAU { TAU } else { delta.rem_euclid(TAU) }
        }
    }

    /// Approximate a circular arc with cubic beziers of at most a quarter turn.
    ///
    /// Returns the start point and the segments, or `None` for an empty sweep.
    pub fn bezier_segments(
        center: Point,
        radius: f32,
        start: f32,
        sweep: f32,
    ) -> Option<(Point, Vec<BezierSegment>)> {
        if sweep == 0.0 || !sweep.is_finite() {
            return None;
        }

        let count = (sweep.abs() / FRAC_PI_2).ceil().max(1.0) as usize;
        let step = sweep / count as f32;
        let k = 4.0 / 3.0 * (step / 4.0).tan();

        let at = |theta: f32| {
            Point::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            )
        };

        let mut segments = Vec::with_capacity(count);
        let mut theta = start;
        for _ in 0..count {
            let next = theta + step;
            let p0 = at(theta);
            let p3 = at(next);
            let c1 = Point::new(
                p0.x - k * radius * theta.sin(),
                p0.y + k * radius * theta.cos(),
            );
            let c2 = Point::new(
                p3.x + k * radius * next.sin(),
                p3.y - k * radius * next.cos(),
            );
            segments.push((c1, c2, p3));
            theta = next;
        }

        Some((at(start), segments))
    }
}
