//! Overlay drawing for landmark sets
//!
//! Keypoints, skeleton edges, angle arcs and reference lines drawn onto any
//! [`Surface`]. Coordinates are surface pixels; mirroring is the surface's job.

use image::RgbaImage;
use tiny_skia::{LineCap, Paint, PathBuilder, Stroke, StrokeDash};

use super::geometry::{arc, color, keypoint, reference};
use super::surface::Surface;
use crate::domain::{
    AnatomicalLink, BLAZEPOSE_LINKS, CONFIDENCE_THRESHOLD, LandmarkIndex, LandmarkSet, Point,
    Side, midpoint, reference_line_endpoints,
};

/// Drawing policy shared by the live preview, correction and report overlays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    /// Landmarks below this confidence are never drawn
    pub confidence_threshold: f32,
    pub keypoint_radius: f32,
    pub line_width: f32,
    /// Distance the reference lines extend above the nose
    pub reference_offset: f32,
    pub links: &'static [AnatomicalLink],
    pub draw_skeleton: bool,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            confidence_threshold: CONFIDENCE_THRESHOLD,
            keypoint_radius: keypoint::RADIUS,
            line_width: keypoint::LINE_WIDTH,
            reference_offset: reference::OFFSET,
            links: &BLAZEPOSE_LINKS,
            draw_skeleton: true,
        }
    }
}

impl OverlayStyle {
    pub fn with_links(mut self, links: &'static [AnatomicalLink]) -> Self {
        self.links = links;
        self
    }
}

fn paint(rgba: [u8; 4]) -> Paint<'static> {
    let [r, g, b, a] = rgba;
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn side_color(side: Side) -> [u8; 4] {
    match side {
        Side::Middle => color::RED,
        Side::Left => color::GREEN,
        Side::Right => color::ORANGE,
    }
}

/// Draw `frame` stretched over the whole surface
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, frame: &RgbaImage) {
    let (w, h) = surface.dimensions();
    surface.draw_image(frame, 0.0, 0.0, w as f32, h as f32);
}

/// Full redraw: clear, base frame, then the overlay
pub fn redraw<S: Surface + ?Sized>(
    surface: &mut S,
    frame: &RgbaImage,
    landmarks: &LandmarkSet,
    style: &OverlayStyle,
) {
    let (w, h) = surface.dimensions();
    surface.clear(0.0, 0.0, w as f32, h as f32);
    draw_frame(surface, frame);
    draw(surface, landmarks, style);
}

/// Draw keypoints and, if enabled, the skeleton edges of `style.links`
pub fn draw<S: Surface + ?Sized>(surface: &mut S, landmarks: &LandmarkSet, style: &OverlayStyle) {
    draw_keypoints(surface, landmarks, style);
    if style.draw_skeleton {
        draw_skeleton(surface, landmarks, style.links, style);
    }
}

/// Filled circle with a white outline for every landmark above the threshold
pub fn draw_keypoints<S: Surface + ?Sized>(
    surface: &mut S,
    landmarks: &LandmarkSet,
    style: &OverlayStyle,
) {
    let outline = paint(color::WHITE);
    let stroke = Stroke {
        width: style.line_width,
        ..Default::default()
    };

    for lm in landmarks
        .iter()
        .filter(|lm| lm.is_valid(style.confidence_threshold))
    {
        let Some(index) = LandmarkIndex::from_index(lm.id) else {
            continue;
        };
        let Some(circle) = PathBuilder::from_circle(lm.x, lm.y, style.keypoint_radius) else {
            continue;
        };

        surface.fill_path(&circle, &paint(side_color(index.side())));
        surface.stroke_path(&circle, &outline, &stroke);
    }
}

/// White edges for each link whose endpoints both pass the threshold
pub fn draw_skeleton<S: Surface + ?Sized>(
    surface: &mut S,
    landmarks: &LandmarkSet,
    links: &[AnatomicalLink],
    style: &OverlayStyle,
) {
    for AnatomicalLink(a, b) in links {
        let (a, b) = (landmarks.get(*a), landmarks.get(*b));
        if a.is_valid(style.confidence_threshold) && b.is_valid(style.confidence_threshold) {
            draw_line(
                surface,
                a.position(),
                b.position(),
                color::WHITE,
                style.line_width,
                None,
            );
        }
    }
}

/// Stroke a straight line, optionally dashed with an (on, off) pattern
pub fn draw_line<S: Surface + ?Sized>(
    surface: &mut S,
    from: Point,
    to: Point,
    rgba: [u8; 4],
    width: f32,
    dash: Option<&[f32]>,
) {
    let mut pb = PathBuilder::new();
    pb.move_to(from.x, from.y);
    pb.line_to(to.x, to.y);
    let Some(path) = pb.finish() else {
        return;
    };

    let stroke = Stroke {
        width,
        line_cap: LineCap::Butt,
        dash: dash.and_then(|d| StrokeDash::new(d.to_vec(), 0.0)),
        ..Default::default()
    };
    surface.stroke_path(&path, &paint(rgba), &stroke);
}

/// Draw the two arms of an angle and the arc between them.
///
/// `p1` is the measured landmark, `p3` the horizontal reference point. The arc
/// is centred on `vertex` with radius `p3.x - vertex.x` and is closed back to
/// its start with a chord. Returns false when the arc was skipped.
pub fn draw_angle<S: Surface + ?Sized>(
    surface: &mut S,
    p1: Point,
    vertex: Point,
    p3: Point,
    angle: f32,
    line_width: f32,
) -> bool {
    draw_line(surface, vertex, p1, color::ANGLE_ARM, line_width, None);
    draw_line(surface, vertex, p3, color::ANGLE_REFERENCE, line_width, None);

    let radius = p3.x - vertex.x;
    if !(radius > 0.0 && radius.is_finite()) || !angle.is_finite() {
        log::warn!(
            "Skipping angle arc at ({}, {}): radius {radius}, angle {angle}",
            vertex.x,
            vertex.y
        );
        return false;
    }

    let (end, counter_clockwise) = arc::orientation(p1, p3, angle);
    let sweep = arc::canvas_sweep(0.0, end, counter_clockwise);
    let Some((start, segments)) = arc::bezier_segments(vertex, radius, 0.0, sweep) else {
        log::debug!("Empty angle arc at ({}, {})", vertex.x, vertex.y);
        return true;
    };

    let mut pb = PathBuilder::new();
    pb.move_to(start.x, start.y);
    for (c1, c2, end) in segments {
        pb.cubic_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y);
    }
    pb.close();

    if let Some(path) = pb.finish() {
        let stroke = Stroke {
            width: line_width,
            ..Default::default()
        };
        surface.stroke_path(&path, &paint(color::ANGLE_REFERENCE), &stroke);
    }
    true
}

/// Gravity line through the hip midpoint and shoulder line through the
/// shoulder midpoint, both from above the nose down to the foot.
///
/// Drawn regardless of landmark confidence.
pub fn draw_reference_lines<S: Surface + ?Sized>(
    surface: &mut S,
    landmarks: &LandmarkSet,
    style: &OverlayStyle,
) {
    let nose = landmarks.get(LandmarkIndex::Nose).position();
    let foot = landmarks.get(LandmarkIndex::LeftFootIndex).position();

    let hips = midpoint(
        landmarks.get(LandmarkIndex::LeftHip).position(),
        landmarks.get(LandmarkIndex::RightHip).position(),
    );
    let (top, bottom) = reference_line_endpoints(hips.x, nose, foot, style.reference_offset);
    draw_line(
        surface,
        top,
        bottom,
        color::GRAVITY_LINE,
        style.line_width,
        Some(&reference::GRAVITY_DASH),
    );

    let shoulders = midpoint(
        landmarks.get(LandmarkIndex::LeftShoulder).position(),
        landmarks.get(LandmarkIndex::RightShoulder).position(),
    );
    let (top, bottom) = reference_line_endpoints(shoulders.x, nose, foot, style.reference_offset);
    draw_line(
        surface,
        top,
        bottom,
        color::SHOULDER_LINE,
        style.line_width,
        None,
    );
}
