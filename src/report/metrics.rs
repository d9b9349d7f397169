//! Tilt metric derivation
//!
//! Each tilt is measured at the left landmark of a pair, between the right
//! landmark and a horizontal reference point built from the pair midpoint.

use image::RgbaImage;

use super::PostureReport;
use crate::domain::{
    LandmarkSet, Point, TiltKind, TiltMeasurement, angle_at_vertex, midpoint, round2, to_degrees,
};
use crate::error::{PostureError, Result};
use crate::render::{OverlayStyle, Surface, overlay};

/// Measure one tilt.
///
/// Fails with `LowConfidence` when either landmark of the pair is below
/// `threshold`, and with `DegenerateGeometry` when the pair coincides or is
/// vertically aligned, since the reference point then collapses onto the vertex.
pub fn measure_tilt(
    kind: TiltKind,
    landmarks: &LandmarkSet,
    threshold: f32,
) -> Result<TiltMeasurement> {
    let (left, right) = kind.landmarks();
    let (left, right) = (landmarks.get(left), landmarks.get(right));
    if let Some(lm) = [left, right].into_iter().find(|lm| !lm.is_valid(threshold)) {
        return Err(PostureError::LowConfidence {
            id: lm.id,
            confidence: lm.confidence,
        });
    }
    let left = left.position();
    let right = right.position();

    let mid = midpoint(left, right);
    let offset = (mid.x - left.x) / 2.0;
    let reference = Point::new(mid.x + offset, left.y);

    let angle_radians = angle_at_vertex(right, left, reference)?;
    Ok(TiltMeasurement {
        kind,
        angle_degrees: round2(to_degrees(angle_radians)),
        angle_radians,
        vertex: left,
        right,
        reference,
    })
}

/// All four tilts in report order, skipping the ones that cannot be measured
pub fn compute_metrics(landmarks: &LandmarkSet, threshold: f32) -> Vec<TiltMeasurement> {
    TiltKind::ALL
        .iter()
        .filter_map(|&kind| match measure_tilt(kind, landmarks, threshold) {
            Ok(m) => Some(m),
            Err(e) => {
                log::warn!("Skipping {}: {e}", kind.label());
                None
            }
        })
        .collect()
}

/// Draw the arms and arc of one measurement. Returns false if the arc was skipped.
pub fn draw_measurement<S: Surface + ?Sized>(
    surface: &mut S,
    measurement: &TiltMeasurement,
    style: &OverlayStyle,
) -> bool {
    overlay::draw_angle(
        surface,
        measurement.right,
        measurement.vertex,
        measurement.reference,
        measurement.angle_radians as f32,
        style.line_width,
    )
}

/// Render the report image for a confirmed set and derive its measurements.
///
/// Draws `still`, the gravity and shoulder lines, then one angle overlay per
/// measurement, and snapshots the surface.
pub fn assemble_report<S: Surface + ?Sized>(
    still: &RgbaImage,
    landmarks: &LandmarkSet,
    style: &OverlayStyle,
    surface: &mut S,
) -> PostureReport {
    let (w, h) = surface.dimensions();
    surface.clear(0.0, 0.0, w as f32, h as f32);
    overlay::draw_frame(surface, still);
    overlay::draw_reference_lines(surface, landmarks, style);

    let measurements = compute_metrics(landmarks, style.confidence_threshold);
    for m in &measurements {
        if !draw_measurement(surface, m, style) {
            log::warn!("{} arc not drawn", m.kind.label());
        }
    }

    log::info!("Report assembled with {} measurements", measurements.len());
    PostureReport::new(surface.to_still_image(), measurements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CONFIDENCE_THRESHOLD, LandmarkIndex, SUPPRESSED_LANDMARKS};
    use crate::render::PixmapSurface;
    use crate::test_utils::{RecordingSurface, sample_landmarks, with_confidence};

    fn with_pair(kind: TiltKind, left: Point, right: Point) -> LandmarkSet {
        let mut set = sample_landmarks();
        let (l, r) = kind.landmarks();
        set.set_position(l as usize, left);
        set.set_position(r as usize, right);
        set
    }

    #[test]
    fn test_level_ears_measure_zero() {
        let set = with_pair(
            TiltKind::HeadTilt,
            Point::new(100.0, 50.0),
            Point::new(200.0, 50.0),
        );
        let m = measure_tilt(TiltKind::HeadTilt, &set, CONFIDENCE_THRESHOLD).unwrap();
        assert_eq!(m.angle_degrees, 0.0);
        assert_eq!(m.vertex, Point::new(100.0, 50.0));
        assert_eq!(m.reference, Point::new(175.0, 50.0));
    }

    #[test]
    fn test_tilted_pair() {
        let set = with_pair(
            TiltKind::ShoulderTilt,
            Point::new(100.0, 60.0),
            Point::new(200.0, 40.0),
        );
        let m = measure_tilt(TiltKind::ShoulderTilt, &set, CONFIDENCE_THRESHOLD).unwrap();
        assert_eq!(m.angle_degrees, 11.31);
        assert!((to_degrees(m.angle_radians) - 11.309_932).abs() < 1e-4);
    }

    #[test]
    fn test_metrics_in_report_order() {
        let measurements = compute_metrics(&sample_landmarks(), CONFIDENCE_THRESHOLD);
        let kinds: Vec<_> = measurements.iter().map(|m| m.kind).collect();
        assert_eq!(kinds, TiltKind::ALL.to_vec());

        let degrees: Vec<_> = measurements.iter().map(|m| m.angle_degrees).collect();
        assert_eq!(degrees, vec![0.0, 1.91, 2.86, 1.51]);
    }

    #[test]
    fn test_degenerate_pair_is_dropped() {
        let p = Point::new(150.0, 400.0);
        let set = with_pair(TiltKind::PelvicTilt, p, p);
        assert!(matches!(
            measure_tilt(TiltKind::PelvicTilt, &set, CONFIDENCE_THRESHOLD),
            Err(PostureError::DegenerateGeometry(_))
        ));

        let kinds: Vec<_> = compute_metrics(&set, CONFIDENCE_THRESHOLD).iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![TiltKind::HeadTilt, TiltKind::ShoulderTilt, TiltKind::KneeTilt]
        );
    }

    #[test]
    fn test_untrusted_pair_is_dropped() {
        let ear = LandmarkIndex::LeftEar as usize;

        let set = with_confidence(&sample_landmarks(), ear, 0.64);
        assert!(matches!(
            measure_tilt(TiltKind::HeadTilt, &set, CONFIDENCE_THRESHOLD),
            Err(PostureError::LowConfidence { id, .. }) if id == ear
        ));
        let kinds: Vec<_> = compute_metrics(&set, CONFIDENCE_THRESHOLD)
            .iter()
            .map(|m| m.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![TiltKind::ShoulderTilt, TiltKind::PelvicTilt, TiltKind::KneeTilt]
        );

        // Exactly at the threshold is trusted
        let set = with_confidence(&sample_landmarks(), ear, 0.65);
        let m = measure_tilt(TiltKind::HeadTilt, &set, CONFIDENCE_THRESHOLD).unwrap();
        assert_eq!(m.angle_degrees, 0.0);
    }

    #[test]
    fn test_untrusted_pair_draws_no_arc() {
        let mut set = with_confidence(&sample_landmarks(), LandmarkIndex::LeftEar as usize, 0.1);
        set = with_confidence(&set, LandmarkIndex::RightEar as usize, 0.0);
        let mut surface = RecordingSurface::new(400, 800);

        let report = assemble_report(
            &RgbaImage::new(400, 800),
            &set,
            &OverlayStyle::default(),
            &mut surface,
        );

        assert!(report.measurements().iter().all(|m| m.kind != TiltKind::HeadTilt));
        // Reference lines, then arms and arc for the three remaining tilts
        assert_eq!(surface.strokes(), 2 + 3 * 2 + 3);
    }

    #[test]
    fn test_report_draw_order() {
        let mut set = sample_landmarks();
        set.suppress(&SUPPRESSED_LANDMARKS);
        let still = RgbaImage::new(400, 800);
        let mut surface = RecordingSurface::new(400, 800);

        let report = assemble_report(&still, &set, &OverlayStyle::default(), &mut surface);

        assert_eq!(report.measurements().len(), 4);
        assert_eq!(surface.images(), 1);
        // Two reference lines, two arms per tilt, and an arc for every tilt
        // except the level head, whose arc sweeps nothing
        assert_eq!(surface.strokes(), 2 + 4 * 2 + 3);
        assert_eq!(surface.fills(), 0);
    }

    #[test]
    fn test_mirrored_pair_keeps_measurement_without_arc() {
        let set = with_pair(
            TiltKind::KneeTilt,
            Point::new(240.0, 560.0),
            Point::new(160.0, 562.0),
        );
        let mut surface = RecordingSurface::new(400, 800);
        let report = assemble_report(
            &RgbaImage::new(400, 800),
            &set,
            &OverlayStyle::default(),
            &mut surface,
        );
        assert_eq!(report.measurements().len(), 4);
        assert_eq!(surface.strokes(), 2 + 4 * 2 + 2);
    }

    #[test]
    fn test_report_image_matches_surface() {
        let set = sample_landmarks();
        let still = RgbaImage::from_pixel(400, 800, image::Rgba([90, 90, 90, 255]));
        let mut surface = PixmapSurface::new(400, 800).unwrap();

        let report = assemble_report(&still, &set, &OverlayStyle::default(), &mut surface);

        assert_eq!(report.annotated_image().dimensions(), (400, 800));
        assert_eq!(report.annotated_image().get_pixel(390, 790).0, [90, 90, 90, 255]);
    }
}
