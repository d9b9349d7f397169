//! Posture report module
//!
//! This module contains:
//! - Tilt metric derivation and the annotated report image (metrics.rs)
//! - PNG and JSON export of a finished report (export.rs)

pub mod export;
pub mod metrics;

pub use metrics::{assemble_report, compute_metrics, measure_tilt};

use image::RgbaImage;

use crate::domain::TiltMeasurement;

/// Annotated still plus the tilt measurements in report order.
///
/// Built once by [`assemble_report`] and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct PostureReport {
    annotated_image: RgbaImage,
    measurements: Vec<TiltMeasurement>,
}

impl PostureReport {
    pub fn new(annotated_image: RgbaImage, measurements: Vec<TiltMeasurement>) -> Self {
        Self {
            annotated_image,
            measurements,
        }
    }

    pub fn annotated_image(&self) -> &RgbaImage {
        &self.annotated_image
    }

    pub fn measurements(&self) -> &[TiltMeasurement] {
        &self.measurements
    }
}
