//! Report export to disk

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;
use serde::Serialize;

use super::PostureReport;
use crate::config::SaveLocation;
use crate::domain::TiltMeasurement;

/// Files written for one report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub image: PathBuf,
    pub measurements: PathBuf,
}

#[derive(Serialize)]
struct ReportRow<'a> {
    label: &'static str,
    #[serde(flatten)]
    measurement: &'a TiltMeasurement,
}

#[derive(Serialize)]
struct ReportSummary<'a> {
    created: String,
    width: u32,
    height: u32,
    measurements: Vec<ReportRow<'a>>,
}

fn write_png<W: io::Write>(w: W, image: &RgbaImage) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())
}

/// Encode an image as PNG into a byte buffer
pub fn encode_png(image: &RgbaImage) -> anyhow::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_png(&mut buffer, image)?;
    Ok(buffer)
}

/// Default directory for saved reports
pub fn default_report_dir() -> Option<PathBuf> {
    SaveLocation::default().dir()
}

/// Write the annotated image as PNG and the measurements as JSON into `dir`.
///
/// Both files share a timestamped stem.
pub fn save_report(report: &PostureReport, dir: &Path) -> anyhow::Result<ReportPaths> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create report directory {}", dir.display()))?;

    let now = chrono::Local::now();
    let stem = now.format("Posture_%Y-%m-%d_%H-%M-%S").to_string();
    let paths = ReportPaths {
        image: dir.join(format!("{stem}.png")),
        measurements: dir.join(format!("{stem}.json")),
    };

    let file = File::create(&paths.image)
        .with_context(|| format!("Failed to create {}", paths.image.display()))?;
    write_png(BufWriter::new(file), report.annotated_image())?;

    let (width, height) = report.annotated_image().dimensions();
    let summary = ReportSummary {
        created: now.to_rfc3339(),
        width,
        height,
        measurements: report
            .measurements()
            .iter()
            .map(|m| ReportRow {
                label: m.kind.label(),
                measurement: m,
            })
            .collect(),
    };
    let json = serde_json::to_string_pretty(&summary)?;
    let mut file = File::create(&paths.measurements)
        .with_context(|| format!("Failed to create {}", paths.measurements.display()))?;
    file.write_all(json.as_bytes())?;

    log::info!(
        "Saved report to {} and {}",
        paths.image.display(),
        paths.measurements.display()
    );
    Ok(paths)
}
