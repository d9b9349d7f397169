use std::path::PathBuf;

use anyhow::Context;

use posturekit::capture::{FrameSource, StillFrameSource};
use posturekit::capture::detector::RecordedDetector;
use posturekit::config::PostureConfig;
use posturekit::correction::CorrectionSession;
use posturekit::domain::LandmarkSet;
use posturekit::render::PixmapSurface;
use posturekit::report::{assemble_report, export};

const USAGE: &str = "usage: posturekit <image> <landmarks.json> [out_dir]";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = std::env::args_os().skip(1);
    let (Some(image_path), Some(landmarks_path)) = (args.next(), args.next()) else {
        anyhow::bail!(USAGE);
    };
    let image_path = PathBuf::from(image_path);
    let landmarks_path = PathBuf::from(landmarks_path);
    let out_dir = args.next().map(PathBuf::from);

    let config = PostureConfig::load();

    let still = StillFrameSource::open(&image_path)?;
    let frame = still
        .current_frame()
        .cloned()
        .context("Still image has no frame")?;
    let (width, height) = frame.dimensions();

    let text = std::fs::read_to_string(&landmarks_path)
        .with_context(|| format!("Failed to read {}", landmarks_path.display()))?;
    let landmarks: LandmarkSet = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse {}", landmarks_path.display()))?;

    // Replay the recorded set through verification so suppression and the
    // confirmation skeleton apply exactly as in the interactive flow
    let mut detector = RecordedDetector::new(landmarks);
    let session = CorrectionSession::detect(
        frame,
        &mut detector,
        PixmapSurface::new(width, height)?,
        config.overlay_style(),
        &config.suppressed_landmarks,
    )
    .await?
    .with_controller(config.controller());
    let confirmed = session.confirm();

    let mut surface = PixmapSurface::new(width, height)?;
    let report = assemble_report(
        &confirmed.still,
        &confirmed.landmarks,
        &config.overlay_style(),
        &mut surface,
    );

    for m in report.measurements() {
        println!("{:<20} {:>7.2}°", m.kind.label(), m.angle_degrees);
    }

    let dir = out_dir
        .or_else(|| config.report_dir())
        .context("No report directory available")?;
    let paths = export::save_report(&report, &dir)?;
    println!("{}", paths.image.display());
    println!("{}", paths.measurements.display());

    Ok(())
}
