//! Still image frame source for captured or uploaded photos

use std::path::Path;

use anyhow::Context;
use image::RgbaImage;

use super::frame::FrameSource;

/// A single still image exposed as an always-ready frame source
#[derive(Clone, Debug)]
pub struct StillFrameSource {
    rgba: Option<RgbaImage>,
    dimensions: (u32, u32),
}

impl StillFrameSource {
    pub fn new(rgba: RgbaImage) -> Self {
        log::debug!(
            "StillFrameSource loaded: {}x{} pixels",
            rgba.width(),
            rgba.height()
        );
        let dimensions = rgba.dimensions();
        Self {
            rgba: Some(rgba),
            dimensions,
        }
    }

    /// Load an image file from disk
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        Ok(Self::new(load_still(path)?))
    }

    pub fn is_released(&self) -> bool {
        self.rgba.is_none()
    }
}

impl FrameSource for StillFrameSource {
    async fn ready(&mut self) {}

    fn current_frame(&self) -> Option<&RgbaImage> {
        self.rgba.as_ref()
    }

    fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    fn release(&mut self) {
        if self.rgba.take().is_some() {
            log::debug!("StillFrameSource released");
        }
    }
}

/// Decode an image file into RGBA
pub fn load_still(path: &Path) -> anyhow::Result<RgbaImage> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open image {}", path.display()))?;
    Ok(img.to_rgba8())
}
