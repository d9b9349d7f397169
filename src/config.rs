//! Configuration persistence for posturekit settings

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::correction::{CorrectionController, HIT_BOX};
use crate::domain::{CONFIDENCE_THRESHOLD, SUPPRESSED_LANDMARKS};
use crate::error::Result;
use crate::render::geometry::{keypoint, reference};
use crate::render::{OverlayStyle, PixmapSurface};

/// Save location for reports (Pictures or Documents folder)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SaveLocation {
    #[default]
    Pictures,
    Documents,
}

impl SaveLocation {
    /// Resolve the folder, falling back to the conventional name under home
    pub fn dir(self) -> Option<PathBuf> {
        match self {
            SaveLocation::Pictures => {
                dirs::picture_dir().or_else(|| dirs::home_dir().map(|h| h.join("Pictures")))
            }
            SaveLocation::Documents => {
                dirs::document_dir().or_else(|| dirs::home_dir().map(|h| h.join("Documents")))
            }
        }
    }
}

/// Application configuration persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostureConfig {
    /// Minimum landmark confidence for drawing and picking (0.0-1.0)
    pub confidence_threshold: f32,
    /// Keypoint circle radius in pixels
    pub keypoint_radius: f32,
    /// Width of outlines, skeleton edges and overlay lines
    pub line_width: f32,
    /// Half-size of the square pick box around the pointer
    pub hit_box: f32,
    /// How far the reference lines extend above the nose
    pub reference_offset: f32,
    /// Mirror the live preview like a selfie camera
    pub mirror_preview: bool,
    /// Schema indices always forced to zero confidence
    pub suppressed_landmarks: Vec<usize>,
    /// Where to save reports
    pub save_location: SaveLocation,
    /// Explicit report folder, overriding `save_location`
    pub report_dir: Option<PathBuf>,
}

impl Default for PostureConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: CONFIDENCE_THRESHOLD,
            keypoint_radius: keypoint::RADIUS,
            line_width: keypoint::LINE_WIDTH,
            hit_box: HIT_BOX,
            reference_offset: reference::OFFSET,
            mirror_preview: true,
            suppressed_landmarks: SUPPRESSED_LANDMARKS.to_vec(),
            save_location: SaveLocation::Pictures,
            report_dir: None,
        }
    }
}

impl PostureConfig {
    /// Directory name under the platform config dir
    pub const ID: &'static str = "posturekit";

    /// Location of the config file, if the platform has a config dir
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(Self::ID).join("config.json"))
    }

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            log::warn!("No config directory available, using defaults");
            return Self::default();
        };
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error loading config, using defaults: {:?}", err);
                Self::default()
            }
        }
    }

    /// Save configuration to disk
    pub fn save(&self) {
        match Self::path() {
            Some(path) => {
                if let Err(err) = self.save_to(&path) {
                    log::error!("Failed to save config: {:?}", err);
                }
            }
            None => log::error!("No config directory available for saving"),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config.sanitized())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
    }

    fn sanitized(mut self) -> Self {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            log::warn!(
                "Confidence threshold {} out of range, clamping",
                self.confidence_threshold
            );
            self.confidence_threshold = self.confidence_threshold.clamp(0.0, 1.0);
        }
        self
    }

    pub fn overlay_style(&self) -> OverlayStyle {
        OverlayStyle {
            confidence_threshold: self.confidence_threshold,
            keypoint_radius: self.keypoint_radius,
            line_width: self.line_width,
            reference_offset: self.reference_offset,
            ..OverlayStyle::default()
        }
    }

    pub fn controller(&self) -> CorrectionController {
        CorrectionController::new(self.hit_box, self.confidence_threshold)
    }

    /// Surface for the live preview, mirrored when configured
    pub fn live_surface(&self, width: u32, height: u32) -> Result<PixmapSurface> {
        if self.mirror_preview {
            PixmapSurface::mirrored(width, height)
        } else {
            PixmapSurface::new(width, height)
        }
    }

    /// Folder reports are written to
    pub fn report_dir(&self) -> Option<PathBuf> {
        self.report_dir.clone().or_else(|| self.save_location.dir())
    }
}
