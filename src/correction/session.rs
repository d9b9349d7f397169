//! Verification session for correcting a detected landmark set

use image::RgbaImage;

use super::{CorrectionController, DragState};
use crate::capture::detector::{PoseDetector, primary_subject};
use crate::domain::{LandmarkSet, POSTURE_LINKS, Point};
use crate::error::{PostureError, Result};
use crate::render::{OverlayStyle, Surface, overlay};

/// The operator-approved landmark set and the annotated still it was confirmed on
#[derive(Debug, Clone)]
pub struct ConfirmedPosture {
    pub landmarks: LandmarkSet,
    pub still: RgbaImage,
}

/// Binds a still image, the single live landmark set and a drawing surface.
///
/// Every landmark move triggers a full redraw of the base image and keypoints.
/// Skeleton edges appear only on [`CorrectionSession::confirm`].
pub struct CorrectionSession<R> {
    still: RgbaImage,
    landmarks: LandmarkSet,
    controller: CorrectionController,
    surface: R,
    style: OverlayStyle,
}

impl<R: Surface> CorrectionSession<R> {
    /// Start a session on an already detected set and draw it
    pub fn new(still: RgbaImage, landmarks: LandmarkSet, surface: R, style: OverlayStyle) -> Self {
        let mut session = Self {
            still,
            landmarks,
            controller: CorrectionController::default(),
            surface,
            style,
        };
        session.redraw();
        session
    }

    /// Run the detector once on `still` and start a session on its primary subject
    pub async fn detect<D: PoseDetector>(
        still: RgbaImage,
        detector: &mut D,
        surface: R,
        style: OverlayStyle,
        suppressed: &[usize],
    ) -> Result<Self> {
        let candidates = detector.estimate(&still).await?;
        let landmarks = primary_subject(candidates, suppressed).ok_or(PostureError::NoSubject)?;
        log::debug!("Verification session started");
        Ok(Self::new(still, landmarks, surface, style))
    }

    pub fn with_controller(mut self, controller: CorrectionController) -> Self {
        self.controller = controller;
        self
    }

    /// Clear, draw the still, then the keypoints
    pub fn redraw(&mut self) {
        let style = OverlayStyle {
            draw_skeleton: false,
            ..self.style
        };
        overlay::redraw(&mut self.surface, &self.still, &self.landmarks, &style);
    }

    pub fn pointer_down(&mut self, pos: Point) -> Option<usize> {
        self.controller.on_pointer_down(pos, &self.landmarks)
    }

    /// Move the dragged landmark and redraw. Returns false while idle.
    pub fn pointer_move(&mut self, pos: Point) -> bool {
        match self.controller.on_pointer_move(pos, &mut self.landmarks) {
            Ok(_) => {
                self.redraw();
                true
            }
            Err(_) => false,
        }
    }

    pub fn pointer_up(&mut self) {
        self.controller.on_pointer_up();
    }

    pub fn drag_state(&self) -> DragState {
        self.controller.drag_state()
    }

    pub fn landmarks(&self) -> &LandmarkSet {
        &self.landmarks
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    /// Draw the posture skeleton and hand the set over with a fresh still
    pub fn confirm(mut self) -> ConfirmedPosture {
        overlay::draw_skeleton(&mut self.surface, &self.landmarks, &POSTURE_LINKS, &self.style);
        let still = self.surface.to_still_image();
        log::info!("Posture confirmed");
        ConfirmedPosture {
            landmarks: self.landmarks,
            still,
        }
    }
}
