//! Continuous detect and render loop over a frame source

use image::RgbaImage;
use tokio::sync::mpsc::UnboundedSender;

use super::messages::SessionEvent;
use super::state::DetectorSlot;
use super::stop::StopHandle;
use crate::capture::detector::{PendingDetector, PoseDetector, primary_subject};
use crate::capture::frame::FrameSource;
use crate::domain::{LandmarkSet, SUPPRESSED_LANDMARKS};
use crate::render::{OverlayStyle, Surface, overlay};

/// Binds one frame source, one detector and one drawing surface.
///
/// The session owns its frame source exclusively and releases it exactly
/// once: when the loop exits, or on drop if the loop never ran.
pub struct DetectionSession<S: FrameSource, D, R> {
    source: Option<S>,
    detector: DetectorSlot<D>,
    surface: R,
    style: OverlayStyle,
    suppressed: Vec<usize>,
    stop: StopHandle,
    events: Option<UnboundedSender<SessionEvent>>,
    latest: Option<LandmarkSet>,
    frames: u64,
}

fn emit(events: &Option<UnboundedSender<SessionEvent>>, event: SessionEvent) {
    if let Some(tx) = events
        && tx.send(event).is_err()
    {
        log::debug!("Session event receiver dropped");
    }
}

impl<S: FrameSource, D: PoseDetector, R: Surface> DetectionSession<S, D, R> {
    /// Create a session without a detector. Cycles draw frames only until a
    /// detector is attached.
    pub fn new(source: S, surface: R) -> Self {
        Self {
            source: Some(source),
            detector: DetectorSlot::Unavailable,
            surface,
            style: OverlayStyle::default(),
            suppressed: SUPPRESSED_LANDMARKS.to_vec(),
            stop: StopHandle::new(),
            events: None,
            latest: None,
            frames: 0,
        }
    }

    pub fn with_detector(mut self, detector: D) -> Self {
        self.detector = DetectorSlot::Ready(detector);
        self
    }

    /// Attach a detector that is still being created
    pub fn with_pending_detector(mut self, pending: PendingDetector<D>) -> Self {
        self.detector = DetectorSlot::Pending(pending);
        self
    }

    pub fn with_style(mut self, style: OverlayStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_suppressed(mut self, suppressed: Vec<usize>) -> Self {
        self.suppressed = suppressed;
        self
    }

    pub fn with_events(mut self, events: UnboundedSender<SessionEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// Handle for stopping the loop from outside
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Run cycles until stopped, then release the frame source.
    ///
    /// Each cycle waits for the source to become ready, runs the detector on
    /// the current frame and draws the frame with the primary subject. A
    /// detector call that is in flight when the stop arrives completes and its
    /// result is discarded.
    pub async fn run(&mut self) {
        let Self {
            source,
            detector,
            surface,
            style,
            suppressed,
            stop,
            events,
            latest,
            frames,
        } = self;

        log::debug!("Detection loop started");

        loop {
            if stop.is_stopped() {
                break;
            }

            if let Some(event) = detector.poll_creation() {
                emit(events, event);
            }

            let Some(src) = source.as_mut() else {
                break;
            };

            tokio::select! {
                biased;
                _ = stop.stopped() => break,
                _ = src.ready() => {}
            }

            let Some(frame) = src.current_frame() else {
                log::debug!("Frame source ready without a frame");
                tokio::task::yield_now().await;
                continue;
            };

            let mut subject = None;
            let mut failure = None;
            if let DetectorSlot::Ready(model) = &mut *detector {
                match model.estimate(frame).await {
                    Ok(candidates) => subject = primary_subject(candidates, suppressed),
                    Err(e) => {
                        log::error!("Pose detector call failed: {e}");
                        model.dispose();
                        failure = Some(e);
                    }
                }
            }
            if let Some(e) = failure {
                *detector = DetectorSlot::Unavailable;
                emit(events, SessionEvent::DetectorFailed(e.to_string()));
            }

            if stop.is_stopped() {
                log::debug!("Discarding detection result after stop");
                break;
            }

            draw_cycle(surface, frame, subject.as_ref(), style);
            if subject.is_some() {
                *latest = subject;
            }
            *frames += 1;

            tokio::task::yield_now().await;
        }

        if let Some(mut src) = source.take() {
            src.release();
            log::info!("Detection loop stopped after {} frames", frames);
            emit(events, SessionEvent::Stopped { frames: *frames });
        }
    }

    /// Still copy of the current surface contents
    pub fn snapshot(&self) -> RgbaImage {
        self.surface.to_still_image()
    }
}

impl<S: FrameSource, D, R> DetectionSession<S, D, R> {
    pub fn surface(&self) -> &R {
        &self.surface
    }

    /// Primary subject of the most recent cycle that found one
    pub fn latest_landmarks(&self) -> Option<&LandmarkSet> {
        self.latest.as_ref()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn detector_ready(&self) -> bool {
        self.detector.is_ready()
    }
}

fn draw_cycle<R: Surface>(
    surface: &mut R,
    frame: &RgbaImage,
    subject: Option<&LandmarkSet>,
    style: &OverlayStyle,
) {
    let (w, h) = surface.dimensions();
    surface.clear(0.0, 0.0, w as f32, h as f32);
    overlay::draw_frame(surface, frame);
    if let Some(landmarks) = subject {
        overlay::draw(surface, landmarks, style);
    }
}

impl<S: FrameSource, D, R> Drop for DetectionSession<S, D, R> {
    fn drop(&mut self) {
        if let Some(mut src) = self.source.take() {
            log::debug!("Releasing frame source of an unfinished session");
            src.release();
        }
    }
}
