//! Pose detector capability

use futures::channel::oneshot;
use image::RgbaImage;
use thiserror::Error;

use crate::domain::LandmarkSet;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectorError {
    #[error("detector initialisation failed: {0}")]
    Init(String),

    #[error("pose estimation failed: {0}")]
    Inference(String),
}

/// An opaque pose model: image in, scored landmark sets out.
///
/// Adapters wrap concrete models behind this trait. Only one call is ever
/// outstanding per detector.
pub trait PoseDetector {
    /// Estimate poses in `frame`, best candidate first
    fn estimate(
        &mut self,
        frame: &RgbaImage,
    ) -> impl Future<Output = Result<Vec<LandmarkSet>, DetectorError>>;

    /// Free model resources. Called at most once, after a failure.
    fn dispose(&mut self) {}
}

/// Completion side of an asynchronous detector creation
pub type DetectorSender<D> = oneshot::Sender<Result<D, DetectorError>>;

/// A detector that is still being created
pub type PendingDetector<D> = oneshot::Receiver<Result<D, DetectorError>>;

/// Channel pair for handing a detector to a session once it is built
pub fn pending_detector<D>() -> (DetectorSender<D>, PendingDetector<D>) {
    oneshot::channel()
}

/// Take the first candidate and force the suppressed indices to zero confidence
pub fn primary_subject(candidates: Vec<LandmarkSet>, suppressed: &[usize]) -> Option<LandmarkSet> {
    if candidates.len() > 1 {
        log::debug!("Ignoring {} extra pose candidates", candidates.len() - 1);
    }
    let mut subject = candidates.into_iter().next()?;
    subject.suppress(suppressed);
    Some(subject)
}

/// Detector that always reports one previously recorded landmark set.
///
/// Used to replay a confirmed set from disk through the verification flow.
#[derive(Debug, Clone)]
pub struct RecordedDetector {
    landmarks: LandmarkSet,
}

impl RecordedDetector {
    pub fn new(landmarks: LandmarkSet) -> Self {
        Self { landmarks }
    }
}

impl PoseDetector for RecordedDetector {
    async fn estimate(&mut self, _frame: &RgbaImage) -> Result<Vec<LandmarkSet>, DetectorError> {
        Ok(vec![self.landmarks.clone()])
    }
}
