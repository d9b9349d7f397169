//! Error types for the posture engine.

use thiserror::Error;

use crate::capture::detector::DetectorError;

#[derive(Error, Debug)]
pub enum PostureError {
    #[error("Pose detector unavailable: {0}")]
    DetectorUnavailable(String),

    #[error("Pose detector call failed: {0}")]
    DetectorCallFailed(String),

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(&'static str),

    #[error("Landmark {id} is below the confidence threshold ({confidence})")]
    LowConfidence { id: usize, confidence: f32 },

    #[error("No active drag")]
    NoActiveDrag,

    #[error("No subject detected in frame")]
    NoSubject,

    #[error("Invalid landmark set: expected {expected} landmarks, got {actual}")]
    LandmarkCount { expected: usize, actual: usize },

    #[error("Invalid landmark set: entry {position} carries id {id}")]
    LandmarkOrder { position: usize, id: usize },

    #[error("Invalid surface size {width}x{height}")]
    InvalidSurface { width: u32, height: u32 },
}

pub type Result<T> = std::result::Result<T, PostureError>;

impl From<DetectorError> for PostureError {
    fn from(e: DetectorError) -> Self {
        match e {
            DetectorError::Init(msg) => PostureError::DetectorUnavailable(msg),
            DetectorError::Inference(msg) => PostureError::DetectorCallFailed(msg),
        }
    }
}
