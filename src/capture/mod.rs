//! Frame and pose capture module
//!
//! This module consolidates:
//! - The pose detector capability and its asynchronous creation (detector.rs)
//! - The frame source capability (frame.rs)
//! - The still-image frame source used for verification (still.rs)

pub mod detector;
pub mod frame;
pub mod still;

pub use detector::{DetectorError, PoseDetector};
pub use frame::FrameSource;
pub use still::StillFrameSource;
