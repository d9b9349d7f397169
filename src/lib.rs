//! Pose landmark correction, posture tilt metrics and annotated report rendering

pub mod capture;
pub mod config;
pub mod correction;
pub mod domain;
pub mod error;
pub mod render;
pub mod report;
pub mod session;

#[cfg(test)]
mod test_utils;

pub use error::{PostureError, Result};
