//! Live detection session module
//!
//! This module contains:
//! - The detect and render loop over a frame source
//! - Detector lifecycle state
//! - The stop handle shared with the session owner
//! - Events emitted to the presentation layer

pub mod detection;
pub mod messages;
pub mod state;
pub mod stop;

pub use detection::DetectionSession;
pub use messages::SessionEvent;
pub use stop::StopHandle;
