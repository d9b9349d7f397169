//! Events emitted by a detection session to its owner

/// Alert-style notifications for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// Asynchronous detector creation finished; detection starts next cycle
    DetectorReady,
    /// Detector creation failed; the session keeps drawing frames only
    DetectorUnavailable(String),
    /// A detector call failed; the detector was disposed
    DetectorFailed(String),
    /// The loop exited and released its frame source
    Stopped { frames: u64 },
}
