//! Detector lifecycle state for a detection session

use super::messages::SessionEvent;
use crate::capture::detector::PendingDetector;

/// Where the session's detector is in its lifecycle
pub enum DetectorSlot<D> {
    /// Creation still in progress
    Pending(PendingDetector<D>),
    Ready(D),
    /// Creation failed or the detector was disposed after a failure
    Unavailable,
}

impl<D> DetectorSlot<D> {
    /// Promote a finished creation without waiting.
    ///
    /// Returns the event to emit when the slot changed.
    pub fn poll_creation(&mut self) -> Option<SessionEvent> {
        let DetectorSlot::Pending(rx) = &mut *self else {
            return None;
        };

        match rx.try_recv() {
            Ok(None) => None,
            Ok(Some(Ok(detector))) => {
                log::info!("Pose detector ready");
                *self = DetectorSlot::Ready(detector);
                Some(SessionEvent::DetectorReady)
            }
            Ok(Some(Err(e))) => {
                log::error!("Pose detector unavailable: {e}");
                *self = DetectorSlot::Unavailable;
                Some(SessionEvent::DetectorUnavailable(e.to_string()))
            }
            Err(_) => {
                log::error!("Pose detector creation was abandoned");
                *self = DetectorSlot::Unavailable;
                Some(SessionEvent::DetectorUnavailable(
                    "detector creation was abandoned".to_string(),
                ))
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, DetectorSlot::Ready(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, DetectorSlot::Pending(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::detector::{DetectorError, pending_detector};

    #[test]
    fn test_pending_until_sent() {
        let (tx, rx) = pending_detector::<u8>();
        let mut slot = DetectorSlot::Pending(rx);
        assert_eq!(slot.poll_creation(), None);
        assert!(slot.is_pending());

        assert!(tx.send(Ok(7)).is_ok());
        assert_eq!(slot.poll_creation(), Some(SessionEvent::DetectorReady));
        assert!(slot.is_ready());
        assert_eq!(slot.poll_creation(), None);
    }

    #[test]
    fn test_creation_failure() {
        let (tx, rx) = pending_detector::<u8>();
        let mut slot = DetectorSlot::Pending(rx);
        assert!(tx.send(Err(DetectorError::Init("no backend".into()))).is_ok());
        assert!(matches!(
            slot.poll_creation(),
            Some(SessionEvent::DetectorUnavailable(msg)) if msg.contains("no backend")
        ));
        assert!(matches!(slot, DetectorSlot::Unavailable));
    }

    #[test]
    fn test_dropped_sender_is_unavailable() {
        let (tx, rx) = pending_detector::<u8>();
        drop(tx);
        let mut slot = DetectorSlot::Pending(rx);
        assert!(matches!(
            slot.poll_creation(),
            Some(SessionEvent::DetectorUnavailable(_))
        ));
    }
}
