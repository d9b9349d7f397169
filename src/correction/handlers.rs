//! Pointer message handlers for the verification session

use super::session::CorrectionSession;
use crate::domain::Point;
use crate::render::Surface;

/// Pointer input in surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMsg {
    Down(f32, f32),
    Move(f32, f32),
    Up,
}

/// Route a pointer message to the session.
///
/// Returns true when the surface was redrawn.
pub fn handle_pointer_msg<R: Surface>(session: &mut CorrectionSession<R>, msg: PointerMsg) -> bool {
    match msg {
        PointerMsg::Down(x, y) => {
            session.pointer_down(Point::new(x, y));
            false
        }
        PointerMsg::Move(x, y) => session.pointer_move(Point::new(x, y)),
        PointerMsg::Up => {
            session.pointer_up();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correction::DragState;
    use crate::domain::{LandmarkIndex, SUPPRESSED_LANDMARKS};
    use crate::render::OverlayStyle;
    use crate::test_utils::{RecordingSurface, sample_landmarks};
    use image::RgbaImage;

    fn session() -> CorrectionSession<RecordingSurface> {
        let mut set = sample_landmarks();
        set.suppress(&SUPPRESSED_LANDMARKS);
        CorrectionSession::new(
            RgbaImage::new(400, 800),
            set,
            RecordingSurface::new(400, 800),
            OverlayStyle::default(),
        )
    }

    #[test]
    fn test_pointer_sequence() {
        let mut session = session();
        let ankle = session.landmarks().get(LandmarkIndex::LeftAnkle).position();

        assert!(!handle_pointer_msg(&mut session, PointerMsg::Down(ankle.x, ankle.y)));
        assert_eq!(session.drag_state(), DragState::Dragging(27));

        assert!(handle_pointer_msg(&mut session, PointerMsg::Move(170.0, 730.0)));
        assert!(handle_pointer_msg(&mut session, PointerMsg::Move(172.0, 731.0)));
        assert_eq!(
            session.landmarks().get(LandmarkIndex::LeftAnkle).position(),
            Point::new(172.0, 731.0)
        );

        assert!(!handle_pointer_msg(&mut session, PointerMsg::Up));
        assert!(!handle_pointer_msg(&mut session, PointerMsg::Move(0.0, 0.0)));
        assert_eq!(session.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_up_without_down_is_harmless() {
        let mut session = session();
        let before = session.landmarks().clone();
        assert!(!handle_pointer_msg(&mut session, PointerMsg::Up));
        assert!(!handle_pointer_msg(&mut session, PointerMsg::Move(5.0, 5.0)));
        assert_eq!(session.landmarks(), &before);
    }
}
