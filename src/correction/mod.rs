//! Interactive landmark correction module
//!
//! This module contains:
//! - Hit-testing and the drag state machine
//! - The verification session binding a still image, a landmark set and a surface
//! - Pointer message handling

pub mod handlers;
pub mod session;

pub use handlers::{PointerMsg, handle_pointer_msg};
pub use session::{ConfirmedPosture, CorrectionSession};

use crate::domain::{CONFIDENCE_THRESHOLD, LandmarkSet, Point};
use crate::error::{PostureError, Result};

/// Half-size of the square pick box around a pointer position
pub const HIT_BOX: f32 = 4.0;

/// Drag state for landmark correction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    /// No landmark is being dragged
    #[default]
    Idle,
    /// Dragging the landmark with this schema index
    Dragging(usize),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }
}

/// First landmark in schema order whose pick box contains `pos`.
///
/// Landmarks below `threshold` are never picked, which also excludes the
/// suppressed ones. Ties go to the lowest schema index.
pub fn hit_test(pos: Point, landmarks: &LandmarkSet, half_size: f32, threshold: f32) -> Option<usize> {
    landmarks
        .iter()
        .find(|lm| lm.is_valid(threshold) && lm.position().within_box(pos, half_size))
        .map(|lm| lm.id)
}

/// Pointer-driven drag state machine over a single live landmark set.
///
/// `Idle --hit--> Dragging --up--> Idle`, a miss stays idle. Only the dragged
/// landmark is ever mutated.
#[derive(Debug, Clone)]
pub struct CorrectionController {
    drag: DragState,
    hit_box: f32,
    threshold: f32,
}

impl Default for CorrectionController {
    fn default() -> Self {
        Self::new(HIT_BOX, CONFIDENCE_THRESHOLD)
    }
}

impl CorrectionController {
    pub fn new(hit_box: f32, threshold: f32) -> Self {
        Self {
            drag: DragState::Idle,
            hit_box,
            threshold,
        }
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Start a drag on the landmark under `pos`, if any
    pub fn on_pointer_down(&mut self, pos: Point, landmarks: &LandmarkSet) -> Option<usize> {
        let hit = hit_test(pos, landmarks, self.hit_box, self.threshold);
        self.drag = match hit {
            Some(index) => {
                log::debug!("Dragging landmark {index}");
                DragState::Dragging(index)
            }
            None => {
                log::trace!("No landmark at ({}, {})", pos.x, pos.y);
                DragState::Idle
            }
        };
        hit
    }

    /// Move the dragged landmark to `pos`.
    ///
    /// Fails with [`PostureError::NoActiveDrag`] when idle; callers ignore it.
    pub fn on_pointer_move(&mut self, pos: Point, landmarks: &mut LandmarkSet) -> Result<usize> {
        let DragState::Dragging(index) = self.drag else {
            return Err(PostureError::NoActiveDrag);
        };
        if !landmarks.set_position(index, pos) {
            self.drag = DragState::Idle;
            return Err(PostureError::NoActiveDrag);
        }
        Ok(index)
    }

    pub fn on_pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }
}
