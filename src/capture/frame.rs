//! Frame source capability

use image::RgbaImage;

/// A device yielding same-sized frames, owned by exactly one session
pub trait FrameSource {
    /// Resolves once a frame is available. Must suspend, never spin.
    fn ready(&mut self) -> impl Future<Output = ()>;

    /// The most recent frame, if any
    fn current_frame(&self) -> Option<&RgbaImage>;

    fn dimensions(&self) -> (u32, u32);

    /// Release the underlying device
    fn release(&mut self);
}
