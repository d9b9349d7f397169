//! Drawing surface abstraction and the tiny-skia backed implementation

use image::RgbaImage;
use tiny_skia::{
    BlendMode, FillRule, FilterQuality, IntSize, Paint, Path, Pixmap, PixmapPaint, Stroke,
    Transform,
};

use crate::error::{PostureError, Result};

/// A 2D canvas-like sink the overlay renderer draws onto
pub trait Surface {
    /// Surface size in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Draw `frame` scaled into the rectangle at (x, y) with the given size
    fn draw_image(&mut self, frame: &RgbaImage, x: f32, y: f32, width: f32, height: f32);

    /// Reset a rectangle to transparent
    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn stroke_path(&mut self, path: &Path, paint: &Paint, stroke: &Stroke);

    fn fill_path(&mut self, path: &Path, paint: &Paint);

    /// Snapshot the current contents as a still bitmap
    fn to_still_image(&self) -> RgbaImage;
}

/// Convert an RgbaImage into a Pixmap sharing the same byte layout
fn image_to_pixmap(img: &RgbaImage) -> Option<Pixmap> {
    let size = IntSize::from_wh(img.width(), img.height())?;
    Pixmap::from_vec(img.as_raw().clone(), size)
}

/// Software surface backed by a tiny-skia pixmap.
///
/// A mirrored surface flips every draw horizontally, so frames and overlay
/// coordinates land in the same mirrored space.
pub struct PixmapSurface {
    pixmap: Pixmap,
    transform: Transform,
}

impl PixmapSurface {
    /// Create a transparent surface
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(PostureError::InvalidSurface { width, height })?;
        Ok(Self {
            pixmap,
            transform: Transform::identity(),
        })
    }

    /// Create a horizontally mirrored surface for selfie-style preview
    pub fn mirrored(width: u32, height: u32) -> Result<Self> {
        let mut surface = Self::new(width, height)?;
        surface.transform = Transform::from_row(-1.0, 0.0, 0.0, 1.0, width as f32, 0.0);
        Ok(surface)
    }

    /// Create an unmirrored surface sized to `frame`
    pub fn for_frame(frame: &RgbaImage) -> Result<Self> {
        Self::new(frame.width(), frame.height())
    }

    pub fn is_mirrored(&self) -> bool {
        self.transform.sx < 0.0
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

impl Surface for PixmapSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    fn draw_image(&mut self, frame: &RgbaImage, x: f32, y: f32, width: f32, height: f32) {
        let Some(source) = image_to_pixmap(frame) else {
            log::warn!(
                "Skipping empty frame {}x{}",
                frame.width(),
                frame.height()
            );
            return;
        };

        let sx = width / source.width() as f32;
        let sy = height / source.height() as f32;
        let placement = Transform::from_row(sx, 0.0, 0.0, sy, x, y);
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..Default::default()
        };

        self.pixmap.draw_pixmap(
            0,
            0,
            source.as_ref(),
            &paint,
            self.transform.pre_concat(placement),
            None,
        );
    }

    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let Some(rect) = tiny_skia::Rect::from_xywh(x, y, width, height) else {
            return;
        };
        let paint = Paint {
            blend_mode: BlendMode::Clear,
            ..Default::default()
        };
        self.pixmap.fill_rect(rect, &paint, self.transform, None);
    }

    fn stroke_path(&mut self, path: &Path, paint: &Paint, stroke: &Stroke) {
        self.pixmap
            .stroke_path(path, paint, stroke, self.transform, None);
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        self.pixmap
            .fill_path(path, paint, FillRule::Winding, self.transform, None);
    }

    fn to_still_image(&self) -> RgbaImage {
        let (w, h) = self.dimensions();
        RgbaImage::from_raw(w, h, self.pixmap.data().to_vec()).unwrap_or_else(|| RgbaImage::new(w, h))
    }
}
