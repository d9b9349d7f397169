//! Test doubles shared across module tests

use std::cell::Cell;
use std::rc::Rc;

use image::RgbaImage;
use tiny_skia::{Paint, Path, Shader, Stroke};

use crate::capture::detector::{DetectorError, PoseDetector};
use crate::capture::frame::FrameSource;
use crate::domain::LandmarkSet;
use crate::render::Surface;
use crate::session::StopHandle;

/// A recorded surface call. Bounds are (left, top, right, bottom).
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Image {
        width: f32,
        height: f32,
    },
    Stroke {
        color: [u8; 4],
        dashed: bool,
        bounds: (f32, f32, f32, f32),
    },
    Fill {
        color: [u8; 4],
        bounds: (f32, f32, f32, f32),
    },
}

fn paint_color(paint: &Paint) -> [u8; 4] {
    match &paint.shader {
        Shader::SolidColor(c) => {
            let c = c.to_color_u8();
            [c.red(), c.green(), c.blue(), c.alpha()]
        }
        _ => [0; 4],
    }
}

fn path_bounds(path: &Path) -> (f32, f32, f32, f32) {
    let b = path.bounds();
    (b.left(), b.top(), b.right(), b.bottom())
}

/// Surface that records every call instead of drawing
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn strokes(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Stroke { .. }))
            .count()
    }

    pub fn fills(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Fill { .. }))
            .count()
    }

    pub fn images(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Image { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw_image(&mut self, _frame: &RgbaImage, _x: f32, _y: f32, width: f32, height: f32) {
        self.ops.push(Op::Image { width, height });
    }

    fn clear(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(Op::Clear {
            x,
            y,
            width,
            height,
        });
    }

    fn stroke_path(&mut self, path: &Path, paint: &Paint, stroke: &Stroke) {
        self.ops.push(Op::Stroke {
            color: paint_color(paint),
            dashed: stroke.dash.is_some(),
            bounds: path_bounds(path),
        });
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        self.ops.push(Op::Fill {
            color: paint_color(paint),
            bounds: path_bounds(path),
        });
    }

    fn to_still_image(&self) -> RgbaImage {
        RgbaImage::new(self.width, self.height)
    }
}

/// Frame source with observable readiness and release counters
pub struct FakeFrameSource {
    frame: RgbaImage,
    ready: bool,
    stop_after: Option<(usize, StopHandle)>,
    pub readies: Rc<Cell<usize>>,
    pub releases: Rc<Cell<usize>>,
}

impl FakeFrameSource {
    /// A source that is ready immediately on every call
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            frame: RgbaImage::new(width, height),
            ready: true,
            stop_after: None,
            readies: Rc::new(Cell::new(0)),
            releases: Rc::new(Cell::new(0)),
        }
    }

    /// A source whose readiness gate never opens
    pub fn never_ready(width: u32, height: u32) -> Self {
        Self {
            ready: false,
            ..Self::new(width, height)
        }
    }

    /// Yield `frames` frames, then stop `handle` and never become ready again
    pub fn stopping_after(mut self, frames: usize, handle: StopHandle) -> Self {
        self.stop_after = Some((frames, handle));
        self
    }
}

impl FrameSource for FakeFrameSource {
    async fn ready(&mut self) {
        let calls = self.readies.get() + 1;
        self.readies.set(calls);

        let exhausted = match &self.stop_after {
            Some((limit, handle)) if calls > *limit => {
                handle.stop();
                true
            }
            _ => false,
        };

        if exhausted || !self.ready {
            std::future::pending::<()>().await;
        }
    }

    fn current_frame(&self) -> Option<&RgbaImage> {
        Some(&self.frame)
    }

    fn dimensions(&self) -> (u32, u32) {
        self.frame.dimensions()
    }

    fn release(&mut self) {
        self.releases.set(self.releases.get() + 1);
    }
}

/// Detector returning a fixed result, with call and dispose counters
pub struct FakeDetector {
    result: Result<Vec<LandmarkSet>, DetectorError>,
    stop_on_call: Option<StopHandle>,
    pub calls: Rc<Cell<usize>>,
    pub disposed: Rc<Cell<usize>>,
}

impl FakeDetector {
    pub fn ok(candidates: Vec<LandmarkSet>) -> Self {
        Self {
            result: Ok(candidates),
            stop_on_call: None,
            calls: Rc::new(Cell::new(0)),
            disposed: Rc::new(Cell::new(0)),
        }
    }

    pub fn failing(error: DetectorError) -> Self {
        Self {
            result: Err(error),
            ..Self::ok(Vec::new())
        }
    }

    /// Stop `handle` while the call is in flight
    pub fn stopping_on_call(mut self, handle: StopHandle) -> Self {
        self.stop_on_call = Some(handle);
        self
    }
}

impl PoseDetector for FakeDetector {
    async fn estimate(&mut self, _frame: &RgbaImage) -> Result<Vec<LandmarkSet>, DetectorError> {
        self.calls.set(self.calls.get() + 1);
        if let Some(handle) = &self.stop_on_call {
            handle.stop();
        }
        tokio::task::yield_now().await;
        self.result.clone()
    }

    fn dispose(&mut self) {
        self.disposed.set(self.disposed.get() + 1);
    }
}

/// A front-facing standing subject on a 400x800 surface, every landmark at
/// confidence 0.9. Left landmarks sit at smaller x than their right partners.
pub fn sample_landmarks() -> LandmarkSet {
    const POINTS: [(f32, f32); 33] = [
        (200.0, 100.0), // nose
        (190.0, 90.0),
        (185.0, 90.0),
        (180.0, 90.0),
        (210.0, 90.0),
        (215.0, 90.0),
        (220.0, 90.0),
        (170.0, 100.0), // ears
        (230.0, 100.0),
        (190.0, 120.0), // mouth
        (210.0, 120.0),
        (140.0, 180.0), // shoulders
        (260.0, 184.0),
        (120.0, 280.0), // elbows
        (280.0, 280.0),
        (110.0, 370.0), // wrists
        (290.0, 370.0),
        (105.0, 390.0), // pinkies
        (295.0, 390.0),
        (108.0, 395.0), // index fingers
        (292.0, 395.0),
        (115.0, 385.0), // thumbs
        (285.0, 385.0),
        (160.0, 400.0), // hips
        (240.0, 396.0),
        (162.0, 560.0), // knees
        (238.0, 562.0),
        (165.0, 720.0), // ankles
        (235.0, 720.0),
        (168.0, 740.0), // heels
        (232.0, 740.0),
        (150.0, 750.0), // foot indices
        (250.0, 750.0),
    ];

    let triples: Vec<(f32, f32, f32)> = POINTS.iter().map(|&(x, y)| (x, y, 0.9)).collect();
    LandmarkSet::from_triples(&triples).expect("sample landmarks cover the schema")
}

/// Copy of `set` with one landmark's confidence replaced
pub fn with_confidence(set: &LandmarkSet, id: usize, confidence: f32) -> LandmarkSet {
    let triples: Vec<(f32, f32, f32)> = set
        .iter()
        .map(|lm| {
            let c = if lm.id == id { confidence } else { lm.confidence };
            (lm.x, lm.y, c)
        })
        .collect();
    LandmarkSet::from_triples(&triples).expect("set keeps its schema")
}
