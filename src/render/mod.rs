//! Overlay rendering module
//!
//! This module contains:
//! - Geometry constants and arc math shared by every overlay
//! - The drawing surface trait and its tiny-skia implementation
//! - Overlay drawing for keypoints, skeleton edges, angles and reference lines

pub mod geometry;
pub mod overlay;
pub mod surface;

pub use overlay::OverlayStyle;
pub use surface::{PixmapSurface, Surface};
