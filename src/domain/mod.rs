//! Pure domain types with minimal dependencies
//!
//! This module contains the landmark model, the geometry kernel and the
//! measurement types. Nothing here touches a drawing surface or a runtime.

pub mod geometry;
pub mod landmark;
pub mod skeleton;
pub mod tilt;

pub use geometry::*;
pub use landmark::*;
pub use skeleton::*;
pub use tilt::*;
