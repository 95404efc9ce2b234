#![forbid(unsafe_code)]

//! Pan/zoom viewport over an opaque rendered visual.
//!
//! The viewport is a synchronous state machine driven by pointer and wheel
//! events. It knows nothing about diagram semantics; it only maintains a 2D
//! transform (scale + translation) for whatever child it wraps.

pub mod geom;
pub mod viewport;

pub use viewport::{MAX_SCALE, MIN_SCALE, PointerButton, Viewport};
