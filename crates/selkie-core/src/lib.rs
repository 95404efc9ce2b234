#![forbid(unsafe_code)]

//! Resilient diagram rendering pipeline (headless).
//!
//! Design goals:
//! - repair the common quoting mistakes generative text leaves inside node labels
//!   before they ever reach a rendering backend
//! - never surface a raw backend failure: every render cycle settles into a
//!   classified [`RenderResult`]
//! - runtime-agnostic async APIs (no specific executor required)

pub mod cascade;
pub mod catalog;
pub mod error;
pub mod profile;
pub mod sanitize;
pub mod service;

pub use cascade::{FailureKind, RenderPipeline, RenderResult, SessionToken};
pub use catalog::{Example, PLACEHOLDER_DIAGRAM, builtin_examples};
pub use error::{Result, ServiceError};
pub use profile::{EdgeRouting, LayoutProfile};
pub use service::{DiagramGenerator, RenderService, Visual};
