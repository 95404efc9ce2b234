//! Traits for the external collaborators the pipeline drives.

use crate::error::ServiceError;
use crate::profile::LayoutProfile;
use serde::{Deserialize, Serialize};

/// Opaque rendered artifact (e.g. a serialized vector graphic).
///
/// The pipeline never interprets the contents; it only distinguishes the empty
/// visual from a rendered one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visual(String);

impl Visual {
    pub fn new(artifact: impl Into<String>) -> Self {
        Self(artifact.into())
    }

    /// The distinct empty state shown for whitespace-only input.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// External diagram rendering service.
///
/// One call renders one markup string under one layout profile, succeeding with
/// a [`Visual`] or failing with a textual message. `id` is a unique token per
/// attempt so artifacts embedded in the same document tree cannot collide.
pub trait RenderService {
    fn render_once(
        &self,
        id: &str,
        markup: &str,
        profile: &LayoutProfile,
    ) -> impl Future<Output = Result<Visual, ServiceError>>;
}

/// Generative-language collaborator producing diagram markup from prose and back.
///
/// Fully outside the rendering pipeline. The only coupling: generated markup
/// must pass through [`crate::sanitize::strip_code_fences`] and
/// [`crate::sanitize::sanitize`] before it reaches the cascade.
pub trait DiagramGenerator {
    fn markup_from_description(
        &self,
        description: &str,
    ) -> impl Future<Output = Result<String, ServiceError>>;

    fn describe_markup(&self, markup: &str) -> impl Future<Output = Result<String, ServiceError>>;
}
