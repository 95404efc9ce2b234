#![forbid(unsafe_code)]

//! `selkie` turns unreliable, often machine-generated diagram markup into
//! something a user can always look at: repaired markup, a render cascade that
//! falls back to a guaranteed-renderable placeholder instead of a blank error
//! screen, and a pan/zoom viewport for navigating the result.
//!
//! The rendering backend and the generative-language backend are collaborator
//! traits ([`RenderService`], [`DiagramGenerator`]); this crate contains no
//! markup grammar or layout engine of its own.

pub use selkie_core::{
    DiagramGenerator, EdgeRouting, Example, FailureKind, LayoutProfile, PLACEHOLDER_DIAGRAM,
    RenderPipeline, RenderResult, RenderService, Result, ServiceError, SessionToken, Visual,
    builtin_examples,
};
pub use selkie_core::sanitize::{sanitize, strip_code_fences};
pub use selkie_view::{MAX_SCALE, MIN_SCALE, PointerButton, Viewport, geom};

/// Converts an arbitrary string into a conservative render-id token suitable
/// for embedding multiple visuals in the same document tree.
///
/// Rendering services commonly use the id as a prefix for internal element ids;
/// inlining two artifacts with the same id makes those internals collide.
///
/// This helper:
/// - trims whitespace
/// - replaces unsupported characters with `-`
/// - ensures the id starts with an ASCII letter by prefixing `v-` when needed
pub fn sanitize_render_id(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "v-untitled".to_string();
    }

    let mut out = String::with_capacity(raw.len() + 4);
    for ch in raw.chars() {
        let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':' || ch == '.';
        out.push(if ok { ch } else { '-' });
    }

    let starts_ok = out.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
    if !starts_ok {
        out.insert_str(0, "v-");
    }

    while out.contains("--") {
        out = out.replace("--", "-");
    }
    let out = out.trim_matches('-');
    if out.is_empty() || out == "v" {
        return "v-untitled".to_string();
    }
    out.to_string()
}

/// Prepares raw generative output for the cascade: strips markdown code fences,
/// then repairs label quoting.
pub fn prepare_generated(text: &str) -> String {
    sanitize(&strip_code_fences(text))
}

/// Convenience bundle wrapping a [`RenderPipeline`] with the standard/robust
/// profile pair.
///
/// This is intended for UI integrations where wiring profiles and pipeline
/// separately is noisy. It stays runtime-agnostic: the only suspension points
/// are the service's own render calls.
pub struct ResilientRenderer<S> {
    pipeline: RenderPipeline<S>,
}

impl<S: RenderService> ResilientRenderer<S> {
    pub fn new(service: S) -> Self {
        Self {
            pipeline: RenderPipeline::new(service),
        }
    }

    pub fn with_profiles(service: S, standard: LayoutProfile, robust: LayoutProfile) -> Self {
        Self {
            pipeline: RenderPipeline::with_profiles(service, standard, robust),
        }
    }

    /// See [`RenderPipeline::render`]. Last-call-wins: `None` means this call
    /// was superseded by a newer one.
    pub async fn render(&self, markup: &str) -> Option<RenderResult> {
        self.pipeline.render(markup).await
    }

    /// Renders raw generative output, applying [`prepare_generated`] first.
    pub async fn render_generated(&self, text: &str) -> Option<RenderResult> {
        self.pipeline.render(&prepare_generated(text)).await
    }

    pub fn current(&self) -> Option<RenderResult> {
        self.pipeline.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    struct EchoService;

    impl RenderService for EchoService {
        fn render_once(
            &self,
            _id: &str,
            markup: &str,
            _profile: &LayoutProfile,
        ) -> impl Future<Output = std::result::Result<Visual, ServiceError>> {
            let visual = Visual::new(format!("<svg>{markup}</svg>"));
            async move { Ok(visual) }
        }
    }

    #[test]
    fn sanitize_render_id_produces_conservative_tokens() {
        assert_eq!(sanitize_render_id("My Diagram #3"), "My-Diagram-3");
        assert_eq!(sanitize_render_id("  "), "v-untitled");
        assert_eq!(sanitize_render_id("42nd"), "v-42nd");
        assert_eq!(sanitize_render_id("---"), "v-untitled");
    }

    #[test]
    fn prepare_generated_strips_fences_then_repairs_quotes() {
        let raw = "```mermaid\ngraph TD\n  A[Say \"hi\"] --> B\n```";
        assert_eq!(prepare_generated(raw), "graph TD\n  A[Say 'hi'] --> B");
    }

    #[test]
    fn renderer_bundle_renders_generated_output_end_to_end() {
        let renderer = ResilientRenderer::new(EchoService);
        let result =
            block_on(renderer.render_generated("```mermaid\ngraph TD\n  A --> B\n```"))
                .expect("committed");
        assert!(result.is_success());
        assert_eq!(
            result.visual().map(Visual::as_str),
            Some("<svg>graph TD\n  A --> B</svg>")
        );
        assert_eq!(renderer.current(), Some(result));
    }
}
