//! Tiered render cascade.
//!
//! A render cycle is a linear state machine: empty check, a standard-profile
//! attempt, an optional robust-profile retry for layout-class failures, then a
//! placeholder fallback carrying a classified failure. Service failures never
//! escape as errors; every cycle settles into a [`RenderResult`].

use crate::catalog::PLACEHOLDER_DIAGRAM;
use crate::error::ServiceError;
use crate::profile::LayoutProfile;
use crate::sanitize::sanitize;
use crate::service::{RenderService, Visual};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Failure signatures that identify a layout-pathing fault rather than bad
/// markup. Only these are worth a costly retry with conservative geometry.
const LAYOUT_ERROR_SIGNATURES: [&str; 4] =
    ["suitable point", "reading from undefined", "layout", "d3"];

fn is_layout_failure(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    LAYOUT_ERROR_SIGNATURES.iter().any(|sig| lower.contains(sig))
}

/// Classification of a terminal render failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// The markup is not valid diagram grammar.
    Syntax,
    /// The layout engine could not place an element even under the robust profile.
    ComplexityLimit,
    Unknown,
}

fn classify_failure(origin: &ServiceError) -> (FailureKind, String) {
    let message = origin.message();
    if message.to_ascii_lowercase().contains("parse error") {
        (FailureKind::Syntax, "Syntax Error".to_string())
    } else if message.contains("suitable point") {
        (FailureKind::ComplexityLimit, "Complexity Limit".to_string())
    } else {
        let first = origin.first_line();
        let user_message = if first.is_empty() {
            "Unable to render diagram.".to_string()
        } else {
            first.to_string()
        };
        (FailureKind::Unknown, user_message)
    }
}

/// Outcome of one render cycle.
///
/// A tagged result rather than an error chain: the "raw failures never reach
/// the consumer" contract is enforced by the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderResult {
    /// The input rendered. `warning` is advisory only; the cascade itself never
    /// sets one, embedders may attach their own.
    Success {
        visual: Visual,
        warning: Option<String>,
    },
    /// Whitespace-only input. A valid state, not a failure.
    Empty,
    /// The input could not be rendered; the placeholder diagram stands in,
    /// alongside a classified, human-readable failure.
    Placeholder {
        visual: Visual,
        kind: FailureKind,
        message: String,
    },
    /// The placeholder itself failed to render: the service is broken, not the
    /// input. No visual can be shown. Never retried.
    Critical { message: String },
}

impl RenderResult {
    pub fn visual(&self) -> Option<&Visual> {
        match self {
            Self::Success { visual, .. } | Self::Placeholder { visual, .. } => Some(visual),
            Self::Empty | Self::Critical { .. } => None,
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Placeholder { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Generation id distinguishing one render cycle from a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionToken(u64);

/// Drives the three-tier cascade against a [`RenderService`], delivering
/// results in last-call-wins order.
///
/// Every [`render`](Self::render) call supersedes any cycle still in flight:
/// the superseded cycle's outcome is discarded at commit time, never delivered.
/// In-flight service calls are not aborted; the external service may not
/// support cancellation.
pub struct RenderPipeline<S> {
    service: S,
    standard: LayoutProfile,
    robust: LayoutProfile,
    epoch: AtomicU64,
    committed: Mutex<Option<(SessionToken, RenderResult)>>,
}

impl<S: RenderService> RenderPipeline<S> {
    pub fn new(service: S) -> Self {
        Self::with_profiles(service, LayoutProfile::standard(), LayoutProfile::robust())
    }

    pub fn with_profiles(service: S, standard: LayoutProfile, robust: LayoutProfile) -> Self {
        Self {
            service,
            standard,
            robust,
            epoch: AtomicU64::new(0),
            committed: Mutex::new(None),
        }
    }

    /// Runs one render cycle.
    ///
    /// Returns `Some(result)` if this cycle was committed, `None` if a newer
    /// [`render`](Self::render) call superseded it while it was in flight.
    /// Never returns a raw service failure.
    pub async fn render(&self, markup: &str) -> Option<RenderResult> {
        let token = self.begin_session();
        let result = self.run_cascade(markup).await;
        self.commit(token, result)
    }

    /// The most recently committed result, if any cycle has completed yet.
    pub fn current(&self) -> Option<RenderResult> {
        self.slot().as_ref().map(|(_, result)| result.clone())
    }

    fn begin_session(&self) -> SessionToken {
        SessionToken(self.epoch.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Commits under the result lock only if `token` is still the active
    /// session; a stale cycle commits nothing.
    fn commit(&self, token: SessionToken, result: RenderResult) -> Option<RenderResult> {
        let mut slot = self.slot();
        let active = SessionToken(self.epoch.load(Ordering::SeqCst));
        if token != active {
            tracing::debug!(?token, ?active, "discarding superseded render cycle");
            return None;
        }
        *slot = Some((token, result.clone()));
        Some(result)
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<(SessionToken, RenderResult)>> {
        self.committed
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    async fn run_cascade(&self, markup: &str) -> RenderResult {
        let clean = sanitize(markup);
        if clean.trim().is_empty() {
            return RenderResult::Empty;
        }

        let origin = match self.attempt("render", &clean, &self.standard).await {
            Ok(visual) => {
                return RenderResult::Success {
                    visual,
                    warning: None,
                };
            }
            Err(err) => err,
        };
        tracing::warn!(error = %origin, "standard-profile render failed");

        if is_layout_failure(origin.message()) {
            tracing::debug!("retrying with robust layout profile");
            match self.attempt("retry", &clean, &self.robust).await {
                Ok(visual) => {
                    // The retry is invisible to the caller beyond the result.
                    return RenderResult::Success {
                        visual,
                        warning: None,
                    };
                }
                Err(retry_err) => {
                    tracing::warn!(error = %retry_err, "robust-profile retry failed");
                }
            }
        }

        self.placeholder_fallback(&origin).await
    }

    async fn attempt(
        &self,
        stage: &str,
        markup: &str,
        profile: &LayoutProfile,
    ) -> Result<Visual, ServiceError> {
        let id = attempt_id(stage);
        self.service.render_once(&id, markup, profile).await
    }

    /// Tier 3: render the fixed placeholder with the standard profile and
    /// classify the originating (tier-1) failure. A placeholder failure is
    /// fatal for the cycle; the cascade never loops.
    async fn placeholder_fallback(&self, origin: &ServiceError) -> RenderResult {
        match self
            .attempt("fallback", PLACEHOLDER_DIAGRAM, &self.standard)
            .await
        {
            Ok(visual) => {
                let (kind, message) = classify_failure(origin);
                RenderResult::Placeholder {
                    visual,
                    kind,
                    message,
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "placeholder diagram failed to render");
                RenderResult::Critical {
                    message: err.message().to_string(),
                }
            }
        }
    }
}

fn attempt_id(stage: &str) -> String {
    format!("selkie-{stage}-{}", uuid::Uuid::new_v4().simple())
}
