pub type Result<T> = std::result::Result<T, ServiceError>;

/// Failure reported by an external collaborator (rendering or generative service).
///
/// Collaborators fail with free-form text; the cascade classifies that text rather
/// than the collaborator's own error type, so the message is all we keep.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ServiceError {
    message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the failure text, as shown to users for unclassified failures.
    pub fn first_line(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}
