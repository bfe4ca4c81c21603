use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    /// The reducer has no branch for this action. A programming defect, not a
    /// runtime condition: nothing was mutated and nobody was notified.
    #[error("unsupported action kind: {kind}")]
    UnsupportedActionKind { kind: String },
}

impl ControlError {
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::UnsupportedActionKind { kind: kind.into() }
    }
}
