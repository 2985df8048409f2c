//! Common error types used across the workspace.
//!
//! The pipeline itself is policy-driven: rejected events and empty decode
//! results are not errors. What remains is delivery — a publish sink can
//! fail, and adapters wrap their own failures into [`BridgeError::Sink`]
//! when crossing the port boundary.

/// Top-level error for pipeline operations.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The publish sink rejected or failed to deliver a publication.
    #[error("publish sink error")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl BridgeError {
    /// Wrap an adapter-level failure for propagation across port boundaries.
    #[must_use]
    pub fn sink(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Sink(Box::new(err))
    }
}
