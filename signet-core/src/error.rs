//! Error types for credential construction.

use thiserror::Error;

/// Boxed error returned by a payload's fallible constructor.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for credential builder operations.
///
/// Setters and `build` are total; the only failure is a payload that
/// cannot be constructed when a builder is created with
/// [`CredentialBuilder::try_new`](crate::CredentialBuilder::try_new).
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The payload's constructor failed, so no builder was created.
    #[error("payload construction failed for {payload}: {source}")]
    PayloadConstruction {
        payload: &'static str,
        #[source]
        source: BoxError,
    },
}

impl CredentialError {
    /// Wrap a payload constructor failure for payload type `P`.
    pub fn payload<P>(source: impl Into<BoxError>) -> Self {
        Self::PayloadConstruction {
            payload: std::any::type_name::<P>(),
            source: source.into(),
        }
    }
}
