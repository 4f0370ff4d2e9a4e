//! Fluent builder for [`CredentialSet`].
//!
//! One generic builder serves every payload type: the fluent setters are
//! written once, while the built set keeps the concrete payload type.
//!
//! # Example
//!
//! ```
//! use signet_core::{CredentialBuilder, SignInFields};
//! use signet_core::payload::ApiHostPayload;
//!
//! let google = CredentialBuilder::<ApiHostPayload>::new()
//!     .with_google_token("TOKEN123")
//!     .build();
//!
//! assert_eq!(google.google_token().unwrap().expose(), "TOKEN123");
//! assert_eq!(google.payload().host(), "https://google.com");
//! assert!(google.email().is_none());
//! ```

use tracing::debug;

use crate::credential::CredentialSet;
use crate::error::CredentialError;
use crate::payload::TryPayload;
use crate::secret::Secret;

/// Accumulates optional sign-in fields for payload type `P`.
///
/// Setters take and return the builder by value and the last write to a
/// field wins. [`build`](Self::build) consumes the builder, so the returned
/// set is a snapshot that later code cannot mutate through the builder.
/// When `P: Clone` the builder can be cloned to branch from an intermediate
/// state.
#[derive(Debug, Clone)]
pub struct CredentialBuilder<P> {
    inner: CredentialSet<P>,
}

impl<P: Default> CredentialBuilder<P> {
    /// Create a builder, default-constructing the payload.
    pub fn new() -> Self {
        debug!(payload = std::any::type_name::<P>(), "creating credential builder");
        Self::with_payload(P::default())
    }
}

impl<P: Default> Default for CredentialBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: TryPayload> CredentialBuilder<P> {
    /// Create a builder with a fallibly constructed payload.
    ///
    /// Returns [`CredentialError::PayloadConstruction`] and no builder if
    /// the payload cannot be built.
    pub fn try_new() -> Result<Self, CredentialError> {
        let payload = P::try_construct().map_err(|e| {
            debug!(payload = std::any::type_name::<P>(), error = %e, "payload construction failed");
            CredentialError::payload::<P>(e)
        })?;
        Ok(Self::with_payload(payload))
    }
}

impl<P> CredentialBuilder<P> {
    /// Create a builder around an already constructed payload.
    pub fn with_payload(payload: P) -> Self {
        Self {
            inner: CredentialSet::new(payload),
        }
    }

    /// Set the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.inner.email = Some(email.into());
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.inner.password = Some(Secret::new(password));
        self
    }

    /// Set the Facebook token.
    pub fn with_facebook_token(mut self, token: impl Into<String>) -> Self {
        self.inner.facebook_token = Some(Secret::new(token));
        self
    }

    /// Set the Google token.
    pub fn with_google_token(mut self, token: impl Into<String>) -> Self {
        self.inner.google_token = Some(Secret::new(token));
        self
    }

    /// Finish building and return the accumulated credential set.
    pub fn build(self) -> CredentialSet<P> {
        let set = self.inner;
        debug!(
            payload = std::any::type_name::<P>(),
            has_email = set.email.is_some(),
            has_password = set.password.is_some(),
            has_facebook_token = set.facebook_token.is_some(),
            has_google_token = set.google_token.is_some(),
            "built credential set"
        );
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credential::{SignInFields, SignInMethod};
    use crate::payload::{ApiHostPayload, ApiKeyPayload};

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Counter(u32);

    #[test]
    fn test_empty_build() {
        let set = CredentialBuilder::<ApiKeyPayload>::new().build();

        assert!(set.email().is_none());
        assert!(set.password().is_none());
        assert!(set.facebook_token().is_none());
        assert!(set.google_token().is_none());
        assert_eq!(set.payload(), &ApiKeyPayload::default());
    }

    #[test]
    fn test_email_password() {
        let set = CredentialBuilder::<Counter>::new()
            .with_email("test@host.com")
            .with_password("test123")
            .build();

        assert_eq!(set.email(), Some("test@host.com"));
        assert_eq!(set.password().map(Secret::expose), Some("test123"));
        assert!(set.facebook_token().is_none());
        assert!(set.google_token().is_none());
        assert_eq!(set.methods(), vec![SignInMethod::EmailPassword]);
    }

    #[test]
    fn test_last_write_wins() {
        let set = CredentialBuilder::<Counter>::new()
            .with_email("first@host.com")
            .with_google_token("g1")
            .with_email("second@host.com")
            .with_google_token("g2")
            .build();

        assert_eq!(set.email(), Some("second@host.com"));
        assert_eq!(set.google_token().map(Secret::expose), Some("g2"));
    }

    #[test]
    fn test_setter_order_is_irrelevant() {
        let a = CredentialBuilder::<Counter>::new()
            .with_email("e")
            .with_password("p")
            .with_facebook_token("f")
            .with_google_token("g")
            .build();
        let b = CredentialBuilder::<Counter>::new()
            .with_google_token("g")
            .with_facebook_token("f")
            .with_password("p")
            .with_email("e")
            .build();

        assert_eq!(a.email(), b.email());
        assert_eq!(a.password(), b.password());
        assert_eq!(a.facebook_token(), b.facebook_token());
        assert_eq!(a.google_token(), b.google_token());
    }

    #[test]
    fn test_empty_string_is_present() {
        let set = CredentialBuilder::<Counter>::new().with_email("").build();
        assert_eq!(set.email(), Some(""));
    }

    #[test]
    fn test_with_payload() {
        let set = CredentialBuilder::with_payload(Counter(7)).build();
        assert_eq!(set.into_payload(), Counter(7));
    }

    #[test]
    fn test_try_new_stock_payload() {
        let set = CredentialBuilder::<ApiHostPayload>::try_new()
            .unwrap()
            .with_google_token("TOKEN123")
            .build();

        assert_eq!(set.payload().host(), "https://google.com");
        assert_eq!(set.methods(), vec![SignInMethod::Google]);
    }

    #[test]
    fn test_branching_clone() {
        let base = CredentialBuilder::<Counter>::new().with_email("shared@host.com");

        let with_password = base.clone().with_password("pw").build();
        let with_token = base.with_facebook_token("fb").build();

        assert_eq!(with_password.email(), Some("shared@host.com"));
        assert!(with_password.facebook_token().is_none());
        assert_eq!(with_token.email(), Some("shared@host.com"));
        assert!(with_token.password().is_none());
    }
}
