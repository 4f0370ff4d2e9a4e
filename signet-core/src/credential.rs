//! Finalized sign-in credential bundles.
//!
//! This module defines:
//! - [`CredentialSet`] - the optional sign-in fields plus one payload instance
//! - [`SignInFields`] - read-only access to the four sign-in fields
//! - [`SignInMethod`] - which sign-in methods a set carries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::secret::Secret;

/// Read-only view over the optional sign-in fields.
pub trait SignInFields {
    fn email(&self) -> Option<&str>;
    fn password(&self) -> Option<&Secret>;
    fn facebook_token(&self) -> Option<&Secret>;
    fn google_token(&self) -> Option<&Secret>;
}

/// A sign-in method whose fields are present on a credential set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignInMethod {
    /// Both email and password are present.
    EmailPassword,

    /// A Facebook token is present.
    Facebook,

    /// A Google token is present.
    Google,
}

impl SignInMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmailPassword => "email_password",
            Self::Facebook => "facebook",
            Self::Google => "google",
        }
    }
}

impl fmt::Display for SignInMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accumulated sign-in fields and the payload for provider `P`.
///
/// Produced by [`CredentialBuilder::build`](crate::CredentialBuilder::build).
/// The payload is created once, together with the set, and is only handed
/// out by shared reference or by consuming the set.
#[derive(Debug, Clone, Serialize)]
pub struct CredentialSet<P> {
    pub(crate) email: Option<String>,
    pub(crate) password: Option<Secret>,
    pub(crate) facebook_token: Option<Secret>,
    pub(crate) google_token: Option<Secret>,
    pub(crate) created_at: DateTime<Utc>,
    payload: P,
}

impl<P> CredentialSet<P> {
    /// Create an empty set around `payload`, stamped with the current time.
    pub(crate) fn new(payload: P) -> Self {
        Self {
            email: None,
            password: None,
            facebook_token: None,
            google_token: None,
            created_at: Utc::now(),
            payload,
        }
    }

    /// The provider payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Consume the set and return its payload.
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// When the set (and its payload) was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sign-in methods whose fields are all present, in a fixed order.
    pub fn methods(&self) -> Vec<SignInMethod> {
        let mut methods = Vec::new();
        if self.email.is_some() && self.password.is_some() {
            methods.push(SignInMethod::EmailPassword);
        }
        if self.facebook_token.is_some() {
            methods.push(SignInMethod::Facebook);
        }
        if self.google_token.is_some() {
            methods.push(SignInMethod::Google);
        }
        methods
    }

    /// Whether no sign-in field has been set.
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.password.is_none()
            && self.facebook_token.is_none()
            && self.google_token.is_none()
    }
}

impl<P> SignInFields for CredentialSet<P> {
    fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    fn password(&self) -> Option<&Secret> {
        self.password.as_ref()
    }

    fn facebook_token(&self) -> Option<&Secret> {
        self.facebook_token.as_ref()
    }

    fn google_token(&self) -> Option<&Secret> {
        self.google_token.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_set_is_empty() {
        let set = CredentialSet::new(());
        assert!(set.is_empty());
        assert!(set.methods().is_empty());
        assert!(set.email().is_none());
        assert!(set.password().is_none());
    }

    #[test]
    fn test_email_without_password_is_not_a_method() {
        let mut set = CredentialSet::new(());
        set.email = Some("test@host.com".to_string());
        assert!(!set.is_empty());
        assert!(set.methods().is_empty());

        set.password = Some(Secret::new("test123"));
        assert_eq!(set.methods(), vec![SignInMethod::EmailPassword]);
    }

    #[test]
    fn test_methods_order() {
        let mut set = CredentialSet::new(());
        set.google_token = Some(Secret::new("g"));
        set.facebook_token = Some(Secret::new("f"));
        assert_eq!(set.methods(), vec![SignInMethod::Facebook, SignInMethod::Google]);
    }

    #[test]
    fn test_sign_in_method_serde() {
        let json = serde_json::to_string(&SignInMethod::EmailPassword).unwrap();
        assert_eq!(json, "\"email_password\"");
        assert_eq!(SignInMethod::Google.to_string(), "google");
    }
}
