//! # Signet Core
//!
//! Generic builder for sign-in credential sets.
//!
//! This crate provides:
//! - [`CredentialBuilder`] - fluent builder generic over a payload type
//! - [`CredentialSet`] - the built bundle of optional fields plus one payload
//! - [`Secret`] - redacted wrapper for passwords and provider tokens
//! - Stock payloads in [`payload`] for session, API key and API host providers
//!
//! ## Quick Start
//!
//! ```rust
//! use signet_core::{CredentialBuilder, SignInFields};
//! use signet_core::payload::ApiKeyPayload;
//!
//! let facebook = CredentialBuilder::<ApiKeyPayload>::new()
//!     .with_facebook_token("TOKEN123")
//!     .build();
//!
//! assert_eq!(facebook.facebook_token().unwrap().expose(), "TOKEN123");
//! assert_eq!(facebook.payload().api_key(), "some api key");
//! ```

pub mod builder;
pub mod credential;
pub mod error;
pub mod payload;
pub mod secret;

// Re-export commonly used types at crate root
pub use builder::CredentialBuilder;

pub use credential::{
    CredentialSet,
    SignInFields,
    SignInMethod,
};

pub use error::{BoxError, CredentialError};

pub use payload::{
    ApiHostPayload,
    ApiKeyPayload,
    TryPayload,
};

#[cfg(feature = "session")]
pub use payload::SessionPayload;

pub use secret::Secret;
