//! Provider payloads attached to a credential set.
//!
//! A payload is provider-specific data the builder carries but never
//! interprets. Any `Default` type qualifies for
//! [`CredentialBuilder::new`](crate::CredentialBuilder::new); types whose
//! construction can fail implement [`TryPayload`] and go through
//! [`CredentialBuilder::try_new`](crate::CredentialBuilder::try_new).
//!
//! Stock payloads:
//! - [`SessionPayload`] - an HTTP client handle (with the `session` feature)
//! - [`ApiKeyPayload`] - a static API key
//! - [`ApiHostPayload`] - a static API key plus a host

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use url::Url;

/// API key used by the stock key-bearing payloads.
pub const DEFAULT_API_KEY: &str = "some api key";

/// Host used by [`ApiHostPayload`].
pub const DEFAULT_HOST: &str = "https://google.com";

/// Fallible no-argument construction.
///
/// # Example
///
/// ```
/// use signet_core::payload::TryPayload;
///
/// #[derive(Debug)]
/// struct Region(String);
///
/// impl TryPayload for Region {
///     type Error = std::env::VarError;
///
///     fn try_construct() -> Result<Self, Self::Error> {
///         std::env::var("SIGNET_REGION").map(Region)
///     }
/// }
/// ```
pub trait TryPayload: Sized {
    /// Error returned when the payload cannot be built.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the payload with no arguments.
    fn try_construct() -> Result<Self, Self::Error>;
}

/// Payload holding a shared HTTP client.
#[cfg(feature = "session")]
#[derive(Debug, Clone, Default)]
pub struct SessionPayload {
    client: reqwest::Client,
}

#[cfg(feature = "session")]
impl SessionPayload {
    /// The HTTP client handle.
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[cfg(feature = "session")]
impl TryPayload for SessionPayload {
    type Error = reqwest::Error;

    fn try_construct() -> Result<Self, Self::Error> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }
}

/// Payload holding a static API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyPayload {
    api_key: String,
}

impl ApiKeyPayload {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl Default for ApiKeyPayload {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
        }
    }
}

impl TryPayload for ApiKeyPayload {
    type Error = Infallible;

    fn try_construct() -> Result<Self, Self::Error> {
        Ok(Self::default())
    }
}

/// Payload holding a static API key and the host it is used against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiHostPayload {
    api_key: String,
    host: String,
}

impl ApiHostPayload {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Parse the host as a URL.
    pub fn host_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.host)
    }
}

impl Default for ApiHostPayload {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            host: DEFAULT_HOST.to_string(),
        }
    }
}

impl TryPayload for ApiHostPayload {
    type Error = Infallible;

    fn try_construct() -> Result<Self, Self::Error> {
        Ok(Self::default())
    }
}
