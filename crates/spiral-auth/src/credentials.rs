//! API credentials and the HMAC-SHA256 request signer
//!
//! # Security
//!
//! The API secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via the Debug impl
//! - Provides explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox};
use sha2::Sha256;
use std::collections::BTreeMap;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// API credentials for authenticated requests
///
/// The secret is automatically zeroized when the Credentials are dropped.
/// Credentials are immutable for the lifetime of a client instance.
pub struct Credentials {
    /// API key (public identifier)
    api_key: String,
    /// API secret (symmetric signing key, zeroized on drop)
    api_secret: SecretBox<String>,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretBox::new(Box::new(api_secret.into())),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `SPIRAL_API_KEY` and `SPIRAL_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var("SPIRAL_API_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("SPIRAL_API_KEY".to_string()))?;
        let api_secret = std::env::var("SPIRAL_API_SECRET")
            .map_err(|_| AuthError::EnvVarNotSet("SPIRAL_API_SECRET".to_string()))?;

        Ok(Self::new(api_key, api_secret))
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Check that both key and secret are non-empty
    ///
    /// Authenticated calls must fail fast with a configuration error when
    /// either half is missing, before any network I/O happens.
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.expose_secret().is_empty()
    }

    /// Sign a request for Spiral's API
    ///
    /// The canonical message is `verb + path?query + expires + body` with no
    /// separators, where the query is the sorted URL encoding of `params`
    /// (replacing any query already present on `path`, and omitted entirely
    /// when `params` is empty). The signature is the lowercase hex-encoded
    /// HMAC-SHA256 of that message keyed by the API secret.
    ///
    /// Read-style calls sign path+query with an empty body; POST-style calls
    /// sign the bare path with the JSON body string.
    ///
    /// Pure function: identical arguments always yield an identical
    /// signature, which is what makes signing unit-testable.
    pub fn sign(
        &self,
        verb: &str,
        path: &str,
        params: &BTreeMap<String, String>,
        expires: &str,
        body: &str,
    ) -> String {
        let canonical = canonical_path(path, params);
        let message = format!("{verb}{canonical}{expires}{body}");

        let mut mac = HmacSha256::new_from_slice(self.api_secret.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(message.as_bytes());

        hex::encode(mac.finalize().into_bytes())
    }
}

/// Attach the sorted query encoding of `params` to `path`
///
/// A `BTreeMap` iterates its keys in sorted order, so the encoded query is
/// deterministic regardless of how callers assembled the parameters.
fn canonical_path(path: &str, params: &BTreeMap<String, String>) -> String {
    let base = path.split('?').next().unwrap_or(path);
    if params.is_empty() {
        return base.to_string();
    }

    let query =
        serde_urlencoded::to_string(params).expect("string pairs always encode as a query");
    format!("{base}?{query}")
}

impl Clone for Credentials {
    /// Clone credentials (creates a new SecretBox with the same content)
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretBox::new(Box::new(self.api_secret.expose_secret().clone())),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", &self.api_key[..8.min(self.api_key.len())]),
            )
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}
