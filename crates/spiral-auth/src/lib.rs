//! Credentials and request signing for the Spiral exchange API
//!
//! Spiral authenticates REST calls with three headers: the API key, an
//! expiry timestamp a few seconds in the future, and an HMAC-SHA256
//! signature over the request. This crate holds the credentials (secret
//! zeroized on drop) and computes the signature.
//!
//! # Signature scheme
//!
//! The canonical message is the concatenation, without separators, of the
//! HTTP verb, the resource path with its sorted query string, the expiry
//! timestamp, and the request body. The signature is the lowercase
//! hex-encoded HMAC-SHA256 of that message keyed by the API secret.
//!
//! Signing is a pure function of its inputs: the same verb, path, params,
//! expiry, and body always produce the same signature.

pub mod credentials;
pub mod error;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
