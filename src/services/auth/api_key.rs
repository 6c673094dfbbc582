//! `Authorization: ApiKey <key>` parsing - core logic.
//!
//! This module does not know about middleware, state or responses. It reads one
//! header out of a `HeaderMap` and returns the key material, so the HTTP layer can
//! decide what a failure (or an empty key) means for the request.

use axum::http::{HeaderMap, header};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};

/// Scheme token expected in front of the key. Matched case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    NoAuthHeaderIncluded,
    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

/// Extract the API key from the `Authorization` header.
///
/// The value is split on every single space: the first token must be `ApiKey`
/// and the second token is returned as-is. Consequently
/// `"ApiKey   spaced-value"` yields `Ok("")` (the second token is empty); callers
/// that need a usable key must check for emptiness themselves.
///
/// An empty header value is treated like a missing header. Only the first
/// `Authorization` value is considered when several are present.
pub fn get_api_key(headers: &HeaderMap) -> Result<String, ApiKeyError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(ApiKeyError::NoAuthHeaderIncluded)?
        .to_str()
        .map_err(|_| ApiKeyError::MalformedAuthHeader)?;

    // An empty value counts as no header at all.
    if value.is_empty() {
        return Err(ApiKeyError::NoAuthHeaderIncluded);
    }

    let mut parts = value.split(' ');

    if parts.next() != Some(API_KEY_SCHEME) {
        return Err(ApiKeyError::MalformedAuthHeader);
    }

    parts
        .next()
        .map(str::to_owned)
        .ok_or(ApiKeyError::MalformedAuthHeader)
}

/// base64url(SHA-256(key)), unpadded.
///
/// This is the only representation of a key that may be logged or returned.
pub fn fingerprint(key: &str) -> String {
    URL_SAFE_NO_PAD.encode(Sha256::digest(key.as_bytes()))
}
