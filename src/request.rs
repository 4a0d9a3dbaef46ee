//! Outbound payment request: parameter collection and signed-URL building.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::canonical::canonical_query;
use crate::signature::hmac_sha512_hex;
use crate::{Result, VnPayError, SECURE_HASH_PARAM};

/// Parameters for an outbound payment request.
///
/// Keys are unique: re-inserting an existing key fails with
/// [`VnPayError::DuplicateParam`] instead of silently overwriting, since a
/// duplicate on the signing path is a caller bug. Insertion order is
/// irrelevant; the set is always serialized in ordinal key order.
#[derive(Debug, Default, Clone)]
pub struct RequestParams {
    params: BTreeMap<String, String>,
}

/// A fully signed outbound request.
#[derive(Debug, Clone, Serialize)]
pub struct SignedRequest {
    /// The canonical query string the signature was computed over.
    pub canonical: String,
    /// Lowercase hex HMAC-SHA512 signature.
    pub signature: String,
    /// `<pay_url>?<canonical>&vnp_SecureHash=<signature>` — the redirect target.
    pub url: String,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an outbound parameter.
    ///
    /// Empty values are skipped silently — the gateway treats absent and
    /// empty optional fields the same, and they must not appear in the
    /// canonical string.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            return Ok(());
        }
        if self.params.contains_key(&key) {
            return Err(VnPayError::DuplicateParam(key));
        }
        self.params.insert(key, value);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// The canonical query string for the current parameter set.
    pub fn canonical_query(&self) -> String {
        canonical_query(&self.params)
    }

    /// Sign the parameter set and build the redirect URL.
    ///
    /// Pure and deterministic: same parameters and secret, same output.
    /// Timestamps, transaction refs and the like are ordinary parameters
    /// supplied by the caller.
    pub fn sign(&self, pay_url: &str, secret: &str) -> Result<SignedRequest> {
        if secret.is_empty() {
            return Err(VnPayError::EmptySecret);
        }
        let canonical = self.canonical_query();
        let signature = hmac_sha512_hex(secret, &canonical);
        tracing::debug!("signed request: {} params, {} canonical bytes", self.params.len(), canonical.len());
        let url = format!("{pay_url}?{canonical}&{SECURE_HASH_PARAM}={signature}");
        Ok(SignedRequest { canonical, signature, url })
    }

    /// Convenience for callers that only need the redirect URL.
    pub fn signed_url(&self, pay_url: &str, secret: &str) -> Result<String> {
        self.sign(pay_url, secret).map(|r| r.url)
    }
}
