//! Canonical query-string construction, shared by signing and verification.
//!
//! The gateway computes its own signature over a query string with keys in
//! ordinal (byte-value) order and `application/x-www-form-urlencoded`
//! encoding — space as `+`, reserved characters percent-encoded. Both sides
//! of the flow must serialize identically or signatures never match, so
//! there is exactly one implementation of that serialization, here.

use std::collections::BTreeMap;

use crate::{SECURE_HASH_PARAM, SECURE_HASH_TYPE_PARAM};

/// Encode all parameters as `key=value` pairs joined with `&`.
///
/// `BTreeMap` iteration yields keys in ascending byte order of their UTF-8
/// encoding — ordinal comparison, never locale collation.
pub fn canonical_query(params: &BTreeMap<String, String>) -> String {
    encode_pairs(params.iter())
}

/// Like [`canonical_query`], minus the signature-carrying keys.
///
/// Inbound callbacks arrive with `vnp_SecureHash` (and sometimes
/// `vnp_SecureHashType`) appended; neither was part of the signed payload.
pub fn canonical_query_unsigned(params: &BTreeMap<String, String>) -> String {
    encode_pairs(params.iter().filter(|(k, _)| !is_signature_param(k)))
}

fn is_signature_param(key: &str) -> bool {
    key == SECURE_HASH_PARAM || key == SECURE_HASH_TYPE_PARAM
}

fn encode_pairs<'a>(pairs: impl Iterator<Item = (&'a String, &'a String)>) -> String {
    let mut ser = form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs {
        ser.append_pair(k, v);
    }
    ser.finish()
}
