//! Inbound gateway callback: parameter collection, lookup, verification.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::canonical::canonical_query_unsigned;
use crate::signature::{hmac_sha512_hex, signature_eq};
use crate::SECURE_HASH_PARAM;

/// Parameters received on the gateway's return/IPN callback.
///
/// Inbound data is untrusted: duplicates overwrite, lookups never fail, and
/// nothing is interpreted until the signature checks out.
#[derive(Debug, Default, Clone)]
pub struct ResponseParams {
    params: BTreeMap<String, String>,
}

impl ResponseParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a callback parameter. Empty values are skipped, matching the
    /// outbound side so both canonical strings see the same entries.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        self.params.insert(key.into(), value);
    }

    /// Value for `key`, or the empty string when absent.
    pub fn get(&self, key: &str) -> &str {
        self.params.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// The canonical query string the gateway signed: every parameter
    /// except `vnp_SecureHash` and `vnp_SecureHashType`.
    pub fn canonical_query(&self) -> String {
        canonical_query_unsigned(&self.params)
    }

    /// Verify `received_hash` against the signature recomputed from the
    /// non-signature parameters.
    ///
    /// A mismatch is a normal negative outcome (tampered or forged
    /// callback), reported as `false`, never as an error. Comparison is
    /// case-insensitive and constant-time. The caller must treat `false`
    /// as "reject the callback, do not mark the order paid".
    pub fn verify_signature(&self, received_hash: &str, secret: &str) -> bool {
        let canonical = self.canonical_query();
        let expected = hmac_sha512_hex(secret, &canonical);
        let ok = signature_eq(&expected, received_hash);
        if !ok {
            tracing::warn!("signature mismatch on callback for txn_ref={}", self.txn_ref());
        }
        ok
    }

    // Typed views over the fields callback handlers probe. All fall back to
    // the empty string like `get`.

    /// The signature carried by the callback itself.
    pub fn secure_hash(&self) -> &str {
        self.get(SECURE_HASH_PARAM)
    }

    /// Merchant transaction reference (`vnp_TxnRef`).
    pub fn txn_ref(&self) -> &str {
        self.get("vnp_TxnRef")
    }

    /// Raw gateway amount (`vnp_Amount`): the order amount multiplied by 100.
    pub fn amount(&self) -> Option<i64> {
        self.get("vnp_Amount").parse().ok()
    }

    /// Gateway response code (`vnp_ResponseCode`); `"00"` means success.
    pub fn response_code(&self) -> &str {
        self.get("vnp_ResponseCode")
    }

    /// Transaction status at the gateway (`vnp_TransactionStatus`).
    pub fn transaction_status(&self) -> &str {
        self.get("vnp_TransactionStatus")
    }

    /// Gateway-side transaction number (`vnp_TransactionNo`).
    pub fn transaction_no(&self) -> &str {
        self.get("vnp_TransactionNo")
    }

    /// Paying bank code (`vnp_BankCode`).
    pub fn bank_code(&self) -> &str {
        self.get("vnp_BankCode")
    }

    /// Order description echoed back by the gateway (`vnp_OrderInfo`).
    pub fn order_info(&self) -> &str {
        self.get("vnp_OrderInfo")
    }

    /// Whether the gateway reported the payment as successful.
    ///
    /// Meaningful only after [`verify_signature`](Self::verify_signature)
    /// returned `true`.
    pub fn is_success(&self) -> bool {
        self.response_code() == "00"
    }
}

impl FromStr for ResponseParams {
    type Err = serde_urlencoded::de::Error;

    /// Parse a raw callback query string (without the leading `?`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed: Vec<(String, String)> = serde_urlencoded::from_str(s)?;
        let mut out = Self::new();
        for (k, v) in parsed {
            out.insert(k, v);
        }
        Ok(out)
    }
}
