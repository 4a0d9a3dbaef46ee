//! Signed-request building and callback verification for the VNPay gateway.
//!
//! VNPay authenticates both directions of its redirect flow with an
//! HMAC-SHA512 signature over a canonical query string: parameters sorted in
//! ordinal byte order, form-urlencoded, joined with `&`. The outbound path
//! appends the signature as `vnp_SecureHash` to the redirect URL; the inbound
//! path recomputes the signature over the callback parameters (minus the
//! signature-carrying keys) and compares it against the one received.
//!
//! The crate is a pure library: no clock, no randomness, no I/O. Callers own
//! the HTTP routes, the pending-order persistence, and the shared secret.
//!
//! ```no_run
//! use vnpaykit::{GatewayConfig, RequestParams};
//!
//! let cfg = GatewayConfig {
//!     pay_url: "https://sandbox.vnpayment.vn/paymentv2/vpcpay.html".into(),
//!     hash_secret: std::env::var("VNPAY_HASH_SECRET").unwrap(),
//! };
//! cfg.validate().unwrap();
//!
//! let mut params = RequestParams::new();
//! params.insert("vnp_Version", "2.1.0").unwrap();
//! params.insert("vnp_Command", "pay").unwrap();
//! params.insert("vnp_Amount", "1000000").unwrap();
//! let redirect = params.signed_url(&cfg.pay_url, &cfg.hash_secret).unwrap();
//! ```

use thiserror::Error;

pub mod canonical;
pub mod config;
pub mod request;
pub mod response;
pub mod signature;

pub use config::{ConfigError, GatewayConfig};
pub use request::{RequestParams, SignedRequest};
pub use response::ResponseParams;

/// Query parameter carrying the HMAC-SHA512 signature.
pub const SECURE_HASH_PARAM: &str = "vnp_SecureHash";

/// Query parameter naming the hash algorithm on inbound callbacks.
/// Never part of the signed payload.
pub const SECURE_HASH_TYPE_PARAM: &str = "vnp_SecureHashType";

#[derive(Error, Debug)]
pub enum VnPayError {
    /// An outbound parameter key was inserted twice. Values are never
    /// silently overwritten on the signing path.
    #[error("duplicate request parameter: {0}")]
    DuplicateParam(String),
    /// The hash secret was empty. An empty key still produces a
    /// deterministic signature, so it is never accepted.
    #[error("hash secret cannot be empty")]
    EmptySecret,
}

pub type Result<T> = std::result::Result<T, VnPayError>;
