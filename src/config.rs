use thiserror::Error;

/// Gateway endpoint and shared secret, supplied by the caller.
///
/// The library reads no environment or files itself; load this from your
/// own configuration layer and call [`validate`](GatewayConfig::validate)
/// once at startup.
#[derive(Clone, serde::Deserialize)]
pub struct GatewayConfig {
    /// Base payment URL the signed query string is appended to.
    pub pay_url: String,
    /// Shared HMAC secret issued by the gateway alongside the terminal code.
    pub hash_secret: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            pay_url: "https://sandbox.vnpayment.vn/paymentv2/vpcpay.html".into(),
            hash_secret: String::new(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("hash secret cannot be empty")] EmptySecret,
    #[error("pay URL cannot be empty")] EmptyPayUrl,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hash_secret.trim().is_empty() { return Err(ConfigError::EmptySecret); }
        if self.pay_url.trim().is_empty() { return Err(ConfigError::EmptyPayUrl); }
        Ok(())
    }
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("pay_url", &self.pay_url)
            .field("hash_secret", &"[REDACTED]")
            .finish()
    }
}
