use hmac::{Hmac, Mac};
use sha2::Sha512;
use subtle::ConstantTimeEq;

type HmacSha512 = Hmac<Sha512>;

/// HMAC-SHA512 of `message` under `secret`, as lowercase hex.
///
/// The sole cryptographic primitive in the crate; both the outbound signing
/// path and the inbound verification path go through here.
pub fn hmac_sha512_hex(secret: &str, message: &str) -> String {
    let mut mac = HmacSha512::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Case-insensitive, constant-time comparison of two hex signatures.
///
/// The gateway historically sends uppercase hex; we compute lowercase.
pub fn signature_eq(a: &str, b: &str) -> bool {
    let a = a.to_ascii_lowercase();
    let b = b.to_ascii_lowercase();
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
