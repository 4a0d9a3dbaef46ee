use hmac::Mac;
use vnpaykit::{RequestParams, VnPayError};

#[test]
fn canonical_and_signature_match_fixture() {
    let mut params = RequestParams::new();
    params.insert("vnp_Amount", "100000").unwrap();
    params.insert("vnp_Command", "pay").unwrap();

    assert_eq!(params.canonical_query(), "vnp_Amount=100000&vnp_Command=pay");

    let signed = params.sign("https://gw.example/pay", "secret1").unwrap();
    assert_eq!(
        signed.signature,
        "da4f9105e392880a5d9a1ae9ff2a3cfef145dc910810f18017b94d81e7935e621e16fb609c46b828c4c0f171555d8fcbd401f562830d942544544de9ce0ada3a"
    );
    assert_eq!(
        signed.url,
        format!("https://gw.example/pay?vnp_Amount=100000&vnp_Command=pay&vnp_SecureHash={}", signed.signature)
    );
}

#[test]
fn signature_agrees_with_direct_hmac() {
    let mut params = RequestParams::new();
    params.insert("vnp_TxnRef", "42").unwrap();
    params.insert("vnp_Amount", "5000000").unwrap();
    let signed = params.sign("https://gw.example/pay", "s").unwrap();

    // compute expected
    let mut mac = hmac::Hmac::<sha2::Sha512>::new_from_slice(b"s").unwrap();
    mac.update(signed.canonical.as_bytes());
    let expected = hex::encode(mac.finalize().into_bytes());
    assert_eq!(signed.signature, expected);
}

#[test]
fn signing_is_deterministic() {
    let mut params = RequestParams::new();
    params.insert("vnp_Amount", "100000").unwrap();
    params.insert("vnp_OrderInfo", "order 42").unwrap();

    let a = params.sign("https://gw.example/pay", "secret").unwrap();
    let b = params.sign("https://gw.example/pay", "secret").unwrap();
    assert_eq!(a.url, b.url);
    assert_eq!(a.signature, b.signature);
}

#[test]
fn insertion_order_is_irrelevant() {
    let mut forward = RequestParams::new();
    forward.insert("vnp_Amount", "100000").unwrap();
    forward.insert("vnp_Command", "pay").unwrap();
    forward.insert("vnp_TxnRef", "42").unwrap();

    let mut backward = RequestParams::new();
    backward.insert("vnp_TxnRef", "42").unwrap();
    backward.insert("vnp_Command", "pay").unwrap();
    backward.insert("vnp_Amount", "100000").unwrap();

    assert_eq!(forward.canonical_query(), backward.canonical_query());
    assert_eq!(
        forward.sign("u", "k").unwrap().signature,
        backward.sign("u", "k").unwrap().signature
    );
}

#[test]
fn keys_sort_by_byte_value_not_locale() {
    // Ordinal order puts all uppercase before all lowercase; a locale-aware
    // sort would interleave them.
    let mut params = RequestParams::new();
    params.insert("b", "4").unwrap();
    params.insert("A", "1").unwrap();
    params.insert("a", "3").unwrap();
    params.insert("B", "2").unwrap();

    assert_eq!(params.canonical_query(), "A=1&B=2&a=3&b=4");
}

#[test]
fn values_are_form_urlencoded() {
    let mut params = RequestParams::new();
    params.insert("vnp_OrderInfo", "Thanh toan don hang 42").unwrap();
    params.insert("vnp_ReturnUrl", "https://shop.example/checkout/return").unwrap();

    assert_eq!(
        params.canonical_query(),
        "vnp_OrderInfo=Thanh+toan+don+hang+42&vnp_ReturnUrl=https%3A%2F%2Fshop.example%2Fcheckout%2Freturn"
    );
}

#[test]
fn non_ascii_values_percent_encode_as_utf8() {
    let mut params = RequestParams::new();
    params.insert("vnp_OrderInfo", "đơn 1").unwrap();
    // 0x111 -> C4 91, 0x1A1 -> C6 A1 in UTF-8
    assert_eq!(params.canonical_query(), "vnp_OrderInfo=%C4%91%C6%A1n+1");
}

#[test]
fn empty_values_are_skipped() {
    let mut params = RequestParams::new();
    params.insert("vnp_Amount", "100000").unwrap();
    params.insert("vnp_BankCode", "").unwrap();

    assert_eq!(params.len(), 1);
    assert_eq!(params.canonical_query(), "vnp_Amount=100000");
}

#[test]
fn duplicate_key_is_rejected_and_first_value_kept() {
    let mut params = RequestParams::new();
    params.insert("vnp_Amount", "100000").unwrap();

    let err = params.insert("vnp_Amount", "999").unwrap_err();
    assert!(matches!(err, VnPayError::DuplicateParam(ref k) if k == "vnp_Amount"));
    assert_eq!(params.canonical_query(), "vnp_Amount=100000");
}

#[test]
fn empty_secret_is_rejected() {
    let mut params = RequestParams::new();
    params.insert("vnp_Amount", "100000").unwrap();

    let err = params.sign("https://gw.example/pay", "").unwrap_err();
    assert!(matches!(err, VnPayError::EmptySecret));
}
