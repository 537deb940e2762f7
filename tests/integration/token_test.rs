//! Token round-trip, rejection, and expiry scenarios.

use std::time::Duration;

use spinhub::{TokenDecoder, TokenEncoder, TokenRejection};

#[test]
fn test_acme_motors_scenario() {
    let encoder = TokenEncoder::from_parts("k1", "salt1");
    let token = encoder.encode("acme-motors").expect("encode");

    let decoder = TokenDecoder::from_parts("k1", "salt1");
    assert_eq!(decoder.decode(&token).expect("decode"), "acme-motors");

    let wrong_key = TokenDecoder::from_parts("k2", "salt1");
    assert_eq!(wrong_key.decode(&token), Err(TokenRejection::Invalid));
}

#[test]
fn test_empty_inputs_are_sentinels() {
    let encoder = TokenEncoder::from_parts("k1", "salt1");
    let decoder = TokenDecoder::from_parts("k1", "salt1");
    assert_eq!(encoder.encode(""), None);
    assert_eq!(decoder.decode(""), Err(TokenRejection::Invalid));
}

#[tokio::test]
async fn test_short_lived_token_expires() {
    let encoder = TokenEncoder::from_parts("k1", "salt1");
    let decoder = TokenDecoder::from_parts("k1", "salt1");

    let token = encoder
        .encode_with_expiry("acme-motors", Some(Duration::from_secs(1)))
        .expect("encode");
    assert_eq!(
        decoder
            .decode_with_max_age(&token, Duration::from_secs(5))
            .expect("fresh token decodes"),
        "acme-motors"
    );

    tokio::time::sleep(Duration::from_millis(1100)).await;

    assert_eq!(
        decoder.decode_with_max_age(&token, Duration::from_secs(1)),
        Err(TokenRejection::Expired)
    );
    // Without a freshness bound the same token still decodes.
    assert_eq!(decoder.decode(&token).expect("decode"), "acme-motors");
}
