use crate::common::keygen;
use crate::common::signer::sign_message;
use crate::common::types::{KeyPair, KeyPairOptions};

/// Generates a small key pair quickly for tests
pub async fn generate_test_key_pair() -> KeyPair {
    keygen::generate_with(KeyPairOptions {
        bits: 512,
        exponent: 65537,
    })
    .await
    .expect("test key pair generation failed")
}

/// Signs `message` with the pair's private key for round-trip tests,
/// returning the message together with the base64 signature
pub fn create_signed_challenge(pair: &KeyPair, message: &str) -> (String, String) {
    let signature_b64 = sign_message(&pair.private, message).unwrap();
    (message.to_string(), signature_b64)
}
