use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rsa::pkcs8::DecodePublicKey;
use rsa::RsaPublicKey;
use serde_json::json;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::common::signer::{self, pkcs1v15_sha256};
use crate::common::types::KeyPair;

/// Verifies a base64 signature over `message` against an SPKI PEM public
/// key. A signature that merely does not match yields `Ok(false)`; malformed
/// inputs (bad PEM, bad base64) are errors.
pub fn verify_signature(
    public_key_pem: &str,
    message: &str,
    signature_b64: &str,
) -> Result<bool, Box<dyn std::error::Error>> {
    // Parse the public key
    let public_key = RsaPublicKey::from_public_key_pem(public_key_pem)?;

    // Decode the signature from base64
    let signature = BASE64.decode(signature_b64)?;

    // Hash the message
    let mut hasher = Sha256::new();
    hasher.update(message.as_bytes());
    let hash = hasher.finalize();

    // Verify the signature
    match public_key.verify(pkcs1v15_sha256(), &hash, &signature) {
        Ok(_) => Ok(true),
        Err(_) => Ok(false),
    }
}

/// Checks that the two halves of a pair belong together: signs a fresh
/// challenge with the private key and verifies it with the public key.
pub fn check_key_pair(pair: &KeyPair) -> Result<(), Box<dyn std::error::Error>> {
    let challenge = json!({
        "challenge": format!("keypair-{}", Uuid::new_v4()),
        "issued_at": chrono::Utc::now().to_rfc3339(),
    })
    .to_string();

    let signature_b64 = signer::sign_message(&pair.private, &challenge)?;
    if !verify_signature(&pair.public, &challenge, &signature_b64)? {
        return Err("public key does not match private key".into());
    }
    Ok(())
}
