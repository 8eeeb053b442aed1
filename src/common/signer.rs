use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::{Pkcs1v15Sign, RsaPrivateKey};
use sha2::{Digest, Sha256};

// ASN.1 DigestInfo prefix identifying SHA-256 in a PKCS#1 v1.5 signature.
const SHA256_DIGEST_INFO_PREFIX: [u8; 19] = [
    0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01,
    0x05, 0x00, 0x04, 0x20,
];

/// PKCS#1 v1.5 signing scheme over SHA-256, shared by signing and
/// verification.
pub(crate) fn pkcs1v15_sha256() -> Pkcs1v15Sign {
    Pkcs1v15Sign {
        hash_len: Some(32), // SHA-256 digest length
        prefix: SHA256_DIGEST_INFO_PREFIX.to_vec().into(),
    }
}

/// Signs a message with a PKCS#1 PEM private key and returns the signature
/// as base64.
pub fn sign_message(
    private_key_pem: &str,
    message: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    // Parse the private key
    let private_key = RsaPrivateKey::from_pkcs1_pem(private_key_pem)?;

    // Hash the message
    let mut hasher = Sha256::new();
    hasher.update(message.as_bytes());
    let hash = hasher.finalize();

    // Sign the digest
    let signature = private_key.sign(pkcs1v15_sha256(), &hash)?;
    Ok(BASE64.encode(signature))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[tokio::test]
    async fn test_sign_produces_decodable_signature() {
        let pair = test_utils::generate_test_key_pair().await;

        let signature_b64 = sign_message(&pair.private, "Hello, World!").unwrap();
        assert!(!signature_b64.is_empty());

        // An RSA signature is exactly as long as the modulus.
        let signature = BASE64.decode(&signature_b64).unwrap();
        assert_eq!(signature.len(), 512 / 8);
    }

    #[tokio::test]
    async fn test_signatures_differ_per_message() {
        let pair = test_utils::generate_test_key_pair().await;

        let first = sign_message(&pair.private, "first").unwrap();
        let second = sign_message(&pair.private, "second").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_sign_rejects_malformed_pem() {
        let result = sign_message("not a pem at all", "Hello, World!");
        assert!(result.is_err());
    }
}
