//! RSA key-pair generation with PEM output.
//!
//! One async call produces a PKCS#1 private key and the matching SPKI
//! public key as PEM strings; generation runs in-process on the `rsa`
//! crate, so there are no external tools and no temporary files involved.

pub mod common;
pub mod test_utils;

pub use common::error::{KeygenError, KeygenResult};
pub use common::keygen::{generate, generate_with, generate_with_timeout};
pub use common::signer::sign_message;
pub use common::types::{KeyPair, KeyPairOptions};
pub use common::verify::{check_key_pair, verify_signature};
