pub mod error;
pub mod keygen;
pub mod signer;
pub mod types;
pub mod verify;
