//! vaddr-crypto: the hash and key-derivation primitives the mnemonic and
//! kernel crates build on.
//!
//! - [`sha256::sha256`] — BIP39 checksum byte
//! - [`sha512`]/[`hmac_sha512`]/[`pbkdf2`] — BIP39 seed derivation and
//!   BIP32 key derivation (both built on HMAC-SHA512)
//! - [`keccak256::keccak256`] — Ethereum address hashing
//!
//! Every routine here is hand-rolled rather than pulled from `sha2`/
//! `tiny-keccak`: these are exactly the primitives the kernel pipeline
//! spends its time in, so the inner loops need to be ones this workspace
//! owns and can tune (see `HmacSha512`'s precomputed pad blocks).

pub mod error;
pub mod hmac_sha512;
pub mod keccak256;
pub mod pbkdf2;
pub mod sha256;
pub mod sha512;

pub use error::{CryptoError, CryptoResult};
pub use hmac_sha512::{hmac_sha512, HmacSha512};
pub use keccak256::{keccak256, keccak256_concat};
pub use pbkdf2::{bip39_seed, pbkdf2_hmac_sha512};
pub use sha256::sha256;
pub use sha512::sha512;
