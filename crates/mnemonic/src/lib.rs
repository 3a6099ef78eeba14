//! vaddr-mnemonic: BIP39 entropy↔mnemonic-index conversion and BIP32
//! derivation along the fixed Ethereum path.
//!
//! This crate composes [`vaddr_crypto`] (SHA-256 for the checksum,
//! HMAC-SHA512 for master/child keys) and [`vaddr_primitives`] (secp256k1
//! scalar multiplication, needed for the two non-hardened derivation steps)
//! into the BIP39/BIP32 half of the per-candidate pipeline. Keccak-256
//! address hashing and the condition test live one layer up, in
//! `vaddr-kernel`, since they're not part of BIP32 proper.

pub mod bip32;
pub mod bip39;
pub mod entropy;
pub mod error;

pub use bip32::{derive_child, derive_ethereum_key, master_key, ExtendedKey, ETHEREUM_PATH};
pub use bip39::{entropy_to_indices, indices_to_entropy, indices_to_password};
pub use entropy::Entropy;
pub use error::{MnemonicError, MnemonicResult};
