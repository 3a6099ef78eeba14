//! Composes the per-candidate pipeline: entropy -> BIP39 mnemonic -> PBKDF2
//! seed -> BIP32 Ethereum key -> secp256k1 public key -> Keccak-256 address
//! (spec §4.1-§4.11 chained end to end).

use vaddr_crypto::{keccak256_concat, pbkdf2::bip39_seed};
use vaddr_mnemonic::{bip39, derive_ethereum_key};
use vaddr_primitives::secp256k1::point::scalar_mul_base;
use vaddr_primitives::Bi256;

/// Runs the full pipeline for one 32-byte entropy candidate, returning the
/// 20-byte Ethereum address. `wordlist` is the host-supplied BIP39 English
/// word list (see `vaddr_mnemonic::bip39`'s crate docs).
pub fn derive_address(entropy: &[u8; 32], wordlist: &[&str; 2048]) -> [u8; 20] {
    let indices = bip39::entropy_to_indices(entropy);
    let password = bip39::indices_to_password(&indices, wordlist);
    let seed = bip39_seed(&password, "");
    let key = derive_ethereum_key(&seed);

    let private_scalar = Bi256::from_be_bytes(&key.private_key);
    let public_key = scalar_mul_base(&private_scalar).to_affine();

    // Address = last 20 bytes of Keccak-256(X || Y); the 0x04 SEC1 tag byte
    // is never part of the hash input.
    let hash = keccak256_concat(&public_key.x.to_be_bytes(), &public_key.y.to_be_bytes());
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..32]);
    address
}
