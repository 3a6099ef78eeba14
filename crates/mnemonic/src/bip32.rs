//! BIP32 hardened/non-hardened key derivation over secp256k1, fixed to the
//! Ethereum path `m/44'/60'/0'/0/0` (spec §4.8).
//!
//! The IL-invalid degenerate case (`IL >= n` or `IL == 0`) is not
//! surfaced as an error: per spec §4.12 it is a silent skip, zeroing the
//! child private key and continuing. The probability is negligible
//! (< 2⁻¹²⁷ per step) and no retry is defined at this layer.

use vaddr_crypto::hmac_sha512;
use vaddr_primitives::bigint::Bi256;
use vaddr_primitives::secp256k1::point::scalar_mul_base;
use vaddr_primitives::Scalar;

/// The fixed Ethereum derivation path: `44' / 60' / 0' / 0 / 0`.
pub const ETHEREUM_PATH: [u32; 5] = [0x8000_002C, 0x8000_003C, 0x8000_0000, 0, 0];

const HARDENED: u32 = 0x8000_0000;

/// An extended private key: 32-byte private key half, 32-byte chain code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtendedKey {
    pub private_key: [u8; 32],
    pub chain_code: [u8; 32],
}

/// Derives the BIP32 master key from a 64-byte BIP39 seed:
/// `HMAC-SHA512(key = "Bitcoin seed", data = seed)`.
pub fn master_key(seed: &[u8; 64]) -> ExtendedKey {
    let i = hmac_sha512(b"Bitcoin seed", seed);
    let mut private_key = [0u8; 32];
    let mut chain_code = [0u8; 32];
    private_key.copy_from_slice(&i[..32]);
    chain_code.copy_from_slice(&i[32..]);
    ExtendedKey {
        private_key,
        chain_code,
    }
}

/// Derives a single child key from `parent` at `index`. `index >=
/// 0x8000_0000` selects hardened derivation.
pub fn derive_child(parent: &ExtendedKey, index: u32) -> ExtendedKey {
    let mut data = Vec::with_capacity(37);
    if index >= HARDENED {
        data.push(0x00);
        data.extend_from_slice(&parent.private_key);
    } else {
        let parent_scalar = Bi256::from_be_bytes(&parent.private_key);
        let parent_pub = scalar_mul_base(&parent_scalar).to_affine();
        let prefix = 0x02 | (parent_pub.y.lsb() as u8);
        data.push(prefix);
        data.extend_from_slice(&parent_pub.x.to_be_bytes());
    }
    data.extend_from_slice(&index.to_be_bytes());

    let i = hmac_sha512(&parent.chain_code, &data);
    let il_raw = Bi256::from_be_bytes(i[..32].try_into().expect("32 bytes"));
    let mut chain_code = [0u8; 32];
    chain_code.copy_from_slice(&i[32..]);

    if il_raw.is_zero() || Scalar::exceeds_order(&il_raw) {
        return ExtendedKey {
            private_key: [0u8; 32],
            chain_code,
        };
    }

    let il = Scalar::new(il_raw);
    let parent_scalar = Scalar::new(Bi256::from_be_bytes(&parent.private_key));
    let child_scalar = parent_scalar + il;

    ExtendedKey {
        private_key: child_scalar.as_bigint().to_be_bytes(),
        chain_code,
    }
}

/// Walks [`ETHEREUM_PATH`] from the master key derived from `seed`,
/// producing the final `m/44'/60'/0'/0/0` extended key.
pub fn derive_ethereum_key(seed: &[u8; 64]) -> ExtendedKey {
    let mut key = master_key(seed);
    for &index in ETHEREUM_PATH.iter() {
        key = derive_child(&key, index);
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaddr_crypto::pbkdf2::bip39_seed;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn zero_entropy_mnemonic_matches_published_test_vector() {
        let mnemonic = "abandon abandon abandon abandon abandon abandon abandon abandon \
                         abandon abandon abandon about";
        let seed = bip39_seed(mnemonic, "");
        assert_eq!(
            hex(&seed),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc\
             19a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );

        let ethereum_key = derive_ethereum_key(&seed);
        assert_eq!(
            hex(&ethereum_key.private_key),
            "1ab42cc412b618bdea3a599e3c9bae199ebf030895b039e9db1e30dafb12b727"
        );
    }

    #[test]
    fn hardened_and_non_hardened_children_differ_in_input_shape() {
        let seed = bip39_seed("abandon abandon ability", "");
        let master = master_key(&seed);
        let hardened_child = derive_child(&master, 0x8000_0000);
        let plain_child = derive_child(&master, 0);
        assert_ne!(hardened_child.private_key, plain_child.private_key);
    }
}
