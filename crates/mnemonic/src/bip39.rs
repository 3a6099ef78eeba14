//! BIP39 entropy↔mnemonic-index conversion (spec §4.2).
//!
//! The word list itself — the static 2048-string English table — is a host
//! concern (see crate docs): every function here takes it as a borrowed
//! parameter rather than embedding it, so this crate only ever needs
//! indices, never the actual words, except when asked to render a password
//! string for PBKDF2.

use crate::error::{MnemonicError, MnemonicResult};
use vaddr_crypto::sha256;

const INDEX_COUNT: usize = 24;
const INDEX_BITS: usize = 11;
const STREAM_BYTES: usize = 33;

fn bit_at(bytes: &[u8; STREAM_BYTES], bit_index: usize) -> u8 {
    let byte_index = bit_index / 8;
    let bit_in_byte = 7 - (bit_index % 8);
    (bytes[byte_index] >> bit_in_byte) & 1
}

/// Encodes 32 bytes of entropy into 24 BIP39 word indices (each `< 2048`).
/// The checksum byte is `SHA-256(entropy)[0]`; entropy and checksum are
/// concatenated MSB-first into a 264-bit stream and sliced into 24 11-bit
/// big-endian groups.
pub fn entropy_to_indices(entropy: &[u8; 32]) -> [u16; INDEX_COUNT] {
    let checksum = sha256(entropy)[0];
    let mut stream = [0u8; STREAM_BYTES];
    stream[..32].copy_from_slice(entropy);
    stream[32] = checksum;

    let mut indices = [0u16; INDEX_COUNT];
    for (i, index) in indices.iter_mut().enumerate() {
        let base = i * INDEX_BITS;
        let mut value = 0u16;
        for bit in 0..INDEX_BITS {
            value = (value << 1) | bit_at(&stream, base + bit) as u16;
        }
        *index = value;
    }
    indices
}

/// Reconstructs the 32-byte entropy from 24 word indices, verifying the
/// embedded checksum. This is the inverse direction the kernel hot path
/// never takes — it exists only so a host (or a test) can verify an
/// `entropy_to_indices` result round-trips.
pub fn indices_to_entropy(indices: &[u16; INDEX_COUNT]) -> MnemonicResult<[u8; 32]> {
    for (position, &index) in indices.iter().enumerate() {
        if index >= 2048 {
            return Err(MnemonicError::IndexOutOfRange { position, index });
        }
    }

    let mut stream = [0u8; STREAM_BYTES];
    for (i, &index) in indices.iter().enumerate() {
        let base = i * INDEX_BITS;
        for bit in 0..INDEX_BITS {
            let value_bit = (index >> (INDEX_BITS - 1 - bit)) & 1;
            if value_bit == 1 {
                let bit_index = base + bit;
                let byte_index = bit_index / 8;
                let bit_in_byte = 7 - (bit_index % 8);
                stream[byte_index] |= 1 << bit_in_byte;
            }
        }
    }

    let mut entropy = [0u8; 32];
    entropy.copy_from_slice(&stream[..32]);
    let got = stream[32];
    let expected = sha256(&entropy)[0];
    if expected != got {
        return Err(MnemonicError::ChecksumMismatch { expected, got });
    }
    Ok(entropy)
}

/// Joins the 24 indexed words with single ASCII spaces to form the PBKDF2
/// password string (spec §4.2's `indices_to_password`).
pub fn indices_to_password(indices: &[u16; INDEX_COUNT], wordlist: &[&str; 2048]) -> String {
    let mut password = String::with_capacity(24 * 9);
    for (i, &index) in indices.iter().enumerate() {
        if i > 0 {
            password.push(' ');
        }
        password.push_str(wordlist[index as usize]);
    }
    password
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_entropy_known_vector() {
        let entropy = [0u8; 32];
        let indices = entropy_to_indices(&entropy);
        assert_eq!(&indices[..23], &[0u16; 23]);
        assert_eq!(indices[23], 0x066);
    }

    #[test]
    fn round_trips_through_indices() {
        let entropy = [0xAB; 32];
        let indices = entropy_to_indices(&entropy);
        let recovered = indices_to_entropy(&indices).unwrap();
        assert_eq!(recovered, entropy);
    }

    #[test]
    fn rejects_tampered_checksum() {
        let entropy = [0x11; 32];
        let mut indices = entropy_to_indices(&entropy);
        indices[23] ^= 1;
        assert!(matches!(
            indices_to_entropy(&indices),
            Err(MnemonicError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_index() {
        let mut indices = [0u16; 24];
        indices[5] = 2048;
        assert!(matches!(
            indices_to_entropy(&indices),
            Err(MnemonicError::IndexOutOfRange { position: 5, index: 2048 })
        ));
    }

    #[test]
    fn password_joins_words_with_single_spaces() {
        let wordlist: [&str; 2048] = core::array::from_fn(|i| match i {
            0 => "abandon",
            102 => "about",
            _ => "zzz",
        });
        let entropy = [0u8; 32];
        let indices = entropy_to_indices(&entropy);
        let password = indices_to_password(&indices, &wordlist);
        assert_eq!(
            password,
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"
        );
    }
}
