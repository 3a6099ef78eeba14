//! PBKDF2-HMAC-SHA512 (RFC 8018), fixed to the BIP39 seed-derivation
//! parameters: 2048 iterations, 64-byte output. This is the single most
//! expensive step in the per-candidate pipeline — the precomputed-key
//! `HmacSha512` is what makes running it once per mnemonic candidate
//! tractable at all.

use crate::error::{CryptoError, CryptoResult};
use crate::hmac_sha512::HmacSha512;
use crate::sha512::OUTPUT_LEN;

/// Derives a key of `output_len` bytes from `password`/`salt` using
/// PBKDF2-HMAC-SHA512 with the given iteration count.
pub fn pbkdf2_hmac_sha512(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    output_len: usize,
) -> CryptoResult<Vec<u8>> {
    if iterations == 0 {
        return Err(CryptoError::ZeroIterations);
    }
    let max_len = OUTPUT_LEN * (u32::MAX as usize);
    if output_len > max_len {
        return Err(CryptoError::DerivedKeyTooLong {
            got: output_len,
            max: max_len,
        });
    }

    let prf = HmacSha512::new(password);
    let block_count = output_len.div_ceil(OUTPUT_LEN);
    let mut derived = Vec::with_capacity(block_count * OUTPUT_LEN);

    for block_index in 1..=block_count as u32 {
        let mut salt_and_index = Vec::with_capacity(salt.len() + 4);
        salt_and_index.extend_from_slice(salt);
        salt_and_index.extend_from_slice(&block_index.to_be_bytes());

        let mut u = prf.authenticate(&salt_and_index);
        let mut block = u;
        for _ in 1..iterations {
            u = prf.authenticate(&u);
            for (b, u_byte) in block.iter_mut().zip(u.iter()) {
                *b ^= u_byte;
            }
        }
        derived.extend_from_slice(&block);
    }

    derived.truncate(output_len);
    Ok(derived)
}

/// The BIP39 mnemonic-to-seed derivation: `PBKDF2-HMAC-SHA512(mnemonic,
/// "mnemonic" || passphrase, 2048, 64)`.
pub fn bip39_seed(mnemonic: &str, passphrase: &str) -> [u8; 64] {
    let mut salt = Vec::with_capacity(8 + passphrase.len());
    salt.extend_from_slice(b"mnemonic");
    salt.extend_from_slice(passphrase.as_bytes());

    let derived = pbkdf2_hmac_sha512(mnemonic.as_bytes(), &salt, 2048, 64)
        .expect("64-byte output never exceeds PBKDF2-HMAC-SHA512's maximum");
    let mut out = [0u8; 64];
    out.copy_from_slice(&derived);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn rfc_style_single_iteration() {
        let derived = pbkdf2_hmac_sha512(b"password", b"salt", 1, 64).unwrap();
        assert_eq!(
            hex(&derived),
            "867f70cf1ade02cff3752599a3a53dc4af34c7a669815ae5d513554e1c8cf252c02d470a285a0501bad999bfe943c08f050235d7d68b1da55e63f73b60a57fce"
        );
    }

    #[test]
    fn rfc_style_2048_iterations() {
        let derived = pbkdf2_hmac_sha512(b"password", b"salt", 2048, 64).unwrap();
        assert_eq!(
            hex(&derived),
            "91be23564f09fc855c82ce84a223ebe7d63d8b49d69372593a0d9ed39e143c83e1ab2f722a5ddb969feefc88403f7e2afe1afb8b2f0e6b20add0fb7b28368807"
        );
    }

    #[test]
    fn zero_iterations_is_rejected() {
        assert!(matches!(
            pbkdf2_hmac_sha512(b"password", b"salt", 0, 64),
            Err(CryptoError::ZeroIterations)
        ));
    }
}
