//! HMAC-SHA512 (RFC 2104), with the inner/outer pad *compression states*
//! precomputed once per key, per spec §4.3: "implementations MUST
//! precompute the SHA-512 compression of (key ⊕ ipad) and (key ⊕ opad) once,
//! and reuse those two 64-byte states per iteration." PBKDF2 calls this
//! thousands of times per candidate with the same key (the password), so
//! replaying the 128-byte ipad/opad block from `H0` on every call — not just
//! recomputing the XOR — would cost an extra SHA-512 compression per HMAC
//! call, roughly doubling the block count; this type exists specifically to
//! avoid that.

use crate::sha512::{compress_single_block, finish_from, sha512, BLOCK_LEN, OUTPUT_LEN};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// An HMAC-SHA512 instance keyed once and reused across many messages. Each
/// `authenticate` call resumes the cached inner/outer midstate rather than
/// recompressing the key block.
pub struct HmacSha512 {
    inner_state: [u64; 8],
    outer_state: [u64; 8],
}

impl HmacSha512 {
    pub fn new(key: &[u8]) -> Self {
        let mut block = [0u8; BLOCK_LEN];
        if key.len() > BLOCK_LEN {
            let digest = sha512(key);
            block[..OUTPUT_LEN].copy_from_slice(&digest);
        } else {
            block[..key.len()].copy_from_slice(key);
        }

        let mut inner_key_block = [0u8; BLOCK_LEN];
        let mut outer_key_block = [0u8; BLOCK_LEN];
        for i in 0..BLOCK_LEN {
            inner_key_block[i] = block[i] ^ IPAD;
            outer_key_block[i] = block[i] ^ OPAD;
        }

        HmacSha512 {
            inner_state: compress_single_block(&inner_key_block),
            outer_state: compress_single_block(&outer_key_block),
        }
    }

    /// Computes `HMAC(key, message)` by resuming the precomputed inner/outer
    /// states instead of reprocessing the key block.
    pub fn authenticate(&self, message: &[u8]) -> [u8; OUTPUT_LEN] {
        let inner_digest = finish_from(self.inner_state, BLOCK_LEN, message);
        finish_from(self.outer_state, BLOCK_LEN, &inner_digest)
    }
}

/// One-shot HMAC-SHA512, for callers that only authenticate a single
/// message and don't need the precomputed-key fast path.
pub fn hmac_sha512(key: &[u8], message: &[u8]) -> [u8; OUTPUT_LEN] {
    HmacSha512::new(key).authenticate(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn rfc4231_case_matches_known_vector() {
        let mac = hmac_sha512(b"key", b"The quick brown fox jumps over the lazy dog");
        assert_eq!(
            hex(&mac),
            "b42af09057bac1e2d41708e48a902e09b5ff7f12ab428a4fe86653c73dd248fb82f948a549f7b791a5b41915ee4d1ec3935357e4e2317250d0372afa2ebeeb3a"
        );
    }

    #[test]
    fn reused_instance_matches_one_shot() {
        let instance = HmacSha512::new(b"shared-key");
        let a = instance.authenticate(b"first message");
        let b = hmac_sha512(b"shared-key", b"first message");
        assert_eq!(a, b);
    }
}
