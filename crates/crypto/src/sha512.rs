//! SHA-512 (FIPS 180-4), the compression function behind HMAC-SHA512 and
//! therefore PBKDF2-HMAC-SHA512, the hot loop of the mnemonic-to-seed step.

pub(crate) const BLOCK_LEN: usize = 128;
pub(crate) const OUTPUT_LEN: usize = 64;

const H0: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

const K: [u64; 80] = [
    0x428a2f98d728ae22,
    0x7137449123ef65cd,
    0xb5c0fbcfec4d3b2f,
    0xe9b5dba58189dbbc,
    0x3956c25bf348b538,
    0x59f111f1b605d019,
    0x923f82a4af194f9b,
    0xab1c5ed5da6d8118,
    0xd807aa98a3030242,
    0x12835b0145706fbe,
    0x243185be4ee4b28c,
    0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f,
    0x80deb1fe3b1696b1,
    0x9bdc06a725c71235,
    0xc19bf174cf692694,
    0xe49b69c19ef14ad2,
    0xefbe4786384f25e3,
    0x0fc19dc68b8cd5b5,
    0x240ca1cc77ac9c65,
    0x2de92c6f592b0275,
    0x4a7484aa6ea6e483,
    0x5cb0a9dcbd41fbd4,
    0x76f988da831153b5,
    0x983e5152ee66dfab,
    0xa831c66d2db43210,
    0xb00327c898fb213f,
    0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2,
    0xd5a79147930aa725,
    0x06ca6351e003826f,
    0x142929670a0e6e70,
    0x27b70a8546d22ffc,
    0x2e1b21385c26c926,
    0x4d2c6dfc5ac42aed,
    0x53380d139d95b3df,
    0x650a73548baf63de,
    0x766a0abb3c77b2a8,
    0x81c2c92e47edaee6,
    0x92722c851482353b,
    0xa2bfe8a14cf10364,
    0xa81a664bbc423001,
    0xc24b8b70d0f89791,
    0xc76c51a30654be30,
    0xd192e819d6ef5218,
    0xd69906245565a910,
    0xf40e35855771202a,
    0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8,
    0x1e376c085141ab53,
    0x2748774cdf8eeb99,
    0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63,
    0x4ed8aa4ae3418acb,
    0x5b9cca4f7763e373,
    0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc,
    0x78a5636f43172f60,
    0x84c87814a1f0ab72,
    0x8cc702081a6439ec,
    0x90befffa23631e28,
    0xa4506cebde82bde9,
    0xbef9a3f7b2c67915,
    0xc67178f2e372532b,
    0xca273eceea26619c,
    0xd186b8c721c0c207,
    0xeada7dd6cde0eb1e,
    0xf57d4f7fee6ed178,
    0x06f067aa72176fba,
    0x0a637dc5a2c898a6,
    0x113f9804bef90dae,
    0x1b710b35131c471b,
    0x28db77f523047d84,
    0x32caab7b40c72493,
    0x3c9ebe0a15c9bebc,
    0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6,
    0x597f299cfc657e2a,
    0x5fcb6fab3ad6faec,
    0x6c44198c4a475817,
];

fn pad_tail(tail: &[u8], total_len_bytes: u128) -> Vec<u8> {
    let bit_len = total_len_bytes * 8;
    let mut padded = tail.to_vec();
    padded.push(0x80);
    while padded.len() % BLOCK_LEN != BLOCK_LEN - 16 {
        padded.push(0x00);
    }
    padded.extend_from_slice(&bit_len.to_be_bytes());
    padded
}

fn to_output(h: [u64; 8]) -> [u8; OUTPUT_LEN] {
    let mut out = [0u8; OUTPUT_LEN];
    for (i, word) in h.iter().enumerate() {
        out[i * 8..i * 8 + 8].copy_from_slice(&word.to_be_bytes());
    }
    out
}

/// Compresses one 128-byte block into `state`, producing the next chaining
/// value. This is the single unit of SHA-512 work; both the one-shot digest
/// and the resumable midstate API below are just different ways of chaining
/// this over a byte stream.
fn compress_block(state: [u64; 8], block: &[u8; BLOCK_LEN]) -> [u64; 8] {
    let mut w = [0u64; 80];
    for (i, word) in w.iter_mut().take(16).enumerate() {
        *word = u64::from_be_bytes(block[i * 8..i * 8 + 8].try_into().expect("8 bytes"));
    }
    for i in 16..80 {
        let s0 = w[i - 15].rotate_right(1) ^ w[i - 15].rotate_right(8) ^ (w[i - 15] >> 7);
        let s1 = w[i - 2].rotate_right(19) ^ w[i - 2].rotate_right(61) ^ (w[i - 2] >> 6);
        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1);
    }

    let (mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut hh) =
        (state[0], state[1], state[2], state[3], state[4], state[5], state[6], state[7]);

    for i in 0..80 {
        let s1 = e.rotate_right(14) ^ e.rotate_right(18) ^ e.rotate_right(41);
        let ch = (e & f) ^ ((!e) & g);
        let temp1 = hh
            .wrapping_add(s1)
            .wrapping_add(ch)
            .wrapping_add(K[i])
            .wrapping_add(w[i]);
        let s0 = a.rotate_right(28) ^ a.rotate_right(34) ^ a.rotate_right(39);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let temp2 = s0.wrapping_add(maj);

        hh = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    [
        state[0].wrapping_add(a),
        state[1].wrapping_add(b),
        state[2].wrapping_add(c),
        state[3].wrapping_add(d),
        state[4].wrapping_add(e),
        state[5].wrapping_add(f),
        state[6].wrapping_add(g),
        state[7].wrapping_add(hh),
    ]
}

/// One-shot SHA-512 digest.
pub fn sha512(message: &[u8]) -> [u8; OUTPUT_LEN] {
    let padded = pad_tail(message, message.len() as u128);
    let mut h = H0;
    for block in padded.chunks_exact(BLOCK_LEN) {
        h = compress_block(h, block.try_into().expect("128 bytes"));
    }
    to_output(h)
}

/// Compresses a single already-block-aligned 128-byte buffer from the
/// initial state, without any padding. HMAC uses this to fold its
/// ipad/opad-XORed key block into a chaining value exactly once per key,
/// per spec §4.3, instead of replaying that block from `H0` on every call.
pub(crate) fn compress_single_block(block: &[u8; BLOCK_LEN]) -> [u64; 8] {
    compress_block(H0, block)
}

/// Finishes a digest whose first `prior_bytes` bytes were already folded
/// into `state` (by [`compress_single_block`] or further chaining); `tail`
/// is every byte of the message since then. `state` must be the chaining
/// value after a whole number of 128-byte blocks, i.e. `prior_bytes` must be
/// a multiple of [`BLOCK_LEN`] — true of every caller here, since the only
/// midstate in this crate is the single ipad/opad key block.
pub(crate) fn finish_from(state: [u64; 8], prior_bytes: usize, tail: &[u8]) -> [u8; OUTPUT_LEN] {
    debug_assert_eq!(prior_bytes % BLOCK_LEN, 0);
    let total_len = prior_bytes as u128 + tail.len() as u128;
    let padded = pad_tail(tail, total_len);
    let mut h = state;
    for block in padded.chunks_exact(BLOCK_LEN) {
        h = compress_block(h, block.try_into().expect("128 bytes"));
    }
    to_output(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn empty_input() {
        assert_eq!(
            hex(&sha512(b"")),
            "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
        );
    }

    #[test]
    fn abc() {
        assert_eq!(
            hex(&sha512(b"abc")),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn midstate_resume_matches_one_shot_digest() {
        let block = [0x36u8; BLOCK_LEN];
        let tail = b"resumed message";

        let mut one_shot_input = block.to_vec();
        one_shot_input.extend_from_slice(tail);

        let midstate = compress_single_block(&block);
        let resumed = finish_from(midstate, BLOCK_LEN, tail);

        assert_eq!(resumed, sha512(&one_shot_input));
    }
}
