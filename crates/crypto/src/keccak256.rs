//! Keccak-256: the original Keccak padding (`0x01 ... 0x80`), not the NIST
//! SHA3 padding (`0x06`). This is the hash Ethereum uses for addresses, so
//! it must be this variant and not `sha3_256`.

const RATE_BYTES: usize = 136;
const ROUNDS: usize = 24;

const RC: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808A,
    0x8000000080008000,
    0x000000000000808B,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008A,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000A,
    0x000000008000808B,
    0x800000000000008B,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800A,
    0x800000008000000A,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rotation offsets `r[x][y]`, flattened as `ROT[x + 5*y]`.
const ROT: [u32; 25] = [
    0, 1, 62, 28, 27, //
    36, 44, 6, 55, 20, //
    3, 10, 43, 25, 39, //
    41, 45, 15, 21, 8, //
    18, 2, 61, 56, 14,
];

fn idx(x: usize, y: usize) -> usize {
    x + 5 * y
}

fn keccak_f1600(state: &mut [u64; 25]) {
    for round in 0..ROUNDS {
        // theta
        let mut c = [0u64; 5];
        for x in 0..5 {
            c[x] = state[idx(x, 0)] ^ state[idx(x, 1)] ^ state[idx(x, 2)] ^ state[idx(x, 3)] ^ state[idx(x, 4)];
        }
        let mut d = [0u64; 5];
        for x in 0..5 {
            d[x] = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        }
        for x in 0..5 {
            for y in 0..5 {
                state[idx(x, y)] ^= d[x];
            }
        }

        // rho + pi
        let mut b = [0u64; 25];
        for x in 0..5 {
            for y in 0..5 {
                let new_x = y;
                let new_y = (2 * x + 3 * y) % 5;
                b[idx(new_x, new_y)] = state[idx(x, y)].rotate_left(ROT[idx(x, y)]);
            }
        }

        // chi
        for x in 0..5 {
            for y in 0..5 {
                state[idx(x, y)] = b[idx(x, y)] ^ ((!b[idx((x + 1) % 5, y)]) & b[idx((x + 2) % 5, y)]);
            }
        }

        // iota
        state[idx(0, 0)] ^= RC[round];
    }
}

fn pad(message: &[u8]) -> Vec<u8> {
    let mut padded = message.to_vec();
    padded.push(0x01);
    while padded.len() % RATE_BYTES != 0 {
        padded.push(0x00);
    }
    let last = padded.len() - 1;
    padded[last] |= 0x80;
    padded
}

/// One-shot Keccak-256 digest.
pub fn keccak256(message: &[u8]) -> [u8; 32] {
    let padded = pad(message);
    let mut state = [0u64; 25];

    for block in padded.chunks_exact(RATE_BYTES) {
        for (lane, word) in block.chunks_exact(8).enumerate() {
            let word = u64::from_le_bytes(word.try_into().expect("8-byte chunk"));
            state[lane] ^= word;
        }
        keccak_f1600(&mut state);
    }

    let mut out = [0u8; 32];
    for lane in 0..4 {
        out[lane * 8..lane * 8 + 8].copy_from_slice(&state[lane].to_le_bytes());
    }
    out
}

/// Keccak-256 over `left || right`, the address-hashing shape the kernel
/// needs (hashing the 64-byte uncompressed public-key coordinates).
pub fn keccak256_concat(left: &[u8], right: &[u8]) -> [u8; 32] {
    let mut buf = Vec::with_capacity(left.len() + right.len());
    buf.extend_from_slice(left);
    buf.extend_from_slice(right);
    keccak256(&buf)
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
            hex(&keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn concat_matches_single_buffer() {
        let direct = keccak256(b"hello world");
        let split = keccak256_concat(b"hello ", b"world");
        assert_eq!(direct, split);
    }
}
