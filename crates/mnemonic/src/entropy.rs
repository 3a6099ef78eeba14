//! The 32-byte entropy counter each search lane walks.
//!
//! Byte index 31 is the least-significant byte; incrementing propagates
//! carry toward index 0. This is purely an iteration convention — BIP39
//! encoding (`entropy_to_indices`) treats the same 32 bytes as an opaque
//! big-endian bit-string instead.

/// A 256-bit entropy value, little-endian byte order for counter semantics
/// (`bytes[31]` is the least significant byte).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Entropy(pub [u8; 32]);

impl Entropy {
    pub const ZERO: Entropy = Entropy([0u8; 32]);

    /// Adds `step` to this entropy value, carrying from byte 31 upward.
    /// Returns `false` iff the addition overflows past the top byte — the
    /// caller's signal to stop iterating this lane.
    pub fn increment_by(&mut self, step: u32) -> bool {
        let mut carry = step as u64;
        for i in (0..32).rev() {
            if carry == 0 {
                break;
            }
            let sum = self.0[i] as u64 + (carry & 0xFF);
            self.0[i] = sum as u8;
            carry = (carry >> 8) + (sum >> 8);
        }
        carry == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_least_significant_byte_first() {
        let mut e = Entropy::ZERO;
        assert!(e.increment_by(1));
        assert_eq!(e.0[31], 1);
        assert_eq!(&e.0[..31], &[0u8; 31]);
    }

    #[test]
    fn carries_into_higher_bytes() {
        let mut e = Entropy([0u8; 32]);
        e.0[31] = 0xFF;
        assert!(e.increment_by(1));
        assert_eq!(e.0[31], 0);
        assert_eq!(e.0[30], 1);
    }

    #[test]
    fn increment_by_k_then_one_equals_increment_by_k_plus_one() {
        let mut a = Entropy::ZERO;
        a.increment_by(41);
        a.increment_by(1);

        let mut b = Entropy::ZERO;
        b.increment_by(42);

        assert_eq!(a, b);
    }

    #[test]
    fn overflow_past_32_bytes_returns_false() {
        let mut e = Entropy([0xFF; 32]);
        assert!(!e.increment_by(1));
    }
}
