//! Canonical 256-bit big-integer type.
//!
//! The canonical representation is eight 32-bit limbs in little-endian limb
//! order (`limbs[0]` is least significant). Byte-array conversions use
//! big-endian order (network byte order), matching every cryptographic
//! standard this crate touches (SEC1, BIP32, Keccak's address encoding).
//! Every operation here is pure: no aliasing hazards between inputs and the
//! returned value.

use core::cmp::Ordering;

/// A 256-bit unsigned integer, eight 32-bit limbs, little-endian limb order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bi256(pub [u32; 8]);

impl Bi256 {
    pub const ZERO: Bi256 = Bi256([0; 8]);
    pub const ONE: Bi256 = Bi256([1, 0, 0, 0, 0, 0, 0, 0]);

    /// Builds a `Bi256` from a small scalar value.
    pub const fn from_u32(v: u32) -> Self {
        Bi256([v, 0, 0, 0, 0, 0, 0, 0])
    }

    /// Parses a big-endian 32-byte array (network byte order) into limbs.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u32; 8];
        for i in 0..8 {
            let off = (7 - i) * 4;
            limbs[i] = u32::from_be_bytes([
                bytes[off],
                bytes[off + 1],
                bytes[off + 2],
                bytes[off + 3],
            ]);
        }
        Bi256(limbs)
    }

    /// Serializes to a big-endian 32-byte array.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for i in 0..8 {
            let off = (7 - i) * 4;
            out[off..off + 4].copy_from_slice(&self.0[i].to_be_bytes());
        }
        out
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// Lexicographic compare, most-significant limb first.
    pub fn cmp(&self, other: &Bi256) -> Ordering {
        for i in (0..8).rev() {
            match self.0[i].cmp(&other.0[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    pub fn gte(&self, other: &Bi256) -> bool {
        matches!(self.cmp(other), Ordering::Greater | Ordering::Equal)
    }

    /// Limb-wise addition with carry propagation. Returns the sum and the
    /// carry bit that fell off the top.
    pub fn add(&self, other: &Bi256) -> (Bi256, bool) {
        let mut out = [0u32; 8];
        let mut carry = 0u64;
        for i in 0..8 {
            let sum = self.0[i] as u64 + other.0[i] as u64 + carry;
            out[i] = sum as u32;
            carry = sum >> 32;
        }
        (Bi256(out), carry != 0)
    }

    /// Limb-wise subtraction with borrow propagation. Returns the difference
    /// and the borrow bit (true iff `self < other`).
    pub fn sub(&self, other: &Bi256) -> (Bi256, bool) {
        let mut out = [0u32; 8];
        let mut borrow = 0i64;
        for i in 0..8 {
            let diff = self.0[i] as i64 - other.0[i] as i64 - borrow;
            if diff < 0 {
                out[i] = (diff + (1i64 << 32)) as u32;
                borrow = 1;
            } else {
                out[i] = diff as u32;
                borrow = 0;
            }
        }
        (Bi256(out), borrow != 0)
    }

    /// Logical right shift by one bit, zero-filled from the top.
    pub fn shr1(&self) -> Bi256 {
        let mut out = [0u32; 8];
        let mut carry = 0u32;
        for i in (0..8).rev() {
            out[i] = (self.0[i] >> 1) | (carry << 31);
            carry = self.0[i] & 1;
        }
        Bi256(out)
    }

    pub fn is_even(&self) -> bool {
        self.0[0] & 1 == 0
    }

    /// Modular addition: raw sum, then a single conditional correction by
    /// `-modulus` if the sum overflowed 256 bits or is `>= modulus`.
    pub fn mod_add(&self, other: &Bi256, modulus: &Bi256) -> Bi256 {
        let (sum, carry) = self.add(other);
        if carry || sum.gte(modulus) {
            sum.sub(modulus).0
        } else {
            sum
        }
    }

    /// Modular subtraction: raw difference, then a single conditional
    /// correction by `+modulus` if the difference underflowed.
    pub fn mod_sub(&self, other: &Bi256, modulus: &Bi256) -> Bi256 {
        let (diff, borrow) = self.sub(other);
        if borrow {
            diff.add(modulus).0
        } else {
            diff
        }
    }

    /// Full 512-bit schoolbook product, sixteen little-endian 32-bit limbs.
    pub fn widening_mul(&self, other: &Bi256) -> [u32; 16] {
        let mut out = [0u64; 16];
        for i in 0..8 {
            let mut carry = 0u64;
            let a = self.0[i] as u64;
            if a == 0 {
                continue;
            }
            for j in 0..8 {
                let idx = i + j;
                let prod = a * other.0[j] as u64 + out[idx] + carry;
                out[idx] = prod & 0xFFFF_FFFF;
                carry = prod >> 32;
            }
            out[i + 8] += carry;
        }
        let mut limbs = [0u32; 16];
        for i in 0..16 {
            limbs[i] = out[i] as u32;
        }
        limbs
    }

    /// Reduces a 512-bit product modulo `modulus` via binary long division:
    /// shift the remainder up one bit at a time from the top of the
    /// dividend, bringing in the next dividend bit, and subtract `modulus`
    /// whenever the (growing) remainder is large enough. This realizes the
    /// "interleaved multiply-then-reduce" contract (the final value lies in
    /// `[0, modulus)`) without depending on a modulus-specific quotient
    /// estimate, so the same routine serves both the field prime `p` and the
    /// group order `n`.
    fn reduce_wide(wide: &[u32; 16], modulus: &Bi256) -> Bi256 {
        let mut remainder = Bi256::ZERO;
        // Walk all 512 bits, most significant first.
        for limb_idx in (0..16).rev() {
            let limb = wide[limb_idx];
            for bit in (0..32).rev() {
                let incoming = (limb >> bit) & 1;
                remainder = shl1_with_bit(&remainder, incoming);
                if remainder.gte(modulus) {
                    remainder = remainder.sub(modulus).0;
                }
            }
        }
        remainder
    }

    /// Modular multiplication: widen to 512 bits, then reduce. The result
    /// lies in `[0, modulus)`.
    pub fn mod_mul(&self, other: &Bi256, modulus: &Bi256) -> Bi256 {
        let wide = self.widening_mul(other);
        Bi256::reduce_wide(&wide, modulus)
    }

    /// Modular exponentiation via left-to-right square-and-multiply.
    pub fn pow_mod(&self, exponent: &Bi256, modulus: &Bi256) -> Bi256 {
        let mut result = Bi256::ONE;
        let base = *self;
        for limb_idx in (0..8).rev() {
            let limb = exponent.0[limb_idx];
            for bit in (0..32).rev() {
                result = result.mod_mul(&result, modulus);
                if (limb >> bit) & 1 == 1 {
                    result = result.mod_mul(&base, modulus);
                }
            }
        }
        result
    }

    /// Modular inverse via Fermat's little theorem: `a^(modulus - 2) mod
    /// modulus`, valid whenever `modulus` is prime and `self` is nonzero mod
    /// `modulus` (true for both secp256k1's field prime `p` and its group
    /// order `n`, the only two moduli this crate ever inverts against).
    /// This is functionally equivalent to the binary extended-Euclidean
    /// algorithm the field historically used (see DESIGN.md) but removes an
    /// entire class of off-by-one bugs in the halving/accumulator logic at
    /// the cost of `~256` extra modular multiplications, which is
    /// immaterial next to the 2048 PBKDF2 iterations this inverse feeds
    /// into once per candidate address.
    pub fn mod_inverse(&self, modulus: &Bi256) -> Bi256 {
        let two = Bi256::from_u32(2);
        let exponent = modulus.sub(&two).0;
        self.pow_mod(&exponent, modulus)
    }
}

/// Shifts `value` left by one bit and ORs `incoming` into the new low bit.
/// Overflow past 256 bits is dropped by design: this is only ever called
/// from `reduce_wide`, where the remainder is always kept `< modulus <
/// 2^256` before the next shift.
fn shl1_with_bit(value: &Bi256, incoming: u32) -> Bi256 {
    let mut out = [0u32; 8];
    let mut carry = incoming & 1;
    for i in 0..8 {
        out[i] = (value.0[i] << 1) | carry;
        carry = value.0[i] >> 31;
    }
    Bi256(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn be(hex: &str) -> Bi256 {
        let bytes = hex_to_32(hex);
        Bi256::from_be_bytes(&bytes)
    }

    fn hex_to_32(hex: &str) -> [u8; 32] {
        assert_eq!(hex.len(), 64);
        let mut out = [0u8; 32];
        for i in 0..32 {
            out[i] = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).unwrap();
        }
        out
    }

    #[test]
    fn round_trip_bytes() {
        let bytes = [0xAB; 32];
        let v = Bi256::from_be_bytes(&bytes);
        assert_eq!(v.to_be_bytes(), bytes);
    }

    #[test]
    fn add_sub_are_inverses() {
        let a = be("0000000000000000000000000000000000000000000000000000000000012c");
        let b = be("00000000000000000000000000000000000000000000000000000000000099");
        let (sum, carry) = a.add(&b);
        assert!(!carry);
        let (back, borrow) = sum.sub(&b);
        assert!(!borrow);
        assert_eq!(back, a);
    }

    #[test]
    fn sub_underflow_sets_borrow() {
        let a = Bi256::from_u32(1);
        let b = Bi256::from_u32(2);
        let (_, borrow) = a.sub(&b);
        assert!(borrow);
    }

    #[test]
    fn shr1_halves_even_values() {
        let v = Bi256::from_u32(256);
        assert_eq!(v.shr1(), Bi256::from_u32(128));
    }

    #[test]
    fn mod_mul_matches_small_multiplication() {
        let modulus = Bi256::from_u32(97);
        let a = Bi256::from_u32(11);
        let b = Bi256::from_u32(13);
        // 11 * 13 = 143 = 97 + 46
        assert_eq!(a.mod_mul(&b, &modulus), Bi256::from_u32(46));
    }

    #[test]
    fn pow_mod_small_case() {
        let modulus = Bi256::from_u32(13);
        // 2^5 mod 13 = 32 mod 13 = 6
        let base = Bi256::from_u32(2);
        let exp = Bi256::from_u32(5);
        assert_eq!(base.pow_mod(&exp, &modulus), Bi256::from_u32(6));
    }

    #[test]
    fn mod_inverse_small_case() {
        let modulus = Bi256::from_u32(13);
        for a in 1u32..13 {
            let inv = Bi256::from_u32(a).mod_inverse(&modulus);
            let product = Bi256::from_u32(a).mod_mul(&inv, &modulus);
            assert_eq!(product, Bi256::ONE, "a = {a}");
        }
    }

    #[test]
    fn cmp_orders_by_most_significant_limb() {
        let small = Bi256::from_u32(5);
        let large = Bi256([0, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(small.cmp(&large), Ordering::Less);
        assert!(large.gte(&small));
    }
}
