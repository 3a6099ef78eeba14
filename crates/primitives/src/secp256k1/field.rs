//! secp256k1 base field `GF(p)` element type.

use super::P;
use crate::bigint::Bi256;
use core::ops::{Add, Mul, Neg, Sub};

/// An element of `GF(p)`, always held in canonical form (`< p`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fp(Bi256);

impl Fp {
    pub const ZERO: Fp = Fp(Bi256::ZERO);
    pub const ONE: Fp = Fp(Bi256::ONE);

    /// Reduces an arbitrary `Bi256` into canonical form mod `p`.
    pub fn new(value: Bi256) -> Self {
        if value.gte(&P) {
            Fp(value.sub(&P).0)
        } else {
            Fp(value)
        }
    }

    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        Fp::new(Bi256::from_be_bytes(bytes))
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn square(&self) -> Fp {
        Fp(self.0.mod_mul(&self.0, &P))
    }

    pub fn inverse(&self) -> Fp {
        Fp(self.0.mod_inverse(&P))
    }

    pub fn double(&self) -> Fp {
        Fp(self.0.mod_add(&self.0, &P))
    }

    pub fn triple(&self) -> Fp {
        self.double() + *self
    }

    pub fn as_bigint(&self) -> Bi256 {
        self.0
    }

    /// Least-significant bit, used for SEC1 public-key parity (`0x02`/`0x03`)
    /// and BIP32's non-hardened derivation prefix.
    pub fn lsb(&self) -> u32 {
        self.0 .0[0] & 1
    }
}

impl Add for Fp {
    type Output = Fp;
    fn add(self, rhs: Fp) -> Fp {
        Fp(self.0.mod_add(&rhs.0, &P))
    }
}

impl Sub for Fp {
    type Output = Fp;
    fn sub(self, rhs: Fp) -> Fp {
        Fp(self.0.mod_sub(&rhs.0, &P))
    }
}

impl Mul for Fp {
    type Output = Fp;
    fn mul(self, rhs: Fp) -> Fp {
        Fp(self.0.mod_mul(&rhs.0, &P))
    }
}

impl Neg for Fp {
    type Output = Fp;
    fn neg(self) -> Fp {
        Fp::ZERO - self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverse_round_trips() {
        let a = Fp::new(Bi256::from_u32(12345));
        let inv = a.inverse();
        assert_eq!(a * inv, Fp::ONE);
    }

    #[test]
    fn double_equals_add_self() {
        let a = Fp::new(Bi256::from_u32(987654321));
        assert_eq!(a.double(), a + a);
    }

    #[test]
    fn new_reduces_values_above_p() {
        let above_p = P.add(&Bi256::from_u32(5)).0;
        assert_eq!(Fp::new(above_p), Fp::new(Bi256::from_u32(5)));
    }
}
