//! secp256k1 scalar field `GF(n)` element type (`n` = the group order).
//!
//! Used for BIP32 child-key tweaking (`mod_add_n` in spec terms): adding a
//! parent private key to a derived offset modulo the curve order.

use super::N;
use crate::bigint::Bi256;
use core::ops::Add;

/// An element of `GF(n)`, always held in canonical form (`< n`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scalar(Bi256);

impl Scalar {
    pub const ZERO: Scalar = Scalar(Bi256::ZERO);

    pub fn new(value: Bi256) -> Self {
        if value.gte(&N) {
            Scalar(value.sub(&N).0)
        } else {
            Scalar(value)
        }
    }

    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        Scalar::new(Bi256::from_be_bytes(bytes))
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// True iff the raw big-endian value is `>= n` before reduction — used
    /// by BIP32 to detect the "IL >= n" degenerate child-key case, which
    /// must be checked against the *unreduced* HMAC output, not a value
    /// that's already been folded into range.
    pub fn exceeds_order(raw: &Bi256) -> bool {
        raw.gte(&N)
    }

    pub fn as_bigint(&self) -> Bi256 {
        self.0
    }
}

impl Add for Scalar {
    type Output = Scalar;
    fn add(self, rhs: Scalar) -> Scalar {
        Scalar(self.0.mod_add(&rhs.0, &N))
    }
}
