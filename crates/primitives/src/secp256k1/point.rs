//! Affine and Jacobian secp256k1 points, and scalar multiplication of the
//! fixed base point `G`.
//!
//! Only base-point multiplication is implemented: the kernel pipeline only
//! ever needs `privkey * G` (deriving a public key from a private key), so
//! there is no general point-times-scalar routine here.

use super::field::Fp;
use super::{GX, GY};
use crate::bigint::Bi256;
use std::sync::OnceLock;

/// A point in affine coordinates, or the point at infinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AffinePoint {
    pub x: Fp,
    pub y: Fp,
    pub infinity: bool,
}

impl AffinePoint {
    pub const INFINITY: AffinePoint = AffinePoint {
        x: Fp::ZERO,
        y: Fp::ZERO,
        infinity: true,
    };

    /// Uncompressed SEC1 encoding: `0x04 || X || Y`. The kernel only ever
    /// needs `X || Y` (Keccak hashes the 64-byte pair, not the prefix byte),
    /// so callers reach into `x`/`y` directly rather than going through this.
    pub fn to_uncompressed_sec1(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[0] = 0x04;
        out[1..33].copy_from_slice(&self.x.to_be_bytes());
        out[33..65].copy_from_slice(&self.y.to_be_bytes());
        out
    }
}

/// A point in Jacobian coordinates `(X, Y, Z)` representing the affine point
/// `(X/Z^2, Y/Z^3)`. `Z == 0` is the point-at-infinity convention used
/// throughout this module.
#[derive(Clone, Copy, Debug)]
pub struct JacobianPoint {
    pub x: Fp,
    pub y: Fp,
    pub z: Fp,
}

impl JacobianPoint {
    pub const INFINITY: JacobianPoint = JacobianPoint {
        x: Fp::ONE,
        y: Fp::ONE,
        z: Fp::ZERO,
    };

    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Lifts an affine point to Jacobian coordinates (`Z = 1`).
    pub fn from_affine(p: &AffinePoint) -> JacobianPoint {
        if p.infinity {
            JacobianPoint::INFINITY
        } else {
            JacobianPoint {
                x: p.x,
                y: p.y,
                z: Fp::ONE,
            }
        }
    }

    /// Converts back to affine form via a single field inversion of `Z`.
    pub fn to_affine(&self) -> AffinePoint {
        if self.is_infinity() {
            return AffinePoint::INFINITY;
        }
        let z_inv = self.z.inverse();
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2 * z_inv;
        AffinePoint {
            x: self.x * z_inv2,
            y: self.y * z_inv3,
            infinity: false,
        }
    }

    /// Jacobian point doubling, specialized for curves with `a = 0` (true of
    /// secp256k1). Doubling the point at infinity yields infinity, since
    /// `Z = 0` propagates through every product below unchanged.
    pub fn double(&self) -> JacobianPoint {
        if self.is_infinity() {
            return *self;
        }
        let xx = self.x.square();
        let yy = self.y.square();
        let yyyy = yy.square();
        let s = ((self.x + yy).square() - xx - yyyy).double();
        let m = xx.triple();
        let t = m.square() - s.double();
        let x3 = t;
        let y3 = m * (s - t) - yyyy.double().double().double();
        let y1z1 = self.y * self.z;
        let z3 = y1z1.double();
        JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Mixed addition: `self` (Jacobian) + `other` (affine), the add-2007-bl
    /// formulas specialized to `Z2 = 1`. Handles every infinity/degenerate
    /// case explicitly rather than relying on the field arithmetic to fall
    /// out correctly, since `H = 0` is ambiguous between "same point"
    /// (must double) and "points are inverses" (must return infinity).
    pub fn add_mixed(&self, other: &AffinePoint) -> JacobianPoint {
        if self.is_infinity() {
            return JacobianPoint::from_affine(other);
        }
        if other.infinity {
            return *self;
        }
        let z1z1 = self.z.square();
        let u2 = other.x * z1z1;
        let z1z1z1 = z1z1 * self.z;
        let s2 = other.y * z1z1z1;
        let h = u2 - self.x;
        let r = s2 - self.y;
        if h.is_zero() {
            if r.is_zero() {
                return self.double();
            }
            return JacobianPoint::INFINITY;
        }
        let hh = h.square();
        let i = hh.double().double();
        let j = h * i;
        let v = self.x * i;
        let rr = r.double();
        let x3 = rr.square() - j - v.double();
        let y3 = rr * (v - x3) - (self.y * j).double();
        let z3 = (self.z + h).square() - z1z1 - hh;
        JacobianPoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }
}

/// Precomputed multiples `1*G .. 15*G`, one entry per nonzero value of a
/// 4-bit scalar window, indexed `table[w - 1] = w*G`. Built lazily by
/// repeated doubling/addition from the verified generator point rather than
/// hard-coded as separate literal constants: the only curve point trusted by
/// transcription is `G` itself (see DESIGN.md), and every table entry is
/// derived from it at runtime.
fn base_table() -> &'static [AffinePoint; 15] {
    static TABLE: OnceLock<[AffinePoint; 15]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let g = AffinePoint {
            x: Fp::new(GX),
            y: Fp::new(GY),
            infinity: false,
        };
        let mut table = [AffinePoint::INFINITY; 15];
        table[0] = g;
        let mut acc = JacobianPoint::from_affine(&g);
        for i in 1..15 {
            acc = acc.add_mixed(&g);
            table[i] = acc.to_affine();
        }
        table
    })
}

/// Multiplies the fixed base point `G` by `scalar` using a 4-bit windowed
/// method: 64 windows, most significant first, each consuming 4 bits via
/// four unconditional doublings followed by one mixed addition against the
/// precomputed `w*G` table (skipped when the window is zero). Doubling the
/// running infinity accumulator during the leading all-zero windows is
/// harmless, so the loop needs no special-case for "haven't started yet".
pub fn scalar_mul_base(scalar: &Bi256) -> JacobianPoint {
    let table = base_table();
    let mut acc = JacobianPoint::INFINITY;
    for limb_idx in (0..8).rev() {
        let limb = scalar.0[limb_idx];
        for nibble_shift in (0..8).rev() {
            let window = (limb >> (nibble_shift * 4)) & 0xF;
            acc = acc.double();
            acc = acc.double();
            acc = acc.double();
            acc = acc.double();
            if window != 0 {
                acc = acc.add_mixed(&table[(window - 1) as usize]);
            }
        }
    }
    acc
}
