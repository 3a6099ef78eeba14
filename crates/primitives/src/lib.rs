//! vaddr-primitives: 256-bit big-integer arithmetic and the secp256k1
//! scalar-multiplication engine.
//!
//! This crate provides:
//! - `Bi256`, a canonical eight-limb (32-bit, little-endian) 256-bit integer
//!   with carry-propagating add/sub/compare and generic modular arithmetic
//! - secp256k1 field (`Fp`) and scalar (`Scalar`) element types built on
//!   `Bi256`
//! - affine and Jacobian point representations, mixed addition, doubling,
//!   and windowed scalar multiplication of the base point `G`

pub mod bigint;
pub mod secp256k1;

pub use bigint::Bi256;
pub use secp256k1::field::Fp;
pub use secp256k1::point::{AffinePoint, JacobianPoint};
pub use secp256k1::scalar::Scalar;
