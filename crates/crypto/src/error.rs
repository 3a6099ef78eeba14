use thiserror::Error;

/// Errors surfaced by this crate's hashing and key-derivation routines.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("derived key length {got} exceeds the maximum {max} producible by PBKDF2-HMAC-SHA512")]
    DerivedKeyTooLong { got: usize, max: usize },

    #[error("iteration count must be nonzero")]
    ZeroIterations,
}

pub type CryptoResult<T> = Result<T, CryptoError>;
