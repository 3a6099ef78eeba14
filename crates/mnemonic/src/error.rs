use thiserror::Error;

/// Errors raised at the mnemonic crate's verification/decoding boundary.
/// The forward direction (entropy → indices → password) never fails; these
/// only arise when reconstructing entropy from externally-supplied indices,
/// which the kernel hot path never does (see spec §4.2: the inverse exists
/// for host verification only).
#[derive(Debug, Error)]
pub enum MnemonicError {
    #[error("mnemonic index {index} at position {position} is out of range (must be < 2048)")]
    IndexOutOfRange { position: usize, index: u16 },

    #[error("mnemonic checksum mismatch: expected {expected:#04x}, got {got:#04x}")]
    ChecksumMismatch { expected: u8, got: u8 },
}

pub type MnemonicResult<T> = Result<T, MnemonicError>;
