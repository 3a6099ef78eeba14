use thiserror::Error;

/// Errors decoding a packed condition word or its optional pattern arrays
/// (spec §4.9). These sit strictly at the `SearchConfig` construction
/// boundary — `SearchDriver::run_lane`'s hot loop never returns a `Result`.
#[derive(Debug, Error)]
pub enum ConditionError {
    #[error("unknown condition type tag {tag}")]
    UnknownTag { tag: u16 },

    #[error("condition parameter length {len} is outside the supported 1..={max} byte range")]
    InvalidParamLength { len: usize, max: usize },

    #[error("PATTERN condition requires both a mask and a value array")]
    MissingPattern,
}

pub type ConditionResult<T> = Result<T, ConditionError>;

/// Errors constructing a [`crate::config::SearchConfig`] or
/// [`crate::driver::SearchDriver`].
#[derive(Debug, Error)]
pub enum KernelError {
    #[error("num_threads must be nonzero")]
    ZeroThreads,

    #[error("check_interval must be a nonzero power of two, got {0}")]
    CheckIntervalNotPowerOfTwo(u32),

    #[error(transparent)]
    Condition(#[from] ConditionError),
}

pub type KernelResult<T> = Result<T, KernelError>;
