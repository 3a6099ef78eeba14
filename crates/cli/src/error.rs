use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read wordlist at {path}: {source}")]
    WordlistRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("wordlist at {path} has {got} lines, expected exactly 2048")]
    WordlistSize { path: String, got: usize },

    #[error("condition parse error: {0}")]
    Condition(String),

    #[error(transparent)]
    Kernel(#[from] vaddr_kernel::KernelError),
}

pub type CliResult<T> = Result<T, CliError>;
