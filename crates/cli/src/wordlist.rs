//! Loads the host-supplied BIP39 word list from a plain text file, one word
//! per line. The actual English word strings are deliberately not embedded
//! in this workspace — the kernel pipeline only ever needs word indices,
//! never the words themselves, until a human reads the output.

use crate::error::{CliError, CliResult};
use std::path::Path;

pub fn load(path: &Path) -> CliResult<[String; 2048]> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::WordlistRead {
        path: path.display().to_string(),
        source,
    })?;
    let words: Vec<String> = text.lines().map(str::to_owned).collect();
    let got = words.len();
    words.try_into().map_err(|_| CliError::WordlistSize {
        path: path.display().to_string(),
        got,
    })
}

pub fn as_str_refs(words: &[String; 2048]) -> [&str; 2048] {
    core::array::from_fn(|i| words[i].as_str())
}
