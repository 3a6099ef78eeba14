//! `SearchConfig`/`SearchResult` (spec §6): `#[repr(C)]` so a real host could
//! map them onto shared memory with the same field order and padding the
//! OpenCL layout specifies. `serde` derives are an ambient convenience for
//! host/testing IPC, not a spec requirement — see SPEC_FULL.md §6.

use crate::condition::Condition;
use crate::error::{KernelError, KernelResult};
use serde::{Deserialize, Serialize};

/// Read-only search configuration, shared by every lane (spec §6 item 1).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub base_entropy: [u8; 32],
    pub num_threads: u32,
    _pad0: [u8; 4],
    pub condition: u64,
    pub check_interval: u32,
    _pad1: [u8; 4],
    pub pattern_mask: [u8; 20],
    pub pattern_value: [u8; 20],
}

impl SearchConfig {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        base_entropy: [u8; 32],
        num_threads: u32,
        condition: u64,
        check_interval: u32,
        pattern_mask: [u8; 20],
        pattern_value: [u8; 20],
    ) -> KernelResult<Self> {
        if num_threads == 0 {
            return Err(KernelError::ZeroThreads);
        }
        if check_interval == 0 || !check_interval.is_power_of_two() {
            return Err(KernelError::CheckIntervalNotPowerOfTwo(check_interval));
        }
        Ok(SearchConfig {
            base_entropy,
            num_threads,
            _pad0: [0; 4],
            condition,
            check_interval,
            _pad1: [0; 4],
            pattern_mask,
            pattern_value,
        })
    }

    /// Decodes the packed condition word, handing in this config's pattern
    /// arrays in case the tag is `PATTERN`.
    pub fn condition(&self) -> KernelResult<Condition> {
        Ok(Condition::decode(
            self.condition,
            Some(self.pattern_mask),
            Some(self.pattern_value),
        )?)
    }
}

/// Writable search result, published exactly once by whichever lane wins
/// the CAS on the shared early-exit flag (spec §6 item 2). `found` is `i32`,
/// not `bool`, to match `search_result_t`'s external layout exactly.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub found: i32,
    pub result_entropy: [u8; 32],
    pub eth_address: [u8; 20],
    pub found_by_thread: u32,
}
