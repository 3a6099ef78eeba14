//! vaddr-kernel: the per-candidate address pipeline, the packed condition
//! test, and the parallel search driver built on top of [`vaddr_mnemonic`]
//! and [`vaddr_crypto`].

pub mod address;
pub mod condition;
pub mod config;
pub mod driver;
pub mod error;

pub use address::derive_address;
pub use condition::Condition;
pub use config::{SearchConfig, SearchResult};
pub use driver::{LaneRunner, RayonLaneRunner, SearchDriver};
pub use error::{ConditionError, ConditionResult, KernelError, KernelResult};
