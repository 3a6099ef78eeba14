//! The parallel search driver (spec §4.10, §5): one rayon task per lane,
//! coordinated through a shared atomic early-exit flag and a per-lane
//! checked-candidate counter. There is no GPU work-group/device-memory
//! layer to model here — each lane plays the role of one GPU work-item,
//! and `rayon`'s work-stealing pool plays the role of the device scheduler.

use crate::address::derive_address;
use crate::condition::Condition;
use crate::config::{SearchConfig, SearchResult};
use crate::error::KernelResult;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::OnceLock;
use vaddr_mnemonic::Entropy;

/// Schedules `num_threads` lanes onto some executor. The default
/// [`RayonLaneRunner`] uses `rayon`'s work-stealing pool; a caller embedding
/// this kernel in a different host (a fixed thread pool, a single-threaded
/// event loop for testing) can supply its own without `vaddr-kernel` taking
/// a hard dependency on any particular scheduler.
pub trait LaneRunner {
    fn run_lanes(&self, num_threads: u32, lane: &(dyn Fn(u32) + Sync));
}

/// The default lane runner: one rayon task per lane.
pub struct RayonLaneRunner;

impl LaneRunner for RayonLaneRunner {
    fn run_lanes(&self, num_threads: u32, lane: &(dyn Fn(u32) + Sync)) {
        (0..num_threads).into_par_iter().for_each(lane);
    }
}

/// Runs `config.num_threads` lanes to completion or until one of them finds
/// an address satisfying `config`'s condition.
pub struct SearchDriver<'a> {
    config: &'a SearchConfig,
    wordlist: &'a [&'a str; 2048],
    condition: Condition,
    found: AtomicBool,
    result: OnceLock<SearchResult>,
    checked: Vec<AtomicU64>,
}

impl<'a> SearchDriver<'a> {
    pub fn new(config: &'a SearchConfig, wordlist: &'a [&'a str; 2048]) -> KernelResult<Self> {
        let condition = config.condition()?;
        let checked = (0..config.num_threads).map(|_| AtomicU64::new(0)).collect();
        Ok(SearchDriver {
            config,
            wordlist,
            condition,
            found: AtomicBool::new(false),
            result: OnceLock::new(),
            checked,
        })
    }

    /// Fans out over [`RayonLaneRunner`] and blocks until every lane has
    /// either exhausted its stride or observed the shared `found` flag.
    pub fn run(&self) {
        self.run_with(&RayonLaneRunner);
    }

    /// Same as [`Self::run`], but scheduled through a caller-supplied
    /// [`LaneRunner`] instead of the default rayon pool.
    pub fn run_with<R: LaneRunner>(&self, runner: &R) {
        runner.run_lanes(self.config.num_threads, &|thread_id| self.run_lane(thread_id));
    }

    /// One lane: start at `base_entropy + thread_id`, step by `num_threads`
    /// so lanes never collide. The shared flag is polled only once every
    /// `check_interval` candidates (never on every iteration) — that
    /// cadence is the entire point of `check_interval`, bounding how long a
    /// late lane spins after another lane already won.
    fn run_lane(&self, thread_id: u32) {
        let mut entropy = Entropy(self.config.base_entropy);
        if thread_id > 0 && !entropy.increment_by(thread_id) {
            return;
        }

        let mut checked = 0u64;
        loop {
            let address = derive_address(&entropy.0, self.wordlist);
            checked += 1;

            if self.condition.matches(&address) {
                if self
                    .found
                    .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                    .is_ok()
                {
                    let _ = self.result.set(SearchResult {
                        found: 1,
                        result_entropy: entropy.0,
                        eth_address: address,
                        found_by_thread: thread_id,
                    });
                }
                break;
            }

            if checked % self.config.check_interval as u64 == 0
                && self.found.load(Ordering::Relaxed)
            {
                break;
            }

            if !entropy.increment_by(self.config.num_threads) {
                break;
            }
        }

        self.checked[thread_id as usize].store(checked, Ordering::Relaxed);
    }

    /// The winning candidate, if any lane matched the condition before the
    /// search space (bounded by `Entropy::increment_by`'s overflow) ran out.
    pub fn result(&self) -> Option<SearchResult> {
        self.result.get().copied()
    }

    /// Per-lane checked-candidate counts, in lane order.
    pub fn checked_counts(&self) -> Vec<u64> {
        self.checked.iter().map(|c| c.load(Ordering::Relaxed)).collect()
    }
}
