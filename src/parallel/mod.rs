//! Generic execution framework
//!
//! Runs a list of independent work items under one of three strategies and
//! always hands results back in the order the items were submitted:
//!
//! - [`SequentialExecutor`]: items run one after another on the caller's thread
//! - [`ThreadPerItemExecutor`]: one OS thread per item, results written into a
//!   pre-sized slot vector guarded by a mutex
//! - [`PoolExecutor`]: a fixed number of workers consuming `(index, item)`
//!   tasks from a crossbeam channel and sending `(index, result)` back
//!
//! The module knows nothing about files or words; see [`crate::process`] for
//! the domain side.
//!
//! ```rust
//! use wordfreq::parallel::ExecutionStrategy;
//!
//! let strategy = ExecutionStrategy::Pool { workers: 4 };
//! let doubled = strategy.execute(vec![1, 2, 3], |x, _worker| x * 2)?;
//! assert_eq!(doubled, vec![2, 4, 6]);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod core;

// Re-export main types for easier access
pub use self::core::{ExecutionStrategy, PoolExecutor, SequentialExecutor, ThreadPerItemExecutor};
