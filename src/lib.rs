//! # Decimali - Fixed-Precision Atomic Counters
//!
//! A Rust library providing a Prometheus counter that holds fractional values
//! with a fixed number of decimal digits. Values are kept as scaled integers
//! in a single atomic word instead of as floating-point numbers.
//!
//! ## The Problem
//!
//! A floating-point counter updated from many threads needs a compare-and-swap
//! loop for every increment, and each addition rounds to the nearest
//! representable `f64`. Under heavy concurrent use the loop retries and the
//! rounding error accumulates.
//!
//! ## The Solution: Scaled Integers
//!
//! [`FixedPrecisionCounter`](counter::FixedPrecisionCounter) stores
//! `value * 10^precision` in an `AtomicI64`:
//!
//! 1. **Single `fetch_add`**: every update is one atomic instruction, never a
//!    retry loop, and no concurrent update is ever lost.
//!
//! 2. **Exact accumulation**: once converted, deltas add as integers, so the
//!    store itself never drifts.
//!
//! 3. **Float on read**: the value is divided by the scale only when read or
//!    collected, so the external contract stays `f64`.
//!
//! Each delta is truncated toward zero to the counter's precision before it is
//! added. The dropped remainder is not carried to the next call: `add(0.0004)`
//! at precision 3 adds nothing, however many times it is called.
//!
//! ## Quick Start
//!
//! ```rust
//! use decimali::counter::FixedPrecisionCounter;
//! use prometheus::Registry;
//!
//! let counter = FixedPrecisionCounter::new("energy_kwh", "Energy consumed", 3).unwrap();
//!
//! let registry = Registry::new();
//! registry.register(Box::new(counter.clone())).unwrap();
//!
//! counter.add(0.125);
//! counter.inc();
//!
//! assert_eq!(counter.get(), 1.125);
//! ```
//!
//! ## Thread Safety
//!
//! The counter is `Send + Sync` and cheap to clone; clones share the same
//! store, so hand one to each thread.
//!
//! ## Precision Limits
//!
//! Precision is not validated. With `precision` digits the largest magnitude
//! the store can hold is `i64::MAX / 10^precision`; beyond 18 digits even the
//! scale no longer fits. Accumulated values past that limit wrap silently.
//!
//! ## Feature Flags
//!
//! | Feature | Module | Description |
//! |---------|--------|-------------|
//! | `serde` | [`snapshot`] | Serializable counter snapshots |
//! | `json` | [`snapshot`] | JSON encoding of snapshots |
//! | `full` | All | Enables all optional modules |

pub mod counter;
pub mod error;
pub mod opts;
pub mod scale;

#[cfg(feature = "serde")]
pub mod snapshot;

pub use counter::FixedPrecisionCounter;
pub use error::{Error, Result};
pub use opts::{FixedPrecisionOpts, DEFAULT_PRECISION};
