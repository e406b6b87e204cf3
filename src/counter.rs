//! Fixed-precision counter backed by a single scaled atomic integer.
//!
//! This module provides [`FixedPrecisionCounter`], a Prometheus counter that
//! accepts `f64` deltas but stores them as an `i64` number of
//! `1 / 10^precision` units. Concurrent updates are a single `fetch_add` on
//! one word, so no update is ever lost and no floating-point error piles up
//! in the store itself.
//!
//! # Layout
//!
//! ```text
//!              ┌──────────────────────────────────────────┐
//!              │          FixedPrecisionCounter           │
//!              │      (Arc, clones share the store)       │
//!              ├──────────────────────────────────────────┤
//!   add() ──►  │ value: CachePadded<AtomicI64>  (scaled)  │  ──► get()
//!   set() ──►  │ scale: 10^precision                      │  ──► metric()
//!              │ desc:  Desc (immutable)                  │  ──► desc()
//!              └──────────────────────────────────────────┘
//! ```
//!
//! # Truncation
//!
//! Every call to [`add`](FixedPrecisionCounter::add) or
//! [`set`](FixedPrecisionCounter::set) converts its argument on its own and
//! truncates toward zero. Remainders below `1 / scale` are dropped and are not
//! carried into the next call, so `add(0.0004)` twice at precision 3 leaves the
//! counter at zero. Pick a precision that covers the smallest delta you record.

use std::fmt::{self, Debug, Display};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use crossbeam_utils::CachePadded;
use prometheus::core::{Collector, Desc, Metric};
use prometheus::proto::{self, MetricFamily, MetricType};

use crate::error::Result;
use crate::opts::FixedPrecisionOpts;
use crate::scale::{descale, fits_store, scale_factor, to_scaled};

/// A concurrency-safe counter holding a fractional value with a fixed number
/// of decimal digits.
///
/// `FixedPrecisionCounter` implements [`Collector`] and [`Metric`], so it can
/// be registered in a [`prometheus::Registry`] next to any other metric.
/// Cloning is cheap and every clone updates the same value.
///
/// Unlike a conventional counter, negative deltas are accepted.
///
/// # Examples
///
/// ```rust
/// use decimali::counter::FixedPrecisionCounter;
///
/// let counter = FixedPrecisionCounter::new("test", "test help", 3).unwrap();
///
/// counter.inc();
/// counter.add(42.3);
/// counter.sub(3.2);
///
/// assert_eq!(counter.scaled_value(), 40100);
/// assert_eq!(counter.get(), 40.1);
/// ```
///
/// Registering with a registry:
///
/// ```rust
/// use decimali::counter::FixedPrecisionCounter;
/// use prometheus::{Encoder, Registry, TextEncoder};
///
/// let registry = Registry::new();
/// let counter = FixedPrecisionCounter::new("energy_kwh", "Energy consumed", 2).unwrap();
/// registry.register(Box::new(counter.clone())).unwrap();
///
/// counter.add(1.25);
///
/// let mut buffer = Vec::new();
/// TextEncoder::new().encode(&registry.gather(), &mut buffer).unwrap();
/// assert!(String::from_utf8(buffer).unwrap().contains("energy_kwh 1.25"));
/// ```
#[derive(Clone)]
pub struct FixedPrecisionCounter {
    core: Arc<Core>,
}

struct Core {
    value: CachePadded<AtomicI64>,
    scale: u64,
    precision: u32,
    desc: Desc,
}

impl FixedPrecisionCounter {
    /// Creates a counter with the given name, help text and precision.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor is rejected (invalid name or empty
    /// help text).
    pub fn new<S1: Into<String>, S2: Into<String>>(
        name: S1,
        help: S2,
        precision: u32,
    ) -> Result<Self> {
        Self::with_opts(FixedPrecisionOpts::new(name, help).precision(precision))
    }

    /// Creates a counter from [`FixedPrecisionOpts`].
    ///
    /// The precision is not validated. If `10^precision` does not fit in the
    /// `i64` store, a warning is logged and the counter is created anyway.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor is rejected.
    pub fn with_opts(opts: FixedPrecisionOpts) -> Result<Self> {
        let desc = opts.describe()?;
        let precision = opts.precision;
        let scale = scale_factor(precision);

        if !fits_store(precision) {
            tracing::warn!(
                name = %desc.fq_name,
                precision,
                "scale exceeds the i64 store range, values will overflow"
            );
        }
        tracing::debug!(name = %desc.fq_name, precision, scale, "created fixed-precision counter");

        Ok(Self {
            core: Arc::new(Core {
                value: CachePadded::new(AtomicI64::new(0)),
                scale,
                precision,
                desc,
            }),
        })
    }

    /// Returns the immutable descriptor.
    #[inline]
    pub fn descriptor(&self) -> &Desc {
        &self.core.desc
    }

    /// Returns the fully-qualified name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.core.desc.fq_name
    }

    /// Returns the number of decimal digits kept.
    #[inline]
    pub fn precision(&self) -> u32 {
        self.core.precision
    }

    /// Returns the scale factor, `10^precision`.
    #[inline]
    pub fn scale(&self) -> u64 {
        self.core.scale
    }

    /// Overwrites the value.
    ///
    /// The stored value becomes `trunc(value * scale)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decimali::counter::FixedPrecisionCounter;
    ///
    /// let counter = FixedPrecisionCounter::new("c", "help", 3).unwrap();
    /// counter.set(1.23456);
    /// assert_eq!(counter.get(), 1.234);
    /// ```
    #[inline]
    pub fn set(&self, value: f64) {
        self.core
            .value
            .store(to_scaled(value, self.core.scale), Ordering::Relaxed);
    }

    /// Adds `delta` to the value. `delta` may be negative.
    ///
    /// The contribution is `trunc(delta * scale)`, computed independently for
    /// every call. Sub-unit remainders are discarded, never accumulated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use decimali::counter::FixedPrecisionCounter;
    ///
    /// let counter = FixedPrecisionCounter::new("c", "help", 3).unwrap();
    /// counter.add(0.0004);
    /// counter.add(0.0004);
    /// assert_eq!(counter.scaled_value(), 0);
    /// ```
    #[inline]
    pub fn add(&self, delta: f64) {
        self.core
            .value
            .fetch_add(to_scaled(delta, self.core.scale), Ordering::Relaxed);
    }

    /// Adds one.
    #[inline]
    pub fn inc(&self) {
        self.add(1.0);
    }

    /// Subtracts one.
    #[inline]
    pub fn dec(&self) {
        self.add(-1.0);
    }

    /// Subtracts `value`. Equivalent to `add(-value)`.
    #[inline]
    pub fn sub(&self, value: f64) {
        self.add(-value);
    }

    /// Returns the stored integer, in units of `1 / scale`.
    #[inline]
    pub fn scaled_value(&self) -> i64 {
        self.core.value.load(Ordering::Relaxed)
    }

    /// Returns the descaled value.
    #[inline]
    pub fn get(&self) -> f64 {
        descale(self.scaled_value(), self.core.scale)
    }

    /// Writes the current value into an existing metric as a counter sample.
    ///
    /// The store is loaded once; the descriptor's constant labels are not
    /// touched. Use [`Metric::metric`] to get a fully populated sample.
    pub fn write(&self, out: &mut proto::Metric) {
        let mut counter = proto::Counter::default();
        counter.set_value(self.get());
        out.set_counter(counter);
    }
}

impl Metric for FixedPrecisionCounter {
    fn metric(&self) -> proto::Metric {
        let mut m = proto::Metric::from_label(self.core.desc.const_label_pairs.clone());
        self.write(&mut m);
        m
    }
}

impl Collector for FixedPrecisionCounter {
    fn desc(&self) -> Vec<&Desc> {
        vec![&self.core.desc]
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let desc = &self.core.desc;
        tracing::trace!(name = %desc.fq_name, "collecting fixed-precision counter");

        let mut family = MetricFamily::default();
        family.set_name(desc.fq_name.clone());
        family.set_help(desc.help.clone());
        family.set_field_type(MetricType::COUNTER);
        family.set_metric(vec![self.metric()]);
        vec![family]
    }
}

impl Display for FixedPrecisionCounter {
    /// Formats the counter as `name:value`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name(), self.get())
    }
}

impl Debug for FixedPrecisionCounter {
    /// Formats the counter showing the raw scaled value and the scale.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{{ {}/{} }}",
            self.name(),
            self.scaled_value(),
            self.core.scale
        )
    }
}
