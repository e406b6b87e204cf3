//! Snapshot types for serializing counter state.
//!
//! A [`CounterSnapshot`] captures a single load of a counter's store, keeping
//! both the descaled value and the raw scaled integer so the exact state can
//! be reproduced on the other side.
//!
//! # Feature Flag
//!
//! This module requires the `serde` feature; the JSON helpers also need
//! `json`:
//!
//! ```toml
//! [dependencies]
//! decimali = { version = "0.1", features = ["json"] }
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use decimali::counter::FixedPrecisionCounter;
//! use decimali::snapshot::CounterSnapshot;
//!
//! let counter = FixedPrecisionCounter::new("energy_kwh", "Energy", 3)?;
//! counter.add(1.5);
//!
//! let snapshot = CounterSnapshot::from_counter(&counter);
//! let json = snapshot.to_json()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::counter::FixedPrecisionCounter;
use crate::scale::{descale, scale_factor};

/// A point-in-time capture of one counter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CounterSnapshot {
    /// The fully-qualified name of the counter.
    pub name: String,
    /// The descaled value.
    pub value: f64,
    /// The stored integer, in units of `1 / 10^precision`.
    pub scaled: i64,
    /// Number of decimal digits kept by the counter.
    pub precision: u32,
}

impl CounterSnapshot {
    /// Creates a snapshot from raw parts, deriving `value` from `scaled`.
    pub fn new(name: impl Into<String>, scaled: i64, precision: u32) -> Self {
        Self {
            name: name.into(),
            value: descale(scaled, scale_factor(precision)),
            scaled,
            precision,
        }
    }

    /// Captures the current state of a counter with a single load.
    pub fn from_counter(counter: &FixedPrecisionCounter) -> Self {
        Self::new(counter.name(), counter.scaled_value(), counter.precision())
    }

    /// Serializes the snapshot to a JSON string.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A collection of counter snapshots taken together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricsSnapshot {
    /// Optional timestamp in milliseconds since Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,
    /// The counter snapshots.
    pub counters: Vec<CounterSnapshot>,
}

impl MetricsSnapshot {
    /// Creates a new metrics snapshot with the given counters.
    pub fn new(counters: Vec<CounterSnapshot>) -> Self {
        Self {
            timestamp_ms: None,
            counters,
        }
    }

    /// Creates a new metrics snapshot with counters and a timestamp.
    pub fn with_timestamp(counters: Vec<CounterSnapshot>, timestamp_ms: u64) -> Self {
        Self {
            timestamp_ms: Some(timestamp_ms),
            counters,
        }
    }

    /// Finds a counter by name.
    pub fn get(&self, name: &str) -> Option<&CounterSnapshot> {
        self.counters.iter().find(|c| c.name == name)
    }

    /// Collects snapshots from an iterator of counters.
    pub fn collect<'a>(counters: impl Iterator<Item = &'a FixedPrecisionCounter>) -> Self {
        Self::new(counters.map(CounterSnapshot::from_counter).collect())
    }

    /// Serializes the snapshot to JSON, optionally pretty-printed.
    #[cfg(feature = "json")]
    pub fn to_json(&self, pretty: bool) -> crate::Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
