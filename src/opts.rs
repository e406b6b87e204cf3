//! Construction options for fixed-precision counters.
//!
//! [`FixedPrecisionOpts`] bundles the identity of a counter (namespace,
//! subsystem, name, help and constant labels, carried verbatim in a
//! [`prometheus::Opts`]) with the number of decimal digits it keeps.
//!
//! # Example
//!
//! ```rust
//! use decimali::opts::FixedPrecisionOpts;
//!
//! let opts = FixedPrecisionOpts::new("energy_kwh", "Energy consumed")
//!     .namespace("plant")
//!     .subsystem("line1")
//!     .const_label("site", "north")
//!     .precision(4);
//!
//! assert_eq!(opts.fq_name(), "plant_line1_energy_kwh");
//! assert_eq!(opts.precision, 4);
//! ```

use std::collections::HashMap;

use prometheus::core::Desc;
use prometheus::Opts;

use crate::error::Result;

/// Precision used when none is given.
pub const DEFAULT_PRECISION: u32 = 3;

/// Options for creating a [`FixedPrecisionCounter`](crate::counter::FixedPrecisionCounter).
#[derive(Debug, Clone)]
pub struct FixedPrecisionOpts {
    /// Identity of the counter, passed through to the descriptor.
    pub common_opts: Opts,
    /// Number of decimal digits stored.
    pub precision: u32,
}

impl FixedPrecisionOpts {
    /// Creates options with the given name and help, and [`DEFAULT_PRECISION`].
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, help: S2) -> Self {
        Self {
            common_opts: Opts::new(name, help),
            precision: DEFAULT_PRECISION,
        }
    }

    /// Sets the namespace, prepended to the name with an underscore.
    pub fn namespace<S: Into<String>>(mut self, namespace: S) -> Self {
        self.common_opts.namespace = namespace.into();
        self
    }

    /// Sets the subsystem, placed between namespace and name.
    pub fn subsystem<S: Into<String>>(mut self, subsystem: S) -> Self {
        self.common_opts.subsystem = subsystem.into();
        self
    }

    /// Adds a constant label.
    pub fn const_label<S1: Into<String>, S2: Into<String>>(mut self, name: S1, value: S2) -> Self {
        self.common_opts.const_labels.insert(name.into(), value.into());
        self
    }

    /// Replaces all constant labels.
    pub fn const_labels(mut self, const_labels: HashMap<String, String>) -> Self {
        self.common_opts.const_labels = const_labels;
        self
    }

    /// Sets the number of decimal digits.
    ///
    /// Not validated: a scale that overflows the `i64` store is accepted.
    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Returns the fully-qualified metric name.
    pub fn fq_name(&self) -> String {
        self.common_opts.fq_name()
    }

    /// Builds the immutable descriptor for these options.
    ///
    /// Fixed-precision counters carry no variable labels, so any set on the
    /// underlying [`Opts`] are ignored.
    pub fn describe(&self) -> Result<Desc> {
        let desc = Desc::new(
            self.fq_name(),
            self.common_opts.help.clone(),
            vec![],
            self.common_opts.const_labels.clone(),
        )?;
        Ok(desc)
    }
}

impl From<Opts> for FixedPrecisionOpts {
    fn from(opts: Opts) -> Self {
        Self {
            common_opts: opts,
            precision: DEFAULT_PRECISION,
        }
    }
}
