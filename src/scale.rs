//! Scale factor arithmetic shared by fixed-precision counters.
//!
//! A counter with `precision` decimal digits stores `value * 10^precision`
//! as an `i64`. The helpers in this module convert between the floating-point
//! values seen by callers and the scaled integers kept in the atomic store.
//!
//! ```text
//!   precision = 3          scale = 1000
//!
//!   add(42.3)  ──►  trunc(42.3 * 1000)  =  42300  ──►  AtomicI64
//!   get()      ◄──  42300 as f64 / 1000 =  42.3   ◄──  AtomicI64
//! ```
//!
//! No bound is placed on `precision`. Past 18 digits the scale no longer fits
//! the signed store, and past 19 digits the power itself wraps; both are the
//! caller's responsibility.

/// Largest precision whose scale still fits in the `i64` store.
pub const MAX_SAFE_PRECISION: u32 = 18;

/// Returns `10^precision`.
///
/// The power wraps on overflow instead of panicking.
///
/// # Examples
///
/// ```rust
/// use decimali::scale::scale_factor;
///
/// assert_eq!(scale_factor(0), 1);
/// assert_eq!(scale_factor(3), 1000);
/// ```
#[inline]
pub const fn scale_factor(precision: u32) -> u64 {
    10u64.wrapping_pow(precision)
}

/// Converts a floating-point value into scaled integer units.
///
/// The product is truncated toward zero, not rounded: any remainder below
/// `1 / scale` is discarded. Out-of-range products saturate at the `i64`
/// bounds and `NaN` maps to zero.
///
/// # Examples
///
/// ```rust
/// use decimali::scale::to_scaled;
///
/// assert_eq!(to_scaled(42.3, 1000), 42300);
/// assert_eq!(to_scaled(0.0004, 1000), 0);
/// assert_eq!(to_scaled(-2.7, 1), -2);
/// ```
#[inline]
pub fn to_scaled(value: f64, scale: u64) -> i64 {
    (value * scale as f64) as i64
}

/// Converts scaled integer units back into a floating-point value.
#[inline]
pub fn descale(scaled: i64, scale: u64) -> f64 {
    scaled as f64 / scale as f64
}

/// Returns `true` if `scale` can be represented by the signed store.
#[inline]
pub(crate) fn fits_store(precision: u32) -> bool {
    precision <= MAX_SAFE_PRECISION
}
