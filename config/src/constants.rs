//! # Configuration Constants
//!
//! Centralized constants for the transport-deck crates. Geometric
//! tolerances and the physical conversion factors used by card validation
//! are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Physics**: Unit conversion factors
//! - **Validation**: Thresholds used by card sanity checks

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// PHYSICS CONSTANTS
// =============================================================================

/// Conversion factor from temperature in Kelvin to kT in MeV.
///
/// Transport codes express cell temperatures as the thermal energy kT.
/// Multiplying a temperature in Kelvin by this factor yields MeV.
///
/// # Example
///
/// ```rust
/// use config::constants::KELVIN_TO_KT;
///
/// let room = 293.6 * KELVIN_TO_KT;
/// assert!((room - 2.53e-8).abs() < 1e-9);
/// ```
pub const KELVIN_TO_KT: f64 = 8.6173423e-11;

// =============================================================================
// VALIDATION THRESHOLDS
// =============================================================================

/// Lowest cell temperature accepted as physically meaningful, in Kelvin.
///
/// A temperature below 1 K almost always means the caller passed a value
/// already converted to kT.
pub const MIN_PHYSICAL_TEMPERATURE: f64 = 1.0;

/// Cell temperature below which input is treated as suspicious, in Kelvin.
///
/// A temperature below 200 K usually means the caller specified degrees
/// Celsius rather than Kelvin.
pub const SUSPICIOUS_TEMPERATURE: f64 = 200.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Check if two floating-point values are approximately equal.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Check if a floating-point value is approximately zero.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
