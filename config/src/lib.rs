//! # Config Crate
//!
//! Centralized constants for the transport-deck workspace. All physical
//! conversion factors and tunable numerical parameters are defined here to
//! ensure consistency across crates.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, KELVIN_TO_KT};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 1e-11;
//! assert!(value.abs() < EPSILON);
//!
//! // Convert a cell temperature to kT in MeV
//! let kt = 300.0 * KELVIN_TO_KT;
//! assert!(kt > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
