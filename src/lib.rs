//! romberg - Romberg integration built on the composite trapezoidal rule
//!
//! Computes definite integrals of one-dimensional functions by evaluating the
//! trapezoidal rule at doubling panel counts and accelerating convergence with
//! Richardson extrapolation. The extrapolation table can be observed entry by
//! entry without touching the algorithm.
//!
//! # Modules
//!
//! - [`integrate`] - Trapezoidal rule, Romberg extrapolation, table observers
//!
//! # Example
//!
//! ```
//! use romberg::{romberg, RombergOptions};
//!
//! // Integrate 4x^3 from 0 to 1 = 1
//! let result = romberg(|x| 4.0 * x * x * x, 0.0, 1.0, &RombergOptions::default()).unwrap();
//! assert!(result.converged);
//! assert_eq!(result.panels, 4);
//! ```

pub mod integrate;

// Re-export main types for convenience
pub use integrate::{
    IntegrateError, IntegrateResult, RefineOptions, RombergObserver, RombergOptions,
    RombergResult, RombergStep, TracingObserver, integrate, refine_trapezoid, romberg,
    romberg_with_observer, trapezoid,
};
