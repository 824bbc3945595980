//! Numerical integration of one-dimensional functions.
//!
//! # Quadrature Methods
//!
//! - [`trapezoid`] - Composite trapezoidal rule with `n` equal panels
//! - [`refine_trapezoid`] - Trapezoidal rule with panel doubling until a known
//!   value is matched
//! - [`romberg`] - Romberg integration via Richardson extrapolation
//!
//! # Observing the Romberg table
//!
//! [`romberg_with_observer`] hands every table entry `R[i][j]`, every
//! completed row and the final outcome to a [`RombergObserver`]. The
//! algorithm itself has no side effects; [`TracingObserver`] turns the table
//! into `tracing` events and [`RombergTrace`] keeps it in memory.
//!
//! # Example
//!
//! ```
//! use romberg::integrate::{romberg_with_observer, RombergOptions, RombergTrace};
//!
//! let mut trace = RombergTrace::new();
//! let result = romberg_with_observer(
//!     |x| 4.0 * x * x * x,
//!     0.0,
//!     1.0,
//!     &RombergOptions::default(),
//!     &mut trace,
//! )
//! .unwrap();
//!
//! assert!(result.converged);
//! assert_eq!(trace.entry(1, 0), Some(1.25));
//! ```

pub mod error;
pub mod quadrature;

// Re-export error types
pub use error::{IntegrateError, IntegrateResult};

// Re-export quadrature methods and their option/result types
pub use quadrature::{
    MAX_ROMBERG_ITERATIONS, NoopObserver, RefineOptions, RombergObserver, RombergOptions,
    RombergResult, RombergStep, RombergTrace, TracingObserver, TrapezoidRefinement, TrapezoidStep,
    extrapolate_row, integrate, refine_trapezoid, richardson, romberg, romberg_with_observer,
    trapezoid, try_refine_trapezoid, try_romberg, try_romberg_with_observer, try_trapezoid,
};
