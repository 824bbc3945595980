//! Numerical quadrature (integration) methods.
//!
//! # Available Methods
//!
//! | Method | Use Case | Accuracy |
//! |--------|----------|----------|
//! | [`trapezoid`] | Fixed panel count | O(h²) |
//! | [`refine_trapezoid`] | Panel doubling against a known value | O(h²) |
//! | [`romberg`] | Smooth functions | High precision via extrapolation |
//!
//! Every method has a `try_` variant for integrands that return `Result`.
//! Errors from the integrand are passed through untouched.

mod observer;
mod romberg;
mod trapezoid;

// Re-export all public items
pub use observer::{NoopObserver, RombergObserver, RombergStep, RombergTrace, TracingObserver};
pub use romberg::{
    MAX_ROMBERG_ITERATIONS, RombergOptions, RombergResult, extrapolate_row, integrate, richardson,
    romberg, romberg_with_observer, try_romberg, try_romberg_with_observer,
};
pub use trapezoid::{
    RefineOptions, TrapezoidRefinement, TrapezoidStep, refine_trapezoid, trapezoid,
    try_refine_trapezoid, try_trapezoid,
};
