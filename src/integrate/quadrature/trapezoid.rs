//! Composite trapezoidal rule over equally spaced panels.
//!
//! The trapezoidal rule approximates the integral by summing trapezoid areas.
//! It has O(h²) accuracy for smooth functions and is the building block that
//! Romberg extrapolation refines.

use crate::integrate::error::{IntegrateError, IntegrateResult, check_interval, check_tolerance};

/// Integrate `f` over `[a, b]` using the composite trapezoidal rule with `n` panels.
///
/// Computes `h * (f(a)/2 + f(a+h) + ... + f(b-h) + f(b)/2)` with `h = (b - a) / n`.
///
/// # Arguments
///
/// * `f` - Function to integrate
/// * `a` - Lower bound
/// * `b` - Upper bound
/// * `n` - Number of equal subintervals (at least 1)
///
/// # Errors
///
/// Returns an error if:
/// - The bounds are not finite or `a >= b`
/// - `n` is zero
///
/// # Example
///
/// ```
/// use romberg::integrate::trapezoid;
///
/// // A single trapezoid over [0, 1] for f(x) = 4x^3
/// let result = trapezoid(|x| 4.0 * x * x * x, 0.0, 1.0, 1).unwrap();
/// assert_eq!(result, 2.0);
/// ```
pub fn trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> IntegrateResult<f64>
where
    F: Fn(f64) -> f64,
{
    try_trapezoid(|x| Ok(f(x)), a, b, n)
}

/// Trapezoidal rule for an integrand that can fail.
///
/// The first error returned by `f` aborts the sum and is handed back as is.
/// Precondition violations are converted into `E`.
pub fn try_trapezoid<F, E>(f: F, a: f64, b: f64, n: usize) -> Result<f64, E>
where
    F: Fn(f64) -> Result<f64, E>,
    E: From<IntegrateError>,
{
    check_interval(a, b, "trapezoid")?;

    if n == 0 {
        return Err(IntegrateError::InvalidParameter {
            parameter: "n".to_string(),
            message: "trapezoid: must be at least 1".to_string(),
        }
        .into());
    }

    trapezoid_panels(&f, a, b, n)
}

/// Unchecked trapezoidal sum; callers validate `a < b` and `n >= 1`.
pub(crate) fn trapezoid_panels<F, E>(f: &F, a: f64, b: f64, n: usize) -> Result<f64, E>
where
    F: Fn(f64) -> Result<f64, E>,
{
    let h = (b - a) / n as f64;

    let mut sum = 0.5 * (f(a)? + f(b)?);
    for k in 1..n {
        sum += f(a + k as f64 * h)?;
    }

    Ok(h * sum)
}

/// Options for [`refine_trapezoid`].
#[derive(Debug, Clone)]
pub struct RefineOptions {
    /// Target absolute error against the reference value (default: 1e-6)
    pub eps: f64,
    /// Largest panel count to try (default: 1_000_000)
    pub max_panels: usize,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            eps: 1e-6,
            max_panels: 1_000_000,
        }
    }
}

/// One estimate produced while refining the trapezoidal rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapezoidStep {
    /// Number of panels used
    pub panels: usize,
    /// Trapezoidal estimate at this panel count
    pub estimate: f64,
    /// Absolute error against the reference value
    pub error: f64,
}

/// Outcome of [`refine_trapezoid`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrapezoidRefinement {
    /// Last computed estimate
    pub estimate: f64,
    /// Absolute error of `estimate` against the reference value
    pub error: f64,
    /// Panel count of the last estimate
    pub panels: usize,
    /// Number of estimates computed
    pub steps: usize,
    /// Whether the error dropped below `eps` before `max_panels` was exceeded
    pub converged: bool,
}

/// Double the panel count from 1 until the trapezoidal estimate is within
/// `eps` of a known `reference` value.
///
/// Every estimate is reported to `on_step`. Running out of panels is not an
/// error: the last estimate is returned with `converged == false`.
///
/// # Example
///
/// ```
/// use romberg::integrate::{refine_trapezoid, RefineOptions};
///
/// let result = refine_trapezoid(|x| 4.0 * x * x * x, 0.0, 1.0, 1.0, &RefineOptions::default(), |_| {})
///     .unwrap();
/// assert!(result.converged);
/// assert_eq!(result.panels, 1024);
/// ```
pub fn refine_trapezoid<F, S>(
    f: F,
    a: f64,
    b: f64,
    reference: f64,
    options: &RefineOptions,
    on_step: S,
) -> IntegrateResult<TrapezoidRefinement>
where
    F: Fn(f64) -> f64,
    S: FnMut(&TrapezoidStep),
{
    try_refine_trapezoid(|x| Ok(f(x)), a, b, reference, options, on_step)
}

/// [`refine_trapezoid`] for an integrand that can fail.
pub fn try_refine_trapezoid<F, E, S>(
    f: F,
    a: f64,
    b: f64,
    reference: f64,
    options: &RefineOptions,
    mut on_step: S,
) -> Result<TrapezoidRefinement, E>
where
    F: Fn(f64) -> Result<f64, E>,
    E: From<IntegrateError>,
    S: FnMut(&TrapezoidStep),
{
    check_interval(a, b, "refine_trapezoid")?;
    check_tolerance(options.eps, "refine_trapezoid")?;

    if options.max_panels == 0 {
        return Err(IntegrateError::InvalidParameter {
            parameter: "max_panels".to_string(),
            message: "refine_trapezoid: must be at least 1".to_string(),
        }
        .into());
    }

    if !reference.is_finite() {
        return Err(IntegrateError::InvalidParameter {
            parameter: "reference".to_string(),
            message: format!("refine_trapezoid: must be finite (got {})", reference),
        }
        .into());
    }

    let mut panels = 1usize;
    let mut steps = 0;

    loop {
        let estimate = trapezoid_panels(&f, a, b, panels)?;
        let error = (estimate - reference).abs();
        steps += 1;

        on_step(&TrapezoidStep {
            panels,
            estimate,
            error,
        });

        let converged = error < options.eps;
        let next = panels
            .checked_mul(2)
            .filter(|&next| next <= options.max_panels);

        match next {
            Some(next) if !converged => panels = next,
            _ => {
                return Ok(TrapezoidRefinement {
                    estimate,
                    error,
                    panels,
                    steps,
                    converged,
                });
            }
        }
    }
}
