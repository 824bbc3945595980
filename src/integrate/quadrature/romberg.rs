//! Romberg integration using Richardson extrapolation.
//!
//! Row `i` of the Romberg table starts from the trapezoidal estimate with
//! `2^i` panels and applies `i` levels of Richardson extrapolation, each one
//! cancelling the leading error term of the level before it. Entry
//! `R[i][j]` depends only on `R[i][j-1]` and `R[i-1][j-1]`, so only the
//! previous row is kept while the current one is built.

use super::observer::{NoopObserver, RombergObserver, RombergStep};
use super::trapezoid::trapezoid_panels;
use crate::integrate::error::{IntegrateError, IntegrateResult, check_interval, check_tolerance};

/// Largest supported iteration cap; the last row then uses 2^30 panels.
pub const MAX_ROMBERG_ITERATIONS: usize = 31;

/// Options for Romberg integration.
#[derive(Debug, Clone)]
pub struct RombergOptions {
    /// Absolute tolerance on successive diagonal estimates (default: 1e-6)
    pub eps: f64,
    /// Maximum number of table rows (default: 10)
    pub max_iterations: usize,
}

impl RombergOptions {
    pub fn new(eps: f64, max_iterations: usize) -> Self {
        Self {
            eps,
            max_iterations,
        }
    }
}

impl Default for RombergOptions {
    fn default() -> Self {
        Self {
            eps: 1e-6,
            max_iterations: 10,
        }
    }
}

/// Result of Romberg integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RombergResult {
    /// Diagonal estimate `R[i][i]` of the last computed row
    pub integral: f64,
    /// Index `i` of the last computed row
    pub iterations: usize,
    /// Panel count `2^i` of the last computed row
    pub panels: usize,
    /// `|R[i][i] - R[i-1][i-1]|`, or infinity when only row 0 was computed
    pub error: f64,
    /// Whether `error` dropped below the tolerance
    pub converged: bool,
}

impl RombergResult {
    /// Split into `(estimate, iterations, panels, converged)`.
    pub fn into_parts(self) -> (f64, usize, usize, bool) {
        (self.integral, self.iterations, self.panels, self.converged)
    }
}

/// One Richardson step: combine a finer estimate with the coarser estimate
/// at the same extrapolation depth to cancel the `h^(2 level)` error term.
///
/// `level` must be at least 1.
#[inline]
pub fn richardson(finer: f64, coarser: f64, level: usize) -> f64 {
    let factor = 4.0_f64.powi(level as i32);
    finer + (finer - coarser) / (factor - 1.0)
}

/// Build Romberg row `i` from its raw trapezoidal estimate and row `i - 1`.
///
/// `row` is cleared and filled with `[R[i][0], R[i][1], ..., R[i][i]]`, where
/// `previous` holds the `i` entries of row `i - 1` (empty for row 0). Column
/// `j` reads only `row[j - 1]` and `previous[j - 1]`.
pub fn extrapolate_row(previous: &[f64], raw: f64, row: &mut Vec<f64>) {
    row.clear();
    row.push(raw);
    for (j, &coarser) in previous.iter().enumerate() {
        let value = richardson(row[j], coarser, j + 1);
        row.push(value);
    }
}

/// Romberg integration of `f` over `[a, b]`.
///
/// Row `i` re-evaluates the trapezoidal rule with `2^i` panels, extrapolates
/// it through `i` levels and stops as soon as two successive diagonal
/// estimates differ by less than `options.eps`. Reaching
/// `options.max_iterations` rows without converging is not an error: the
/// last diagonal estimate is returned with `converged == false`.
///
/// # Errors
///
/// Returns an error if the bounds are not finite or `a >= b`, if `eps` is not
/// positive, or if `max_iterations` is zero or above
/// [`MAX_ROMBERG_ITERATIONS`].
///
/// # Example
///
/// ```
/// use romberg::integrate::{romberg, RombergOptions};
///
/// let result = romberg(|x| 4.0 * x * x * x, 0.0, 1.0, &RombergOptions::default()).unwrap();
/// assert!(result.converged);
/// assert!((result.integral - 1.0).abs() < 1e-12);
/// ```
pub fn romberg<F>(f: F, a: f64, b: f64, options: &RombergOptions) -> IntegrateResult<RombergResult>
where
    F: Fn(f64) -> f64,
{
    romberg_with_observer(f, a, b, options, &mut NoopObserver)
}

/// [`romberg`] reporting every table entry to `observer`.
pub fn romberg_with_observer<F, O>(
    f: F,
    a: f64,
    b: f64,
    options: &RombergOptions,
    observer: &mut O,
) -> IntegrateResult<RombergResult>
where
    F: Fn(f64) -> f64,
    O: RombergObserver + ?Sized,
{
    try_romberg_with_observer(|x| Ok(f(x)), a, b, options, observer)
}

/// [`romberg`] for an integrand that can fail.
///
/// The first error returned by `f` aborts the run and reaches the caller
/// unchanged.
pub fn try_romberg<F, E>(f: F, a: f64, b: f64, options: &RombergOptions) -> Result<RombergResult, E>
where
    F: Fn(f64) -> Result<f64, E>,
    E: From<IntegrateError>,
{
    try_romberg_with_observer(f, a, b, options, &mut NoopObserver)
}

/// Fallible-integrand Romberg integration with a table observer.
pub fn try_romberg_with_observer<F, E, O>(
    f: F,
    a: f64,
    b: f64,
    options: &RombergOptions,
    observer: &mut O,
) -> Result<RombergResult, E>
where
    F: Fn(f64) -> Result<f64, E>,
    E: From<IntegrateError>,
    O: RombergObserver + ?Sized,
{
    check_options(a, b, options)?;

    let mut previous = Vec::with_capacity(options.max_iterations);
    let mut current = Vec::with_capacity(options.max_iterations);

    let raw = trapezoid_panels(&f, a, b, 1)?;
    extrapolate_row(&previous, raw, &mut current);
    report_row(observer, 0, 1, &current, None);

    let mut result = RombergResult {
        integral: raw,
        iterations: 0,
        panels: 1,
        error: f64::INFINITY,
        converged: false,
    };

    for i in 1..options.max_iterations {
        std::mem::swap(&mut previous, &mut current);

        let panels = 1usize << i;
        let raw = trapezoid_panels(&f, a, b, panels)?;
        extrapolate_row(&previous, raw, &mut current);

        let diagonal = current[i];
        let delta = (diagonal - previous[i - 1]).abs();
        report_row(observer, i, panels, &current, Some(delta));

        result = RombergResult {
            integral: diagonal,
            iterations: i,
            panels,
            error: delta,
            converged: delta < options.eps,
        };

        if result.converged {
            break;
        }
    }

    observer.on_finish(&result);
    Ok(result)
}

/// Romberg integration returning `(estimate, iterations, panels, converged)`.
///
/// # Example
///
/// ```
/// use romberg::integrate::integrate;
///
/// let (estimate, iterations, panels, converged) =
///     integrate(|x| 4.0 * x * x * x, 0.0, 1.0, 1e-6, 10).unwrap();
/// assert!(converged);
/// assert_eq!((iterations, panels), (2, 4));
/// assert!((estimate - 1.0).abs() < 1e-12);
/// ```
pub fn integrate<F>(
    f: F,
    a: f64,
    b: f64,
    eps: f64,
    max_iterations: usize,
) -> IntegrateResult<(f64, usize, usize, bool)>
where
    F: Fn(f64) -> f64,
{
    let options = RombergOptions::new(eps, max_iterations);
    romberg(f, a, b, &options).map(RombergResult::into_parts)
}

fn check_options(a: f64, b: f64, options: &RombergOptions) -> IntegrateResult<()> {
    check_interval(a, b, "romberg")?;
    check_tolerance(options.eps, "romberg")?;

    if options.max_iterations == 0 {
        return Err(IntegrateError::InvalidParameter {
            parameter: "max_iterations".to_string(),
            message: "romberg: must be at least 1".to_string(),
        });
    }

    if options.max_iterations > MAX_ROMBERG_ITERATIONS {
        return Err(IntegrateError::InvalidParameter {
            parameter: "max_iterations".to_string(),
            message: format!(
                "romberg: at most {} supported (got {})",
                MAX_ROMBERG_ITERATIONS, options.max_iterations
            ),
        });
    }

    Ok(())
}

fn report_row<O>(observer: &mut O, row: usize, panels: usize, entries: &[f64], delta: Option<f64>)
where
    O: RombergObserver + ?Sized,
{
    for (col, &estimate) in entries.iter().enumerate() {
        observer.on_estimate(&RombergStep {
            row,
            col,
            panels,
            estimate,
        });
    }
    if let Some(&diagonal) = entries.last() {
        observer.on_row(row, diagonal, delta);
    }
}
