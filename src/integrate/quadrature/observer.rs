//! Listeners for the Romberg extrapolation table.
//!
//! The extrapolator itself never prints or logs. Every table entry, every
//! completed row and the final outcome are handed to a [`RombergObserver`],
//! which decides what to do with them.

use super::romberg::RombergResult;

/// A single entry `R[row][col]` of the Romberg table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RombergStep {
    /// Row index `i`; the row's raw estimate uses `2^i` panels
    pub row: usize,
    /// Number of Richardson extrapolation levels applied
    pub col: usize,
    /// Panel count of the row's trapezoidal estimate
    pub panels: usize,
    /// Value of `R[row][col]`
    pub estimate: f64,
}

/// Receives the Romberg table as it is built.
///
/// Closures `FnMut(&RombergStep)` implement this trait and only see the
/// individual entries.
pub trait RombergObserver {
    /// Called for every computed entry, in row-major order.
    fn on_estimate(&mut self, step: &RombergStep);

    /// Called once a row is complete.
    ///
    /// `delta` is `|R[row][row] - R[row-1][row-1]|`, absent for row 0.
    fn on_row(&mut self, _row: usize, _diagonal: f64, _delta: Option<f64>) {}

    /// Called once with the reported outcome.
    fn on_finish(&mut self, _result: &RombergResult) {}
}

impl<F> RombergObserver for F
where
    F: FnMut(&RombergStep),
{
    fn on_estimate(&mut self, step: &RombergStep) {
        self(step)
    }
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RombergObserver for NoopObserver {
    fn on_estimate(&mut self, _step: &RombergStep) {}
}

/// Observer that records the full trace for later inspection.
#[derive(Debug, Default, Clone)]
pub struct RombergTrace {
    /// Every table entry in the order it was computed
    pub steps: Vec<RombergStep>,
    /// Per-row diagonal values with the convergence delta
    pub rows: Vec<(f64, Option<f64>)>,
    /// Outcome reported at the end of the run
    pub result: Option<RombergResult>,
}

impl RombergTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `R[row][col]`, if it was computed.
    pub fn entry(&self, row: usize, col: usize) -> Option<f64> {
        self.steps
            .iter()
            .find(|step| step.row == row && step.col == col)
            .map(|step| step.estimate)
    }

    /// Diagonal estimates `R[i][i]` for every completed row.
    pub fn diagonal(&self) -> Vec<f64> {
        self.rows.iter().map(|&(diagonal, _)| diagonal).collect()
    }
}

impl RombergObserver for RombergTrace {
    fn on_estimate(&mut self, step: &RombergStep) {
        self.steps.push(*step);
    }

    fn on_row(&mut self, _row: usize, diagonal: f64, delta: Option<f64>) {
        self.rows.push((diagonal, delta));
    }

    fn on_finish(&mut self, result: &RombergResult) {
        self.result = Some(*result);
    }
}

/// Observer that emits the table as `tracing` events.
///
/// With a known reference value each event also carries the absolute error
/// of the estimate.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver {
    reference: Option<f64>,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report errors against the exact value of the integral.
    pub fn with_reference(reference: f64) -> Self {
        Self {
            reference: Some(reference),
        }
    }

    fn error_of(&self, estimate: f64) -> Option<f64> {
        self.reference.map(|exact| (estimate - exact).abs())
    }
}

impl RombergObserver for TracingObserver {
    fn on_estimate(&mut self, step: &RombergStep) {
        let error = self.error_of(step.estimate);
        if step.col == 0 {
            tracing::info!(
                row = step.row,
                panels = step.panels,
                estimate = step.estimate,
                error = ?error,
                "trapezoidal estimate"
            );
        } else {
            tracing::info!(
                row = step.row,
                col = step.col,
                estimate = step.estimate,
                error = ?error,
                "richardson extrapolation"
            );
        }
    }

    fn on_row(&mut self, row: usize, diagonal: f64, delta: Option<f64>) {
        tracing::debug!(row, diagonal, delta = ?delta, "row complete");
    }

    fn on_finish(&mut self, result: &RombergResult) {
        let error = self.error_of(result.integral);
        if result.converged {
            tracing::info!(
                integral = result.integral,
                iterations = result.iterations,
                panels = result.panels,
                error = ?error,
                "romberg converged"
            );
        } else {
            tracing::warn!(
                integral = result.integral,
                iterations = result.iterations,
                panels = result.panels,
                error = ?error,
                "romberg reached its iteration cap; reporting best estimate"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_lookup() {
        let mut trace = RombergTrace::new();
        trace.on_estimate(&RombergStep {
            row: 1,
            col: 1,
            panels: 2,
            estimate: 0.75,
        });
        trace.on_row(1, 0.75, Some(0.25));

        assert_eq!(trace.entry(1, 1), Some(0.75));
        assert_eq!(trace.entry(1, 0), None);
        assert_eq!(trace.diagonal(), vec![0.75]);
    }

    #[test]
    fn test_closure_observer() {
        let mut count = 0;
        {
            let mut observer = |_: &RombergStep| count += 1;
            observer.on_estimate(&RombergStep {
                row: 0,
                col: 0,
                panels: 1,
                estimate: 2.0,
            });
            observer.on_row(0, 2.0, None);
        }
        assert_eq!(count, 1);
    }
}
