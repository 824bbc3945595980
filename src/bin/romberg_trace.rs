//! Romberg Integration Trace
//!
//! Integrates the cubic 4x^3 with Romberg extrapolation, logging every entry of
//! the extrapolation table, then shows how many panels the plain trapezoidal
//! rule needs to reach the same tolerance.
//!
//! Usage:
//!   cargo run --bin romberg_trace -- --lower 0 --upper 1 --eps 1e-6

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use romberg::integrate::{
    RefineOptions, RombergOptions, TracingObserver, refine_trapezoid, romberg_with_observer,
};

/// Romberg Integration Trace
#[derive(Parser, Debug)]
#[command(name = "romberg_trace")]
#[command(about = "Step-by-step Romberg integration of 4x^3 compared with the trapezoidal rule")]
struct Args {
    /// Lower bound of integration
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    lower: f64,

    /// Upper bound of integration
    #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
    upper: f64,

    /// Convergence tolerance
    #[arg(long, default_value = "1e-6")]
    eps: f64,

    /// Maximum number of Romberg rows
    #[arg(long, default_value = "10")]
    max_iterations: usize,

    /// Largest panel count tried by the trapezoidal comparison
    #[arg(long, default_value = "1000000")]
    max_panels: usize,

    /// Skip the trapezoidal-only comparison
    #[arg(long)]
    skip_comparison: bool,
}

fn cubic(x: f64) -> f64 {
    4.0 * x * x * x
}

/// Exact integral of 4x^3 over [a, b].
fn cubic_exact(a: f64, b: f64) -> f64 {
    b.powi(4) - a.powi(4)
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let args = Args::parse();
    let exact = cubic_exact(args.lower, args.upper);

    tracing::info!("=== Romberg integration ===");
    tracing::info!(
        lower = args.lower,
        upper = args.upper,
        exact,
        "integrating 4x^3"
    );

    let options = RombergOptions::new(args.eps, args.max_iterations);
    let mut observer = TracingObserver::with_reference(exact);
    let result = romberg_with_observer(cubic, args.lower, args.upper, &options, &mut observer)?;

    if result.converged {
        tracing::info!(
            "Converged: {:.10} (error {:.10}) after {} iterations with at most {} panels",
            result.integral,
            (result.integral - exact).abs(),
            result.iterations,
            result.panels
        );
    } else {
        tracing::info!(
            "Iteration cap reached. Best estimate: {:.10} (error {:.10})",
            result.integral,
            (result.integral - exact).abs()
        );
    }

    if args.skip_comparison {
        return Ok(());
    }

    tracing::info!("=== Trapezoidal rule only ===");
    tracing::info!("Panels needed for error < {}:", args.eps);

    let refine = RefineOptions {
        eps: args.eps,
        max_panels: args.max_panels,
    };
    let comparison = refine_trapezoid(cubic, args.lower, args.upper, exact, &refine, |step| {
        tracing::info!(
            "  n = {:>7} -> estimate = {:.8} (error = {:.8})",
            step.panels,
            step.estimate,
            step.error
        );
    })?;

    if comparison.converged {
        tracing::info!(
            "Trapezoidal rule needed {} panels; Romberg needed {}",
            comparison.panels,
            result.panels
        );
    } else {
        tracing::warn!(
            panels = comparison.panels,
            error = comparison.error,
            "trapezoidal rule did not reach the tolerance"
        );
    }

    Ok(())
}
