use romberg::integrate::{
    IntegrateError, RefineOptions, RombergOptions, RombergTrace, extrapolate_row, integrate,
    refine_trapezoid, richardson, romberg, romberg_with_observer, trapezoid, try_romberg,
};

fn cubic(x: f64) -> f64 {
    4.0 * x * x * x
}

#[test]
fn test_cubic_converges_to_exact_value() {
    let (estimate, iterations, panels, converged) = integrate(cubic, 0.0, 1.0, 1e-6, 10).unwrap();

    assert!(converged);
    assert!(iterations <= 10);
    assert_eq!(panels, 1 << iterations);
    assert!((estimate - 1.0).abs() < 1e-6);
    // Simpson's level is already exact for a cubic
    assert!((estimate - 1.0).abs() < 1e-14);
}

#[test]
fn test_constant_integrand_is_exact_for_every_panel_count() {
    let c = -2.5;
    for n in 1..=64 {
        let result = trapezoid(|_| c, 1.5, 4.0, n).unwrap();
        assert!(
            (result - c * 2.5).abs() < 1e-12,
            "n = {}: got {}",
            n,
            result
        );
    }
}

#[test]
fn test_trapezoid_error_shrinks_with_panels() {
    let exact = std::f64::consts::E - 1.0;
    let errors: Vec<f64> = (4..12)
        .map(|k| (trapezoid(|x| x.exp(), 0.0, 1.0, 1 << k).unwrap() - exact).abs())
        .collect();

    for pair in errors.windows(2) {
        assert!(pair[1] <= pair[0], "errors did not decrease: {:?}", errors);
    }
}

#[test]
fn test_table_entry_depends_only_on_left_and_upper_left() {
    let previous = [3.0, 2.0, 1.5];
    let raw = 1.2;

    let mut row = Vec::new();
    extrapolate_row(&previous, raw, &mut row);
    assert_eq!(row.len(), 4);

    // Perturb entries that R[3][1] must not read
    let mut perturbed_previous = previous;
    perturbed_previous[1] = 100.0;
    perturbed_previous[2] = -100.0;
    let mut perturbed = Vec::new();
    extrapolate_row(&perturbed_previous, raw, &mut perturbed);

    assert_eq!(row[0], perturbed[0]);
    assert_eq!(row[1], perturbed[1]);
    assert_ne!(row[2], perturbed[2]);

    // Every column matches the one-step recurrence
    for j in 1..row.len() {
        assert_eq!(row[j], richardson(row[j - 1], previous[j - 1], j));
    }
}

#[test]
fn test_row_buffer_is_overwritten() {
    let mut row = vec![f64::NAN; 8];
    extrapolate_row(&[2.0], 1.25, &mut row);
    assert_eq!(row, vec![1.25, 1.0]);
}

#[test]
fn test_convergence_within_cap() {
    let result = romberg(cubic, 0.0, 1.0, &RombergOptions::new(1e-6, 10)).unwrap();
    assert!(result.converged);
    assert!(result.iterations <= 10);
}

#[test]
fn test_exhaustion_is_not_an_error() {
    let mut trace = RombergTrace::new();
    let result =
        romberg_with_observer(cubic, 0.0, 1.0, &RombergOptions::new(1e-300, 1), &mut trace)
            .unwrap();

    assert!(!result.converged);
    assert_eq!(result.integral, 2.0);
    assert_eq!(trace.diagonal(), vec![2.0]);
}

#[test]
fn test_exhaustion_reports_best_diagonal() {
    let mut trace = RombergTrace::new();
    let options = RombergOptions::new(1e-300, 6);
    let result = romberg_with_observer(|x: f64| x.sqrt(), 0.0, 1.0, &options, &mut trace).unwrap();

    assert!(!result.converged);
    assert_eq!(result.iterations, 5);
    assert_eq!(result.panels, 32);
    assert_eq!(trace.diagonal().last().copied(), Some(result.integral));
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let options = RombergOptions::new(1e-12, 20);
    let f = |x: f64| (1.0 + x * x).recip();

    let first = romberg(f, 0.0, 1.0, &options).unwrap();
    let second = romberg(f, 0.0, 1.0, &options).unwrap();

    assert_eq!(first.integral.to_bits(), second.integral.to_bits());
    assert_eq!(first.error.to_bits(), second.error.to_bits());
    assert_eq!(
        (first.iterations, first.panels),
        (second.iterations, second.panels)
    );
}

#[test]
fn test_romberg_beats_plain_trapezoid() {
    let romberg_result = romberg(cubic, 0.0, 1.0, &RombergOptions::default()).unwrap();
    let plain = refine_trapezoid(cubic, 0.0, 1.0, 1.0, &RefineOptions::default(), |_| {}).unwrap();

    assert!(plain.converged);
    assert!(romberg_result.panels < plain.panels);
}

#[test]
fn test_invalid_inputs_fail_fast() {
    assert!(matches!(
        integrate(cubic, 1.0, 0.0, 1e-6, 10),
        Err(IntegrateError::InvalidInterval { .. })
    ));
    assert!(matches!(
        integrate(cubic, 0.0, 1.0, 0.0, 10),
        Err(IntegrateError::InvalidParameter { .. })
    ));
    assert!(matches!(
        trapezoid(cubic, 0.0, 1.0, 0),
        Err(IntegrateError::InvalidParameter { .. })
    ));
}

#[derive(Debug, PartialEq)]
enum ModelError {
    Diverged { x: f64 },
    Setup(String),
}

impl From<IntegrateError> for ModelError {
    fn from(err: IntegrateError) -> Self {
        Self::Setup(err.to_string())
    }
}

#[test]
fn test_integrand_failure_reaches_caller_unchanged() {
    let f = |x: f64| {
        if x > 0.9 {
            Err(ModelError::Diverged { x })
        } else {
            Ok(x)
        }
    };

    let result = try_romberg(f, 0.0, 1.0, &RombergOptions::default());
    assert_eq!(result, Err(ModelError::Diverged { x: 1.0 }));
}
