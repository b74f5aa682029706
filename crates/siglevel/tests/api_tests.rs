//! Tests for the high-level API.
//!
//! These tests verify the public entry points for:
//! - Column-oriented correction (`fix_piecewise`, `background_corrector`)
//! - Builder configuration and validation
//! - Error reporting for invalid data and parameters
//!
//! ## Test Organization
//!
//! 1. **Segmenter/Leveler** - Jump detection and leveling scenarios
//! 2. **Drift Remover** - Rolling-mean identity and missing values
//! 3. **Builders** - Defaults, overrides, duplicate parameters
//! 4. **Errors** - Missing columns, short input, non-finite values

use approx::assert_relative_eq;

use siglevel::prelude::*;

fn table(values: Vec<f64>) -> Table<f64> {
    Table::new().with_column("signal", values).unwrap()
}

// ============================================================================
// Segmenter/Leveler Tests
// ============================================================================

/// Test a flat head followed by a rising plateau.
///
/// The leading differences are all zero, so the threshold is zero and every
/// step of the plateau is its own region; each is pulled down to 1.
#[test]
fn test_flat_head_splits_every_step() {
    let mut v = vec![1.0; 13];
    v.extend([100.0, 101.0, 102.0]);

    let result = Piecewise::<f64>::new().build().unwrap().fit(&v).unwrap();

    assert_eq!(result.threshold, 0.0);
    assert_eq!(result.n_regions(), 4);
    assert_eq!(result.regions[1], vec![100.0]);
    assert_eq!(result.boundaries, vec![0, 13, 14, 15]);
    assert_eq!(result.offsets, vec![0.0, -99.0, -100.0, -101.0]);
    assert_eq!(&result.corrected[13..], &[1.0, 1.0, 1.0]);
}

/// Test a noisy head followed by a rising plateau.
///
/// Small leading noise gives a threshold of ~2, so the plateau forms one
/// region that is shifted by -99.
#[test]
fn test_noisy_head_keeps_plateau_together() {
    let mut v: Vec<f64> = (0..13).map(|i| if i % 2 == 0 { 1.0 } else { 1.01 }).collect();
    v.extend([100.0, 101.0, 102.0]);

    let (regions, corrected) = fix_piecewise(&table(v.clone()), "signal").unwrap();

    assert_eq!(regions.len(), 2);
    assert_eq!(regions[1], vec![100.0, 101.0, 102.0]);
    assert_eq!(corrected.len(), v.len());
    assert_eq!(&corrected[13..], &[1.0, 2.0, 3.0]);
    assert_eq!(&corrected[..13], &v[..13]);
}

/// Test a constant sequence.
///
/// Verifies a single region and an unchanged output.
#[test]
fn test_constant_sequence_is_untouched() {
    let v = vec![5.0; 20];
    let (regions, corrected) = fix_piecewise(&table(v.clone()), "signal").unwrap();

    assert_eq!(regions, vec![v.clone()]);
    assert_eq!(corrected, v);
}

/// Test that a difference equal to the threshold does not split.
#[test]
fn test_threshold_comparison_is_inclusive() {
    // Nine unit differences: threshold = 1 * 1.
    let mut v: Vec<f64> = (0..10).map(|i| (i % 2) as f64).collect();
    v.push(2.0); // diff 1.0, equal to threshold
    v.push(3.5); // diff 1.5, above threshold

    let result = Piecewise::new().multiplier(1.0).build().unwrap().fit(&v).unwrap();

    assert_eq!(result.threshold, 1.0);
    assert_eq!(result.n_regions(), 2);
    assert_eq!(result.regions[0].len(), 11);
    assert_eq!(result.regions[1], vec![3.5]);
    assert_eq!(result.corrected[11], 2.0);
}

/// Test that an isolated spike becomes a region of length 1.
#[test]
fn test_isolated_point_region() {
    let mut v: Vec<f64> = (0..12).map(|i| i as f64 * 0.01).collect();
    v.push(50.0);
    v.push(0.12);

    let result = Piecewise::<f64>::new().build().unwrap().fit(&v).unwrap();

    assert_eq!(result.n_regions(), 3);
    assert_eq!(result.regions[1], vec![50.0]);
    assert_eq!(result.boundaries, vec![0, 12, 13]);
    assert_relative_eq!(result.corrected[12], 0.11, epsilon = 1e-12);
    assert_relative_eq!(result.corrected[13], 0.11, epsilon = 1e-12);
}

/// Test threshold estimation on inputs shorter than the lookback.
///
/// Verifies the available differences are used.
#[test]
fn test_short_input_degrades_threshold() {
    let v = vec![0.0, 1.0, 10.0];
    let result = Piecewise::<f64>::new().build().unwrap().fit(&v).unwrap();

    assert_relative_eq!(result.threshold, 1000.0);
    assert!(!result.has_discontinuities());
    assert_eq!(result.corrected, v);
}

/// Test custom lookback.
///
/// Only the first `lookback` values contribute to the threshold.
#[test]
fn test_custom_lookback() {
    let v = vec![0.0, 1.0, 2.0, 30.0, 31.0];
    let result = Piecewise::new()
        .lookback(3)
        .multiplier(10.0)
        .build()
        .unwrap()
        .fit(&v)
        .unwrap();

    assert_relative_eq!(result.threshold, 10.0);
    assert_eq!(result.n_regions(), 2);
    assert_eq!(result.corrected, vec![0.0, 1.0, 2.0, 2.0, 3.0]);
}

/// Test f32 support.
#[test]
fn test_f32_values() {
    let mut v: Vec<f32> = vec![2.0; 10];
    v.extend([9.0_f32, 9.5]);
    let result = Piecewise::<f32>::new().build().unwrap().fit(&v).unwrap();

    assert_eq!(result.n_regions(), 3);
    assert_eq!(result.corrected.len(), 12);
    assert_eq!(result.corrected[11], 2.0);
}

// ============================================================================
// Drift Remover Tests
// ============================================================================

/// Test the rolling-mean identity with window 3.
#[test]
fn test_background_corrector_window_three() {
    let t = table(vec![10.0, 20.0, 30.0, 40.0, 50.0]);
    let out = background_corrector(&t, "signal", 3).unwrap();

    assert_eq!(out.len(), 5);
    assert_eq!(out[0], None);
    assert_eq!(out[1], None);
    assert_relative_eq!(out[2].unwrap(), 20.0);
    assert_relative_eq!(out[3].unwrap(), 30.0);
    assert_relative_eq!(out[4].unwrap(), 40.0);
}

/// Test that drift is exposed alongside the corrected values.
#[test]
fn test_drift_components_exposed() {
    let v = vec![10.0, 20.0, 30.0, 40.0, 50.0];
    let result = Drift::new().window_size(3).build().unwrap().fit(&v).unwrap();

    assert_eq!(result.window_size, 3);
    assert_eq!(result.valid_len(), 3);
    assert_eq!(result.moving_average[..2], [None, None]);
    assert_eq!(result.drift, vec![None, None, Some(10.0), Some(10.0), Some(10.0)]);
    assert_eq!(result.corrected_values(), vec![20.0, 30.0, 40.0]);
}

/// Test the default window of 10.
#[test]
fn test_drift_default_window() {
    let v: Vec<f64> = (1..=12).map(f64::from).collect();
    let result = Drift::new().build().unwrap().fit(&v).unwrap();

    assert_eq!(result.window_size, DEFAULT_WINDOW_SIZE);
    assert!(result.corrected[..9].iter().all(Option::is_none));
    assert_relative_eq!(result.corrected[9].unwrap(), 5.5);
    assert_relative_eq!(result.corrected[11].unwrap(), 7.5);
}

/// Test a window longer than the input.
///
/// Verifies every position is missing.
#[test]
fn test_window_longer_than_input() {
    let t = table(vec![1.0, 2.0, 3.0]);
    let out = background_corrector(&t, "signal", 4).unwrap();

    assert_eq!(out, vec![None, None, None]);
}

/// Test a window of one.
///
/// Every value is its own mean.
#[test]
fn test_window_of_one_is_identity() {
    let v = vec![3.0, -1.5, 8.25];
    let out = background_corrector(&table(v.clone()), "signal", 1).unwrap();

    assert_eq!(out, v.into_iter().map(Some).collect::<Vec<_>>());
}

/// Test the standalone rolling mean.
#[test]
fn test_rolling_mean_values() {
    let ma = rolling_mean(&[2.0, 4.0, 6.0, 8.0], 2).unwrap();
    assert_eq!(ma, vec![None, Some(3.0), Some(5.0), Some(7.0)]);

    let empty: [f64; 0] = [];
    assert!(rolling_mean(&empty, 3).unwrap().is_empty());
}

/// Test that a zero-width rolling window is rejected.
#[test]
fn test_rolling_mean_zero_window() {
    assert_eq!(
        rolling_mean(&[1.0, 2.0, 3.0], 0).unwrap_err(),
        SiglevelError::InvalidWindowSize(0)
    );
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test builder defaults.
#[test]
fn test_builder_defaults() {
    let leveler = Piecewise::<f64>::new().build().unwrap();
    assert_eq!(leveler.config().lookback, DEFAULT_LOOKBACK);
    assert_eq!(leveler.config().multiplier, DEFAULT_MULTIPLIER);
    assert!(!leveler.config().require_full_lookback);

    let remover = Drift::new().build().unwrap();
    assert_eq!(remover.config().window_size, DEFAULT_WINDOW_SIZE);
}

/// Test duplicate parameter detection.
#[test]
fn test_duplicate_parameters() {
    let err = Piecewise::<f64>::new().lookback(5).lookback(6).build().unwrap_err();
    assert_eq!(
        err,
        SiglevelError::DuplicateParameter {
            parameter: "lookback"
        }
    );

    let err = Drift::new().window_size(3).window_size(4).build().unwrap_err();
    assert_eq!(
        err,
        SiglevelError::DuplicateParameter {
            parameter: "window_size"
        }
    );
}

/// Test parameter validation at build time.
#[test]
fn test_invalid_parameters() {
    assert_eq!(
        Piecewise::<f64>::new().lookback(1).build().unwrap_err(),
        SiglevelError::InvalidLookback(1)
    );
    assert_eq!(
        Piecewise::new().multiplier(-1.0).build().unwrap_err(),
        SiglevelError::InvalidMultiplier(-1.0)
    );
    assert!(matches!(
        Piecewise::new().multiplier(f64::INFINITY).build(),
        Err(SiglevelError::InvalidMultiplier(_))
    ));
    assert_eq!(
        Drift::new().window_size(0).build().unwrap_err(),
        SiglevelError::InvalidWindowSize(0)
    );
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test lookup of a column that does not exist.
#[test]
fn test_missing_column() {
    let t = table(vec![1.0, 2.0, 3.0]);

    assert_eq!(
        fix_piecewise(&t, "other").unwrap_err(),
        SiglevelError::MissingColumn("other".into())
    );
    assert_eq!(
        background_corrector(&t, "other", 2).unwrap_err(),
        SiglevelError::MissingColumn("other".into())
    );
}

/// Test the segmenter with fewer than two values.
#[test]
fn test_single_value_is_insufficient() {
    let err = fix_piecewise(&table(vec![4.0]), "signal").unwrap_err();
    assert_eq!(err, SiglevelError::InsufficientData { got: 1, min: 2 });
}

/// Test empty columns.
///
/// The leveler needs values to segment; the drift remover returns an
/// equally empty output.
#[test]
fn test_empty_column() {
    let t = table(Vec::new());
    assert_eq!(fix_piecewise(&t, "signal").unwrap_err(), SiglevelError::EmptyInput);
    assert_eq!(background_corrector(&t, "signal", 10).unwrap(), Vec::new());
}

/// Test that drift removal on an empty sequence yields empty components.
#[test]
fn test_drift_empty_input() {
    let empty: [f64; 0] = [];
    let result = Drift::new().build().unwrap().fit(&empty).unwrap();

    assert!(result.is_empty());
    assert!(result.moving_average.is_empty());
    assert!(result.drift.is_empty());
    assert!(result.corrected.is_empty());
    assert_eq!(result.valid_len(), 0);
}

/// Test strict lookback policy.
#[test]
fn test_require_full_lookback() {
    let leveler = Piecewise::<f64>::new().require_full_lookback().build().unwrap();

    let err = leveler.fit(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap_err();
    assert_eq!(err, SiglevelError::InsufficientData { got: 5, min: 10 });

    let v: Vec<f64> = (0..10).map(f64::from).collect();
    assert!(leveler.fit(&v).is_ok());
}

/// Test that NaN and infinite values fail fast.
#[test]
fn test_non_finite_values_rejected() {
    let err = fix_piecewise(&table(vec![1.0, f64::NAN, 3.0]), "signal").unwrap_err();
    assert!(matches!(err, SiglevelError::NonNumericInput(ref s) if s.starts_with("value[1]")));

    let err = background_corrector(&table(vec![1.0, 2.0, f64::INFINITY]), "signal", 2)
        .unwrap_err();
    assert!(matches!(err, SiglevelError::NonNumericInput(ref s) if s.starts_with("value[2]")));
}

/// Test error messages.
#[test]
fn test_error_display() {
    assert_eq!(
        SiglevelError::MissingColumn("temp".into()).to_string(),
        "Column not found: 'temp'"
    );
    assert_eq!(
        SiglevelError::InsufficientData { got: 1, min: 2 }.to_string(),
        "Insufficient data: got 1 values, need at least 2"
    );
    assert_eq!(
        SiglevelError::InvalidWindowSize(0).to_string(),
        "Invalid window_size: 0 (must be at least 1)"
    );
}
