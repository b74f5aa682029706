//! siglevel Column Correction Examples
//!
//! This example demonstrates:
//! - Leveling a sensor column with step discontinuities
//! - Tuning the jump threshold
//! - Removing moving-average drift and inspecting the drift itself

use siglevel::prelude::*;

fn main() -> Result<(), SiglevelError> {
    println!("{}", "=".repeat(80));
    println!("siglevel Column Correction Examples");
    println!("{}", "=".repeat(80));
    println!();

    let table = sensor_table()?;

    example_1_fix_piecewise(&table)?;
    example_2_tuned_threshold(&table)?;
    example_3_drift(&table)?;

    Ok(())
}

/// Slowly rising signal with two sensor resets.
fn sensor_table() -> Result<Table<f64>, SiglevelError> {
    let time: Vec<f64> = (0..40).map(f64::from).collect();
    let signal: Vec<f64> = time
        .iter()
        .map(|&t| {
            let step = if t >= 25.0 {
                -80.0
            } else if t >= 12.0 {
                150.0
            } else {
                0.0
            };
            0.5 * t + 0.2 * (t * 0.7).sin() + step
        })
        .collect();

    Table::new()
        .with_column("time", time)?
        .with_column("signal", signal)
}

/// Example 1: Default leveling through the column function
fn example_1_fix_piecewise(table: &Table<f64>) -> Result<(), SiglevelError> {
    println!("Example 1: fix_piecewise");
    println!("{}", "-".repeat(80));

    let (regions, corrected) = fix_piecewise(table, "signal")?;
    println!("Regions found: {}", regions.len());
    println!("Last corrected value: {:.4}", corrected[corrected.len() - 1]);
    println!();

    Ok(())
}

/// Example 2: Configured leveler with a tighter threshold
fn example_2_tuned_threshold(table: &Table<f64>) -> Result<(), SiglevelError> {
    println!("Example 2: Tuned threshold");
    println!("{}", "-".repeat(80));

    let leveler = Piecewise::new().lookback(8).multiplier(20.0).build()?;
    let result = leveler.fit_column(table, "signal")?;
    println!("{}", result);

    Ok(())
}

/// Example 3: Drift removal with the drift exposed
fn example_3_drift(table: &Table<f64>) -> Result<(), SiglevelError> {
    println!("Example 3: Drift removal");
    println!("{}", "-".repeat(80));

    let remover = Drift::new().window_size(5).build()?;
    let result = remover.fit_column(table, "signal")?;
    println!("{}", result);

    Ok(())
}
