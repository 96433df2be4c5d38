//! Interest calculations.
//!
//! Provides:
//! - Simple (linear) interest
//! - Compound interest at an arbitrary number of periods per year
//!
//! Rates are on the percentage scale (`5.0` means 5%). All functions
//! validate their arguments in full before computing and return the
//! accrued interest, not the total amount.

use log::trace;

use crate::error::{AccrueError, AccrueResult};
use crate::frequency::CompoundingFrequency;

// ============================================================================
// Simple Interest
// ============================================================================

/// Calculate simple (non-compounding) interest.
///
/// # Formula
///
/// ```text
/// Interest = Principal × Rate × Time / 100
/// ```
///
/// # Arguments
///
/// * `principal` - Base amount, must be non-negative
/// * `rate` - Annual rate as a percentage (e.g., 5.0 for 5%), must be non-negative
/// * `time` - Duration in years, must be non-negative
///
/// # Returns
///
/// Accrued interest. Zero in any factor yields zero.
///
/// # Example
///
/// ```rust
/// use accrue::interest::calculate_simple_interest;
///
/// let interest = calculate_simple_interest(1000.0, 5.0, 2.0)?;
/// assert_eq!(interest, 100.0);
/// # Ok::<(), accrue::AccrueError>(())
/// ```
pub fn calculate_simple_interest(principal: f64, rate: f64, time: f64) -> AccrueResult<f64> {
    if principal < 0.0 || rate < 0.0 || time < 0.0 {
        return Err(AccrueError::invalid_input(
            "arguments must be non-negative",
        ));
    }

    let interest = principal * rate * time / 100.0;

    trace!(
        "simple interest: principal={} rate={} time={} -> {}",
        principal,
        rate,
        time,
        interest
    );

    Ok(interest)
}

// ============================================================================
// Compound Interest
// ============================================================================

/// Calculate compound interest with annual compounding.
///
/// Equivalent to [`calculate_compound_interest`] with one period per year.
pub fn calculate_compound_interest_annual(
    principal: f64,
    rate: f64,
    time: f64,
) -> AccrueResult<f64> {
    calculate_compound_interest(
        principal,
        rate,
        time,
        CompoundingFrequency::Annual.periods_per_year(),
    )
}

/// Calculate compound interest at `periods_per_year` compounding periods.
///
/// # Formula
///
/// ```text
/// Interest = Principal × (1 + Rate / (100 × n))^(n × Time) - Principal
/// ```
///
/// where `n` is the number of compounding periods per year. The result is
/// the accrued interest only, not the total amount.
///
/// # Arguments
///
/// * `principal` - Base amount, must be non-negative
/// * `rate` - Annual rate as a percentage (e.g., 5.0 for 5%), must be non-negative
/// * `time` - Duration in years, must be non-negative
/// * `periods_per_year` - Compounding periods per year, must be at least 1.
///   [`CompoundingFrequency`] provides the conventional counts.
///
/// # Returns
///
/// Accrued interest at full `f64` precision; no rounding is applied.
///
/// # Example
///
/// ```rust
/// use accrue::interest::calculate_compound_interest;
/// use accrue::CompoundingFrequency;
///
/// // 12% nominal, compounded monthly for one year
/// let interest = calculate_compound_interest(
///     1000.0,
///     12.0,
///     1.0,
///     CompoundingFrequency::Monthly.periods_per_year(),
/// )?;
/// assert!((interest - 126.83).abs() < 0.01);
/// # Ok::<(), accrue::AccrueError>(())
/// ```
pub fn calculate_compound_interest(
    principal: f64,
    rate: f64,
    time: f64,
    periods_per_year: u32,
) -> AccrueResult<f64> {
    if principal < 0.0 || rate < 0.0 || time < 0.0 {
        return Err(AccrueError::invalid_input(
            "principal, rate and time must be non-negative",
        ));
    }

    if periods_per_year == 0 {
        return Err(AccrueError::InvalidFrequency {
            value: periods_per_year,
        });
    }

    let n = f64::from(periods_per_year);
    let amount = principal * (1.0 + rate / (100.0 * n)).powf(n * time);
    let interest = amount - principal;

    trace!(
        "compound interest: principal={} rate={} time={} n={} -> {}",
        principal,
        rate,
        time,
        periods_per_year,
        interest
    );

    Ok(interest)
}
