//! Maturity calculation
//!
//! Compound interest: `A = P(1 + r/n)^(nt)`, where `r` is the annual
//! rate as a fraction, `n` the compounding periods per year and `t` the
//! tenure in years. `nt` may be fractional (18 months = 1.5 years).
//!
//! The calculation never fails. Zero or negative principal and zero
//! tenure produce 0, infinity or NaN rather than an error; callers that
//! care use [`DepositInput::validate`](crate::models::DepositInput::validate).

use crate::models::{DepositInput, DepositResult};

/// Round to 2 decimal places, half away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the maturity of a fixed deposit
pub fn compute_maturity(input: &DepositInput) -> DepositResult {
    let principal = input.principal;
    let annual_rate = input.annual_rate_percent / 100.0;
    let tenure_years = input.tenure_years();
    let n = f64::from(input.compounding.periods_per_year());

    let maturity = principal * (1.0 + annual_rate / n).powf(n * tenure_years);

    let interest = maturity - principal;
    // Unguarded: tenure_years == 0 gives inf/NaN
    let effective_rate = ((maturity / principal - 1.0) / tenure_years) * 100.0;
    let growth = ((maturity - principal) / principal) * 100.0;

    DepositResult {
        maturity_amount: round2(maturity),
        interest_earned: round2(interest),
        principal,
        effective_rate: round2(effective_rate),
        total_tenure_years: tenure_years,
        growth_percent: round2(growth),
    }
}
