//! Core data models for fdcalc
//!
//! A [`DepositInput`] goes in, a [`DepositResult`] comes out. Both are
//! plain values, rebuilt from scratch on every change.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Unit the tenure magnitude is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TenureUnit {
    #[default]
    Years,
    Months,
}

impl TenureUnit {
    pub const ALL: [TenureUnit; 2] = [TenureUnit::Years, TenureUnit::Months];

    /// Canonical tag used in query strings and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            TenureUnit::Years => "years",
            TenureUnit::Months => "months",
        }
    }
}

impl std::fmt::Display for TenureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TenureUnit {
    type Err = ParseEnumError;

    /// Exact match only: `Years` or ` years` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "years" => Ok(TenureUnit::Years),
            "months" => Ok(TenureUnit::Months),
            _ => Err(ParseEnumError::TenureUnit(s.to_string())),
        }
    }
}

/// How often interest is credited and compounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Compounding {
    Monthly,
    #[default]
    Quarterly,
    HalfYearly,
    Yearly,
}

impl Compounding {
    pub const ALL: [Compounding; 4] = [
        Compounding::Monthly,
        Compounding::Quarterly,
        Compounding::HalfYearly,
        Compounding::Yearly,
    ];

    /// Compounding periods per year (`n` in the formula)
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Compounding::Monthly => 12,
            Compounding::Quarterly => 4,
            Compounding::HalfYearly => 2,
            Compounding::Yearly => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Compounding::Monthly => "monthly",
            Compounding::Quarterly => "quarterly",
            Compounding::HalfYearly => "half-yearly",
            Compounding::Yearly => "yearly",
        }
    }

    /// Human label, e.g. "half yearly"
    pub fn label(&self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl std::fmt::Display for Compounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Compounding {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Compounding::Monthly),
            "quarterly" => Ok(Compounding::Quarterly),
            "half-yearly" => Ok(Compounding::HalfYearly),
            "yearly" => Ok(Compounding::Yearly),
            _ => Err(ParseEnumError::Compounding(s.to_string())),
        }
    }
}

/// Errors from parsing closed string tags
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    #[error("Unknown tenure unit '{0}'. Valid units: years, months")]
    TenureUnit(String),

    #[error("Unknown compounding '{0}'. Valid values: monthly, quarterly, half-yearly, yearly")]
    Compounding(String),
}

/// Parameters of a fixed deposit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepositInput {
    pub principal: f64,
    /// Nominal annual rate as a percentage (7.5 means 7.5%)
    #[serde(rename = "rate")]
    pub annual_rate_percent: f64,
    #[serde(rename = "tenure")]
    pub tenure_value: f64,
    pub tenure_unit: TenureUnit,
    pub compounding: Compounding,
}

impl Default for DepositInput {
    fn default() -> Self {
        Self {
            principal: 100_000.0,
            annual_rate_percent: 7.5,
            tenure_value: 5.0,
            tenure_unit: TenureUnit::Years,
            compounding: Compounding::Quarterly,
        }
    }
}

impl DepositInput {
    /// Tenure expressed in years (unrounded)
    pub fn tenure_years(&self) -> f64 {
        match self.tenure_unit {
            TenureUnit::Years => self.tenure_value,
            TenureUnit::Months => self.tenure_value / 12.0,
        }
    }

    /// Reject input a user almost certainly did not mean.
    ///
    /// The calculator itself never calls this; it is total over all
    /// floats. Front ends call it before computing.
    pub fn validate(&self) -> Result<(), InputError> {
        let fields = [
            ("principal", self.principal),
            ("rate", self.annual_rate_percent),
            ("tenure", self.tenure_value),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(InputError::NotFinite { field });
            }
        }
        if self.principal <= 0.0 {
            return Err(InputError::NonPositivePrincipal(self.principal));
        }
        if self.annual_rate_percent < 0.0 {
            return Err(InputError::NegativeRate(self.annual_rate_percent));
        }
        if self.tenure_value <= 0.0 {
            return Err(InputError::NonPositiveTenure(self.tenure_value));
        }
        Ok(())
    }
}

/// Reasons a deposit input is rejected by [`DepositInput::validate`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("principal must be greater than zero (got {0})")]
    NonPositivePrincipal(f64),

    #[error("rate cannot be negative (got {0})")]
    NegativeRate(f64),

    #[error("tenure must be greater than zero (got {0})")]
    NonPositiveTenure(f64),
}

/// A deposit input with any subset of fields present.
///
/// Produced by decoding a link; absent fields are filled by the caller
/// with [`PartialDepositInput::merge_onto`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PartialDepositInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<f64>,
    #[serde(default, rename = "rate", skip_serializing_if = "Option::is_none")]
    pub annual_rate_percent: Option<f64>,
    #[serde(default, rename = "tenure", skip_serializing_if = "Option::is_none")]
    pub tenure_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenure_unit: Option<TenureUnit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compounding: Option<Compounding>,
}

impl PartialDepositInput {
    /// Number of populated fields (0-5)
    pub fn len(&self) -> usize {
        [
            self.principal.is_some(),
            self.annual_rate_percent.is_some(),
            self.tenure_value.is_some(),
            self.tenure_unit.is_some(),
            self.compounding.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fields present in `other` replace ours
    pub fn overlay(self, other: PartialDepositInput) -> PartialDepositInput {
        PartialDepositInput {
            principal: other.principal.or(self.principal),
            annual_rate_percent: other.annual_rate_percent.or(self.annual_rate_percent),
            tenure_value: other.tenure_value.or(self.tenure_value),
            tenure_unit: other.tenure_unit.or(self.tenure_unit),
            compounding: other.compounding.or(self.compounding),
        }
    }

    /// Fill absent fields from `base`
    pub fn merge_onto(&self, base: DepositInput) -> DepositInput {
        DepositInput {
            principal: self.principal.unwrap_or(base.principal),
            annual_rate_percent: self.annual_rate_percent.unwrap_or(base.annual_rate_percent),
            tenure_value: self.tenure_value.unwrap_or(base.tenure_value),
            tenure_unit: self.tenure_unit.unwrap_or(base.tenure_unit),
            compounding: self.compounding.unwrap_or(base.compounding),
        }
    }
}

impl From<DepositInput> for PartialDepositInput {
    fn from(input: DepositInput) -> Self {
        Self {
            principal: Some(input.principal),
            annual_rate_percent: Some(input.annual_rate_percent),
            tenure_value: Some(input.tenure_value),
            tenure_unit: Some(input.tenure_unit),
            compounding: Some(input.compounding),
        }
    }
}

/// Outcome of a maturity calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepositResult {
    pub maturity_amount: f64,
    pub interest_earned: f64,
    pub principal: f64,
    /// Annualized realized rate, percent
    pub effective_rate: f64,
    pub total_tenure_years: f64,
    pub growth_percent: f64,
}
