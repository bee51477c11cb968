//! Percentage-based cost scaling.
//!
//! `new_cost = round(base_cost * percentage / 100)`, rounding halves away from
//! zero, then raised to the policy floor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ResourceType, RitualCostEntry};

/// Error type for scaling operations.
#[derive(Debug, Error, PartialEq)]
pub enum ScaleError {
    /// The percentage is not a number in `0..=Percentage::MAX`.
    #[error("'{input}' is not a valid percentage")]
    InvalidPercentage { input: String },
}

/// Convenience result type for scaling.
pub type ScaleResult<T> = Result<T, ScaleError>;

/// A validated percentage in `0..=Percentage::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Percentage(f64);

impl Percentage {
    /// The identity percentage.
    pub const FULL: Percentage = Percentage(100.0);

    /// Largest accepted percentage (a 10,000x multiplier).
    pub const MAX: f64 = 1_000_000.0;

    pub fn new(value: f64) -> ScaleResult<Self> {
        if value.is_finite() && (0.0..=Self::MAX).contains(&value) {
            // Normalizes -0.0 so Display never prints "-0".
            Ok(Self(value + 0.0))
        } else {
            Err(ScaleError::InvalidPercentage { input: value.to_string() })
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Compose two percentages, e.g. a class tier and a level modifier.
    pub fn combine(self, other: Percentage) -> Percentage {
        Percentage(self.0 * other.0 / 100.0)
    }

    pub fn is_identity(self) -> bool {
        self.0 == 100.0
    }
}

impl FromStr for Percentage {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| ScaleError::InvalidPercentage { input: s.to_string() })?;
        Self::new(value).map_err(|_| ScaleError::InvalidPercentage { input: s.to_string() })
    }
}

impl TryFrom<f64> for Percentage {
    type Error = ScaleError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percentage> for f64 {
    fn from(p: Percentage) -> f64 {
        p.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64's Display already omits a trailing ".0".
        write!(f, "{}", self.0)
    }
}

/// Rules applied after rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostPolicy {
    /// Lowest cost a ritual may scale to. `0` disables the floor.
    pub min_cost: u32,
}

impl CostPolicy {
    pub fn with_min_cost(min_cost: u32) -> Self {
        Self { min_cost }
    }
}

/// One ritual after scaling, in table order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledCost {
    pub name: &'static str,
    pub resource_type: ResourceType,
    pub new_cost: u32,
    pub base_cost: u32,
    pub percentage: Percentage,
}

impl ScaledCost {
    pub fn from_entry(entry: &RitualCostEntry, pct: Percentage, policy: CostPolicy) -> Self {
        Self {
            name: entry.name,
            resource_type: entry.resource_type,
            new_cost: scale_cost(entry.base_cost, pct, policy),
            base_cost: entry.base_cost,
            percentage: pct,
        }
    }
}

/// Scale a single base cost.
pub fn scale_cost(base_cost: u32, pct: Percentage, policy: CostPolicy) -> u32 {
    let raw = (f64::from(base_cost) * pct.value() / 100.0).round();
    // `as` saturates for out-of-range floats.
    let rounded = raw as u32;
    rounded.max(policy.min_cost)
}

/// Scale every entry of `table` by the same percentage, preserving order.
pub fn scale_table(table: &[RitualCostEntry], pct: Percentage, policy: CostPolicy) -> Vec<ScaledCost> {
    table.iter().map(|entry| ScaledCost::from_entry(entry, pct, policy)).collect()
}
