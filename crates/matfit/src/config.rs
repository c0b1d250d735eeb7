use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Entries closer to zero than this are treated as elimination noise.
pub const DEFAULT_ZERO_TOLERANCE: f64 = 1e-10;

/// Tuning knobs for row reduction and inversion.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EliminationConfig {
    /// Magnitude below which an entry is snapped to zero and a pivot is
    /// considered missing.
    pub zero_tolerance: f64,

    pub pivot_strategy: PivotStrategy,

    /// Snap near-zero entries after reduction and multiplication.
    pub correct_zeros: bool,
}

/// How `find_pivot` chooses the pivot row for a column.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PivotStrategy {
    /// Keep a nonzero diagonal, else take the first nonzero row from the top.
    #[default]
    FirstNonZero,
    /// Largest magnitude entry at or below the diagonal.
    Partial,
}

impl FromStr for PivotStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first_nonzero" | "first-nonzero" | "first" => Ok(PivotStrategy::FirstNonZero),
            "partial" | "max" => Ok(PivotStrategy::Partial),
            _ => Err(format!(
                "Unknown pivot strategy: {}. Expected `first_nonzero` or `partial`",
                s
            )),
        }
    }
}

impl EliminationConfig {
    pub fn new(zero_tolerance: f64, pivot_strategy: PivotStrategy, correct_zeros: bool) -> Self {
        Self {
            zero_tolerance,
            pivot_strategy,
            correct_zeros,
        }
    }

    /// Same settings with zero correction switched on.
    pub fn with_zero_correction(mut self) -> Self {
        self.correct_zeros = true;
        self
    }
}

impl Default for EliminationConfig {
    fn default() -> Self {
        Self {
            zero_tolerance: DEFAULT_ZERO_TOLERANCE,
            pivot_strategy: PivotStrategy::FirstNonZero,
            correct_zeros: false,
        }
    }
}
