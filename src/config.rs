//! Mining configuration.
//! TOML-loadable; unset fields fall back to the `effective_*` defaults.

use serde::{Deserialize, Serialize};

use crate::error::{MiningError, Result};
use crate::rules::Measure;

/// Products this close to an integer are treated as that integer when a
/// support ratio is converted to a count.
const RATIO_TOLERANCE: f64 = 1e-9;

/// Minimum support, either as an absolute transaction count or as a ratio
/// of the transaction count.
///
/// A ratio resolves to `ceil(ratio * n)`, so an itemset is frequent exactly
/// when `count >= ratio * n`. Products within `1e-9` of an integer snap to
/// it first, so `0.3` of 10 transactions is 3 rather than 4.
///
/// Resolved thresholds are at least 1: an itemset that occurs in no
/// transaction is never reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MinSupport {
    Count(usize),
    Ratio(f64),
}

impl Default for MinSupport {
    fn default() -> Self {
        Self::Count(1)
    }
}

impl From<usize> for MinSupport {
    fn from(count: usize) -> Self {
        Self::Count(count)
    }
}

impl From<f64> for MinSupport {
    fn from(ratio: f64) -> Self {
        Self::Ratio(ratio)
    }
}

impl MinSupport {
    pub fn validate(self) -> Result<()> {
        if let Self::Ratio(ratio) = self {
            let reason = if !ratio.is_finite() {
                "ratio must be finite"
            } else if ratio < 0.0 {
                "ratio must not be negative"
            } else if ratio > 1.0 {
                "ratio must not exceed 1.0; pass an absolute count instead"
            } else {
                return Ok(());
            };
            return Err(MiningError::InvalidSupport {
                value: ratio,
                reason,
            });
        }
        Ok(())
    }

    /// Absolute count threshold for a collection of `transaction_count`
    /// transactions.
    pub fn resolve(self, transaction_count: usize) -> Result<usize> {
        self.validate()?;
        match self {
            Self::Count(count) => Ok(count.max(1)),
            Self::Ratio(ratio) => {
                let raw = ratio * transaction_count as f64;
                let nearest = raw.round();
                let count = if (raw - nearest).abs() < RATIO_TOLERANCE {
                    nearest
                } else {
                    raw.ceil()
                };
                Ok((count as usize).max(1))
            }
        }
    }
}

/// Order in which items are ranked by global frequency before insertion.
///
/// Both orders yield the same itemsets; descending shares more prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyOrder {
    #[default]
    Descending,
    Ascending,
}

impl FrequencyOrder {
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    pub fn is_descending(self) -> bool {
        matches!(self, Self::Descending)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    #[default]
    FpGrowth,
    Apriori,
}

/// Settings for a full mining run: itemsets, then rules.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum support. Default: count of 1.
    pub min_support: Option<MinSupport>,
    /// Frequency ranking used to build the prefix tree. Default: descending.
    pub order: Option<FrequencyOrder>,
    /// Mining engine. Default: FP-Growth.
    pub engine: Option<Engine>,
    /// Minimum rule confidence. Default: 0.5.
    pub min_confidence: Option<f64>,
    /// Minimum rule lift. Default: no lift filter.
    pub min_lift: Option<f64>,
    /// Extra interest measures attached to every rule.
    pub measures: Vec<Measure>,
}

impl MiningConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn effective_min_support(&self) -> MinSupport {
        self.min_support.unwrap_or_default()
    }

    pub fn effective_order(&self) -> FrequencyOrder {
        self.order.unwrap_or_default()
    }

    pub fn effective_engine(&self) -> Engine {
        self.engine.unwrap_or_default()
    }

    pub fn effective_min_confidence(&self) -> f64 {
        self.min_confidence.unwrap_or(0.5)
    }

    pub fn validate(&self) -> Result<()> {
        self.effective_min_support().validate()?;

        let confidence = self.effective_min_confidence();
        if !(0.0..=1.0).contains(&confidence) {
            return Err(MiningError::InvalidThreshold {
                name: "confidence",
                value: confidence,
            });
        }

        if let Some(lift) = self.min_lift {
            if !lift.is_finite() || lift < 0.0 {
                return Err(MiningError::InvalidThreshold {
                    name: "lift",
                    value: lift,
                });
            }
        }

        let mut seen = Vec::with_capacity(self.measures.len());
        for measure in &self.measures {
            if seen.contains(measure) {
                return Err(MiningError::Configuration(format!(
                    "measure `{}` listed more than once",
                    measure.name()
                )));
            }
            seen.push(*measure);
        }

        Ok(())
    }
}
