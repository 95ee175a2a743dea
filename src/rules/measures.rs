//! Interest measures for association rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MiningError;

/// Counts behind a rule `A -> B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contingency {
    /// Transactions containing both `A` and `B`.
    pub both: usize,
    /// Transactions containing `A`.
    pub left: usize,
    /// Transactions containing `B`.
    pub right: usize,
    pub total: usize,
}

impl Contingency {
    pub fn new(both: usize, left: usize, right: usize, total: usize) -> Self {
        Self {
            both,
            left,
            right,
            total,
        }
    }

    /// `A` without `B`.
    fn left_only(&self) -> f64 {
        self.left.saturating_sub(self.both) as f64
    }

    /// `B` without `A`.
    fn right_only(&self) -> f64 {
        self.right.saturating_sub(self.both) as f64
    }

    /// Neither `A` nor `B`.
    fn neither(&self) -> f64 {
        (self.total + self.both).saturating_sub(self.left + self.right) as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    /// `P(AB)`.
    Support,
    /// `P(B|A)`.
    Confidence,
    /// `P(AB) / (P(A) P(B))`.
    Lift,
    /// Phi coefficient; zero when either side occurs in every transaction
    /// or in none.
    Correlation,
    /// Cosine, `P(AB) / sqrt(P(A) P(B))`.
    Is,
    /// Odds ratio; infinite when `A` never occurs without `B` or the reverse.
    Alpha,
    /// Smyth and Goodman's J-measure, in bits.
    JMeasure,
}

impl Measure {
    pub const ALL: [Measure; 7] = [
        Measure::Support,
        Measure::Confidence,
        Measure::Lift,
        Measure::Correlation,
        Measure::Is,
        Measure::Alpha,
        Measure::JMeasure,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Support => "support",
            Self::Confidence => "confidence",
            Self::Lift => "lift",
            Self::Correlation => "correlation",
            Self::Is => "is",
            Self::Alpha => "alpha",
            Self::JMeasure => "j_measure",
        }
    }

    pub fn evaluate(self, counts: Contingency) -> f64 {
        let n = counts.total as f64;
        let both = counts.both as f64;
        let left = counts.left as f64;
        let right = counts.right as f64;

        match self {
            Self::Support => ratio(both, n),
            Self::Confidence => ratio(both, left),
            Self::Lift => ratio(both * n, left * right),
            Self::Correlation => {
                let denominator = (left * right * (n - left) * (n - right)).sqrt();
                ratio(n * both - left * right, denominator)
            }
            Self::Is => ratio(both, (left * right).sqrt()),
            Self::Alpha => {
                let numerator = both * counts.neither();
                let denominator = counts.left_only() * counts.right_only();
                if denominator == 0.0 {
                    f64::INFINITY
                } else {
                    numerator / denominator
                }
            }
            Self::JMeasure => j_measure(counts),
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Measure {
    type Err = MiningError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|measure| measure.name() == name)
            .ok_or_else(|| MiningError::Configuration(format!("unknown measure `{name}`")))
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// `P(AB) log(P(B|A) / P(B)) + P(A!B) log(P(!B|A) / P(!B))`; terms with zero
/// weight contribute nothing.
fn j_measure(counts: Contingency) -> f64 {
    let n = counts.total as f64;
    if counts.total == 0 || counts.left == 0 {
        return 0.0;
    }
    let p_a = counts.left as f64 / n;
    let p_b = counts.right as f64 / n;
    let p_b_given_a = counts.both as f64 / counts.left as f64;

    let term = |weight: f64, conditional: f64, marginal: f64| {
        if weight == 0.0 || marginal == 0.0 {
            0.0
        } else {
            weight * (conditional / marginal).log2()
        }
    };

    p_a * (term(p_b_given_a, p_b_given_a, p_b)
        + term(1.0 - p_b_given_a, 1.0 - p_b_given_a, 1.0 - p_b))
}
