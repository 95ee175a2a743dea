//! Association rules derived from frequent itemsets.

pub mod combinations;
pub mod measures;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{MiningError, Result};
use crate::fp::FrequentItemsets;
use crate::item::Item;

pub use measures::{Contingency, Measure};

use combinations::{for_each_combination, split_at_positions};

/// A rule `antecedent -> consequent`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule<I> {
    pub antecedent: Vec<I>,
    pub consequent: Vec<I>,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    /// Extra measures, in the order they were requested.
    pub scores: Vec<(Measure, f64)>,
}

impl<I> Rule<I> {
    pub fn score(&self, measure: Measure) -> Option<f64> {
        match measure {
            Measure::Support => Some(self.support),
            Measure::Confidence => Some(self.confidence),
            Measure::Lift => Some(self.lift),
            _ => self
                .scores
                .iter()
                .find(|(candidate, _)| *candidate == measure)
                .map(|&(_, value)| value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleOptions {
    pub min_confidence: f64,
    pub min_lift: Option<f64>,
    pub measures: Vec<Measure>,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            min_confidence: 0.5,
            min_lift: None,
            measures: Vec::new(),
        }
    }
}

impl RuleOptions {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(MiningError::InvalidThreshold {
                name: "confidence",
                value: self.min_confidence,
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
        Ok(())
    }
}

/// Derives every rule `A -> B` with `A ∪ B` a frequent itemset, `A` and `B`
/// non-empty and disjoint, confidence of at least `min_confidence` and, when
/// set, lift of at least `min_lift`.
///
/// `transaction_count` is the number of transactions the itemsets were
/// mined from. Rules come out grouped by itemset in `itemsets` order, then
/// by antecedent size, then by antecedent in lexicographic position order.
pub fn find_rules<I>(
    itemsets: &FrequentItemsets<I>,
    transaction_count: usize,
    options: &RuleOptions,
) -> Result<Vec<Rule<I>>>
where
    I: Item + Send + Sync,
{
    options.validate()?;
    if transaction_count == 0 {
        return Ok(Vec::new());
    }

    let index = itemsets.support_index();

    let rules: Vec<Rule<I>> = (0..itemsets.len())
        .into_par_iter()
        .flat_map_iter(|idx| {
            let (itemset, support) = itemsets.get(idx);
            let mut rules = Vec::new();

            for size in 1..itemset.len() {
                for_each_combination(itemset.len(), size, |positions| {
                    let (antecedent, consequent) = split_at_positions(itemset, positions);
                    let (Some(&left), Some(&right)) = (
                        index.get(antecedent.as_slice()),
                        index.get(consequent.as_slice()),
                    ) else {
                        warn!(?antecedent, ?consequent, "subset of a frequent itemset is missing");
                        return;
                    };

                    let counts = Contingency::new(support, left, right, transaction_count);
                    if let Some(rule) = evaluate(antecedent, consequent, counts, options) {
                        rules.push(rule);
                    }
                });
            }

            rules
        })
        .collect();

    debug!(
        itemsets = itemsets.len(),
        rules = rules.len(),
        min_confidence = options.min_confidence,
        min_lift = ?options.min_lift,
        "derived association rules"
    );

    Ok(rules)
}

fn evaluate<I>(
    antecedent: Vec<I>,
    consequent: Vec<I>,
    counts: Contingency,
    options: &RuleOptions,
) -> Option<Rule<I>> {
    let confidence = Measure::Confidence.evaluate(counts);
    if confidence < options.min_confidence {
        return None;
    }

    let lift = Measure::Lift.evaluate(counts);
    if options.min_lift.is_some_and(|min_lift| lift < min_lift) {
        return None;
    }

    Some(Rule {
        antecedent,
        consequent,
        support: Measure::Support.evaluate(counts),
        confidence,
        lift,
        scores: options
            .measures
            .iter()
            .map(|&measure| (measure, measure.evaluate(counts)))
            .collect(),
    })
}
