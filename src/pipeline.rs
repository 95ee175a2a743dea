//! Config-driven mining run: threshold, itemsets, rules.

use tracing::info;

use crate::apriori::apriori;
use crate::config::{Engine, MiningConfig, MinSupport};
use crate::error::Result;
use crate::fp::{find_frequent_itemsets, FrequentItemsets};
use crate::item::Item;
use crate::rules::{find_rules, Rule, RuleOptions};

/// Everything one mining run produced.
#[derive(Debug, Clone)]
pub struct MiningReport<I> {
    pub transaction_count: usize,
    /// The support threshold as an absolute count.
    pub min_count: usize,
    pub itemsets: FrequentItemsets<I>,
    pub rules: Vec<Rule<I>>,
}

/// Mines `transactions` with the engine and thresholds in `config`.
pub fn mine<I, T>(transactions: &[T], config: &MiningConfig) -> Result<MiningReport<I>>
where
    I: Item + Send + Sync,
    T: AsRef<[I]>,
{
    config.validate()?;

    let transaction_count = transactions.len();
    let min_count = config.effective_min_support().resolve(transaction_count)?;
    let engine = config.effective_engine();

    let itemsets = match engine {
        Engine::FpGrowth => find_frequent_itemsets(
            transactions,
            MinSupport::Count(min_count),
            config.effective_order(),
        )?,
        Engine::Apriori => apriori(transactions, MinSupport::Count(min_count))?,
    };
    info!(
        ?engine,
        transactions = transaction_count,
        min_count,
        itemsets = itemsets.len(),
        "frequent itemsets mined"
    );

    let options = RuleOptions {
        min_confidence: config.effective_min_confidence(),
        min_lift: config.min_lift,
        measures: config.measures.clone(),
    };
    let rules = find_rules(&itemsets, transaction_count, &options)?;
    info!(rules = rules.len(), "association rules derived");

    Ok(MiningReport {
        transaction_count,
        min_count,
        itemsets,
        rules,
    })
}
