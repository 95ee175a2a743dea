use itemsets::{
    mine, ErrorKind, FrequencyOrder, Measure, MinSupport, MiningConfig, MiningError,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn baskets() -> Vec<Vec<String>> {
    [
        "a,b", "b,c,d", "a,c,d,e", "a,d,e", "a,b,c", "a,b,c,d", "a", "a,b,c", "a,b,d", "b,c,e",
    ]
    .iter()
    .map(|line| line.split(',').map(str::to_owned).collect())
    .collect()
}

#[test]
fn mines_itemsets_and_rules_from_toml_config() {
    init_tracing();
    let config = MiningConfig::from_toml_str(
        r#"
        min_support = 0.2
        min_confidence = 0.6
        min_lift = 1.0
        measures = ["is", "alpha"]
        "#,
    )
    .unwrap();

    let report = mine(&baskets(), &config).unwrap();

    assert_eq!(report.transaction_count, 10);
    assert_eq!(report.min_count, 2);
    let ab = ["a".to_owned(), "b".to_owned()];
    assert_eq!(report.itemsets.support_of(&ab), Some(5));

    assert!(!report.rules.is_empty());
    for rule in &report.rules {
        assert!(rule.confidence >= 0.6);
        assert!(rule.lift >= 1.0);
        assert_eq!(
            rule.scores.iter().map(|(measure, _)| *measure).collect::<Vec<_>>(),
            vec![Measure::Is, Measure::Alpha]
        );
    }

    // {d,e} = 2, {e} = 3, {d} = 5: e -> d has confidence 2/3 and lift 4/3
    let e_to_d = report
        .rules
        .iter()
        .find(|rule| rule.antecedent == ["e"] && rule.consequent == ["d"])
        .unwrap();
    assert!((e_to_d.lift - 4.0 / 3.0).abs() < 1e-9);
}

#[test]
fn engines_produce_the_same_report() {
    let fp_config = MiningConfig {
        min_support: Some(MinSupport::Count(2)),
        order: Some(FrequencyOrder::Ascending),
        ..MiningConfig::default()
    };
    let apriori_config = MiningConfig::from_toml_str(
        r#"
        min_support = 2
        engine = "apriori"
        "#,
    )
    .unwrap();

    let mut fp = mine(&baskets(), &fp_config).unwrap();
    let mut level_wise = mine(&baskets(), &apriori_config).unwrap();

    fp.itemsets.sort_canonical();
    level_wise.itemsets.sort_canonical();
    assert_eq!(fp.itemsets, level_wise.itemsets);
    assert_eq!(fp.rules.len(), level_wise.rules.len());
}

#[test]
fn rejects_the_root_marker_before_mining() {
    let mut transactions = baskets();
    transactions[3].push("root".to_owned());

    let err = mine(&transactions, &MiningConfig::default()).unwrap_err();
    assert!(matches!(err, MiningError::ReservedItem { transaction: 3 }));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn rejects_invalid_settings() {
    let config = MiningConfig {
        min_confidence: Some(-0.1),
        ..MiningConfig::default()
    };
    let err = mine(&baskets(), &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);

    let config = MiningConfig {
        min_support: Some(MinSupport::Ratio(2.0)),
        ..MiningConfig::default()
    };
    let err = mine(&baskets(), &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}
