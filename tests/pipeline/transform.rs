use ownership_map_rs::{HolderIdx, OwnershipDataset, OwnershipError, TransformBuilder};

fn fixture_dataset() -> OwnershipDataset {
    let content = crate::common::read_fixture("ownership_map.csv");
    TransformBuilder::new("WBD")
        .company_name("Warner Bros Discovery Inc")
        .run_str(&content)
        .unwrap()
}

#[test]
fn end_to_end_counts_and_totals() {
    let dataset = fixture_dataset();

    assert_eq!(dataset.ticker, "WBD");
    assert_eq!(dataset.company_name, "Warner Bros Discovery Inc");
    assert_eq!(dataset.summary.total_holders, 2);
    assert_eq!(dataset.summary.total_portfolios, 2);
    assert_eq!(dataset.summary.total_shares, 1_235_667);
    // Dataset-level percentages are a plain sum, not clamped.
    assert!((dataset.summary.total_percent_out - 18.89).abs() < 1e-9);
}

#[test]
fn holders_aggregate_across_tree_levels() {
    let dataset = fixture_dataset();

    let vanguard = &dataset.holders[0];
    assert_eq!(vanguard.holder_name, "Vanguard");
    assert_eq!(vanguard.total_position, 1_234_667);
    assert_eq!(vanguard.total_percent_out, 6.39);
    assert_eq!(vanguard.latest_change, 12_345);

    let acme = &dataset.holders[1];
    assert_eq!(acme.holder_name, "Acme Capital");
    assert_eq!(acme.total_position, 1000);
    assert_eq!(acme.total_percent_out, 12.5);
    assert_eq!(acme.latest_change, -500);
    assert_eq!(acme.institution_type.as_deref(), Some("Hedge Fund"));
}

#[test]
fn portfolios_link_and_cap() {
    let dataset = fixture_dataset();

    let index_fund = &dataset.portfolios[0];
    assert_eq!(
        index_fund.portfolio_name,
        "Vanguard Total Stock Market Index"
    );
    assert_eq!(index_fund.holder_idx, HolderIdx(0));
    assert_eq!(index_fund.holder_name, "Vanguard");
    assert_eq!(index_fund.position, 500_000);
    assert_eq!(index_fund.percent_out, 2.1);
    assert_eq!(index_fund.percent_portfolio, Some(45.0));

    let acme_fund = &dataset.portfolios[1];
    assert_eq!(acme_fund.portfolio_name, "Acme Fund I");
    assert_eq!(acme_fund.holder_idx, HolderIdx(1));
    assert_eq!(acme_fund.percent_out, 100.0);
    assert_eq!(acme_fund.percent_portfolio, Some(100.0));
}

#[test]
fn unresolvable_portfolios_are_excluded() {
    let dataset = fixture_dataset();

    assert!(
        dataset
            .portfolios
            .iter()
            .all(|p| p.portfolio_name != "Mystery Fund")
    );
}

#[test]
fn minimal_holder_and_leveraged_portfolio() {
    let content = "\
Holder Name;Portfolio Name;;Position;Latest Chg;% Out;% Portfolio;Filing Date;Source;Insider Status;Institution Type;Metro Area;Country;Tree Level
Acme Capital;;;1,000;0;12,5;;;;;;;;0
Acme Capital;Acme Fund I;;1,000;0;150%;;;;;;;;2
";
    let dataset = TransformBuilder::new("ACME")
        .skip_lines(0)
        .run_str(content)
        .unwrap();

    assert_eq!(dataset.holders.len(), 1);
    assert_eq!(dataset.holders[0].total_position, 1000);
    assert_eq!(dataset.holders[0].total_percent_out, 12.5);
    assert_eq!(dataset.portfolios.len(), 1);
    assert_eq!(dataset.portfolios[0].percent_out, 100.0);
    assert_eq!(dataset.portfolios[0].holder_name, "Acme Capital");
}

#[test]
fn missing_file_is_fatal() {
    let err = TransformBuilder::new("WBD")
        .run_path("tests/fixtures/does_not_exist.csv")
        .unwrap_err();
    assert!(matches!(err, OwnershipError::SourceRead { .. }));
}
