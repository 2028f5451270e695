use ownership_map_rs::RawRow;
use ownership_map_rs::dataset::aggregate_holders;

fn holder_row(name: &str, position: &str, percent_out: &str, tree_level: u32) -> RawRow {
    RawRow {
        holder_name: Some(name.to_string()),
        fallback_name: None,
        portfolio_name: None,
        position: position.to_string(),
        latest_change: "0".to_string(),
        percent_out: percent_out.to_string(),
        percent_portfolio: None,
        filing_date: None,
        source: None,
        insider_status: None,
        institution_type: None,
        metro_area: None,
        country: None,
        tree_level,
    }
}

#[test]
fn duplicate_holders_sum_positions_and_take_max_percent() {
    let rows = vec![
        holder_row("Vanguard", "1,000", "60", 0),
        holder_row("Vanguard", "500", "45", 1),
    ];
    let holders = aggregate_holders(&rows, "WBD");

    assert_eq!(holders.len(), 1);
    assert_eq!(holders[0].total_position, 1500);
    assert_eq!(holders[0].total_percent_out, 60.0);
    assert_eq!(holders[0].ticker, "WBD");
}

#[test]
fn first_seen_order_is_preserved() {
    let rows = vec![
        holder_row("BlackRock", "1", "1", 0),
        holder_row("Vanguard", "1", "1", 0),
        holder_row("BlackRock", "1", "1", 1),
        holder_row("State Street", "1", "1", 0),
    ];
    let holders = aggregate_holders(&rows, "WBD");

    let names: Vec<&str> = holders.iter().map(|h| h.holder_name.as_str()).collect();
    assert_eq!(names, ["BlackRock", "Vanguard", "State Street"]);
}

#[test]
fn attributes_come_from_the_first_occurrence() {
    let mut first = holder_row("Vanguard", "1", "1", 0);
    first.country = Some("United States".to_string());
    let mut second = holder_row("Vanguard", "1", "2", 1);
    second.country = Some("Ireland".to_string());

    let holders = aggregate_holders(&[first, second], "WBD");

    assert_eq!(holders[0].country.as_deref(), Some("United States"));
    assert_eq!(holders[0].tree_level, 0);
}

#[test]
fn latest_change_sums_with_sign() {
    let mut first = holder_row("Vanguard", "1", "1", 0);
    first.latest_change = "-500".to_string();
    let mut second = holder_row("Vanguard", "1", "1", 1);
    second.latest_change = "1,200".to_string();

    let holders = aggregate_holders(&[first, second], "WBD");

    assert_eq!(holders[0].latest_change, 700);
}

#[test]
fn negative_positions_floor_at_zero() {
    let holders = aggregate_holders(&[holder_row("Vanguard", "-100", "1", 0)], "WBD");
    assert_eq!(holders[0].total_position, 0);
}

#[test]
fn rows_without_a_name_are_ignored() {
    let mut nameless = holder_row("x", "1", "1", 0);
    nameless.holder_name = None;

    let holders = aggregate_holders(&[nameless], "WBD");
    assert!(holders.is_empty());
}
