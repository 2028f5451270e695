use tracing::{debug, warn};

use crate::core::{NameMatcher, OwnershipError, StoreClient};
use crate::dataset::{Holder, OwnershipDataset, Portfolio};

use super::UpsertReport;
use super::wire::{HolderRecord, HolderRow, PortfolioRecord};

const HOLDERS_TABLE: &str = "ownership_holders";
const PORTFOLIOS_TABLE: &str = "ownership_portfolios";
const REFRESH_FN: &str = "refresh_ownership_summary";

/// Caps a percentage to `[0, 100]` before it is written, independently of
/// any clamping done at assembly.
fn cap_percent(value: f64, record: &str) -> f64 {
    let capped = value.clamp(0.0, 100.0);
    if capped != value {
        warn!(record, value, "capping percentage at the store boundary");
    }
    capped
}

fn holder_record(holder: &Holder) -> HolderRecord<'_> {
    HolderRecord {
        holder_name: &holder.holder_name,
        ticker: &holder.ticker,
        total_position: holder.total_position,
        total_percent_out: cap_percent(holder.total_percent_out, &holder.holder_name),
        latest_change: holder.latest_change,
        institution_type: holder.institution_type.as_deref(),
        country: holder.country.as_deref(),
        metro_area: holder.metro_area.as_deref(),
        insider_status: holder.insider_status.as_deref(),
        tree_level: holder.tree_level,
        filing_date: holder.filing_date,
    }
}

fn portfolio_record<'a>(portfolio: &'a Portfolio, holder_id: i64) -> PortfolioRecord<'a> {
    PortfolioRecord {
        holder_id,
        ticker: &portfolio.ticker,
        portfolio_name: &portfolio.portfolio_name,
        position: portfolio.position,
        percent_out: cap_percent(portfolio.percent_out, &portfolio.portfolio_name),
        percent_portfolio: portfolio
            .percent_portfolio
            .map(|p| cap_percent(p, &portfolio.portfolio_name)),
        latest_change: portfolio.latest_change,
        filing_date: portfolio.filing_date,
        source: portfolio.source.as_deref(),
        tree_level: portfolio.tree_level,
    }
}

/// Looks a holder up by its natural key, returning its row id when
/// present.
async fn lookup_holder(
    client: &StoreClient,
    name: &str,
    ticker: &str,
) -> Result<Option<i64>, OwnershipError> {
    let mut url = client.rest_url(HOLDERS_TABLE)?;
    url.query_pairs_mut()
        .append_pair("select", "id")
        .append_pair("holder_name", &format!("eq.{name}"))
        .append_pair("ticker", &format!("eq.{ticker}"));

    let resp = client.send_with_retry(client.http().get(url)).await?;
    let rows: Vec<HolderRow> = resp.json().await?;
    Ok(rows.first().map(|row| row.id))
}

async fn insert_holder(
    client: &StoreClient,
    record: &HolderRecord<'_>,
) -> Result<i64, OwnershipError> {
    let url = client.rest_url(HOLDERS_TABLE)?;
    let req = client
        .http()
        .post(url)
        .header("Prefer", "return=representation")
        .json(record);
    let resp = client.send_with_retry(req).await?;
    let rows: Vec<HolderRow> = resp.json().await?;
    rows.first()
        .map(|row| row.id)
        .ok_or_else(|| OwnershipError::Data("holder insert returned no representation".into()))
}

async fn update_holder(
    client: &StoreClient,
    id: i64,
    record: &HolderRecord<'_>,
) -> Result<(), OwnershipError> {
    let mut url = client.rest_url(HOLDERS_TABLE)?;
    url.query_pairs_mut().append_pair("id", &format!("eq.{id}"));
    client
        .send_with_retry(client.http().patch(url).json(record))
        .await?;
    Ok(())
}

/// Looks the holder up by natural key, then writes its fields: an update
/// when the key exists, an insert otherwise. Returns the store-side row
/// id.
async fn upsert_holder(client: &StoreClient, holder: &Holder) -> Result<i64, OwnershipError> {
    let record = holder_record(holder);
    match lookup_holder(client, &holder.holder_name, &holder.ticker).await? {
        Some(id) => {
            update_holder(client, id, &record).await?;
            Ok(id)
        }
        None => insert_holder(client, &record).await,
    }
}

async fn insert_portfolio(
    client: &StoreClient,
    portfolio: &Portfolio,
    holder_id: i64,
) -> Result<(), OwnershipError> {
    let url = client.rest_url(PORTFOLIOS_TABLE)?;
    let req = client
        .http()
        .post(url)
        .json(&portfolio_record(portfolio, holder_id));
    client.send_with_retry(req).await?;
    Ok(())
}

async fn refresh_summary(client: &StoreClient) -> Result<(), OwnershipError> {
    let url = client.rpc_url(REFRESH_FN)?;
    let req = client.http().post(url).json(&serde_json::json!({}));
    client.send_with_retry(req).await?;
    Ok(())
}

/// Writes one dataset into the store.
///
/// Holders go first, building the store-side name → id map the portfolio
/// pass re-resolves against; the arena indices assembled into the dataset
/// never cross this boundary. Row-level failures are counted and skipped.
pub(super) async fn upsert_dataset(
    client: &StoreClient,
    dataset: &OwnershipDataset,
) -> Result<UpsertReport, OwnershipError> {
    let mut report = UpsertReport::default();
    let mut stored: NameMatcher<i64> = NameMatcher::new();

    for holder in &dataset.holders {
        match upsert_holder(client, holder).await {
            Ok(id) => {
                stored.insert(holder.holder_name.clone(), id);
                report.holders_written += 1;
            }
            Err(err) => {
                warn!(holder = %holder.holder_name, %err, "failed to upsert holder");
                report.record_failures += 1;
            }
        }
    }

    for portfolio in &dataset.portfolios {
        let Some((holder_id, strategy)) = stored.resolve(&portfolio.holder_name) else {
            warn!(
                portfolio = %portfolio.portfolio_name,
                holder = %portfolio.holder_name,
                "no stored holder for portfolio, skipping"
            );
            report.portfolios_unresolved += 1;
            continue;
        };
        debug!(
            portfolio = %portfolio.portfolio_name,
            ?strategy,
            "re-resolved holder at the store boundary"
        );

        match insert_portfolio(client, portfolio, holder_id).await {
            Ok(()) => report.portfolios_written += 1,
            Err(err) => {
                warn!(
                    portfolio = %portfolio.portfolio_name,
                    %err,
                    "failed to insert portfolio"
                );
                report.record_failures += 1;
            }
        }
    }

    report.summary_refreshed = match refresh_summary(client).await {
        Ok(()) => true,
        Err(err) => {
            warn!(%err, "failed to refresh the ownership summary view");
            false
        }
    };

    Ok(report)
}
