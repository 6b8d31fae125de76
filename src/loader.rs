// Spreadsheet loading. The header is validated wholesale before any row is
// parsed: a missing column rejects the whole file with every absent name
// listed. Row-level problems are softer, matching how messy exports arrive
// in practice: a row that fails to parse is skipped and counted.
use csv::ReaderBuilder;
use thiserror::Error;

use crate::types::{MonthlyRecord, RawRow};
use crate::util::{parse_f64_safe, parse_month_safe, parse_u32_safe};

/// Every column a monthly export must carry.
pub const REQUIRED_COLUMNS: [&str; 26] = [
    "Month",
    "Total_Invoices",
    "OnTime_Invoices",
    "Avg_Billing_Timeliness",
    "Avg_Invoice_Cycle_Time",
    "Planned_Milestones",
    "Invoiced_Milestones",
    "Corrected_Invoices",
    "Reissued_Invoices",
    "Disputed_Invoices",
    "Avg_Dispute_Resolution_Days",
    "Recognized_Revenue",
    "Invoiced_Amount",
    "CO_Approved",
    "CO_Invoiced",
    "Advance_Received",
    "Advance_Used",
    "WIP",
    "Avg_Daily_Billed_Revenue",
    "Old_WIP",
    "Monthly_Revenue",
    "Submitted_Packages",
    "Returned_Packages",
    "Avg_PM_Approval_Days",
    "Total_Cost_Reports",
    "Late_Cost_Reports",
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("spreadsheet is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("no usable rows in {0}")]
    Empty(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone)]
pub struct LoadReport {
    pub total_rows: usize,
    pub loaded_rows: usize,
    pub parse_errors: usize,
}

/// Load a monthly table from a CSV export.
///
/// The returned table is sorted ascending by month and immutable from the
/// caller's point of view for the rest of the session.
pub fn load_table(path: &str) -> Result<(Vec<MonthlyRecord>, LoadReport), LoadError> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = rdr.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h.trim() == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LoadError::MissingColumns(missing));
    }

    let mut total_rows = 0usize;
    let mut parse_errors = 0usize;
    let mut table: Vec<MonthlyRecord> = Vec::new();

    for result in rdr.deserialize::<RawRow>() {
        total_rows += 1;
        let row = match result {
            Ok(r) => r,
            Err(_) => {
                parse_errors += 1;
                continue;
            }
        };
        match clean_row(&row) {
            Some(rec) => table.push(rec),
            None => parse_errors += 1,
        }
    }

    if table.is_empty() {
        return Err(LoadError::Empty(path.to_string()));
    }
    table.sort_by_key(|r| r.month);

    let loaded_rows = table.len();
    Ok((table, LoadReport { total_rows, loaded_rows, parse_errors }))
}

/// Turn one raw row into a typed record. `None` means the row is unusable:
/// a bad month key, a count that isn't a non-negative integer, or a
/// negative amount.
fn clean_row(row: &RawRow) -> Option<MonthlyRecord> {
    // Counts must be non-negative integers; durations and amounts must be
    // non-negative floats.
    let count = |s: &Option<String>| parse_u32_safe(s.as_deref());
    let nonneg = |s: &Option<String>| parse_f64_safe(s.as_deref()).filter(|v| *v >= 0.0);

    Some(MonthlyRecord {
        month: parse_month_safe(row.month.as_deref())?,
        total_invoices: count(&row.total_invoices)?,
        on_time_invoices: count(&row.on_time_invoices)?,
        avg_billing_timeliness: nonneg(&row.avg_billing_timeliness)?,
        avg_invoice_cycle_time: nonneg(&row.avg_invoice_cycle_time)?,
        planned_milestones: count(&row.planned_milestones)?,
        invoiced_milestones: count(&row.invoiced_milestones)?,
        corrected_invoices: count(&row.corrected_invoices)?,
        reissued_invoices: count(&row.reissued_invoices)?,
        disputed_invoices: count(&row.disputed_invoices)?,
        avg_dispute_resolution_days: nonneg(&row.avg_dispute_resolution_days)?,
        recognized_revenue: nonneg(&row.recognized_revenue)?,
        invoiced_amount: nonneg(&row.invoiced_amount)?,
        co_approved: nonneg(&row.co_approved)?,
        co_invoiced: nonneg(&row.co_invoiced)?,
        advance_received: nonneg(&row.advance_received)?,
        advance_used: nonneg(&row.advance_used)?,
        wip: nonneg(&row.wip)?,
        avg_daily_billed_revenue: nonneg(&row.avg_daily_billed_revenue)?,
        old_wip: nonneg(&row.old_wip)?,
        monthly_revenue: nonneg(&row.monthly_revenue)?,
        submitted_packages: count(&row.submitted_packages)?,
        returned_packages: count(&row.returned_packages)?,
        avg_pm_approval_days: nonneg(&row.avg_pm_approval_days)?,
        total_cost_reports: count(&row.total_cost_reports)?,
        late_cost_reports: count(&row.late_cost_reports)?,
    })
}
