// KPI computation engine and traffic-light status classifier.
//
// `compute_kpis` is a pure function over one row of the monthly table; it
// never rounds and never formats. Rendering decisions live in the catalog's
// `FormatKind` and the report builders.
use std::collections::BTreeMap;

use thiserror::Error;

use crate::catalog::{Direction, KpiKey};
use crate::types::MonthlyRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KpiError {
    #[error("month index {index} is out of range for a table of {len} months")]
    MonthOutOfRange { index: usize, len: usize },
    #[error("cannot derive KPIs: {field} is zero for the selected month")]
    ZeroDenominator { field: &'static str },
}

/// Traffic-light classification of a KPI value against its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    OnTarget,
    NearTarget,
    OffTarget,
}

impl Status {
    /// Console label, matching the dashboard's green/amber/red lights.
    pub fn label(&self) -> &'static str {
        match self {
            Status::OnTarget => "Green",
            Status::NearTarget => "Amber",
            Status::OffTarget => "Red",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::OnTarget => "on_target",
            Status::NearTarget => "near_target",
            Status::OffTarget => "off_target",
        }
    }
}

/// The computed metrics of one month: exactly one value per derivation key.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiValues(BTreeMap<KpiKey, f64>);

impl KpiValues {
    /// Value of one metric. Every key is present by construction.
    pub fn get(&self, key: KpiKey) -> f64 {
        self.0[&key]
    }

    pub fn iter(&self) -> impl Iterator<Item = (KpiKey, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

fn ratio(num: f64, den: f64, field: &'static str) -> Result<f64, KpiError> {
    if den == 0.0 {
        return Err(KpiError::ZeroDenominator { field });
    }
    Ok(num / den)
}

fn pct(num: f64, den: f64, field: &'static str) -> Result<f64, KpiError> {
    Ok(ratio(num, den, field)? * 100.0)
}

/// Compute all KPIs for the month at `month_index`.
///
/// Percentages come back pre-scaled (`94.0` means 94%). A zero denominator
/// anywhere fails the whole computation with the offending column named;
/// nothing is defaulted and NaN is never produced.
pub fn compute_kpis(table: &[MonthlyRecord], month_index: usize) -> Result<KpiValues, KpiError> {
    let row = table.get(month_index).ok_or(KpiError::MonthOutOfRange {
        index: month_index,
        len: table.len(),
    })?;

    let total_invoices = row.total_invoices as f64;
    let mut values = BTreeMap::new();

    // Timeliness
    values.insert(KpiKey::BillingTimelinessDays, row.avg_billing_timeliness);
    values.insert(
        KpiKey::PctInvoicesOnTime,
        pct(row.on_time_invoices as f64, total_invoices, "Total_Invoices")?,
    );
    values.insert(KpiKey::InvoiceCycleTime, row.avg_invoice_cycle_time);
    values.insert(
        KpiKey::MissedMilestones,
        row.planned_milestones as f64 - row.invoiced_milestones as f64,
    );

    // Quality
    values.insert(
        KpiKey::InvoiceErrorRate,
        pct(row.corrected_invoices as f64, total_invoices, "Total_Invoices")?,
    );
    values.insert(
        KpiKey::InvoiceReissueRate,
        pct(row.reissued_invoices as f64, total_invoices, "Total_Invoices")?,
    );
    values.insert(
        KpiKey::DisputedInvoicePct,
        pct(row.disputed_invoices as f64, total_invoices, "Total_Invoices")?,
    );
    values.insert(KpiKey::DisputeResolutionDays, row.avg_dispute_resolution_days);

    // Coverage
    values.insert(
        KpiKey::BillingCoveragePct,
        pct(row.invoiced_amount, row.recognized_revenue, "Recognized_Revenue")?,
    );
    values.insert(
        KpiKey::UnbilledRevenuePct,
        pct(
            row.recognized_revenue - row.invoiced_amount,
            row.recognized_revenue,
            "Recognized_Revenue",
        )?,
    );
    values.insert(
        KpiKey::CoBillingRate,
        pct(row.co_invoiced, row.co_approved, "CO_Approved")?,
    );
    values.insert(
        KpiKey::AdvanceDrawdownRate,
        pct(row.advance_used, row.advance_received, "Advance_Received")?,
    );

    // WIP control
    values.insert(
        KpiKey::WipAgingDays,
        ratio(row.wip, row.avg_daily_billed_revenue, "Avg_Daily_Billed_Revenue")?,
    );
    values.insert(KpiKey::StaleWipPct, pct(row.old_wip, row.wip, "WIP")?);
    values.insert(
        KpiKey::WipToRevenueRatio,
        ratio(row.wip, row.monthly_revenue, "Monthly_Revenue")?,
    );

    // Collaboration
    values.insert(KpiKey::PmApprovalDays, row.avg_pm_approval_days);
    values.insert(
        KpiKey::IncompletePackagesPct,
        pct(
            row.returned_packages as f64,
            row.submitted_packages as f64,
            "Submitted_Packages",
        )?,
    );
    values.insert(
        KpiKey::LateCostInputsPct,
        pct(
            row.late_cost_reports as f64,
            row.total_cost_reports as f64,
            "Total_Cost_Reports",
        )?,
    );

    Ok(KpiValues(values))
}

/// Classify a value against its target.
///
/// Equality with the target is on-target in both directions. The amber band
/// is 10% past the target for lower-is-better KPIs and 10% short of it for
/// higher-is-better ones; with a zero target the band collapses and any
/// positive value is red.
pub fn classify(value: f64, target: f64, direction: Direction) -> Status {
    match direction {
        Direction::AtMost => {
            if value <= target {
                Status::OnTarget
            } else if value <= target * 1.1 {
                Status::NearTarget
            } else {
                Status::OffTarget
            }
        }
        Direction::AtLeast => {
            if value >= target {
                Status::OnTarget
            } else if value >= target * 0.9 {
                Status::NearTarget
            } else {
                Status::OffTarget
            }
        }
    }
}
