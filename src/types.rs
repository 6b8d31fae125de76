use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Month")]
    pub month: Option<String>,
    #[serde(rename = "Total_Invoices")]
    pub total_invoices: Option<String>,
    #[serde(rename = "OnTime_Invoices")]
    pub on_time_invoices: Option<String>,
    #[serde(rename = "Avg_Billing_Timeliness")]
    pub avg_billing_timeliness: Option<String>,
    #[serde(rename = "Avg_Invoice_Cycle_Time")]
    pub avg_invoice_cycle_time: Option<String>,
    #[serde(rename = "Planned_Milestones")]
    pub planned_milestones: Option<String>,
    #[serde(rename = "Invoiced_Milestones")]
    pub invoiced_milestones: Option<String>,
    #[serde(rename = "Corrected_Invoices")]
    pub corrected_invoices: Option<String>,
    #[serde(rename = "Reissued_Invoices")]
    pub reissued_invoices: Option<String>,
    #[serde(rename = "Disputed_Invoices")]
    pub disputed_invoices: Option<String>,
    #[serde(rename = "Avg_Dispute_Resolution_Days")]
    pub avg_dispute_resolution_days: Option<String>,
    #[serde(rename = "Recognized_Revenue")]
    pub recognized_revenue: Option<String>,
    #[serde(rename = "Invoiced_Amount")]
    pub invoiced_amount: Option<String>,
    #[serde(rename = "CO_Approved")]
    pub co_approved: Option<String>,
    #[serde(rename = "CO_Invoiced")]
    pub co_invoiced: Option<String>,
    #[serde(rename = "Advance_Received")]
    pub advance_received: Option<String>,
    #[serde(rename = "Advance_Used")]
    pub advance_used: Option<String>,
    #[serde(rename = "WIP")]
    pub wip: Option<String>,
    #[serde(rename = "Avg_Daily_Billed_Revenue")]
    pub avg_daily_billed_revenue: Option<String>,
    #[serde(rename = "Old_WIP")]
    pub old_wip: Option<String>,
    #[serde(rename = "Monthly_Revenue")]
    pub monthly_revenue: Option<String>,
    #[serde(rename = "Submitted_Packages")]
    pub submitted_packages: Option<String>,
    #[serde(rename = "Returned_Packages")]
    pub returned_packages: Option<String>,
    #[serde(rename = "Avg_PM_Approval_Days")]
    pub avg_pm_approval_days: Option<String>,
    #[serde(rename = "Total_Cost_Reports")]
    pub total_cost_reports: Option<String>,
    #[serde(rename = "Late_Cost_Reports")]
    pub late_cost_reports: Option<String>,
}

/// One month of invoicing activity, cleaned and typed. The table the
/// dashboard works over is a `Vec<MonthlyRecord>` sorted ascending by
/// `month`, immutable once loaded.
#[derive(Debug, Clone)]
pub struct MonthlyRecord {
    pub month: NaiveDate,
    pub total_invoices: u32,
    pub on_time_invoices: u32,
    pub avg_billing_timeliness: f64,
    pub avg_invoice_cycle_time: f64,
    pub planned_milestones: u32,
    pub invoiced_milestones: u32,
    pub corrected_invoices: u32,
    pub reissued_invoices: u32,
    pub disputed_invoices: u32,
    pub avg_dispute_resolution_days: f64,
    pub recognized_revenue: f64,
    pub invoiced_amount: f64,
    pub co_approved: f64,
    pub co_invoiced: f64,
    pub advance_received: f64,
    pub advance_used: f64,
    pub wip: f64,
    pub avg_daily_billed_revenue: f64,
    pub old_wip: f64,
    pub monthly_revenue: f64,
    pub submitted_packages: u32,
    pub returned_packages: u32,
    pub avg_pm_approval_days: f64,
    pub total_cost_reports: u32,
    pub late_cost_reports: u32,
}

impl MonthlyRecord {
    /// Month label as shown in the month picker, e.g. `December 2024`.
    pub fn label(&self) -> String {
        self.month.format("%B %Y").to_string()
    }
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct GmFocusRow {
    #[serde(rename = "KPI")]
    #[tabled(rename = "KPI")]
    pub kpi: String,
    #[serde(rename = "Category")]
    #[tabled(rename = "Category")]
    pub category: String,
    #[serde(rename = "Actual")]
    #[tabled(rename = "Actual")]
    pub actual: String,
    #[serde(rename = "Target")]
    #[tabled(rename = "Target")]
    pub target: String,
    #[serde(rename = "Status")]
    #[tabled(rename = "Status")]
    pub status: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct KpiDetailRow {
    #[serde(rename = "Category")]
    #[tabled(rename = "Category")]
    pub category: String,
    #[serde(rename = "KPI")]
    #[tabled(rename = "KPI")]
    pub kpi: String,
    #[serde(rename = "Target")]
    #[tabled(rename = "Target")]
    pub target: String,
    #[serde(rename = "Actual")]
    #[tabled(rename = "Actual")]
    pub actual: String,
    #[serde(rename = "Status")]
    #[tabled(rename = "Status")]
    pub status: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct TrendRow {
    #[serde(rename = "Month")]
    #[tabled(rename = "Month")]
    pub month: String,
    #[serde(rename = "Value")]
    #[tabled(rename = "Value")]
    pub value: String,
    #[serde(rename = "Status")]
    #[tabled(rename = "Status")]
    pub status: String,
}

/// Statistics strip under the trend table. Best/worst follow the KPI's
/// comparison direction (lower-is-better KPIs take min as best).
#[derive(Debug, Clone, Copy)]
pub struct TrendStats {
    pub current: f64,
    pub average: f64,
    pub best: f64,
    pub worst: f64,
}

#[derive(Debug, Serialize)]
pub struct FocusKpiSummary {
    pub name: String,
    pub value: f64,
    pub target: f64,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct MonthSummary {
    pub month: String,
    pub on_target: usize,
    pub near_target: usize,
    pub off_target: usize,
    pub gm_focus: Vec<FocusKpiSummary>,
}
