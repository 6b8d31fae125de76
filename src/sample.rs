// Built-in sample dataset: twelve months (Jan-Dec 2024) of invoicing
// activity for a refit yard, kept as per-column arrays so a month is one
// index across all of them.
use chrono::NaiveDate;

use crate::types::MonthlyRecord;

const TOTAL_INVOICES: [u32; 12] = [45, 52, 48, 51, 49, 53, 50, 47, 52, 54, 51, 49];
const ON_TIME_INVOICES: [u32; 12] = [42, 49, 45, 48, 47, 51, 48, 45, 50, 52, 49, 47];
const AVG_BILLING_TIMELINESS: [f64; 12] =
    [4.2, 5.8, 4.5, 5.2, 4.0, 4.8, 3.9, 4.1, 4.3, 4.0, 4.2, 3.8];
const AVG_INVOICE_CYCLE_TIME: [f64; 12] =
    [6.5, 7.2, 6.8, 7.0, 6.3, 6.9, 6.1, 6.4, 6.6, 6.2, 6.5, 6.0];
const PLANNED_MILESTONES: [u32; 12] = [50, 55, 52, 54, 51, 56, 53, 50, 55, 57, 54, 52];
const INVOICED_MILESTONES: [u32; 12] = [50, 54, 52, 54, 51, 56, 53, 50, 55, 57, 54, 52];

const CORRECTED_INVOICES: [u32; 12] = [1, 2, 1, 1, 0, 1, 1, 0, 1, 1, 0, 1];
const REISSUED_INVOICES: [u32; 12] = [1, 2, 1, 2, 1, 1, 0, 1, 1, 1, 1, 0];
const DISPUTED_INVOICES: [u32; 12] = [2, 3, 2, 2, 1, 2, 2, 1, 2, 2, 1, 2];
const AVG_DISPUTE_RESOLUTION_DAYS: [f64; 12] =
    [9.5, 11.2, 9.8, 10.1, 8.5, 9.3, 8.8, 8.2, 9.0, 8.7, 8.9, 8.5];

const RECOGNIZED_REVENUE: [f64; 12] = [
    2_500_000.0, 2_700_000.0, 2_600_000.0, 2_650_000.0, 2_550_000.0, 2_750_000.0, 2_680_000.0,
    2_620_000.0, 2_700_000.0, 2_800_000.0, 2_720_000.0, 2_650_000.0,
];
const INVOICED_AMOUNT: [f64; 12] = [
    2_475_000.0, 2_673_000.0, 2_574_000.0, 2_623_500.0, 2_524_500.0, 2_722_500.0, 2_653_600.0,
    2_593_800.0, 2_673_000.0, 2_772_000.0, 2_693_600.0, 2_623_500.0,
];
const CO_APPROVED: [f64; 12] = [
    150_000.0, 180_000.0, 160_000.0, 170_000.0, 155_000.0, 185_000.0, 175_000.0, 165_000.0,
    180_000.0, 190_000.0, 182_000.0, 170_000.0,
];
const CO_INVOICED: [f64; 12] = [
    145_000.0, 171_000.0, 155_200.0, 163_500.0, 150_250.0, 179_750.0, 170_125.0, 159_825.0,
    174_600.0, 184_550.0, 176_540.0, 164_500.0,
];
const ADVANCE_RECEIVED: [f64; 12] = [500_000.0; 12];
const ADVANCE_USED: [f64; 12] = [
    450_000.0, 465_000.0, 472_000.0, 485_000.0, 492_000.0, 498_000.0, 500_000.0, 500_000.0,
    500_000.0, 500_000.0, 500_000.0, 500_000.0,
];

const WIP: [f64; 12] = [
    2_100_000.0, 2_250_000.0, 2_180_000.0, 2_200_000.0, 2_150_000.0, 2_280_000.0, 2_220_000.0,
    2_170_000.0, 2_240_000.0, 2_300_000.0, 2_260_000.0, 2_190_000.0,
];
const AVG_DAILY_BILLED_REVENUE: [f64; 12] = [
    83_333.0, 90_000.0, 86_667.0, 88_333.0, 85_000.0, 91_667.0, 89_333.0, 87_333.0, 90_000.0,
    93_333.0, 90_667.0, 88_333.0,
];
const OLD_WIP: [f64; 12] = [
    168_000.0, 202_500.0, 174_400.0, 176_000.0, 172_000.0, 205_200.0, 177_600.0, 173_600.0,
    201_600.0, 207_000.0, 203_400.0, 175_200.0,
];
const MONTHLY_REVENUE: [f64; 12] = RECOGNIZED_REVENUE;

const SUBMITTED_PACKAGES: [u32; 12] = [48, 54, 50, 52, 50, 55, 52, 49, 54, 56, 53, 51];
const RETURNED_PACKAGES: [u32; 12] = [2, 3, 2, 2, 1, 2, 2, 1, 2, 2, 1, 2];
const AVG_PM_APPROVAL_DAYS: [f64; 12] =
    [2.8, 3.2, 2.9, 3.0, 2.5, 2.9, 2.7, 2.6, 2.8, 2.7, 2.6, 2.5];
const TOTAL_COST_REPORTS: [u32; 12] = [50, 55, 52, 54, 51, 56, 53, 50, 55, 57, 54, 52];
const LATE_COST_REPORTS: [u32; 12] = [2, 3, 2, 3, 2, 2, 2, 1, 2, 2, 1, 2];

/// Build the sample table, already in ascending month order.
pub fn sample_table() -> Vec<MonthlyRecord> {
    (0..12)
        .map(|i| MonthlyRecord {
            month: NaiveDate::from_ymd_opt(2024, i as u32 + 1, 1).unwrap(),
            total_invoices: TOTAL_INVOICES[i],
            on_time_invoices: ON_TIME_INVOICES[i],
            avg_billing_timeliness: AVG_BILLING_TIMELINESS[i],
            avg_invoice_cycle_time: AVG_INVOICE_CYCLE_TIME[i],
            planned_milestones: PLANNED_MILESTONES[i],
            invoiced_milestones: INVOICED_MILESTONES[i],
            corrected_invoices: CORRECTED_INVOICES[i],
            reissued_invoices: REISSUED_INVOICES[i],
            disputed_invoices: DISPUTED_INVOICES[i],
            avg_dispute_resolution_days: AVG_DISPUTE_RESOLUTION_DAYS[i],
            recognized_revenue: RECOGNIZED_REVENUE[i],
            invoiced_amount: INVOICED_AMOUNT[i],
            co_approved: CO_APPROVED[i],
            co_invoiced: CO_INVOICED[i],
            advance_received: ADVANCE_RECEIVED[i],
            advance_used: ADVANCE_USED[i],
            wip: WIP[i],
            avg_daily_billed_revenue: AVG_DAILY_BILLED_REVENUE[i],
            old_wip: OLD_WIP[i],
            monthly_revenue: MONTHLY_REVENUE[i],
            submitted_packages: SUBMITTED_PACKAGES[i],
            returned_packages: RETURNED_PACKAGES[i],
            avg_pm_approval_days: AVG_PM_APPROVAL_DAYS[i],
            total_cost_reports: TOTAL_COST_REPORTS[i],
            late_cost_reports: LATE_COST_REPORTS[i],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_months_of_2024_in_order() {
        let table = sample_table();
        assert_eq!(table.len(), 12);
        assert_eq!(table[0].label(), "January 2024");
        assert_eq!(table[11].label(), "December 2024");
        assert!(table.windows(2).all(|w| w[0].month < w[1].month));
    }

    #[test]
    fn december_row_matches_the_literals() {
        let dec = &sample_table()[11];
        assert_eq!(dec.total_invoices, 49);
        assert_eq!(dec.on_time_invoices, 47);
        assert_eq!(dec.planned_milestones, 52);
        assert_eq!(dec.invoiced_milestones, 52);
        assert_eq!(dec.recognized_revenue, 2_650_000.0);
        assert_eq!(dec.advance_used, 500_000.0);
        assert_eq!(dec.old_wip, 175_200.0);
    }
}
