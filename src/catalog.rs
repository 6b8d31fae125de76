// Static KPI catalog: category groupings, targets, comparison directions
// and display formatting for every KPI the dashboard tracks. Defined once
// as constant tables and never mutated.
use crate::util::format_number;

/// The five KPI categories, in fixed dashboard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Timeliness,
    Quality,
    Coverage,
    Wip,
    Collaboration,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Timeliness,
        Category::Quality,
        Category::Coverage,
        Category::Wip,
        Category::Collaboration,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Category::Timeliness => "Timeliness",
            Category::Quality => "Quality",
            Category::Coverage => "Coverage",
            Category::Wip => "WIP Control",
            Category::Collaboration => "Collaboration",
        }
    }

    /// All definitions in this category, in display order.
    pub fn definitions(&self) -> &'static [KpiDefinition] {
        match self {
            Category::Timeliness => TIMELINESS,
            Category::Quality => QUALITY,
            Category::Coverage => COVERAGE,
            Category::Wip => WIP,
            Category::Collaboration => COLLABORATION,
        }
    }
}

/// Derivation key: which computed metric a catalog entry reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KpiKey {
    BillingTimelinessDays,
    PctInvoicesOnTime,
    InvoiceCycleTime,
    MissedMilestones,
    InvoiceErrorRate,
    InvoiceReissueRate,
    DisputedInvoicePct,
    DisputeResolutionDays,
    BillingCoveragePct,
    UnbilledRevenuePct,
    CoBillingRate,
    AdvanceDrawdownRate,
    WipAgingDays,
    StaleWipPct,
    WipToRevenueRatio,
    PmApprovalDays,
    IncompletePackagesPct,
    LateCostInputsPct,
}

impl KpiKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            KpiKey::BillingTimelinessDays => "billing_timeliness_days",
            KpiKey::PctInvoicesOnTime => "pct_invoices_on_time",
            KpiKey::InvoiceCycleTime => "invoice_cycle_time",
            KpiKey::MissedMilestones => "missed_milestones",
            KpiKey::InvoiceErrorRate => "invoice_error_rate",
            KpiKey::InvoiceReissueRate => "invoice_reissue_rate",
            KpiKey::DisputedInvoicePct => "disputed_invoice_pct",
            KpiKey::DisputeResolutionDays => "dispute_resolution_days",
            KpiKey::BillingCoveragePct => "billing_coverage_pct",
            KpiKey::UnbilledRevenuePct => "unbilled_revenue_pct",
            KpiKey::CoBillingRate => "co_billing_rate",
            KpiKey::AdvanceDrawdownRate => "advance_drawdown_rate",
            KpiKey::WipAgingDays => "wip_aging_days",
            KpiKey::StaleWipPct => "stale_wip_pct",
            KpiKey::WipToRevenueRatio => "wip_to_revenue_ratio",
            KpiKey::PmApprovalDays => "pm_approval_days",
            KpiKey::IncompletePackagesPct => "incomplete_packages_pct",
            KpiKey::LateCostInputsPct => "late_cost_inputs_pct",
        }
    }
}

/// Which side of the target counts as good.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Lower is better; on target when `value <= target`.
    AtMost,
    /// Higher is better; on target when `value >= target`.
    AtLeast,
}

/// How a KPI value is rendered. Resolved here, at definition time, instead
/// of being inferred from the display name at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Percentage,
    Ratio,
    Days,
    Count,
}

impl FormatKind {
    pub fn format_value(&self, value: f64) -> String {
        match self {
            FormatKind::Percentage => format!("{}%", format_number(value, 1)),
            FormatKind::Ratio => format_number(value, 2),
            FormatKind::Days => format_number(value, 1),
            FormatKind::Count => format!("{}", value.round() as i64),
        }
    }

    pub fn format_target(&self, target: f64) -> String {
        match self {
            FormatKind::Percentage => format!("{}%", format_number(target, 0)),
            FormatKind::Ratio => format_number(target, 1),
            FormatKind::Days => format_number(target, 0),
            FormatKind::Count => format!("{}", target.round() as i64),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KpiDefinition {
    pub name: &'static str,
    pub key: KpiKey,
    pub target: f64,
    pub direction: Direction,
    pub format: FormatKind,
    pub priority: bool,
}

const fn def(
    name: &'static str,
    key: KpiKey,
    target: f64,
    direction: Direction,
    format: FormatKind,
) -> KpiDefinition {
    KpiDefinition {
        name,
        key,
        target,
        direction,
        format,
        priority: false,
    }
}

const fn focus(
    name: &'static str,
    key: KpiKey,
    target: f64,
    direction: Direction,
    format: FormatKind,
) -> KpiDefinition {
    KpiDefinition {
        name,
        key,
        target,
        direction,
        format,
        priority: true,
    }
}

use Direction::{AtLeast, AtMost};
use FormatKind::{Count, Days, Percentage, Ratio};
use KpiKey::*;

static TIMELINESS: &[KpiDefinition] = &[
    focus("Billing Timeliness (Days)", BillingTimelinessDays, 5.0, AtMost, Days),
    def("% Invoices Issued on Time", PctInvoicesOnTime, 95.0, AtLeast, Percentage),
    def("Invoice Cycle Time (Days)", InvoiceCycleTime, 7.0, AtMost, Days),
    def("Missed Billing Milestones", MissedMilestones, 0.0, AtMost, Count),
];

static QUALITY: &[KpiDefinition] = &[
    def("Invoice Error Rate %", InvoiceErrorRate, 2.0, AtMost, Percentage),
    def("Invoice Reissue Rate %", InvoiceReissueRate, 3.0, AtMost, Percentage),
    focus("Disputed Invoice %", DisputedInvoicePct, 5.0, AtMost, Percentage),
    def("Dispute Resolution Days", DisputeResolutionDays, 10.0, AtMost, Days),
];

static COVERAGE: &[KpiDefinition] = &[
    focus("Billing Coverage %", BillingCoveragePct, 98.0, AtLeast, Percentage),
    def("Unbilled Revenue %", UnbilledRevenuePct, 5.0, AtMost, Percentage),
    def("Change Order Billing Rate %", CoBillingRate, 95.0, AtLeast, Percentage),
    def("Advance Drawdown Rate %", AdvanceDrawdownRate, 100.0, AtMost, Percentage),
];

static WIP: &[KpiDefinition] = &[
    focus("WIP Aging (Days)", WipAgingDays, 30.0, AtMost, Days),
    def("Stale WIP % (>60 days)", StaleWipPct, 10.0, AtMost, Percentage),
    def("WIP to Revenue Ratio", WipToRevenueRatio, 1.0, AtMost, Ratio),
];

static COLLABORATION: &[KpiDefinition] = &[
    focus("PM Approval Time (Days)", PmApprovalDays, 3.0, AtMost, Days),
    def("Incomplete Billing Packages %", IncompletePackagesPct, 5.0, AtMost, Percentage),
    def("Late Cost Inputs %", LateCostInputsPct, 5.0, AtMost, Percentage),
];

/// Every definition across all categories, category order then
/// within-category order.
pub fn all_definitions() -> impl Iterator<Item = (Category, &'static KpiDefinition)> {
    Category::ALL
        .iter()
        .flat_map(|c| c.definitions().iter().map(move |d| (*c, d)))
}

/// The GM focus subset: the priority definition of each category, in
/// category order.
pub fn priority_definitions() -> Vec<(Category, &'static KpiDefinition)> {
    all_definitions().filter(|(_, d)| d.priority).collect()
}

/// Look a definition up by its derivation key.
pub fn find(key: KpiKey) -> Option<&'static KpiDefinition> {
    all_definitions().map(|(_, d)| d).find(|d| d.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn eighteen_definitions_across_five_categories() {
        assert_eq!(all_definitions().count(), 18);
        assert_eq!(Category::ALL.len(), 5);
        let keys: HashSet<_> = all_definitions().map(|(_, d)| d.key).collect();
        assert_eq!(keys.len(), 18, "derivation keys must be unique");
    }

    #[test]
    fn one_priority_kpi_per_category() {
        let focus = priority_definitions();
        assert_eq!(focus.len(), 5);
        let categories: Vec<Category> = focus.iter().map(|(c, _)| *c).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn lookup_by_key() {
        let d = find(KpiKey::BillingCoveragePct).unwrap();
        assert_eq!(d.name, "Billing Coverage %");
        assert_eq!(d.target, 98.0);
        assert_eq!(d.direction, Direction::AtLeast);
        assert!(d.priority);
    }

    #[test]
    fn format_kinds_render_as_expected() {
        assert_eq!(FormatKind::Percentage.format_value(94.05), "94.1%");
        assert_eq!(FormatKind::Ratio.format_value(0.826), "0.83");
        assert_eq!(FormatKind::Days.format_value(24.73), "24.7");
        assert_eq!(FormatKind::Count.format_value(-2.0), "-2");
        assert_eq!(FormatKind::Ratio.format_target(1.0), "1.0");
        assert_eq!(FormatKind::Percentage.format_target(98.0), "98%");
    }
}
