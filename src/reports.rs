use crate::catalog::{self, Category, Direction, KpiDefinition};
use crate::kpi::{classify, compute_kpis, KpiError, KpiValues, Status};
use crate::types::{
    FocusKpiSummary, GmFocusRow, KpiDetailRow, MonthSummary, MonthlyRecord, TrendRow, TrendStats,
};
use crate::util::average;

/// The GM focus view: the five priority KPIs for the selected month.
pub fn gm_focus_rows(kpis: &KpiValues) -> Vec<GmFocusRow> {
    catalog::priority_definitions()
        .into_iter()
        .map(|(category, def)| {
            let value = kpis.get(def.key);
            let status = classify(value, def.target, def.direction);
            GmFocusRow {
                kpi: def.name.to_string(),
                category: category.title().to_string(),
                actual: def.format.format_value(value),
                target: def.format.format_target(def.target),
                status: status.label().to_string(),
            }
        })
        .collect()
}

fn detail_row(category: Category, def: &KpiDefinition, kpis: &KpiValues) -> KpiDetailRow {
    let value = kpis.get(def.key);
    let status = classify(value, def.target, def.direction);
    KpiDetailRow {
        category: category.title().to_string(),
        kpi: def.name.to_string(),
        target: def.format.format_target(def.target),
        actual: def.format.format_value(value),
        status: status.label().to_string(),
    }
}

/// One category's slice of the detailed view, in catalog order.
pub fn category_rows(kpis: &KpiValues, category: Category) -> Vec<KpiDetailRow> {
    category
        .definitions()
        .iter()
        .map(|def| detail_row(category, def, kpis))
        .collect()
}

/// The full detailed view across all categories, used for the CSV export.
pub fn detail_rows(kpis: &KpiValues) -> Vec<KpiDetailRow> {
    catalog::all_definitions()
        .map(|(category, def)| detail_row(category, def, kpis))
        .collect()
}

/// One KPI across every month, plus the statistics strip. Best and worst
/// follow the KPI's direction: for lower-is-better KPIs the minimum is the
/// best month.
pub fn trend_rows(
    table: &[MonthlyRecord],
    def: &KpiDefinition,
) -> Result<(Vec<TrendRow>, TrendStats), KpiError> {
    if table.is_empty() {
        return Err(KpiError::MonthOutOfRange { index: 0, len: 0 });
    }

    let mut rows = Vec::with_capacity(table.len());
    let mut values = Vec::with_capacity(table.len());
    for (idx, rec) in table.iter().enumerate() {
        let kpis = compute_kpis(table, idx)?;
        let value = kpis.get(def.key);
        let status = classify(value, def.target, def.direction);
        rows.push(TrendRow {
            month: rec.label(),
            value: def.format.format_value(value),
            status: status.label().to_string(),
        });
        values.push(value);
    }

    let mut min = f64::MAX;
    let mut max = f64::MIN;
    for v in &values {
        min = min.min(*v);
        max = max.max(*v);
    }
    let (best, worst) = match def.direction {
        Direction::AtMost => (min, max),
        Direction::AtLeast => (max, min),
    };
    let stats = TrendStats {
        current: values[values.len() - 1],
        average: average(&values),
        best,
        worst,
    };
    Ok((rows, stats))
}

/// The JSON month summary: status tallies over all 18 KPIs and the values
/// of the GM focus subset.
pub fn month_summary(table: &[MonthlyRecord], month_index: usize) -> Result<MonthSummary, KpiError> {
    let kpis = compute_kpis(table, month_index)?;

    let mut on_target = 0usize;
    let mut near_target = 0usize;
    let mut off_target = 0usize;
    for (_, def) in catalog::all_definitions() {
        match classify(kpis.get(def.key), def.target, def.direction) {
            Status::OnTarget => on_target += 1,
            Status::NearTarget => near_target += 1,
            Status::OffTarget => off_target += 1,
        }
    }

    let gm_focus = catalog::priority_definitions()
        .into_iter()
        .map(|(_, def)| {
            let value = kpis.get(def.key);
            FocusKpiSummary {
                name: def.name.to_string(),
                value,
                target: def.target,
                status: classify(value, def.target, def.direction).as_str().to_string(),
            }
        })
        .collect();

    Ok(MonthSummary {
        month: table[month_index].label(),
        on_target,
        near_target,
        off_target,
        gm_focus,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::KpiKey;
    use crate::sample::sample_table;

    #[test]
    fn gm_focus_has_one_row_per_category() {
        let table = sample_table();
        let kpis = compute_kpis(&table, 11).unwrap();
        let rows = gm_focus_rows(&kpis);
        assert_eq!(rows.len(), 5);
        let categories: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(
            categories,
            ["Timeliness", "Quality", "Coverage", "WIP Control", "Collaboration"]
        );
    }

    #[test]
    fn trend_stats_follow_direction() {
        let table = sample_table();

        // Lower is better: best month is the minimum.
        let cycle = catalog::find(KpiKey::InvoiceCycleTime).unwrap();
        let (rows, stats) = trend_rows(&table, cycle).unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(stats.best, 6.0);
        assert_eq!(stats.worst, 7.2);
        assert_eq!(stats.current, 6.0);

        // Higher is better: best month is the maximum.
        let coverage = catalog::find(KpiKey::BillingCoveragePct).unwrap();
        let (_, stats) = trend_rows(&table, coverage).unwrap();
        assert!(stats.best > stats.worst);
    }

    #[test]
    fn summary_tallies_cover_all_kpis() {
        let table = sample_table();
        let summary = month_summary(&table, 11).unwrap();
        assert_eq!(summary.month, "December 2024");
        assert_eq!(summary.on_target + summary.near_target + summary.off_target, 18);
        assert_eq!(summary.gm_focus.len(), 5);
    }
}
