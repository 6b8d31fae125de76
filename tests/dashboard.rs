//! End-to-end checks over the built-in sample table: every month computes,
//! a table written out as CSV loads back to the same KPIs, and the exported
//! month summary is well-formed JSON.

use std::io::Write;

use invoicing_kpi::catalog::{self, KpiKey};
use invoicing_kpi::kpi::{classify, compute_kpis, KpiError, Status};
use invoicing_kpi::loader::{load_table, REQUIRED_COLUMNS};
use invoicing_kpi::output::write_json;
use invoicing_kpi::reports::month_summary;
use invoicing_kpi::sample::sample_table;
use invoicing_kpi::types::MonthlyRecord;

#[test]
fn every_sample_month_computes_all_kpis() {
    let table = sample_table();
    for idx in 0..table.len() {
        let kpis = compute_kpis(&table, idx).unwrap();
        assert_eq!(kpis.len(), 18);
        for (_, value) in kpis.iter() {
            assert!(value.is_finite());
        }
    }
}

#[test]
fn december_kpis_match_the_sample_literals() {
    let table = sample_table();
    let dec = &table[11];
    let kpis = compute_kpis(&table, 11).unwrap();

    assert_eq!(
        kpis.get(KpiKey::MissedMilestones),
        dec.planned_milestones as f64 - dec.invoiced_milestones as f64
    );
    assert_eq!(kpis.get(KpiKey::MissedMilestones), 0.0);
    assert_eq!(kpis.get(KpiKey::PctInvoicesOnTime), 47.0 / 49.0 * 100.0);
    assert_eq!(kpis.get(KpiKey::AdvanceDrawdownRate), 100.0);
    assert_eq!(kpis.get(KpiKey::BillingTimelinessDays), 3.8);
}

#[test]
fn month_index_past_the_end_is_rejected() {
    let table = sample_table();
    assert_eq!(
        compute_kpis(&table, table.len()),
        Err(KpiError::MonthOutOfRange { index: 12, len: 12 })
    );
}

#[test]
fn every_catalog_entry_classifies_every_sample_month() {
    let table = sample_table();
    for idx in 0..table.len() {
        let kpis = compute_kpis(&table, idx).unwrap();
        for (_, def) in catalog::all_definitions() {
            // Exhaustive: classify never panics and always lands in a band.
            let status = classify(kpis.get(def.key), def.target, def.direction);
            assert!(matches!(
                status,
                Status::OnTarget | Status::NearTarget | Status::OffTarget
            ));
        }
    }
}

fn csv_line(rec: &MonthlyRecord) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
        rec.month.format("%Y-%m-%d"),
        rec.total_invoices,
        rec.on_time_invoices,
        rec.avg_billing_timeliness,
        rec.avg_invoice_cycle_time,
        rec.planned_milestones,
        rec.invoiced_milestones,
        rec.corrected_invoices,
        rec.reissued_invoices,
        rec.disputed_invoices,
        rec.avg_dispute_resolution_days,
        rec.recognized_revenue,
        rec.invoiced_amount,
        rec.co_approved,
        rec.co_invoiced,
        rec.advance_received,
        rec.advance_used,
        rec.wip,
        rec.avg_daily_billed_revenue,
        rec.old_wip,
        rec.monthly_revenue,
        rec.submitted_packages,
        rec.returned_packages,
        rec.avg_pm_approval_days,
        rec.total_cost_reports,
        rec.late_cost_reports,
    )
}

#[test]
fn csv_export_loads_back_to_identical_kpis() {
    let table = sample_table();

    let mut csv = REQUIRED_COLUMNS.join(",");
    csv.push('\n');
    for rec in &table {
        csv.push_str(&csv_line(rec));
        csv.push('\n');
    }

    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(csv.as_bytes()).unwrap();
    let (loaded, report) = load_table(f.path().to_str().unwrap()).unwrap();
    assert_eq!(report.loaded_rows, 12);
    assert_eq!(report.parse_errors, 0);

    for idx in 0..table.len() {
        let expected = compute_kpis(&table, idx).unwrap();
        let actual = compute_kpis(&loaded, idx).unwrap();
        for (key, value) in expected.iter() {
            assert_eq!(actual.get(key), value, "{} diverged after reload", key.as_str());
        }
    }
}

#[test]
fn month_summary_exports_as_json() {
    let table = sample_table();
    let summary = month_summary(&table, 11).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("summary.json");
    write_json(path.to_str().unwrap(), &summary).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["month"], "December 2024");
    assert_eq!(parsed["gm_focus"].as_array().unwrap().len(), 5);
    let tallies = parsed["on_target"].as_u64().unwrap()
        + parsed["near_target"].as_u64().unwrap()
        + parsed["off_target"].as_u64().unwrap();
    assert_eq!(tallies, 18);
}
