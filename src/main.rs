// Entry point and high-level CLI flow.
//
// The binary walks the same three views the dashboard offers:
// - Option [1] loads the monthly table (built-in sample or a CSV export).
// - Option [2] renders a view for a selected month: GM focus summary,
//   detailed per-category KPIs, or a single-KPI trend across all months.
// - After rendering, the user can go back to the selection menu or exit.
use once_cell::sync::Lazy;
use std::io::{self, Write};
use std::sync::Mutex;

use invoicing_kpi::types::MonthlyRecord;
use invoicing_kpi::{catalog, kpi, loader, output, reports, sample, util};

// Simple in-memory app state so the table is loaded once but can back any
// number of views in a single run.
static APP_STATE: Lazy<Mutex<AppState>> = Lazy::new(|| Mutex::new(AppState { table: None }));

struct AppState {
    table: Option<Vec<MonthlyRecord>>,
}

/// Read a single line of input after printing the common "Enter choice:" prompt.
///
/// The prompt is reused for the menus and simple numeric inputs.
fn read_choice() -> String {
    print!("Enter choice: ");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf.trim().to_string()
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf.trim().to_string()
}

/// Ask the user whether to go back to the view selection menu after
/// rendering a view.
///
/// Returns `true` if the user chose `Y`, `false` if they chose `N`.
fn prompt_back_to_menu() -> bool {
    loop {
        print!("Back to Dashboard Menu (Y/N): ");
        let _ = io::stdout().flush();
        let mut buf = String::new();
        io::stdin().read_line(&mut buf).ok();
        let resp = buf.trim().to_uppercase();
        match resp.as_str() {
            "Y" => return true,
            "N" => return false,
            _ => println!("Invalid choice. Please enter Y or N."),
        }
    }
}

/// Handle option [1]: load the monthly table.
///
/// On success, we store the `Vec<MonthlyRecord>` in `APP_STATE` and print
/// a short textual summary of what happened.
fn handle_load() {
    println!("[1] Use built-in sample data (Jan-Dec 2024)");
    println!("[2] Load a spreadsheet export (CSV)\n");
    match read_choice().as_str() {
        "1" => {
            let table = sample::sample_table();
            let invoiced: f64 = table.iter().map(|r| r.invoiced_amount).sum();
            println!(
                "Sample data ready ({} months, {} invoiced).\n",
                util::format_int(table.len() as i64),
                util::format_number(invoiced, 2)
            );
            let mut state = APP_STATE.lock().unwrap();
            state.table = Some(table);
        }
        "2" => {
            let path = read_line("CSV path: ");
            match loader::load_table(&path) {
                Ok((table, report)) => {
                    println!(
                        "Processing spreadsheet... ({} rows read, {} months loaded)",
                        util::format_int(report.total_rows as i64),
                        util::format_int(report.loaded_rows as i64)
                    );
                    if report.parse_errors > 0 {
                        println!(
                            "Note: {} rows skipped due to parse/validation errors.",
                            util::format_int(report.parse_errors as i64)
                        );
                    }
                    println!("");
                    let mut state = APP_STATE.lock().unwrap();
                    state.table = Some(table);
                }
                Err(e) => {
                    eprintln!("Failed to load file: {}\n", e);
                }
            }
        }
        _ => {
            println!("Invalid choice. Please enter 1 or 2.\n");
        }
    }
}

/// List the loaded months and let the user pick one. An empty or invalid
/// choice falls back to the latest month, like the dashboard's default.
fn pick_month(table: &[MonthlyRecord]) -> usize {
    println!("Months:");
    for (i, rec) in table.iter().enumerate() {
        println!("[{}] {}", i + 1, rec.label());
    }
    println!("(Enter for latest)\n");
    match read_choice().parse::<usize>() {
        Ok(n) if n >= 1 && n <= table.len() => n - 1,
        _ => table.len() - 1,
    }
}

/// Handle option [2]: render one of the dashboard views.
fn handle_dashboard() {
    let table = {
        let state = APP_STATE.lock().unwrap();
        state.table.clone()
    };
    let Some(table) = table else {
        println!("Error: No data loaded. Please load data first (option 1).\n");
        return;
    };

    let month_idx = pick_month(&table);
    println!("\nViewing data for: {}\n", table[month_idx].label());

    println!("[1] GM Focus Summary");
    println!("[2] Detailed KPIs");
    println!("[3] Trend Analysis\n");
    match read_choice().as_str() {
        "1" => render_gm_focus(&table, month_idx),
        "2" => render_detailed(&table, month_idx),
        "3" => render_trend(&table),
        _ => {
            println!("Invalid choice. Please enter 1, 2 or 3.\n");
        }
    }
}

fn render_gm_focus(table: &[MonthlyRecord], month_idx: usize) {
    let kpis = match kpi::compute_kpis(table, month_idx) {
        Ok(k) => k,
        Err(e) => {
            eprintln!("Failed to compute KPIs: {}\n", e);
            return;
        }
    };

    println!("GM Monthly Focus - Top 5 KPIs\n");
    output::print_table(&reports::gm_focus_rows(&kpis));

    match reports::month_summary(table, month_idx) {
        Ok(summary) => {
            println!(
                "Status: {} green / {} amber / {} red",
                summary.on_target, summary.near_target, summary.off_target
            );
            if let Err(e) = output::write_json("summary.json", &summary) {
                eprintln!("Write error: {}", e);
            }
            println!("(Status summary exported to summary.json)\n");
        }
        Err(e) => eprintln!("Failed to compute summary: {}\n", e),
    }
}

fn render_detailed(table: &[MonthlyRecord], month_idx: usize) {
    let kpis = match kpi::compute_kpis(table, month_idx) {
        Ok(k) => k,
        Err(e) => {
            eprintln!("Failed to compute KPIs: {}\n", e);
            return;
        }
    };

    println!("Detailed KPI Breakdown\n");
    for category in catalog::Category::ALL {
        println!("{}", category.title());
        output::print_table(&reports::category_rows(&kpis, category));
    }

    let file = "kpi_details.csv";
    if let Err(e) = output::write_csv(file, &reports::detail_rows(&kpis)) {
        eprintln!("Write error: {}", e);
    }
    println!("(Full table exported to {})\n", file);
}

fn render_trend(table: &[MonthlyRecord]) {
    println!("KPIs:");
    let all: Vec<_> = catalog::all_definitions().collect();
    for (i, (category, def)) in all.iter().enumerate() {
        println!("[{}] {} ({})", i + 1, def.name, category.title());
    }
    println!("");
    let def = match read_choice().parse::<usize>() {
        Ok(n) if n >= 1 && n <= all.len() => all[n - 1].1,
        _ => {
            println!("Invalid choice. Please enter 1 to {}.\n", all.len());
            return;
        }
    };

    match reports::trend_rows(table, def) {
        Ok((rows, stats)) => {
            println!("\nTrend: {} (target {})\n", def.name, def.format.format_target(def.target));
            output::print_table(&rows);
            println!(
                "Current: {}  Average: {}  Best: {}  Worst: {}\n",
                def.format.format_value(stats.current),
                def.format.format_value(stats.average),
                def.format.format_value(stats.best),
                def.format.format_value(stats.worst)
            );
        }
        Err(e) => eprintln!("Failed to compute trend: {}\n", e),
    }
}

fn main() {
    loop {
        println!("Invoicing KPI Dashboard");
        println!("[1] Load data");
        println!("[2] Dashboard views\n");
        match read_choice().as_str() {
            "1" => {
                handle_load();
            }
            "2" => {
                println!("");
                handle_dashboard();
                if !prompt_back_to_menu() {
                    println!("Exiting the program.");
                    break;
                }
            }
            _ => {
                println!("Invalid choice. Please enter 1 or 2.\n");
            }
        }
    }
}
