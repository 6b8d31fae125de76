//! Invoicing KPI dashboard core: monthly table loading, KPI computation,
//! traffic-light status classification, and console report building.
pub mod catalog;
pub mod kpi;
pub mod loader;
pub mod output;
pub mod reports;
pub mod sample;
pub mod types;
pub mod util;
