//! CSV Restaurant Store
//!
//! Implements the RestaurantStore port over three headerless,
//! comma-separated files in one data directory.

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::config::DataConfig;
use crate::domain::entities::{CollectionReport, MenuCatalog, MenuItem, Order};
use crate::domain::ports::RestaurantStore;
use crate::domain::value_objects::LoadReport;
use crate::error::QuickBiteResult;

use super::records;

pub const MENU_ITEMS_FILE: &str = "menu_items.csv";
pub const ORDER_DETAILS_FILE: &str = "order_details.csv";
pub const COLLECTION_REPORT_FILE: &str = "collection_report.csv";

/// File-backed store, read-only
#[derive(Debug, Clone)]
pub struct CsvRestaurantStore {
    menu_items: PathBuf,
    order_details: PathBuf,
    collection_report: PathBuf,
}

impl CsvRestaurantStore {
    /// Store using the default file names inside `data_dir`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            menu_items: data_dir.join(MENU_ITEMS_FILE),
            order_details: data_dir.join(ORDER_DETAILS_FILE),
            collection_report: data_dir.join(COLLECTION_REPORT_FILE),
        }
    }

    /// Store using the directory and file names from config
    pub fn from_config(data: &DataConfig) -> Self {
        Self {
            menu_items: data.dir.join(&data.menu_items),
            order_details: data.dir.join(&data.order_details),
            collection_report: data.dir.join(&data.collection_report),
        }
    }

    pub fn menu_items_path(&self) -> &Path {
        &self.menu_items
    }

    pub fn order_details_path(&self) -> &Path {
        &self.order_details
    }

    pub fn collection_report_path(&self) -> &Path {
        &self.collection_report
    }
}

/// Read every record of `path`, parsing each with `parse`.
///
/// Malformed lines are skipped and reading carries on; an I/O failure
/// stops reading but keeps what was already parsed.
fn read_records<T>(
    path: &Path,
    kind: &'static str,
    mut parse: impl FnMut(&[&str]) -> QuickBiteResult<T>,
) -> LoadReport<T> {
    let mut reader = match ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_path(path)
    {
        Ok(reader) => reader,
        Err(e) => {
            warn!(file = %path.display(), error = %e, "cannot open {kind} file");
            return LoadReport::unavailable(e.to_string());
        }
    };

    let mut report = LoadReport::new();
    let mut record = StringRecord::new();
    loop {
        match reader.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                if record.iter().all(str::is_empty) {
                    continue;
                }
                let line = record.position().map_or(0, |p| p.line());
                let fields: Vec<&str> = record.iter().collect();
                match parse(&fields) {
                    Ok(parsed) => report.add_record(parsed),
                    Err(e) => {
                        warn!(file = %path.display(), line, error = %e, "skipping malformed {kind} record");
                        report.add_skipped(line, e.to_string());
                    }
                }
            }
            Err(e) if e.is_io_error() => {
                warn!(file = %path.display(), error = %e, "stopped reading {kind} file");
                report.abort(e.to_string());
                break;
            }
            Err(e) => {
                let line = e.position().map_or(0, |p| p.line());
                warn!(file = %path.display(), line, error = %e, "skipping unreadable {kind} record");
                report.add_skipped(line, e.to_string());
            }
        }
    }

    debug!(
        file = %path.display(),
        loaded = report.records.len(),
        skipped = report.skipped.len(),
        "loaded {kind} file"
    );
    report
}

impl RestaurantStore for CsvRestaurantStore {
    fn load_menu_items(&self) -> LoadReport<MenuItem> {
        read_records(&self.menu_items, "menu items", records::parse_menu_item)
    }

    fn load_orders(&self, menu: &MenuCatalog) -> LoadReport<Order> {
        read_records(&self.order_details, "order details", |fields| {
            records::parse_order(fields, menu)
        })
    }

    fn load_collection_reports(&self) -> LoadReport<CollectionReport> {
        read_records(
            &self.collection_report,
            "collection report",
            records::parse_collection_report,
        )
    }
}
