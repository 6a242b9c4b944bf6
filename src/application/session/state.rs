//! Session state and the order workflows
//!
//! A `Session` owns everything loaded at startup plus whatever the user
//! adds. Nothing here touches the console or the files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::domain::entities::{CollectionReport, MenuCatalog, MenuItem, Order};
use crate::domain::ports::RestaurantStore;
use crate::domain::value_objects::{LoadReport, LoadStatus, OrderStatus};
use crate::error::{QuickBiteError, QuickBiteResult};

use super::result::{CancelOutcome, LoadSummary};

/// In-memory restaurant state for one run of the program
#[derive(Debug, Clone, Default)]
pub struct Session {
    menu: MenuCatalog,
    orders: Vec<Order>,
    collection_reports: Vec<CollectionReport>,
}

fn log_report<T>(store: &'static str, report: &LoadReport<T>) -> LoadStatus {
    let status = report.status();
    match status {
        LoadStatus::Complete => debug!(store, records = report.records.len(), "store loaded"),
        LoadStatus::Partial { skipped } => warn!(
            store,
            records = report.records.len(),
            skipped,
            error = report.source_error.as_deref().unwrap_or(""),
            "store partially loaded"
        ),
        LoadStatus::Unavailable => warn!(
            store,
            error = report.source_error.as_deref().unwrap_or(""),
            "store unavailable, starting empty"
        ),
    }
    status
}

impl Session {
    pub fn new(
        menu: MenuCatalog,
        orders: Vec<Order>,
        collection_reports: Vec<CollectionReport>,
    ) -> Self {
        Self {
            menu,
            orders,
            collection_reports,
        }
    }

    /// Load all three stores. The menu is loaded first so orders can be
    /// resolved against it.
    pub fn load<S: RestaurantStore>(store: &S) -> (Self, LoadSummary) {
        let menu_report = store.load_menu_items();
        let menu_status = log_report("menu items", &menu_report);
        let menu = MenuCatalog::new(menu_report.into_records());

        let orders_report = store.load_orders(&menu);
        let orders_status = log_report("order details", &orders_report);

        let reports_report = store.load_collection_reports();
        let reports_status = log_report("collection report", &reports_report);

        let session = Self::new(
            menu,
            orders_report.into_records(),
            reports_report.into_records(),
        );
        info!(
            menu_items = session.menu.len(),
            orders = session.orders.len(),
            collection_reports = session.collection_reports.len(),
            "session loaded"
        );

        let summary = LoadSummary {
            menu_items: menu_status,
            orders: orders_status,
            collection_reports: reports_status,
        };
        (session, summary)
    }

    pub fn menu(&self) -> &MenuCatalog {
        &self.menu
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// First order with the given id
    pub fn order(&self, id: u32) -> Option<&Order> {
        self.orders.iter().find(|o| o.id() == id)
    }

    pub fn collection_reports(&self) -> &[CollectionReport] {
        &self.collection_reports
    }

    /// One more than the highest order id held, or 1 when there are none.
    ///
    /// Fails with `OrderIdExhausted` once an order holds `u32::MAX`.
    pub fn next_order_id(&self) -> QuickBiteResult<u32> {
        let highest = self.orders.iter().map(Order::id).max().unwrap_or(0);
        highest
            .checked_add(1)
            .ok_or(QuickBiteError::OrderIdExhausted { highest })
    }

    /// Record a new `Placed` order and return a copy of it.
    ///
    /// Fails with `LineItemMismatch` when `items` and `quantities` differ in
    /// length and with `OrderIdExhausted` when no id is left; nothing is
    /// recorded in either case.
    pub fn place_order(
        &mut self,
        items: Vec<MenuItem>,
        quantities: Vec<i32>,
        date: NaiveDate,
    ) -> QuickBiteResult<Order> {
        let id = self.next_order_id()?;
        let order = Order::new(id, items, quantities, date, OrderStatus::Placed)?;
        info!(order_id = id, total = %order.total_amount(), %date, "order placed");
        self.orders.push(order.clone());
        Ok(order)
    }

    /// Mark the first order with `id` as cancelled.
    pub fn cancel_order(&mut self, id: u32) -> CancelOutcome {
        match self.orders.iter_mut().find(|o| o.id() == id) {
            Some(order) => {
                order.set_status(OrderStatus::Cancelled);
                info!(order_id = id, "order cancelled");
                CancelOutcome::Cancelled
            }
            None => {
                debug!(order_id = id, "cancel requested for unknown order");
                CancelOutcome::NotFound
            }
        }
    }

    /// Sum of totals of `Placed` orders dated `date`, saturating at the
    /// `Decimal` bounds
    pub fn collections_on(&self, date: NaiveDate) -> Decimal {
        self.orders
            .iter()
            .filter(|o| o.date() == date && o.status().is_placed())
            .map(Order::total_amount)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Compute the day's collections and append a new report.
    ///
    /// Reports are never merged: asking twice for the same day appends twice.
    pub fn track_collections(&mut self, date: NaiveDate) -> CollectionReport {
        let total = self.collections_on(date);
        debug!(%date, %total, "collections tracked");
        let report = CollectionReport::new(date, total);
        self.collection_reports.push(report.clone());
        report
    }
}
