//! Order entity - a customer order against the menu
//!
//! The total is derived from the line items. It is recomputed whenever the
//! items change and cannot be set on its own.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::entities::MenuItem;
use crate::domain::value_objects::OrderStatus;
use crate::error::{QuickBiteError, QuickBiteResult};

/// A menu item with the quantity ordered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub item: MenuItem,
    pub quantity: i32,
}

impl LineItem {
    pub fn new(item: MenuItem, quantity: i32) -> Self {
        Self { item, quantity }
    }

    /// price × quantity, `None` when it does not fit in a `Decimal`
    pub fn subtotal(&self) -> Option<Decimal> {
        self.item.price().checked_mul(Decimal::from(self.quantity))
    }
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: u32,
    line_items: Vec<LineItem>,
    total_amount: Decimal,
    date: NaiveDate,
    status: OrderStatus,
}

/// Pair items with quantities position by position.
fn zip_line_items(items: Vec<MenuItem>, quantities: Vec<i32>) -> QuickBiteResult<Vec<LineItem>> {
    if items.len() != quantities.len() {
        return Err(QuickBiteError::LineItemMismatch {
            items: items.len(),
            quantities: quantities.len(),
        });
    }
    Ok(items
        .into_iter()
        .zip(quantities)
        .map(|(item, quantity)| LineItem::new(item, quantity))
        .collect())
}

fn sum_line_items(line_items: &[LineItem]) -> QuickBiteResult<Decimal> {
    line_items
        .iter()
        .try_fold(Decimal::ZERO, |total, line| {
            line.subtotal().and_then(|subtotal| total.checked_add(subtotal))
        })
        .ok_or(QuickBiteError::AmountOverflow)
}

impl Order {
    /// Build an order from parallel item and quantity lists.
    ///
    /// Returns `LineItemMismatch` when the lists differ in length and
    /// `AmountOverflow` when the total cannot be represented. Nothing else is
    /// validated: empty lists or negative quantities are accepted.
    pub fn new(
        id: u32,
        items: Vec<MenuItem>,
        quantities: Vec<i32>,
        date: NaiveDate,
        status: OrderStatus,
    ) -> QuickBiteResult<Self> {
        let line_items = zip_line_items(items, quantities)?;
        Self::from_line_items(id, line_items, date, status)
    }

    pub fn from_line_items(
        id: u32,
        line_items: Vec<LineItem>,
        date: NaiveDate,
        status: OrderStatus,
    ) -> QuickBiteResult<Self> {
        let total_amount = sum_line_items(&line_items)?;
        Ok(Self {
            id,
            line_items,
            total_amount,
            date,
            status,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.line_items.iter().map(|line| &line.item)
    }

    pub fn quantities(&self) -> impl Iterator<Item = i32> + '_ {
        self.line_items.iter().map(|line| line.quantity)
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn status(&self) -> &OrderStatus {
        &self.status
    }

    /// Replace items and quantities together and recompute the total.
    ///
    /// On error the order is left untouched.
    pub fn replace_line_items(
        &mut self,
        items: Vec<MenuItem>,
        quantities: Vec<i32>,
    ) -> QuickBiteResult<()> {
        let line_items = zip_line_items(items, quantities)?;
        self.total_amount = sum_line_items(&line_items)?;
        self.line_items = line_items;
        Ok(())
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}
