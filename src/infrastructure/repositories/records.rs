//! Record parsers for the three backing files
//!
//! Each parser takes the comma-separated fields of one line. Missing fields
//! and malformed tokens are errors; extra trailing fields are ignored.

use crate::domain::entities::{CollectionReport, MenuCatalog, MenuItem, Order};
use crate::domain::value_objects::OrderStatus;
use crate::error::{QuickBiteError, QuickBiteResult};
use crate::parse::{self, LIST_SEPARATOR};

fn field<'a>(fields: &[&'a str], index: usize, name: &'static str) -> QuickBiteResult<&'a str> {
    fields
        .get(index)
        .copied()
        .ok_or(QuickBiteError::MissingField { field: name })
}

/// `id,name,price`
pub fn parse_menu_item(fields: &[&str]) -> QuickBiteResult<MenuItem> {
    let id = parse::parse_id(field(fields, 0, "id")?, "menu item id")?;
    let name = field(fields, 1, "name")?;
    let price = parse::parse_amount(field(fields, 2, "price")?, "price")?;
    Ok(MenuItem::new(id, name, price))
}

/// `id,itemId;itemId,qty;qty,yyyy-MM-dd,status`
///
/// Item ids missing from `menu` are dropped, so a line naming an unknown
/// item usually ends up with more quantities than items and is rejected.
pub fn parse_order(fields: &[&str], menu: &MenuCatalog) -> QuickBiteResult<Order> {
    let id = parse::parse_id(field(fields, 0, "id")?, "order id")?;
    let item_ids = parse::split_list(field(fields, 1, "menu item ids")?, LIST_SEPARATOR);
    let quantities = parse::split_list(field(fields, 2, "quantities")?, LIST_SEPARATOR);
    let date = parse::parse_date(field(fields, 3, "date")?)?;
    let status = field(fields, 4, "status")?;

    let items = menu.resolve_tokens(&item_ids)?;
    let quantities = parse::parse_quantities(&quantities)?;

    Order::new(id, items, quantities, date, OrderStatus::from(status))
}

/// `yyyy-MM-dd,amount`
pub fn parse_collection_report(fields: &[&str]) -> QuickBiteResult<CollectionReport> {
    let date = parse::parse_date(field(fields, 0, "date")?)?;
    let amount = parse::parse_amount(field(fields, 1, "amount")?, "collection amount")?;
    Ok(CollectionReport::new(date, amount))
}
