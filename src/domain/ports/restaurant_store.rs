//! RestaurantStore port - abstraction over the three backing stores
//!
//! Loading never fails: implementations report problems through
//! [`LoadReport`] and return whatever records they could read.

use crate::domain::entities::{CollectionReport, MenuCatalog, MenuItem, Order};
use crate::domain::value_objects::LoadReport;

/// Source of the menu, past orders and past collection reports
pub trait RestaurantStore {
    /// Load menu items in source order
    fn load_menu_items(&self) -> LoadReport<MenuItem>;

    /// Load orders, resolving their menu item ids against `menu`
    fn load_orders(&self, menu: &MenuCatalog) -> LoadReport<Order>;

    /// Load previously recorded collection reports
    fn load_collection_reports(&self) -> LoadReport<CollectionReport>;
}
