//! Menu entities
//!
//! `MenuItem` is a single priced dish. `MenuCatalog` is the loaded menu with
//! an id index so lookups never rescan the list.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::QuickBiteResult;
use crate::parse;

/// A dish on the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    id: u32,
    name: String,
    price: Decimal,
}

impl MenuItem {
    pub fn new(id: u32, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: Decimal) {
        self.price = price;
    }
}

/// The menu in file order, indexed by id
///
/// When the same id appears more than once the first item wins every lookup,
/// while `items()` still lists all of them.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
    index: HashMap<u32, usize>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            index.entry(item.id()).or_insert(position);
        }
        Self { items, index }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item with the given id
    pub fn get(&self, id: u32) -> Option<&MenuItem> {
        self.index.get(&id).map(|&position| &self.items[position])
    }

    /// Resolve ids in order, silently skipping ids that are not on the menu.
    pub fn resolve(&self, ids: &[u32]) -> Vec<MenuItem> {
        ids.iter().filter_map(|&id| self.get(id)).cloned().collect()
    }

    /// Parse id tokens, then resolve them like [`MenuCatalog::resolve`].
    ///
    /// A token that is not an integer fails the whole call; an integer with no
    /// matching item is skipped.
    pub fn resolve_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> QuickBiteResult<Vec<MenuItem>> {
        let ids = parse::parse_ids(tokens, "menu item id")?;
        Ok(self.resolve(&ids))
    }
}
