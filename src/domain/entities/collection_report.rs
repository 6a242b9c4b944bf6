//! Collection report entity - revenue snapshot for one day

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Total taken from placed orders on `date`, as computed at one moment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionReport {
    date: NaiveDate,
    total_collection_amount: Decimal,
}

impl CollectionReport {
    pub fn new(date: NaiveDate, total_collection_amount: Decimal) -> Self {
        Self {
            date,
            total_collection_amount,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn total_collection_amount(&self) -> Decimal {
        self.total_collection_amount
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_total_collection_amount(&mut self, amount: Decimal) {
        self.total_collection_amount = amount;
    }
}
