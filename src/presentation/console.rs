//! Interactive console
//!
//! A read-decide-act loop over any `BufRead`/`Write` pair. The binary runs
//! it on stdin/stdout; tests run it on in-memory buffers.
//!
//! Error handling mirrors two tiers:
//! - an unparseable date aborts only the current operation
//! - malformed numbers, item/quantity mismatches and input closing in the
//!   middle of an operation are returned as `Err` and end the session

use std::io::{BufRead, Write};

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::application::{CancelOutcome, Session};
use crate::config::DisplayConfig;
use crate::error::{QuickBiteError, QuickBiteResult};
use crate::parse::{self, FIELD_SEPARATOR};

/// Main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PlaceOrder,
    CancelOrder,
    TrackCollections,
    Exit,
    Unknown(i64),
}

impl From<i64> for MenuChoice {
    fn from(number: i64) -> Self {
        match number {
            1 => MenuChoice::PlaceOrder,
            2 => MenuChoice::CancelOrder,
            3 => MenuChoice::TrackCollections,
            4 => MenuChoice::Exit,
            other => MenuChoice::Unknown(other),
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, display: DisplayConfig) -> Self {
        Self {
            input,
            output,
            display,
        }
    }

    /// Hand back the output sink (tests read what was printed)
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user exits or input ends at the main menu.
    pub fn run(&mut self, session: &mut Session) -> QuickBiteResult<()> {
        loop {
            self.print_main_menu()?;
            let Some(number) = self.read_choice()? else {
                debug!("input ended at main menu");
                break;
            };

            match MenuChoice::from(number) {
                MenuChoice::PlaceOrder => self.place_order(session)?,
                MenuChoice::CancelOrder => self.cancel_order(session)?,
                MenuChoice::TrackCollections => self.track_collections(session)?,
                MenuChoice::Exit => break,
                MenuChoice::Unknown(_) => {
                    writeln!(self.output, "Invalid choice! Please try again.")?;
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Place-order workflow: ids, quantities, date.
    pub fn place_order(&mut self, session: &mut Session) -> QuickBiteResult<()> {
        writeln!(self.output, "Menu Items:")?;
        for item in session.menu().items() {
            let price = self.amount(item.price());
            writeln!(self.output, "{}. {} - {}", item.id(), item.name(), price)?;
        }

        let ids = self.prompt(
            "Enter the menu item IDs (comma-separated): ",
            "menu item ids",
        )?;
        let items = session
            .menu()
            .resolve_tokens(&parse::split_list(&ids, FIELD_SEPARATOR))?;

        let quantities = self.prompt("Enter the quantities (comma-separated): ", "quantities")?;
        let quantities = parse::parse_quantities(&parse::split_list(&quantities, FIELD_SEPARATOR))?;

        let date = self.prompt("Enter the order date (yyyy-MM-dd): ", "order date")?;
        let Some(date) = self.date_or_abort(&date)? else {
            return Ok(());
        };

        let order = session.place_order(items, quantities, date)?;
        let (id, total) = (order.id(), order.total_amount());
        writeln!(self.output, "Order placed successfully! Order ID: {}", id)?;
        writeln!(self.output, "Order total: {}", self.amount(total))?;
        Ok(())
    }

    /// Cancel-order workflow.
    pub fn cancel_order(&mut self, session: &mut Session) -> QuickBiteResult<()> {
        write!(self.output, "Enter the order ID to cancel: ")?;
        self.output.flush()?;
        let id = self
            .read_non_blank()?
            .ok_or(QuickBiteError::InputClosed { prompt: "order id" })?;
        let id = parse::parse_id(&id, "order id")?;

        match session.cancel_order(id) {
            CancelOutcome::Cancelled => writeln!(
                self.output,
                "Order with ID {} has been cancelled successfully!",
                id
            )?,
            CancelOutcome::NotFound => {
                writeln!(self.output, "Order with ID {} does not exist!", id)?
            }
        }
        Ok(())
    }

    /// Track-collections workflow.
    pub fn track_collections(&mut self, session: &mut Session) -> QuickBiteResult<()> {
        let date = self.prompt(
            "Enter the date to track collections (yyyy-MM-dd): ",
            "collection date",
        )?;
        let Some(date) = self.date_or_abort(&date)? else {
            return Ok(());
        };

        let report = session.track_collections(date);
        let (date, total) = (report.date(), report.total_collection_amount());
        writeln!(
            self.output,
            "Total collection for {}: {}",
            date.format(parse::DATE_FORMAT),
            self.amount(total)
        )?;
        Ok(())
    }

    fn print_main_menu(&mut self) -> QuickBiteResult<()> {
        writeln!(
            self.output,
            "Welcome to {} Restaurant Management System!",
            self.display.restaurant_name
        )?;
        writeln!(self.output, "1. Place an order")?;
        writeln!(self.output, "2. Cancel an order")?;
        writeln!(self.output, "3. Track daily collections")?;
        writeln!(self.output, "4. Exit")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Next non-blank line as a menu number; `None` at end of input.
    fn read_choice(&mut self) -> QuickBiteResult<Option<i64>> {
        let Some(token) = self.read_non_blank()? else {
            return Ok(None);
        };
        token
            .parse::<i64>()
            .map(Some)
            .map_err(|_| QuickBiteError::InvalidNumber {
                field: "menu choice",
                value: token,
            })
    }

    /// Next line with any non-whitespace, trimmed; `None` at end of input.
    fn read_non_blank(&mut self) -> QuickBiteResult<Option<String>> {
        while let Some(line) = self.read_line()? {
            let token = line.trim();
            if !token.is_empty() {
                return Ok(Some(token.to_string()));
            }
        }
        Ok(None)
    }

    fn prompt(&mut self, text: &str, what: &'static str) -> QuickBiteResult<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()?
            .ok_or(QuickBiteError::InputClosed { prompt: what })
    }

    fn read_line(&mut self) -> QuickBiteResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Parse a date, or tell the user it is invalid and return `None`.
    fn date_or_abort(&mut self, input: &str) -> QuickBiteResult<Option<chrono::NaiveDate>> {
        match parse::parse_date(input) {
            Ok(date) => Ok(Some(date)),
            Err(e) => {
                debug!(error = %e, "operation aborted");
                writeln!(self.output, "Invalid date format!")?;
                Ok(None)
            }
        }
    }

    /// Currency amount rounded half away from zero to two places
    fn amount(&self, value: Decimal) -> String {
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{}{:.2}", self.display.currency_symbol, rounded)
    }
}
