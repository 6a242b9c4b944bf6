//! Scenario: First day of trading
//!
//! Journey: The restaurant has a menu but no order history yet.
//!
//! Steps:
//! 1. Owner starts QuickBite with only a menu file
//! 2. Places an order for two pizzas and a coffee
//! 3. Tracks the day's collections
//! 4. The customer cancels, and the day is tracked again
//!
//! Success Criteria:
//! - The first order gets id 1 and totals 23.00
//! - Tracking reflects the cancellation
//! - Both reports are kept

use std::io::Cursor;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use quickbite::{Console, CsvRestaurantStore, DisplayConfig, Session};

use crate::common::*;

/// SCENARIO: place, track, cancel, track
#[test]
fn scenario_first_day_place_track_cancel_track() {
    let env = TestEnv::empty();
    env.write("menu_items.csv", "1,Pizza,10.00\n2,Coffee,3.00\n");

    let result = env.run(
        &[],
        "1\n1,2\n2,1\n2024-01-01\n3\n2024-01-01\n2\n1\n3\n2024-01-01\n4\n",
    );

    assert!(result.success, "stderr: {}", result.stderr);
    let out = &result.stdout;

    let placed = out
        .find("Order placed successfully! Order ID: 1")
        .expect("order should be placed");
    assert!(out.contains("Order total: $23.00"));
    let first_track = out
        .find("Total collection for 2024-01-01: $23.00")
        .expect("first tracking should include the order");
    let cancelled = out
        .find("Order with ID 1 has been cancelled successfully!")
        .expect("order should be cancelled");
    let second_track = out
        .find("Total collection for 2024-01-01: $0.00")
        .expect("second tracking should exclude the cancelled order");

    assert!(placed < first_track);
    assert!(first_track < cancelled);
    assert!(cancelled < second_track);
}

/// SCENARIO: both tracking requests leave a report in the session
#[test]
fn scenario_first_day_keeps_both_reports() {
    let env = TestEnv::empty();
    env.write("menu_items.csv", "1,Pizza,10.00\n2,Coffee,3.00\n");
    let (mut session, _) = Session::load(&CsvRestaurantStore::new(env.path()));

    let mut console = Console::new(
        Cursor::new("1\n1,2\n2,1\n2024-01-01\n3\n2024-01-01\n2\n1\n3\n2024-01-01\n4\n"),
        Vec::new(),
        DisplayConfig::default(),
    );
    console.run(&mut session).unwrap();

    let new_year = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let reports = session.collection_reports();
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.date() == new_year));
    assert_eq!(reports[0].total_collection_amount(), Decimal::new(23, 0));
    assert_eq!(reports[1].total_collection_amount(), Decimal::ZERO);
}

/// SCENARIO: nothing is written back to the data directory
#[test]
fn scenario_first_day_leaves_files_untouched() {
    let env = TestEnv::empty();
    env.write("menu_items.csv", "1,Pizza,10.00\n");

    let result = env.run(&[], "1\n1\n1\n2024-01-01\n3\n2024-01-01\n4\n");

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(!env.join("order_details.csv").exists());
    assert!(!env.join("collection_report.csv").exists());
    assert_eq!(
        std::fs::read_to_string(env.join("menu_items.csv")).unwrap(),
        "1,Pizza,10.00\n"
    );
}
