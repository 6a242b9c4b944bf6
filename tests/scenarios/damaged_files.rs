//! Scenario: Damaged data files
//!
//! Journey: Someone hand-edited the order history and left bad lines in it.
//!
//! Steps:
//! 1. Order file mixes good lines, malformed lines and unknown items
//! 2. Owner starts QuickBite
//! 3. Tracks collections for the affected day
//!
//! Success Criteria:
//! - Good lines load, bad lines are skipped with a warning
//! - The session still starts and totals only the good orders

use crate::common::*;

/// SCENARIO: malformed order lines are skipped, good ones kept
#[test]
fn scenario_damaged_order_file_loads_good_lines() {
    let env = TestEnv::empty();
    env.write("menu_items.csv", "1,Pizza,10.00\n2,Coffee,3.00\n");
    env.write(
        "order_details.csv",
        "\
1,1;2,2;1,2024-01-01,Placed
two,1,1,2024-01-01,Placed
3,1,1,01/01/2024,Placed
4,9,1,2024-01-01,Placed
5,2,3,2024-01-01,Placed
",
    );

    let result = env.run(&[], "3\n2024-01-01\n1\n\n\n2024-01-02\n4\n");

    assert!(result.success, "stderr: {}", result.stderr);
    // Orders 1 (23.00) and 5 (9.00) survive
    assert!(result
        .stdout
        .contains("Total collection for 2024-01-01: $32.00"));
    assert!(result.stdout.contains("Order placed successfully! Order ID: 6"));
    assert!(
        result.stderr.contains("skipping malformed"),
        "stderr: {}",
        result.stderr
    );
}

/// SCENARIO: an unreadable collection report does not stop the session
#[test]
fn scenario_bad_collection_report_is_skipped() {
    let env = TestEnv::with_fixtures();
    env.write("collection_report.csv", "not a date,12\n2024-01-01,abc\n");

    let result = env.run(&[], "3\n2024-01-01\n4\n");

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result
        .stdout
        .contains("Total collection for 2024-01-01: $23.00"));
}
