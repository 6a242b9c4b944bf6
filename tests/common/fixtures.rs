//! Test fixtures - reusable CSV content for tests.

/// Menu from the worked example plus a few extras
pub const MENU_ITEMS: &str = "\
1,Pizza,10.00
2,Coffee,3.00
3,Burger,8.50
4,Sandwich,6.25
5,Tea,2.00
";

/// Two historical orders on 2024-01-01, one of them cancelled
pub const ORDER_DETAILS: &str = "\
1,1;2,2;1,2024-01-01,Placed
2,3,1,2024-01-01,Cancelled
3,4;5,1;2,2024-01-02,Placed
";

pub const COLLECTION_REPORT: &str = "\
2024-01-01,23.00
2024-01-02,10.25
";
