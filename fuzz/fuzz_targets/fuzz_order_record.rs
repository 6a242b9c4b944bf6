#![no_main]

use libfuzzer_sys::fuzz_target;
use quickbite::infrastructure::repositories::records;
use quickbite::parse::{split_list, FIELD_SEPARATOR};
use quickbite::{MenuCatalog, MenuItem};
use rust_decimal::Decimal;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        let menu = MenuCatalog::new(vec![
            MenuItem::new(1, "Pizza", Decimal::new(1000, 2)),
            MenuItem::new(2, "Coffee", Decimal::new(300, 2)),
        ]);
        let fields = split_list(line, FIELD_SEPARATOR);

        if let Ok(order) = records::parse_order(&fields, &menu) {
            assert_eq!(order.line_items().len(), order.quantities().count());
        }
        let _ = records::parse_menu_item(&fields);
        let _ = records::parse_collection_report(&fields);
    }
});
