//! Property tests for record parsing (never panics, keeps good data).

use proptest::prelude::*;
use rust_decimal::Decimal;

use quickbite::infrastructure::repositories::records::{
    parse_collection_report, parse_menu_item, parse_order,
};
use quickbite::parse::{parse_date, split_list};
use quickbite::{MenuCatalog, MenuItem};

fn menu() -> MenuCatalog {
    MenuCatalog::new(vec![
        MenuItem::new(1, "Pizza", Decimal::new(1000, 2)),
        MenuItem::new(2, "Coffee", Decimal::new(300, 2)),
    ])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: arbitrary lines never panic any record parser.
    #[test]
    fn property_parsers_never_panic(line in "[ -~]{0,64}") {
        let fields = split_list(&line, ',');
        let _ = parse_menu_item(&fields);
        let _ = parse_order(&fields, &menu());
        let _ = parse_collection_report(&fields);
        let _ = parse_date(&line);
    }

    /// PROPERTY: split tokens never carry surrounding whitespace.
    #[test]
    fn property_split_tokens_are_trimmed(line in "[0-9 ,;]{0,32}") {
        for token in split_list(&line, ',') {
            prop_assert_eq!(token, token.trim());
        }
    }

    /// PROPERTY: well-formed menu lines keep id, name and price.
    #[test]
    fn property_menu_line_fields_survive(
        id in 1u32..100_000,
        name in "[A-Za-z][A-Za-z ]{0,10}[A-Za-z]",
        cents in 0i64..1_000_000,
    ) {
        let price = Decimal::new(cents, 2);
        let line = format!("{},{},{}", id, name, price);
        let fields = split_list(&line, ',');

        let item = parse_menu_item(&fields).unwrap();

        prop_assert_eq!(item.id(), id);
        prop_assert_eq!(item.name(), name.as_str());
        prop_assert_eq!(item.price(), price);
    }
}
