//! Property tests for order totals and id assignment.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use quickbite::{MenuCatalog, MenuItem, Order, OrderStatus, Session};

fn price() -> impl Strategy<Value = Decimal> {
    // 0.00 ..= 999.99
    (0i64..100_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn menu_item() -> impl Strategy<Value = MenuItem> {
    (1u32..50, "[A-Za-z ]{1,12}", price()).prop_map(|(id, name, price)| MenuItem::new(id, name, price))
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an order's total is the sum of price x quantity over its lines.
    #[test]
    fn property_total_is_sum_of_subtotals(
        lines in proptest::collection::vec((menu_item(), -5i32..20), 0..8)
    ) {
        let (items, quantities): (Vec<MenuItem>, Vec<i32>) = lines.into_iter().unzip();
        let expected: Decimal = items
            .iter()
            .zip(&quantities)
            .map(|(item, qty)| item.price() * Decimal::from(*qty))
            .sum();

        let order = Order::new(1, items, quantities, date(), OrderStatus::Placed).unwrap();

        prop_assert_eq!(order.total_amount(), expected);
    }

    /// PROPERTY: lists of different lengths never build an order.
    #[test]
    fn property_mismatched_lengths_are_rejected(
        items in proptest::collection::vec(menu_item(), 0..6),
        extra in 1usize..4,
    ) {
        let quantities = vec![1; items.len() + extra];
        prop_assert!(Order::new(1, items, quantities, date(), OrderStatus::Placed).is_err());
    }

    /// PROPERTY: a placed order always gets an id above every existing one,
    /// or nothing is placed once the id space is used up.
    #[test]
    fn property_next_id_exceeds_existing_ids(
        ids in proptest::collection::vec(
            prop_oneof![1u32..10_000, (u32::MAX - 3)..=u32::MAX],
            0..10,
        )
    ) {
        let orders: Vec<Order> = ids
            .iter()
            .map(|id| Order::new(*id, Vec::new(), Vec::new(), date(), OrderStatus::Placed).unwrap())
            .collect();
        let mut session = Session::new(MenuCatalog::default(), orders, Vec::new());
        let highest = ids.iter().copied().max().unwrap_or(0);

        match session.place_order(Vec::new(), Vec::new(), date()) {
            Ok(order) => {
                prop_assert!(ids.iter().all(|id| *id < order.id()));
                prop_assert_eq!(order.id(), highest + 1);
            }
            Err(_) => {
                prop_assert_eq!(highest, u32::MAX);
                prop_assert_eq!(session.orders().len(), ids.len());
            }
        }
    }
}
