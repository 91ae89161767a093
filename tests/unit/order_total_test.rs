// Order payload totals

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;
use storefront_conformance::modules::orders::models::order_total;
use storefront_conformance::modules::orders::{NewOrder, OrderItem};

fn item(price: Decimal, quantity: u32) -> OrderItem {
    OrderItem {
        product_id: json!("p-1"),
        name: "Item".to_string(),
        price,
        quantity,
    }
}

#[test]
fn test_fixture_order_total() {
    let order = NewOrder::single_item(Some(json!("u-1")), json!("p-1"));
    assert_eq!(order.total, dec!(699.99));
    assert_eq!(order.user_id, Some(json!("u-1")));
}

#[test]
fn test_total_is_exact_in_cents() {
    let items = vec![item(dec!(0.10), 3), item(dec!(0.20), 1)];
    assert_eq!(order_total(&items), dec!(0.50));
}

proptest! {
    /// Total equals the sum of line totals, with no float drift
    #[test]
    fn prop_total_sums_lines(lines in prop::collection::vec((1i64..1_000_000, 1u32..10), 0..10)) {
        let items: Vec<OrderItem> = lines
            .iter()
            .map(|(cents, quantity)| item(Decimal::new(*cents, 2), *quantity))
            .collect();

        let expected_cents: i64 = lines.iter().map(|(cents, quantity)| cents * *quantity as i64).sum();
        prop_assert_eq!(order_total(&items), Decimal::new(expected_cents, 2));
    }
}
