//! Production manifest (romaneio): one grid across a selection of orders.

use std::collections::HashSet;

use serde::Serialize;

use gradeflow_core::OrderId;
use gradeflow_sales::Order;

use crate::grid::{GradeTable, aggregate_grid};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductionManifest {
    /// Selected orders that were found, in collection order.
    pub orders: Vec<OrderId>,
    pub table: GradeTable,
    pub total_pieces: u64,
}

/// Aggregate every line of the selected orders into one grid.
///
/// Ids that match no order are ignored.
pub fn production_manifest(orders: &[Order], selected: &[OrderId]) -> ProductionManifest {
    let wanted: HashSet<OrderId> = selected.iter().copied().collect();

    let picked: Vec<&Order> = orders.iter().filter(|o| wanted.contains(&o.id)).collect();
    let items: Vec<_> = picked.iter().flat_map(|o| o.items.iter().cloned()).collect();
    let table = aggregate_grid(&items);

    if picked.len() < wanted.len() {
        tracing::warn!(
            selected = wanted.len(),
            found = picked.len(),
            "production manifest ignored unknown order ids"
        );
    }

    ProductionManifest {
        orders: picked.iter().map(|o| o.id).collect(),
        total_pieces: table.total_pieces(),
        table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradeflow_sales::LineItem;

    fn order(items: Vec<LineItem>) -> Order {
        let mut order: Order = serde_json::from_value(serde_json::json!({ "id": OrderId::new() })).unwrap();
        order.items = items;
        order
    }

    #[test]
    fn manifest_sums_only_selected_orders() {
        let orders = vec![
            order(vec![LineItem::new("A", "RED", "M", 3), LineItem::new("B", "BLUE", "P", 1)]),
            order(vec![LineItem::new("A", "RED", "M", 2), LineItem::new("A", "RED", "G", 4)]),
            order(vec![LineItem::new("C", "RED", "M", 100)]),
        ];
        let manifest = production_manifest(&orders, &[orders[1].id, orders[0].id]);

        assert_eq!(manifest.orders, vec![orders[0].id, orders[1].id]);
        assert_eq!(manifest.total_pieces, 10);
        assert_eq!(manifest.table.headers, vec!["P", "M", "G"]);
        assert_eq!(manifest.table.rows.len(), 2);
        assert_eq!(manifest.table.rows[0].quantity("M"), 5);
        assert_eq!(manifest.table.rows[0].total_qty, 9);
    }

    #[test]
    fn empty_or_unknown_selection_yields_empty_manifest() {
        let orders = vec![order(vec![LineItem::new("A", "RED", "M", 3)])];

        assert_eq!(production_manifest(&orders, &[]), ProductionManifest::default());
        let unknown = production_manifest(&orders, &[OrderId::new()]);
        assert!(unknown.orders.is_empty());
        assert!(unknown.table.is_empty());
    }
}
