use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use gradeflow_core::OrderId;
use gradeflow_reporting::{PrintSheet, ReportClock, production_manifest, summarize_metrics_at};
use gradeflow_sales::Order;

use crate::args::Command;

/// Read an orders export: a JSON array of order rows.
pub fn load_orders(path: &Path) -> Result<Vec<Order>> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let orders: Vec<Order> =
        serde_json::from_str(&raw).with_context(|| format!("parsing orders from {}", path.display()))?;
    tracing::info!(path = %path.display(), orders = orders.len(), "orders loaded");
    Ok(orders)
}

/// Run `command` and return the report as JSON.
pub fn execute(command: &Command, clock: &ReportClock) -> Result<Value> {
    let report = match command {
        Command::Metrics { orders, .. } => {
            let orders = load_orders(orders)?;
            serde_json::to_value(summarize_metrics_at(&orders, &command.range(), clock))?
        }
        Command::Manifest { orders, selected } => {
            let orders = load_orders(orders)?;
            let ids = selected
                .iter()
                .map(|s| resolve(&orders, s).map(|o| o.id))
                .collect::<Result<Vec<OrderId>>>()?;
            serde_json::to_value(production_manifest(&orders, &ids))?
        }
        Command::Print { orders, order } => {
            let orders = load_orders(orders)?;
            serde_json::to_value(PrintSheet::for_order(resolve(&orders, order)?))?
        }
    };
    Ok(report)
}

/// Find an order by id, falling back to its display number.
fn resolve<'a>(orders: &'a [Order], selector: &str) -> Result<&'a Order> {
    let selector = selector.trim();
    if let Ok(id) = selector.parse::<OrderId>() {
        if let Some(order) = orders.iter().find(|o| o.id == id) {
            return Ok(order);
        }
    }

    let mut matches = orders.iter().filter(|o| o.display_number() == selector);
    match (matches.next(), matches.next()) {
        (Some(order), None) => Ok(order),
        (Some(_), Some(_)) => bail!("order number '{selector}' is ambiguous; use the order id"),
        (None, _) => bail!("no order matches '{selector}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradeflow_sales::LineItem;

    fn order(display: &str, pieces: u32) -> Order {
        serde_json::from_value(serde_json::json!({
            "id": OrderId::new(),
            "display_id": display,
            "items": [LineItem::new("R1", "AZUL", "M", pieces)],
        }))
        .unwrap()
    }

    #[test]
    fn resolves_by_id_then_display_number() {
        let orders = vec![order("11111", 1), order("22222", 2)];

        assert_eq!(resolve(&orders, "22222").unwrap().id, orders[1].id);
        assert_eq!(resolve(&orders, &orders[0].id.to_string()).unwrap().id, orders[0].id);
        assert!(resolve(&orders, "33333").is_err());
    }

    #[test]
    fn duplicate_display_numbers_are_ambiguous() {
        let orders = vec![order("11111", 1), order("11111", 2)];
        let err = resolve(&orders, "11111").unwrap_err();
        assert!(err.to_string().contains("ambiguous"));
    }
}
