//! Printable order sheet.

use serde::Serialize;

use gradeflow_core::{OrderId, format_location};
use gradeflow_sales::{Order, PrintStatus};

use crate::grid::{GradeTable, aggregate_grid};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnTotal {
    pub size: String,
    pub total: u64,
}

/// Everything the order sheet shows, already laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintSheet {
    pub order_id: OrderId,
    pub number: String,
    pub client_name: String,
    pub client_location: String,
    pub rep_name: String,
    pub delivery_date: String,
    pub payment_method: String,
    pub created_on: String,
    pub status: PrintStatus,
    pub table: GradeTable,
    pub column_totals: Vec<ColumnTotal>,
    /// Σ of every line's quantity; equals the grid's total.
    pub total_pieces: u64,
}

impl PrintSheet {
    pub fn for_order(order: &Order) -> Self {
        let table = aggregate_grid(&order.items);
        let column_totals = table
            .column_totals()
            .into_iter()
            .map(|(size, total)| ColumnTotal { size, total })
            .collect();

        Self {
            order_id: order.id,
            number: order.display_number(),
            client_name: order.client_name.clone(),
            client_location: format_location(&order.client_city, &order.client_state),
            rep_name: order.rep_name.clone(),
            delivery_date: order.delivery_date.clone(),
            payment_method: order.payment_method.clone(),
            created_on: order.created_on(),
            status: order.print_status(),
            total_pieces: order.total_pieces(),
            column_totals,
            table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradeflow_sales::LineItem;

    #[test]
    fn sheet_lays_out_grid_with_column_and_grand_totals() {
        let mut order: Order = serde_json::from_value(serde_json::json!({
            "id": OrderId::new(),
            "display_id": "51234",
            "client_name": "Loja Central",
            "client_city": "Campinas",
            "client_state": "SP",
            "rep_name": "Ana",
            "created_at": "2024-03-09T14:00:00Z",
        }))
        .unwrap();
        order.items = vec![
            LineItem::new("B", "BLUE", "G", 2),
            LineItem::new("A", "RED", "M", 3),
            LineItem::new("A", "RED", "G", 1),
            LineItem::new("A", "RED", "", 4),
        ];

        let sheet = PrintSheet::for_order(&order);

        assert_eq!(sheet.number, "51234");
        assert_eq!(sheet.client_location, "Campinas - SP");
        assert_eq!(sheet.created_on, "09/03/2024");
        assert_eq!(sheet.status, PrintStatus::Pending);
        assert_eq!(sheet.table.rows[0].reference, "A");
        assert_eq!(
            sheet.column_totals,
            vec![
                ColumnTotal { size: "M".to_string(), total: 3 },
                ColumnTotal { size: "G".to_string(), total: 3 },
                ColumnTotal { size: String::new(), total: 4 },
            ]
        );
        assert_eq!(sheet.table.total_pieces(), 10);
        assert_eq!(sheet.total_pieces, 10);
    }
}
