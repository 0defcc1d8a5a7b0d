//! Draft order a representative builds grade by grade.

use gradeflow_core::{DomainError, DomainResult, Quantity};
use gradeflow_parties::Client;
use gradeflow_products::Catalog;

use crate::line_item::{LineItem, total_pieces};
use crate::order::NewOrder;

/// Draft cart (not persisted).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_pieces(&self) -> u64 {
        total_pieces(&self.items)
    }

    /// Add one grade's worth of quantities typed into the size grid.
    ///
    /// Sizes with a zero quantity, or with no registered variant for the
    /// grade, are ignored. Returns the number of lines added.
    pub fn add_grid<I, S>(&mut self, catalog: &Catalog<'_>, reference: &str, color: &str, quantities: I) -> usize
    where
        I: IntoIterator<Item = (S, Quantity)>,
        S: AsRef<str>,
    {
        let before = self.items.len();
        for (size, quantity) in quantities {
            if quantity.is_zero() {
                continue;
            }
            if let Some(variant) = catalog.find_variant(reference, color, size.as_ref()) {
                self.items.push(LineItem::for_variant(variant, quantity));
            }
        }
        self.items.len() - before
    }

    /// Drop every line of a grade. Returns the number of lines removed.
    pub fn remove_grade(&mut self, reference: &str, color: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.is_grade(reference, color));
        before - self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Turn the cart into an order payload for `client`.
    ///
    /// Fails without a client or with an empty cart; on success the cart is
    /// emptied.
    pub fn checkout(
        &mut self,
        client: Option<&Client>,
        delivery_date: impl Into<String>,
        payment_method: impl Into<String>,
    ) -> DomainResult<NewOrder> {
        let Some(client) = client else {
            return Err(DomainError::validation("a client must be selected"));
        };
        if self.items.is_empty() {
            return Err(DomainError::validation("cart has no items"));
        }

        Ok(NewOrder {
            client_id: client.id,
            client_name: client.name.clone(),
            client_city: client.city.clone(),
            client_state: client.state.clone(),
            items: std::mem::take(&mut self.items),
            delivery_date: delivery_date.into().trim().to_string(),
            payment_method: payment_method.into().trim().to_string(),
        })
    }
}
