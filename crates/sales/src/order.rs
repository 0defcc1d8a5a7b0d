use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gradeflow_core::{ClientId, Entity, OrderId, ProfileId};

use crate::line_item::{LineItem, total_pieces};
use crate::serde_lenient;

/// Print lifecycle of an order sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintStatus {
    Pending,
    Printed,
}

/// Order record as stored by the backend.
///
/// Client and representative names are denormalized onto the order at
/// submission time so the sheet prints the same even if the client record
/// changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(default)]
    pub display_id: Option<String>,
    #[serde(default)]
    pub client_id: Option<ClientId>,
    #[serde(default, deserialize_with = "serde_lenient::null_as_default")]
    pub client_name: String,
    #[serde(default, deserialize_with = "serde_lenient::null_as_default")]
    pub client_city: String,
    #[serde(default, deserialize_with = "serde_lenient::null_as_default")]
    pub client_state: String,
    #[serde(default)]
    pub rep_id: Option<ProfileId>,
    #[serde(default, deserialize_with = "serde_lenient::null_as_default")]
    pub rep_name: String,
    #[serde(default, deserialize_with = "serde_lenient::null_as_default")]
    pub items: Vec<LineItem>,
    #[serde(default, deserialize_with = "serde_lenient::null_as_default")]
    pub delivery_date: String,
    #[serde(default, deserialize_with = "serde_lenient::null_as_default")]
    pub payment_method: String,
    #[serde(default, deserialize_with = "serde_lenient::null_as_default")]
    pub printed: bool,
    #[serde(default, deserialize_with = "serde_lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Order {
    /// Σ quantities across all lines.
    pub fn total_pieces(&self) -> u64 {
        total_pieces(&self.items)
    }

    /// Number shown on the sheet: the display id, or the first six characters
    /// of the order id for rows created without one.
    pub fn display_number(&self) -> String {
        match self.display_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => self.id.to_string().chars().take(6).collect(),
        }
    }

    pub fn print_status(&self) -> PrintStatus {
        if self.printed {
            PrintStatus::Printed
        } else {
            PrintStatus::Pending
        }
    }

    pub fn mark_printed(&mut self) {
        self.printed = true;
    }

    pub fn is_owned_by(&self, rep_id: ProfileId) -> bool {
        self.rep_id == Some(rep_id)
    }

    /// Creation date formatted `dd/mm/yyyy`, `-` when unknown.
    pub fn created_on(&self) -> String {
        self.created_at
            .map(|dt| dt.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Values assigned when an order is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStamp {
    pub id: OrderId,
    pub display_id: String,
    pub rep_id: ProfileId,
    pub rep_name: String,
    pub created_at: DateTime<Utc>,
}

/// Order submission payload produced by [`crate::Cart::checkout`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub client_id: ClientId,
    pub client_name: String,
    pub client_city: String,
    pub client_state: String,
    pub items: Vec<LineItem>,
    pub delivery_date: String,
    pub payment_method: String,
}

impl NewOrder {
    pub fn total_pieces(&self) -> u64 {
        total_pieces(&self.items)
    }

    pub fn into_order(self, stamp: OrderStamp) -> Order {
        Order {
            id: stamp.id,
            display_id: Some(stamp.display_id),
            client_id: Some(self.client_id),
            client_name: self.client_name,
            client_city: self.client_city,
            client_state: self.client_state,
            rep_id: Some(stamp.rep_id),
            rep_name: stamp.rep_name,
            items: self.items,
            delivery_date: self.delivery_date,
            payment_method: self.payment_method,
            printed: false,
            created_at: Some(stamp.created_at),
        }
    }
}
