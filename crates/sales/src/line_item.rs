use serde::{Deserialize, Serialize};

use gradeflow_core::{Quantity, ValueObject};
use gradeflow_products::Product;

/// One sized line of an order (or of the draft cart).
///
/// Every field tolerates being absent or `null`: text columns default to
/// empty and the quantity goes through [`Quantity::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default, alias = "ref", deserialize_with = "crate::serde_lenient::null_as_default")]
    pub reference: String,
    #[serde(default, deserialize_with = "crate::serde_lenient::null_as_default")]
    pub color: String,
    #[serde(default, deserialize_with = "crate::serde_lenient::null_as_default")]
    pub size: String,
    #[serde(default)]
    pub quantity: Quantity,
}

impl ValueObject for LineItem {}

impl LineItem {
    pub fn new(
        reference: impl Into<String>,
        color: impl Into<String>,
        size: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            reference: reference.into(),
            color: color.into(),
            size: size.into(),
            quantity: Quantity::new(quantity),
        }
    }

    /// Line for an exact catalog variant.
    pub fn for_variant(product: &Product, quantity: Quantity) -> Self {
        Self {
            reference: product.reference.clone(),
            color: product.color.clone(),
            size: product.size.clone(),
            quantity,
        }
    }

    pub fn pieces(&self) -> u64 {
        u64::from(self.quantity)
    }

    /// Whether this line belongs to the given grade (exact, case-sensitive).
    pub fn is_grade(&self, reference: &str, color: &str) -> bool {
        self.reference == reference && self.color == color
    }

    /// Label used by the best-seller ranking: `"{reference} - {color}"`.
    pub fn grade_label(&self) -> String {
        format!("{} - {}", self.reference, self.color)
    }
}

/// Σ quantities of a slice of lines.
pub fn total_pieces(items: &[LineItem]) -> u64 {
    items.iter().map(LineItem::pieces).sum()
}
