use serde::{Deserialize, Serialize};

use gradeflow_core::{DomainError, DomainResult, Entity, ProductId, normalize_label};

/// Product variant: one size of one reference/color grade.
///
/// The backend column is called `ref`; `reference` is accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "ref", alias = "reference")]
    pub reference: String,
    pub color: String,
    pub size: String,
    #[serde(default)]
    pub search_key: String,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Product {
    /// Whether this variant belongs to the given grade.
    pub fn is_grade(&self, reference: &str, color: &str) -> bool {
        self.reference == reference && self.color == color
    }

    /// Exact variant match (reference, color and size).
    pub fn is_variant(&self, reference: &str, color: &str, size: &str) -> bool {
        self.is_grade(reference, color) && self.size == size
    }
}

/// Insert payload for a product variant (the store assigns the id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(rename = "ref", alias = "reference")]
    pub reference: String,
    pub color: String,
    pub size: String,
    pub search_key: String,
}

impl NewProduct {
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            reference: self.reference,
            color: self.color,
            size: self.size,
            search_key: self.search_key,
        }
    }
}

/// Free-text search key stored with each variant: `"{REF} {COLOR} {SIZE}"`.
pub fn search_key(reference: &str, color: &str, size: &str) -> String {
    format!("{reference} {color} {size}").to_uppercase()
}

/// Command: RegisterGrade.
///
/// Registers one reference/color across a selection of sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterGrade {
    pub reference: String,
    pub color: String,
    pub sizes: Vec<String>,
}

impl RegisterGrade {
    pub fn new(
        reference: impl Into<String>,
        color: impl Into<String>,
        sizes: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            reference: reference.into(),
            color: color.into(),
            sizes: sizes.into_iter().map(Into::into).collect(),
        }
    }

    /// Expand into one insert payload per selected size.
    ///
    /// Reference, color and sizes are normalized (trimmed, upper case); blank
    /// and repeated sizes are dropped, selection order is kept.
    pub fn variants(&self) -> DomainResult<Vec<NewProduct>> {
        let reference = normalize_label(&self.reference);
        let color = normalize_label(&self.color);

        if reference.is_empty() {
            return Err(DomainError::validation("reference must not be blank"));
        }
        if color.is_empty() {
            return Err(DomainError::validation("color must not be blank"));
        }

        let mut sizes: Vec<String> = Vec::with_capacity(self.sizes.len());
        for size in self.sizes.iter().map(|s| normalize_label(s)) {
            if !size.is_empty() && !sizes.contains(&size) {
                sizes.push(size);
            }
        }

        if sizes.is_empty() {
            return Err(DomainError::validation("at least one size must be selected"));
        }

        Ok(sizes
            .into_iter()
            .map(|size| NewProduct {
                search_key: search_key(&reference, &color, &size),
                reference: reference.clone(),
                color: color.clone(),
                size,
            })
            .collect())
    }
}
