//! Grade grid aggregation.
//!
//! Turns a flat list of sized line items into the reference/color × size
//! table printed on order sheets and production manifests.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use gradeflow_core::locale_cmp;
use gradeflow_products::sort_sizes;
use gradeflow_sales::LineItem;

/// One reference/color line of a grid.
///
/// Invariant: the values of `sizes` sum to `total_qty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeRow {
    pub reference: String,
    pub color: String,
    pub sizes: BTreeMap<String, u64>,
    pub total_qty: u64,
}

impl GradeRow {
    /// Quantity in a size column (0 when the grade has no such size).
    pub fn quantity(&self, size: &str) -> u64 {
        self.sizes.get(size).copied().unwrap_or(0)
    }
}

/// Rows sorted by reference, headers sorted by the size table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GradeTable {
    pub rows: Vec<GradeRow>,
    pub headers: Vec<String>,
}

impl GradeTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Σ `total_qty` over all rows.
    pub fn total_pieces(&self) -> u64 {
        self.rows.iter().map(|r| r.total_qty).sum()
    }

    /// Column sums, in header order.
    pub fn column_totals(&self) -> Vec<(String, u64)> {
        self.headers
            .iter()
            .map(|size| {
                let total = self.rows.iter().map(|r| r.quantity(size)).sum();
                (size.clone(), total)
            })
            .collect()
    }
}

/// Grouping primitive: accumulates line items per exact (reference, color)
/// key, remembering first-seen order of groups and sizes.
#[derive(Debug, Default)]
pub struct GradeAccumulator {
    index: HashMap<(String, String), usize>,
    rows: Vec<GradeRow>,
    seen_sizes: HashSet<String>,
    sizes: Vec<String>,
}

impl GradeAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one line; repeated (reference, color, size) lines accumulate.
    ///
    /// A blank size lands in the `""` column so no pieces are lost.
    pub fn push(&mut self, item: &LineItem) {
        let qty = item.pieces();
        let key = (item.reference.clone(), item.color.clone());
        let size = if item.size.trim().is_empty() { "" } else { item.size.as_str() };

        let slot = match self.index.get(&key) {
            Some(slot) => *slot,
            None => {
                self.rows.push(GradeRow {
                    reference: item.reference.clone(),
                    color: item.color.clone(),
                    sizes: BTreeMap::new(),
                    total_qty: 0,
                });
                self.index.insert(key, self.rows.len() - 1);
                self.rows.len() - 1
            }
        };

        let row = &mut self.rows[slot];
        *row.sizes.entry(size.to_string()).or_insert(0) += qty;
        row.total_qty += qty;

        if self.seen_sizes.insert(size.to_string()) {
            self.sizes.push(size.to_string());
        }
    }

    /// Groups in first-seen order.
    pub fn groups(&self) -> &[GradeRow] {
        &self.rows
    }

    /// Distinct sizes in first-seen order.
    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    /// Sorted table: rows by reference (locale-aware, stable), headers by
    /// size rank with unranked sizes last in first-seen order.
    pub fn into_table(self) -> GradeTable {
        let mut rows = self.rows;
        rows.sort_by(|a, b| locale_cmp(&a.reference, &b.reference));

        let mut headers = self.sizes;
        sort_sizes(&mut headers);

        GradeTable { rows, headers }
    }
}

/// Build the grade grid for a list of line items.
///
/// Lines without a size are kept in a `""` column (ordered with the unranked
/// sizes), so the grid always accounts for every piece.
pub fn aggregate_grid(items: &[LineItem]) -> GradeTable {
    let mut acc = GradeAccumulator::new();
    for item in items {
        acc.push(item);
    }

    let unsized_lines = items.iter().filter(|i| i.size.trim().is_empty()).count();
    if unsized_lines > 0 {
        tracing::debug!(unsized_lines, "grade grid has line items without a size");
    }

    acc.into_table()
}
