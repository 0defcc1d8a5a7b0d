//! Product catalog: variants, grade registration and the size ordering table.
//!
//! Pure domain logic (no IO). Variants are fetched and stored by the record
//! store; this crate decides what a valid grade looks like and how sizes are
//! ordered everywhere they are displayed.

pub mod catalog;
pub mod product;
pub mod size;

pub use catalog::{Catalog, CatalogGroup};
pub use product::{NewProduct, Product, RegisterGrade, search_key};
pub use size::{SIZE_TABLE, UNRANKED, compare_sizes, size_rank, sort_sizes, standard_sizes};
