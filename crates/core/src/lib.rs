//! `gradeflow-core`: shared domain building blocks.
//!
//! Record identifiers, the domain error model, the quantity value object and
//! label helpers used by every other crate. No IO lives here.

pub mod entity;
pub mod error;
pub mod id;
pub mod quantity;
pub mod text;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ClientId, OrderId, ProductId, ProfileId};
pub use quantity::Quantity;
pub use text::{format_location, locale_cmp, normalize_label};
pub use value_object::ValueObject;
