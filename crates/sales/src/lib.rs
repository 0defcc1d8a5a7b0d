//! Sales orders domain module.
//!
//! Order records as the backend stores them, the line items they carry, and
//! the draft cart a representative fills from the grade grid before
//! submitting. Pure domain logic (no IO).

pub mod cart;
pub mod display_id;
pub mod line_item;
pub mod order;
mod serde_lenient;

pub use cart::Cart;
pub use line_item::LineItem;
pub use order::{NewOrder, Order, OrderStamp, PrintStatus};
