//! Clients domain module.
//!
//! Clients are the shops a sales representative sells to. Each client record
//! is owned by the representative who registered it.

pub mod client;

pub use client::{Client, NewClient};
