//! Prelude module for billing_date crate.
//!
//! Re-exports the derive macros from derive_more used across the crate.

pub use derive_more::{Deref, Display, Into};
