//! Shopping cart module.
//!
//! Contains the insertion-ordered ledger, its entry type, and the
//! pricing breakdown (GST plus flat-or-free shipping).

mod cart;
mod pricing;

pub use cart::{Cart, CartEntry, ItemKind};
pub use pricing::{CartPricing, FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD, GST_RATE_BP};
