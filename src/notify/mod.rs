//! The `notify` module is the domain-facing entry point of the hub.
//!
//! The rest of the system calls it after an order event commits; it hides
//! dispatcher and registry details behind three narrow operations.

pub mod orders;

pub use orders::{OrderNotifier, ORDERS_CHANGED, ORDER_CHANGED};
