//! # OrderHub
//!
//! `orderhub` is a minimalist, in-process notification hub for an
//! order-management backend. Connected client sessions subscribe to
//! topic-scoped event streams and receive push notifications when orders
//! are created or change status, without any external message broker or
//! persistent transport.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `hub`: The central component that tracks connections and topic membership
//!   and fans named events out to registered handlers.
//! - `notify`: The domain-facing facade that translates order events into hub
//!   broadcasts.
//! - `config`: Handles loading and managing application configuration.
//! - `utils`: Contains shared utilities, such as error handling.

pub mod config;
pub mod hub;
pub mod notify;
pub mod utils;
