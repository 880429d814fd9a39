//! The `utils` module provides a collection of utility definitions used
//! across the `orderhub` application.
//!
//! This module centralizes reusable components, such as the crate error
//! type, to promote code consistency and reduce duplication.

pub mod error;
