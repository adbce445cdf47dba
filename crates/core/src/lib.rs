//! Stallfront Core - Shared types library.
//!
//! This crate provides the types used across all Stallfront components:
//! - `storefront` - Cart store, cart page controller and checkout handoff
//! - `cli` - Command-line adapter driving the storefront against local files
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! storage access, no logging. This keeps it lightweight and allows it to be
//! used anywhere, including `wasm32` builds.
//!
//! # Modules
//!
//! - [`types`] - Prices, cart line items, order summaries and catalog cards

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
