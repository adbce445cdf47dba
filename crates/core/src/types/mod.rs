//! Core types for Stallfront.
//!
//! This module provides type-safe wrappers for the storefront's domain concepts.

pub mod cart;
pub mod catalog;
pub mod order;
pub mod price;

pub use cart::{Cart, CartItem};
pub use catalog::{Badge, Filter, FilterButton, ProductCard, SizeSelector, apply_filter};
pub use order::{OrderLine, OrderSummary};
pub use price::{CurrencyCode, CurrencyCodeError, Money, Price, format_amount};
