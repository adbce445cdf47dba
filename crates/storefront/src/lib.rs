//! Stallfront Storefront library.
//!
//! Cart persistence, page controllers and checkout handoff for a small shop
//! whose orders are finalized over WhatsApp.
//!
//! # Architecture
//!
//! - [`store::CartStore`] owns the single cart slot in a [`storage::Storage`]
//!   backend; load and save are its only mutation surface
//! - [`pages`] holds the cart and shop page controllers; a UI adapter (the
//!   CLI, or a `wasm32` front end over `localStorage`) calls into them
//! - [`handoff`] turns an order summary into a `wa.me` chat link
//!
//! Everything runs synchronously on the caller's thread.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod handoff;
pub mod pages;
pub mod storage;
pub mod store;

pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
pub use handoff::{HandoffError, MessagingHandoff, WhatsAppHandoff, WhatsAppLink};
pub use pages::{CartPage, CartView, CheckoutOutcome, Notifier, RecordingNotifier, ShopPage};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{CartStore, Decoded, EmptyReason};
