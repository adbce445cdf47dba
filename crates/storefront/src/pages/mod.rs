//! Page controllers.
//!
//! Each controller is plain Rust driven by a thin UI adapter: the adapter
//! forwards clicks as method calls and mounts whatever the controller
//! renders. User-facing acknowledgements go through [`Notifier`].

pub mod cart;
pub mod shop;

pub use cart::{CartPage, CartRow, CartView, CheckoutOutcome};
pub use shop::ShopPage;

/// Shows a blocking acknowledgement to the user (the page's `alert`).
pub trait Notifier {
    /// Show `message` and return once it has been acknowledged.
    fn notify(&mut self, message: &str);
}

/// A notifier that keeps every message, for adapters that show them later
/// and for tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    /// Messages in the order they were shown.
    pub messages: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}
