//! Integration tests for Stallfront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stallfront-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - Add/remove/render/checkout flows over in-memory storage
//! - `cart_persistence` - Load/save behavior over file storage and corrupt slots
//!
//! Shared fakes for the page collaborators live here.

use stallfront_core::OrderSummary;
use stallfront_storefront::{HandoffError, MessagingHandoff};

/// Records every summary it is handed instead of navigating anywhere.
#[derive(Debug, Default)]
pub struct RecordingHandoff {
    /// Summaries in delivery order.
    pub delivered: Vec<OrderSummary>,
}

impl MessagingHandoff for RecordingHandoff {
    fn deliver(&mut self, summary: &OrderSummary) -> Result<(), HandoffError> {
        self.delivered.push(summary.clone());
        Ok(())
    }
}
