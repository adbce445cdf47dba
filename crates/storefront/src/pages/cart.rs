//! Cart page controller.
//!
//! Holds the cart in memory, writes every change through the [`CartStore`]
//! and re-renders the whole list after each mutation. There is no partial
//! update: [`CartPage::render`] is idempotent and cheap.

use core::fmt;

use askama::Template;
use stallfront_core::{Cart, CartItem, CurrencyCode, Money, OrderSummary};
use tracing::instrument;

use super::Notifier;
use crate::handoff::{HandoffError, MessagingHandoff};
use crate::storage::Storage;
use crate::store::CartStore;

/// Shown in place of rows when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Shown when checkout is attempted on an empty cart.
pub const EMPTY_CHECKOUT_MESSAGE: &str = "Cart is empty!";

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    /// Position in the cart; what the row's remove control sends back.
    pub index: usize,
    /// Item name, or the placeholder for unnamed items.
    pub name: String,
    /// Line price in the page currency.
    pub price: Money,
}

impl CartRow {
    /// Price as displayed, e.g. `"NGN 2,500.00"`.
    #[must_use]
    pub fn price_label(&self) -> String {
        self.price.to_string()
    }
}

/// Render-ready snapshot of the cart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// One row per cart line, in cart order.
    pub rows: Vec<CartRow>,
    /// Sum of every row's price.
    pub total: Money,
}

impl CartView {
    /// Build the view for `cart`.
    #[must_use]
    pub fn new(cart: &Cart, currency_code: CurrencyCode) -> Self {
        let rows = cart
            .iter()
            .enumerate()
            .map(|(index, item)| CartRow {
                index,
                name: item.name().to_owned(),
                price: Money::new(item.price(), currency_code),
            })
            .collect();

        Self {
            rows,
            total: Money::new(cart.total(), currency_code),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The empty-state message, when there are no rows.
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_CART_MESSAGE)
    }

    /// Total as displayed, e.g. `"Total: NGN 3,000.00"`.
    #[must_use]
    pub fn total_label(&self) -> String {
        format!("Total: {}", self.total)
    }

    /// Render the cart list as an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn to_html(&self) -> askama::Result<String> {
        CartListTemplate {
            rows: &self.rows,
            empty_message: self.empty_message(),
            total_label: self.total_label(),
        }
        .render()
    }
}

impl fmt::Display for CartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = self.empty_message() {
            writeln!(f, "{message}")?;
        }
        for row in &self.rows {
            writeln!(f, "[{}] {} - {}", row.index, row.name, row.price)?;
        }
        write!(f, "{}", self.total_label())
    }
}

/// Cart list fragment template.
#[derive(Template)]
#[template(path = "cart/list.html")]
struct CartListTemplate<'a> {
    rows: &'a [CartRow],
    empty_message: Option<&'a str>,
    total_label: String,
}

/// Result of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The cart was empty; the user was told and nothing was handed off.
    EmptyCart,
    /// The summary was delivered to the messaging collaborator.
    HandedOff(OrderSummary),
}

/// Controller for the cart page.
#[derive(Debug)]
pub struct CartPage<S> {
    store: CartStore<S>,
    cart: Cart,
    currency_code: CurrencyCode,
}

impl<S: Storage> CartPage<S> {
    /// Open the page, loading the cart from `store`.
    pub fn new(store: CartStore<S>, currency_code: CurrencyCode) -> Self {
        let cart = store.load();
        Self {
            store,
            cart,
            currency_code,
        }
    }

    /// The in-memory cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn store(&self) -> &CartStore<S> {
        &self.store
    }

    pub fn into_store(self) -> CartStore<S> {
        self.store
    }

    /// Re-draw the cart.
    #[must_use]
    pub fn render(&self) -> CartView {
        CartView::new(&self.cart, self.currency_code)
    }

    /// Append `item`, persist, acknowledge to the user and re-render.
    #[instrument(skip(self, notifier), fields(name = item.name()))]
    pub fn add(&mut self, item: CartItem, notifier: &mut impl Notifier) -> CartView {
        let message = format!("{} added to cart!", item.name());
        self.cart.push(item);
        self.store.save(&self.cart);
        notifier.notify(&message);
        self.render()
    }

    /// Remove the line at `index`, persist and re-render.
    ///
    /// An out-of-range index removes nothing and writes nothing.
    #[instrument(skip(self))]
    pub fn remove(&mut self, index: usize) -> CartView {
        if self.cart.remove(index).is_some() {
            self.store.save(&self.cart);
        } else {
            tracing::debug!(len = self.cart.len(), "Ignoring removal of missing cart line");
        }
        self.render()
    }

    /// Remove using the raw index attached to a remove control.
    ///
    /// Anything that is not a plain non-negative integer is a no-op.
    pub fn remove_raw(&mut self, raw: &str) -> CartView {
        match raw.trim().parse::<usize>() {
            Ok(index) => self.remove(index),
            Err(_) => {
                tracing::debug!(raw, "Ignoring removal with invalid index");
                self.render()
            }
        }
    }

    /// Hand the order off, or tell the user the cart is empty.
    ///
    /// # Errors
    ///
    /// Returns `HandoffError` if the messaging collaborator fails.
    #[instrument(skip_all, fields(items = self.cart.len()))]
    pub fn checkout(
        &self,
        notifier: &mut impl Notifier,
        handoff: &mut impl MessagingHandoff,
    ) -> Result<CheckoutOutcome, HandoffError> {
        let Some(summary) = OrderSummary::from_cart(&self.cart, self.currency_code) else {
            notifier.notify(EMPTY_CHECKOUT_MESSAGE);
            return Ok(CheckoutOutcome::EmptyCart);
        };

        handoff.deliver(&summary)?;
        Ok(CheckoutOutcome::HandedOff(summary))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use stallfront_core::Price;

    use super::*;
    use crate::pages::RecordingNotifier;
    use crate::storage::MemoryStorage;

    #[derive(Default)]
    struct RecordingHandoff {
        delivered: Vec<String>,
    }

    impl MessagingHandoff for RecordingHandoff {
        fn deliver(&mut self, summary: &OrderSummary) -> Result<(), HandoffError> {
            self.delivered.push(summary.to_string());
            Ok(())
        }
    }

    fn empty_page() -> CartPage<MemoryStorage> {
        CartPage::new(CartStore::new(MemoryStorage::new(), "cart"), CurrencyCode::NGN)
    }

    fn page_with_mugs() -> CartPage<MemoryStorage> {
        let mut page = empty_page();
        let mut notifier = RecordingNotifier::default();
        page.add(CartItem::new("Red Mug", Price::normalize("₦2,500")), &mut notifier);
        page.add(CartItem::new("Blue Mug", Price::normalize("1,000.00")), &mut notifier);
        page
    }

    #[test]
    fn test_render_empty() {
        let view = empty_page().render();
        assert!(view.is_empty());
        assert_eq!(view.empty_message(), Some(EMPTY_CART_MESSAGE));
        assert_eq!(view.total_label(), "Total: NGN 0.00");
    }

    #[test]
    fn test_add_acknowledges_and_persists() {
        let mut page = empty_page();
        let mut notifier = RecordingNotifier::default();
        let view = page.add(CartItem::new("Red Mug", Price::normalize("2500")), &mut notifier);

        assert_eq!(notifier.messages, vec!["Red Mug added to cart!"]);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(page.store().load(), *page.cart());
    }

    #[test]
    fn test_render_rows_and_total() {
        let view = page_with_mugs().render();
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows.first().unwrap().price_label(), "NGN 2,500.00");
        assert_eq!(view.rows.get(1).unwrap().index, 1);
        assert_eq!(view.total.amount.amount(), Decimal::from(3500));
        assert_eq!(view.total_label(), "Total: NGN 3,500.00");
        assert!(view.empty_message().is_none());
    }

    #[test]
    fn test_render_is_idempotent() {
        let page = page_with_mugs();
        assert_eq!(page.render(), page.render());
    }

    #[test]
    fn test_remove_persists() {
        let mut page = page_with_mugs();
        let view = page.remove(0);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows.first().unwrap().name, "Blue Mug");
        assert_eq!(view.rows.first().unwrap().index, 0);
        assert_eq!(page.store().load(), *page.cart());
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut page = page_with_mugs();
        let before = page.render();
        assert_eq!(page.remove(7), before);
        assert_eq!(page.cart().len(), 2);
    }

    #[test]
    fn test_remove_raw_rejects_non_integers() {
        let mut page = page_with_mugs();
        for raw in ["", "abc", "-1", "1.5", "NaN"] {
            page.remove_raw(raw);
        }
        assert_eq!(page.cart().len(), 2);
        page.remove_raw(" 1 ");
        assert_eq!(page.cart().len(), 1);
    }

    #[test]
    fn test_checkout_empty_notifies_without_handoff() {
        let page = empty_page();
        let mut notifier = RecordingNotifier::default();
        let mut handoff = RecordingHandoff::default();

        let outcome = page.checkout(&mut notifier, &mut handoff).unwrap();

        assert_eq!(outcome, CheckoutOutcome::EmptyCart);
        assert_eq!(notifier.messages, vec![EMPTY_CHECKOUT_MESSAGE]);
        assert!(handoff.delivered.is_empty());
    }

    #[test]
    fn test_checkout_hands_off_summary() {
        let mut page = page_with_mugs();
        page.remove(0);
        let mut notifier = RecordingNotifier::default();
        let mut handoff = RecordingHandoff::default();

        let outcome = page.checkout(&mut notifier, &mut handoff).unwrap();

        assert!(matches!(outcome, CheckoutOutcome::HandedOff(_)));
        assert!(notifier.messages.is_empty());
        let text = handoff.delivered.first().unwrap();
        assert!(text.contains("Blue Mug"));
        assert!(text.contains("1,000.00"));
        assert!(text.contains("Total: NGN 1,000.00"));
    }

    #[test]
    fn test_checkout_propagates_handoff_failure() {
        struct Failing;
        impl MessagingHandoff for Failing {
            fn deliver(&mut self, _: &OrderSummary) -> Result<(), HandoffError> {
                Err(HandoffError::Delivery("offline".to_owned()))
            }
        }

        let page = page_with_mugs();
        let result = page.checkout(&mut RecordingNotifier::default(), &mut Failing);
        assert!(matches!(result, Err(HandoffError::Delivery(_))));
        assert_eq!(page.cart().len(), 2);
    }

    #[test]
    fn test_html_empty_state() {
        let html = empty_page().render().to_html().unwrap();
        assert!(html.contains(r#"<p class="empty">Your cart is empty.</p>"#));
        assert!(!html.contains("cart-item"));
    }

    #[test]
    fn test_html_rows_are_escaped() {
        let mut page = empty_page();
        page.add(
            CartItem::new("<b>Mug</b>", Price::normalize("10")),
            &mut RecordingNotifier::default(),
        );
        let html = page.render().to_html().unwrap();
        assert!(html.contains(r#"data-idx="0""#));
        assert!(html.contains("&lt;b&gt;Mug&lt;/b&gt;"));
        assert!(html.contains("Total: NGN 10.00"));
    }

    #[test]
    fn test_text_rendering() {
        let text = page_with_mugs().render().to_string();
        assert_eq!(
            text,
            "[0] Red Mug - NGN 2,500.00\n[1] Blue Mug - NGN 1,000.00\nTotal: NGN 3,500.00"
        );
    }
}
