//! Human-readable order summary handed to the messaging app at checkout.

use core::fmt;

use super::cart::Cart;
use super::price::{CurrencyCode, Money};

/// Greeting that opens every order message.
const GREETING: &str = "Hello, I'd like to order:";

/// One `- name - NGN 1,000.00` line of the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    /// Item name.
    pub name: String,
    /// Item price in the order currency.
    pub price: Money,
}

/// An order summary built from a non-empty cart.
///
/// Renders as:
///
/// ```text
/// Hello, I'd like to order:
/// - Blue Mug - NGN 1,000.00
///
/// Total: NGN 1,000.00
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    lines: Vec<OrderLine>,
    total: Money,
}

impl OrderSummary {
    /// Build a summary for `cart`, or `None` if the cart is empty.
    #[must_use]
    pub fn from_cart(cart: &Cart, currency_code: CurrencyCode) -> Option<Self> {
        if cart.is_empty() {
            return None;
        }

        let lines = cart
            .iter()
            .map(|item| OrderLine {
                name: item.name().to_owned(),
                price: Money::new(item.price(), currency_code),
            })
            .collect();

        Some(Self {
            lines,
            total: Money::new(cart.total(), currency_code),
        })
    }

    #[must_use]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    #[must_use]
    pub const fn total(&self) -> Money {
        self.total
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{GREETING}")?;
        for line in &self.lines {
            writeln!(f, "- {} - {}", line.name, line.price)?;
        }
        write!(f, "\nTotal: {}", self.total)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::cart::CartItem;
    use crate::types::price::Price;

    #[test]
    fn test_empty_cart_has_no_summary() {
        assert!(OrderSummary::from_cart(&Cart::new(), CurrencyCode::NGN).is_none());
    }

    #[test]
    fn test_summary_text() {
        let cart = Cart::from(vec![
            CartItem::new("Red Mug", Price::normalize("2500")),
            CartItem::new("Blue Mug", Price::normalize("1000")),
        ]);
        let summary = OrderSummary::from_cart(&cart, CurrencyCode::NGN).unwrap();

        assert_eq!(
            summary.to_string(),
            "Hello, I'd like to order:\n\
             - Red Mug - NGN 2,500.00\n\
             - Blue Mug - NGN 1,000.00\n\
             \n\
             Total: NGN 3,500.00"
        );
    }

    #[test]
    fn test_summary_uses_currency() {
        let cart = Cart::from(vec![CartItem::new("Cap", Price::normalize("12.5"))]);
        let summary = OrderSummary::from_cart(&cart, CurrencyCode::USD).unwrap();
        assert!(summary.to_string().ends_with("Total: USD 12.50"));
        assert_eq!(summary.lines().len(), 1);
    }
}
