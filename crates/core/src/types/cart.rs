//! Cart line items and the ordered cart.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::price::Price;

/// A single cart line: product name plus normalized price.
///
/// Adding the same product twice yields two separate lines; there is no
/// quantity field and no identity merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItem {
    name: String,
    price: Price,
}

impl CartItem {
    /// Name used when a product card or stored record has no usable name.
    pub const PLACEHOLDER_NAME: &'static str = "Unknown item";

    /// Create a cart line. Empty names are replaced by [`Self::PLACEHOLDER_NAME`].
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        let name = name.into();
        let name = if name.is_empty() {
            Self::PLACEHOLDER_NAME.to_owned()
        } else {
            name
        };
        Self { name, price }
    }

    /// Decode one stored element without failing.
    ///
    /// Objects contribute their `name` and `price` fields; anything else
    /// becomes a placeholder line priced at zero.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(fields) = value else {
            return Self::new(Self::PLACEHOLDER_NAME, Price::ZERO);
        };

        let name = match fields.get("name") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        };

        Self::new(name, Price::from_json(fields.get("price")))
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the normalized price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }
}

impl<'de> Deserialize<'de> for CartItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// Ordered cart contents, in the order items were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a line to the end of the cart.
    pub fn push(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Remove the line at `index`, returning it.
    ///
    /// An out-of-range index leaves the cart untouched and returns `None`.
    pub fn remove(&mut self, index: usize) -> Option<CartItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Returns the lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every line's normalized price.
    #[must_use]
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::price).sum()
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Self { items }
    }
}

impl FromIterator<CartItem> for Cart {
    fn from_iter<I: IntoIterator<Item = CartItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
