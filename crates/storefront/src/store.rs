//! Cart store: load/save over a single storage slot.
//!
//! The slot holds the cart as a JSON array of `{name, price}` records.
//! Reading never fails: anything that does not decode to an array yields an
//! empty cart and a warning. Writing never fails either; if the backend
//! rejects a write, the encoded cart is kept in memory and served to the
//! following loads until a write goes through.

use serde_json::Value;
use stallfront_core::{Cart, CartItem};
use thiserror::Error;
use tracing::{debug, warn};

use crate::storage::Storage;

/// Default storage key for the cart slot.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Why a load produced an empty cart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmptyReason {
    /// Nothing stored yet (or an empty string).
    #[error("no cart stored")]
    Absent,

    /// Stored text is not valid JSON.
    #[error("cart data is not valid JSON: {0}")]
    Malformed(String),

    /// Stored JSON is valid but not an array.
    #[error("cart data is {0}, not a list")]
    NotASequence(&'static str),

    /// The backend could not be read.
    #[error("cart storage could not be read: {0}")]
    Unavailable(String),
}

/// Outcome of decoding the stored cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// The slot held a list; its elements were decoded leniently.
    Stored(Cart),
    /// The slot held nothing usable.
    Empty(EmptyReason),
}

impl Decoded {
    /// The cart this outcome stands for; empty for [`Decoded::Empty`].
    #[must_use]
    pub fn into_cart(self) -> Cart {
        match self {
            Self::Stored(cart) => cart,
            Self::Empty(_) => Cart::new(),
        }
    }
}

/// Decode the raw slot contents.
///
/// Each element of a stored array goes through [`CartItem::from_value`], so
/// a list of odd records still yields one line per element.
#[must_use]
pub fn decode(raw: Option<&str>) -> Decoded {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Decoded::Empty(EmptyReason::Absent);
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(elements)) => {
            Decoded::Stored(elements.iter().map(CartItem::from_value).collect())
        }
        Ok(other) => Decoded::Empty(EmptyReason::NotASequence(json_kind(&other))),
        Err(e) => Decoded::Empty(EmptyReason::Malformed(e.to_string())),
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Persistent cart slot over a [`Storage`] backend.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    key: String,
    /// Last encoded cart whose write the backend rejected.
    fallback: Option<String>,
}

impl<S: Storage> CartStore<S> {
    /// Create a store over `storage` using the slot `key`.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            fallback: None,
        }
    }

    /// Returns the slot key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the backing storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store and return the backing storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Returns `true` if the last save could not reach the backend.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.fallback.is_some()
    }

    /// Read and decode the slot, reporting why it is empty when it is.
    #[must_use]
    pub fn decode(&self) -> Decoded {
        if let Some(pending) = &self.fallback {
            return decode(Some(pending));
        }
        match self.storage.get_item(&self.key) {
            Ok(raw) => decode(raw.as_deref()),
            Err(e) => Decoded::Empty(EmptyReason::Unavailable(e.to_string())),
        }
    }

    /// Load the stored cart, or an empty cart if nothing usable is stored.
    #[must_use]
    pub fn load(&self) -> Cart {
        match self.decode() {
            Decoded::Stored(cart) => cart,
            Decoded::Empty(EmptyReason::Absent) => Cart::new(),
            Decoded::Empty(reason) => {
                warn!(key = %self.key, %reason, "Failed to load cart from storage");
                Cart::new()
            }
        }
    }

    /// Overwrite the slot with `cart`.
    pub fn save(&mut self, cart: &Cart) {
        let encoded = match serde_json::to_string(cart) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to encode cart");
                return;
            }
        };

        match self.storage.set_item(&self.key, &encoded) {
            Ok(()) => {
                debug!(key = %self.key, items = cart.len(), "Cart saved");
                self.fallback = None;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Cart storage rejected write, keeping cart in memory");
                self.fallback = Some(encoded);
            }
        }
    }

    /// Append `item` to the stored cart and return the updated cart.
    pub fn add(&mut self, item: CartItem) -> Cart {
        let mut cart = self.load();
        cart.push(item);
        self.save(&cart);
        cart
    }
}
