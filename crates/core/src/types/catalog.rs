//! Product cards, category filters, size options and status badges.
//!
//! These mirror the attributes a product card carries on the shop page:
//! display name, raw price text, a comma-separated category list and an
//! optional status badge. The cart only ever consumes name and price, at the
//! moment a card is added.

use serde::{Deserialize, Serialize};

use super::cart::CartItem;
use super::price::Price;

/// A product card on the shop page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductCard {
    /// Display name.
    pub name: Option<String>,
    /// Raw price text as shown on the card, e.g. `"₦12,000"`.
    pub price: Option<String>,
    /// Comma-separated categories, e.g. `"Men, Shirts"`.
    pub category: String,
    /// Status text for the badge, e.g. `"new"`.
    pub status: Option<String>,
    /// CSS class for the badge, e.g. `"badge-new"`.
    pub badge_class: Option<String>,
    /// Size options offered on the card.
    pub sizes: Vec<String>,
}

impl ProductCard {
    /// Trimmed, lowercased, non-empty categories.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.category
            .split(',')
            .map(|cat| cat.trim().to_lowercase())
            .filter(|cat| !cat.is_empty())
            .collect()
    }

    /// Returns `true` if the card should be visible under `filter`.
    #[must_use]
    pub fn matches(&self, filter: &Filter) -> bool {
        match filter {
            Filter::All => true,
            Filter::Category(target) => self.categories().iter().any(|cat| cat == target),
        }
    }

    /// The badge to show, if the card has both a status and a badge class.
    #[must_use]
    pub fn badge(&self) -> Option<Badge> {
        let status = self.status.as_deref().filter(|s| !s.is_empty())?;
        let class = self.badge_class.as_deref().filter(|c| !c.is_empty())?;
        Some(Badge {
            label: status.to_uppercase(),
            class: format!("badge {class}"),
        })
    }

    /// The cart line this card produces when added.
    #[must_use]
    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(
            self.name.clone().unwrap_or_default(),
            Price::normalize(self.price.as_deref().unwrap_or_default()),
        )
    }
}

/// A category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    /// Lowercased category name.
    Category(String),
}

impl Filter {
    /// Parse a filter value. Absent, empty and `"all"` (any case) mean [`Filter::All`].
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        let target = value.unwrap_or_default().trim().to_lowercase();
        if target.is_empty() || target == "all" {
            Self::All
        } else {
            Self::Category(target)
        }
    }
}

/// Visibility of each card under `filter`, in card order.
#[must_use]
pub fn apply_filter(cards: &[ProductCard], filter: &Filter) -> Vec<bool> {
    cards.iter().map(|card| card.matches(filter)).collect()
}

/// A filter button in the shop's filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterButton {
    /// Category this button selects; `None` or `"all"` shows everything.
    pub filter: Option<String>,
    /// Whether the button is highlighted when the page loads.
    #[serde(default)]
    pub active: bool,
}

impl FilterButton {
    /// The filter applied when the page loads: the active button's, else the
    /// first button's, else [`Filter::All`].
    #[must_use]
    pub fn initial(buttons: &[Self]) -> Filter {
        buttons
            .iter()
            .find(|b| b.active)
            .or_else(|| buttons.first())
            .map_or(Filter::All, |b| Filter::parse(b.filter.as_deref()))
    }
}

/// A status badge rendered on a product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Upper-cased status text, e.g. `NEW`.
    pub label: String,
    /// CSS class list, e.g. `badge badge-new`.
    pub class: String,
}

/// Size options on a single card, at most one of which is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeSelector {
    options: Vec<String>,
    active: Option<usize>,
}

impl SizeSelector {
    #[must_use]
    pub const fn new(options: Vec<String>) -> Self {
        Self {
            options,
            active: None,
        }
    }

    /// Make `index` the active option, clearing any other.
    ///
    /// Returns `false` and leaves the selection alone if `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        self.active = Some(index);
        true
    }

    /// The active option, if any.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl From<&ProductCard> for SizeSelector {
    fn from(card: &ProductCard) -> Self {
        Self::new(card.sizes.clone())
    }
}
