//! Shop page controller: category filter, size options, badges and
//! add-to-cart.

use askama::Template;
use stallfront_core::{Badge, CartItem, Filter, FilterButton, ProductCard, SizeSelector};
use tracing::instrument;

use super::Notifier;
use crate::storage::Storage;
use crate::store::CartStore;

/// Status badge fragment template.
#[derive(Template)]
#[template(path = "shop/badge.html")]
struct BadgeTemplate<'a> {
    badge: &'a Badge,
}

/// Controller for the product grid.
#[derive(Debug)]
pub struct ShopPage<S> {
    store: CartStore<S>,
    cards: Vec<ProductCard>,
    sizes: Vec<SizeSelector>,
    filter: Filter,
}

impl<S: Storage> ShopPage<S> {
    /// Open the page with the initial filter taken from `buttons`.
    pub fn new(store: CartStore<S>, cards: Vec<ProductCard>, buttons: &[FilterButton]) -> Self {
        let sizes = cards.iter().map(SizeSelector::from).collect();
        Self {
            store,
            cards,
            sizes,
            filter: FilterButton::initial(buttons),
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    #[must_use]
    pub const fn filter(&self) -> &Filter {
        &self.filter
    }

    #[must_use]
    pub const fn store(&self) -> &CartStore<S> {
        &self.store
    }

    /// Switch to the filter named `value` and return each card's visibility.
    pub fn apply_filter(&mut self, value: Option<&str>) -> Vec<bool> {
        self.filter = Filter::parse(value);
        self.visibility()
    }

    /// Visibility of each card under the current filter.
    #[must_use]
    pub fn visibility(&self) -> Vec<bool> {
        stallfront_core::apply_filter(&self.cards, &self.filter)
    }

    /// Cards visible under the current filter.
    pub fn visible_cards(&self) -> impl Iterator<Item = &ProductCard> {
        self.cards.iter().filter(|card| card.matches(&self.filter))
    }

    /// Highlight one size option on a card.
    ///
    /// Returns `false` if either index is out of range.
    pub fn select_size(&mut self, card: usize, option: usize) -> bool {
        self.sizes
            .get_mut(card)
            .is_some_and(|sizes| sizes.select(option))
    }

    /// The highlighted size on a card, if any.
    #[must_use]
    pub fn selected_size(&self, card: usize) -> Option<&str> {
        self.sizes.get(card).and_then(SizeSelector::active)
    }

    /// Badge fragments per card; `None` for cards without a badge.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn badges_html(&self) -> askama::Result<Vec<Option<String>>> {
        self.cards
            .iter()
            .map(|card| {
                card.badge()
                    .map(|badge| BadgeTemplate { badge: &badge }.render())
                    .transpose()
            })
            .collect()
    }

    /// Add the card at `index` to the stored cart and acknowledge it.
    ///
    /// Returns `None` and does nothing if there is no such card.
    #[instrument(skip(self, notifier))]
    pub fn add_to_cart(&mut self, index: usize, notifier: &mut impl Notifier) -> Option<CartItem> {
        let item = self.cards.get(index)?.to_cart_item();
        self.store.add(item.clone());
        notifier.notify(&format!("{} added to cart!", item.name()));
        Some(item)
    }
}
