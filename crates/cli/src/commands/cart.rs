//! Cart page commands.

use stallfront_core::{CartItem, Price};
use stallfront_storefront::handoff::Url;
use stallfront_storefront::{
    CartPage, CheckoutOutcome, FileStorage, HandoffError, Storage, StorefrontConfig,
    StorefrontError, WhatsAppHandoff, WhatsAppLink,
};
use tracing::info;

use super::{ConsoleNotifier, open_store};

fn open_page(config: &StorefrontConfig) -> CartPage<FileStorage> {
    CartPage::new(open_store(config), config.currency)
}

/// Append a line and print the updated cart.
#[allow(clippy::print_stdout)]
pub fn add(config: &StorefrontConfig, name: &str, price: &str) {
    let mut page = open_page(config);
    let view = page.add(CartItem::new(name, Price::normalize(price)), &mut ConsoleNotifier);
    println!("{view}");
}

/// Remove the line at `index` and print the updated cart.
#[allow(clippy::print_stdout)]
pub fn remove(config: &StorefrontConfig, index: &str) {
    let mut page = open_page(config);
    let view = page.remove_raw(index);
    println!("{view}");
}

/// Print the cart as text or as its HTML fragment.
///
/// # Errors
///
/// Returns an error if the HTML template fails to render.
#[allow(clippy::print_stdout)]
pub fn show(config: &StorefrontConfig, html: bool) -> Result<(), StorefrontError> {
    let view = open_page(config).render();
    if html {
        println!("{}", view.to_html()?);
    } else {
        println!("{view}");
    }
    Ok(())
}

/// Print the WhatsApp link carrying the order, or the empty-cart notice.
///
/// # Errors
///
/// Returns an error if the chat link cannot be built.
#[allow(clippy::print_stdout)]
pub fn checkout(config: &StorefrontConfig) -> Result<(), StorefrontError> {
    checkout_with(config, |url: &Url| -> Result<(), HandoffError> {
        println!("{url}");
        Ok(())
    })?;
    Ok(())
}

fn checkout_with<F>(
    config: &StorefrontConfig,
    navigate: F,
) -> Result<CheckoutOutcome, StorefrontError>
where
    F: FnMut(&Url) -> Result<(), HandoffError>,
{
    let page = open_page(config);
    let mut handoff = WhatsAppHandoff::new(WhatsAppLink::new(&config.whatsapp_phone), navigate);

    let outcome = page.checkout(&mut ConsoleNotifier, &mut handoff)?;
    if let CheckoutOutcome::HandedOff(summary) = &outcome {
        info!(lines = summary.lines().len(), total = %summary.total(), "Order handed off");
    }
    Ok(outcome)
}

/// Delete the cart slot.
///
/// # Errors
///
/// Returns an error if the storage file cannot be removed.
pub fn clear(config: &StorefrontConfig) -> Result<(), StorefrontError> {
    let mut storage = open_store(config).into_storage();
    storage.remove_item(&config.cart_key)?;
    info!(key = %config.cart_key, "Cart cleared");
    Ok(())
}

/// Print the contact-page chat link.
///
/// # Errors
///
/// Returns an error if the chat link cannot be built.
#[allow(clippy::print_stdout)]
pub fn contact(config: &StorefrontConfig) -> Result<(), StorefrontError> {
    let url = WhatsAppLink::new(&config.whatsapp_phone).contact_url()?;
    println!("{url}");
    Ok(())
}
