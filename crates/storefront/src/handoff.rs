//! Checkout handoff to an external messaging app.
//!
//! The storefront has no payment flow: checkout turns the cart into an order
//! summary and opens a WhatsApp chat pre-filled with it.

use stallfront_core::OrderSummary;
use thiserror::Error;
pub use url::Url;

/// WhatsApp click-to-chat base URL.
const BASE_URL: &str = "https://wa.me";

/// Greeting pre-filled by the contact page button.
pub const CONTACT_GREETING: &str = "Hi, I'll like to buy these products!";

/// Errors that can occur when handing an order off.
#[derive(Debug, Error)]
pub enum HandoffError {
    /// The chat link could not be built.
    #[error("Invalid chat link: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The collaborator could not deliver the summary.
    #[error("Handoff failed: {0}")]
    Delivery(String),
}

/// Receives order summaries at checkout.
pub trait MessagingHandoff {
    /// Deliver `summary` to the shop owner.
    ///
    /// # Errors
    ///
    /// Returns `HandoffError` if the summary cannot be delivered.
    fn deliver(&mut self, summary: &OrderSummary) -> Result<(), HandoffError>;
}

/// Builds `wa.me` chat links for a shop's phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLink {
    phone: String,
}

impl WhatsAppLink {
    #[must_use]
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
        }
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Chat link pre-filled with `text`.
    ///
    /// The phone number is a single escaped path segment, so `/`, `?` or `#`
    /// in it cannot change the link's shape.
    ///
    /// # Errors
    ///
    /// Returns `HandoffError::InvalidUrl` if the base link cannot take a path.
    pub fn with_text(&self, text: &str) -> Result<Url, HandoffError> {
        let mut link = Url::parse(BASE_URL)?;
        link.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .clear()
            .push(&self.phone);
        link.set_query(Some(&format!("text={}", urlencoding::encode(text))));
        Ok(link)
    }

    /// Chat link pre-filled with an order summary.
    ///
    /// # Errors
    ///
    /// See [`WhatsAppLink::with_text`].
    pub fn checkout_url(&self, summary: &OrderSummary) -> Result<Url, HandoffError> {
        self.with_text(&summary.to_string())
    }

    /// Chat link used by the contact page.
    ///
    /// # Errors
    ///
    /// See [`WhatsAppLink::with_text`].
    pub fn contact_url(&self) -> Result<Url, HandoffError> {
        self.with_text(CONTACT_GREETING)
    }
}

/// A handoff that turns each summary into a chat link and passes it to a
/// navigation callback (the browser redirect, or printing it in a terminal).
pub struct WhatsAppHandoff<F> {
    link: WhatsAppLink,
    navigate: F,
}

impl<F> WhatsAppHandoff<F>
where
    F: FnMut(&Url) -> Result<(), HandoffError>,
{
    pub const fn new(link: WhatsAppLink, navigate: F) -> Self {
        Self { link, navigate }
    }
}

impl<F> MessagingHandoff for WhatsAppHandoff<F>
where
    F: FnMut(&Url) -> Result<(), HandoffError>,
{
    fn deliver(&mut self, summary: &OrderSummary) -> Result<(), HandoffError> {
        let url = self.link.checkout_url(summary)?;
        tracing::info!(phone = %self.link.phone, "Handing order off to WhatsApp");
        (self.navigate)(&url)
    }
}
