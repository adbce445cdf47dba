//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `STALLFRONT_CART_KEY` - Storage key for the cart slot (default: cart)
//! - `STALLFRONT_DATA_DIR` - Directory for file-backed storage (default: .stallfront)
//! - `STALLFRONT_CURRENCY` - Display currency code (default: NGN)
//! - `STALLFRONT_WHATSAPP_PHONE` - Shop's WhatsApp number (default: +2348122781860)

use std::path::PathBuf;

use stallfront_core::CurrencyCode;
use thiserror::Error;

use crate::store::DEFAULT_CART_KEY;

const DEFAULT_DATA_DIR: &str = ".stallfront";
const DEFAULT_WHATSAPP_PHONE: &str = "+2348122781860";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Storage key holding the cart
    pub cart_key: String,
    /// Directory used by file-backed storage
    pub data_dir: PathBuf,
    /// Currency prices are displayed in
    pub currency: CurrencyCode,
    /// WhatsApp number orders are sent to
    pub whatsapp_phone: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            cart_key: DEFAULT_CART_KEY.to_owned(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            currency: CurrencyCode::default(),
            whatsapp_phone: DEFAULT_WHATSAPP_PHONE.to_owned(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_owned())
        };

        let cart_key = get("STALLFRONT_CART_KEY", DEFAULT_CART_KEY);
        let data_dir = PathBuf::from(get("STALLFRONT_DATA_DIR", DEFAULT_DATA_DIR));
        let currency = get("STALLFRONT_CURRENCY", CurrencyCode::default().code())
            .parse::<CurrencyCode>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STALLFRONT_CURRENCY".to_string(), e.to_string())
            })?;
        let whatsapp_phone = get("STALLFRONT_WHATSAPP_PHONE", DEFAULT_WHATSAPP_PHONE);
        validate_phone(&whatsapp_phone, "STALLFRONT_WHATSAPP_PHONE")?;

        Ok(Self {
            cart_key,
            data_dir,
            currency,
            whatsapp_phone,
        })
    }
}

/// A phone number is an optional `+` followed by 7-15 digits (E.164).
fn validate_phone(phone: &str, var_name: &str) -> Result<(), ConfigError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("expected an international phone number, got {phone:?}"),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.cart_key, "cart");
        assert_eq!(config.currency, CurrencyCode::NGN);
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("STALLFRONT_CART_KEY", "basket"),
            ("STALLFRONT_DATA_DIR", "/tmp/shop"),
            ("STALLFRONT_CURRENCY", "usd"),
            ("STALLFRONT_WHATSAPP_PHONE", "15551234567"),
        ]))
        .unwrap();
        assert_eq!(config.cart_key, "basket");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/shop"));
        assert_eq!(config.currency, CurrencyCode::USD);
        assert_eq!(config.whatsapp_phone, "15551234567");
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config =
            StorefrontConfig::from_lookup(lookup(&[("STALLFRONT_CART_KEY", "  ")])).unwrap();
        assert_eq!(config.cart_key, "cart");
    }

    #[test]
    fn test_invalid_currency() {
        let err = StorefrontConfig::from_lookup(lookup(&[("STALLFRONT_CURRENCY", "XXX")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(var, _) if var == "STALLFRONT_CURRENCY"));
    }

    #[test]
    fn test_invalid_phone() {
        for phone in ["+", "12345", "+234-812-278", "phone"] {
            let result =
                StorefrontConfig::from_lookup(lookup(&[("STALLFRONT_WHATSAPP_PHONE", phone)]));
            assert!(result.is_err(), "{phone}");
        }
    }
}
