//! Type-safe price representation using decimal arithmetic.
//!
//! Prices reach the cart as display strings scraped from product cards
//! (`"₦1,999.50"`, `"1,000.00"`) or as loosely typed JSON read back from
//! storage. [`Price::normalize`] turns any of those into a non-negative
//! [`Decimal`]; nothing downstream ever sees a formatted string.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A normalized, non-negative amount in the currency's standard unit.
///
/// ## Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use stallfront_core::Price;
///
/// assert_eq!(Price::normalize("₦1,999.50").amount(), Decimal::new(199_950, 2));
/// assert_eq!(Price::normalize("abc"), Price::ZERO);
/// assert_eq!(Price::normalize("-5").amount(), Decimal::new(5, 0));
/// assert_eq!(Price::normalize("1.2.3").amount(), Decimal::new(12, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// The sign is dropped, matching what [`Price::normalize`] does with a
    /// leading `-`.
    #[must_use]
    pub fn from_decimal(amount: Decimal) -> Self {
        Self(amount.abs())
    }

    /// Normalize a display-formatted price.
    ///
    /// Every character that is not an ASCII digit or `.` is stripped, then the
    /// longest leading numeral (`digits [. digits]`) is parsed. Anything that
    /// leaves no digits, or a numeral too large for [`Decimal`], is zero.
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let stripped: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        leading_numeral(&stripped)
            .and_then(|numeral| Decimal::from_str(&numeral).ok())
            .map_or(Self::ZERO, Self::from_decimal)
    }

    /// Normalize a loosely typed JSON value.
    ///
    /// Absent, `null`, `false`, `0` and `""` are all zero. Numbers keep their
    /// exact value, including exponent forms like `1e-7`; strings go through
    /// [`Price::normalize`]. Arrays and objects have no sensible price and
    /// normalize to zero.
    #[must_use]
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Number(n)) => Self::from_number_text(&n.to_string()),
            Some(Value::String(s)) => Self::normalize(s),
            Some(Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_)) | None => {
                Self::ZERO
            }
        }
    }

    /// Parse the text of a JSON number, which may be in exponent form.
    fn from_number_text(text: &str) -> Self {
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map_or(Self::ZERO, Self::from_decimal)
    }

    /// Returns the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if the price is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Format the amount with two decimals and thousands separators.
    #[must_use]
    pub fn display(&self) -> String {
        format_amount(self.0)
    }
}

/// Extract `digits [. digits]` from the front of a digits-and-dots string.
///
/// `".5"` yields `"0.5"` and `"5."` yields `"5"`; a string with no digits
/// before the second dot yields `None`.
fn leading_numeral(stripped: &str) -> Option<String> {
    let mut parts = stripped.splitn(3, '.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();

    match (whole.is_empty(), fraction.is_empty()) {
        (true, true) => None,
        (false, true) => Some(whole.to_owned()),
        (true, false) => Some(format!("0.{fraction}")),
        (false, false) => Some(format!("{whole}.{fraction}")),
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Add for Price {
    type Output = Self;

    /// Saturates at [`Decimal::MAX`].
    fn add(self, rhs: Self) -> Self {
        Self(self.0.checked_add(rhs.0).unwrap_or(Decimal::MAX))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self::from_decimal(amount)
    }
}

// Stored as a plain JSON number so the slot stays readable by anything that
// reads the cart as `[{name, price}]`. The number text is the exact decimal.
impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::arbitrary_precision::serialize(&self.0.normalize(), serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(Some(&value)))
    }
}

/// Format a decimal with two fractional digits and `,` thousands separators.
///
/// Rounds half away from zero, so `1999.505` becomes `"1,999.51"`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.2}", rounded.abs());
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(plain.len() + whole.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(fraction);
    grouped
}

/// Errors that can occur when parsing a [`CurrencyCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported currency code: {0}")]
pub struct CurrencyCodeError(pub String);

/// ISO 4217 currency codes the storefront can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    NGN,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Returns the three-letter code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NGN => "NGN",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NGN" => Ok(Self::NGN),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            _ => Err(CurrencyCodeError(s.to_owned())),
        }
    }
}

/// A price with currency information, displayed as `"NGN 1,999.50"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Normalized amount.
    pub amount: Price,
    /// Currency the amount is displayed in.
    pub currency_code: CurrencyCode,
}

impl Money {
    /// Create a new money value.
    #[must_use]
    pub const fn new(amount: Price, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency_code, self.amount)
    }
}
