//! Catalogue product model.
//!
//! Products are owned by an external ingestion pipeline and carry no enforced
//! schema. The domain keeps the attribute map intact and reads the handful of
//! fields it reasons about through `Option` accessors.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// Attribute holding the store-assigned identifier.
pub const STORE_ID_FIELD: &str = "_id";

/// Attribute computed during listing to rank priority brands.
pub const BRAND_PRIORITY_FIELD: &str = "brand_priority";

/// Read-only catalogue product.
///
/// ## Invariants
/// - The store identifier (`_id`) and the listing rank (`brand_priority`) are
///   never present, so serialising a product cannot leak them.
///
/// Serialises as the bare attribute map.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use storefront::domain::Product;
///
/// let product = Product::from_value(json!({
///     "_id": "65f0c0ffee0000000000beef",
///     "brand_name": "Brioni",
///     "disc_pct": "-40%",
/// }))
/// .expect("object");
///
/// assert_eq!(product.brand_name(), Some("Brioni"));
/// assert_eq!(product.discount_percentage(), 40);
/// assert!(product.attribute("_id").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Product {
    attributes: Map<String, Value>,
}

impl Product {
    /// Wrap an attribute map, dropping store-internal fields.
    pub fn new(mut attributes: Map<String, Value>) -> Self {
        attributes.remove(STORE_ID_FIELD);
        attributes.remove(BRAND_PRIORITY_FIELD);
        Self { attributes }
    }

    /// Build a product from a JSON value, returning `None` for non-objects.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(attributes) => Some(Self::new(attributes)),
            _ => None,
        }
    }

    /// Raw attribute lookup.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Full attribute map.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Brand name when present as a string.
    pub fn brand_name(&self) -> Option<&str> {
        self.attribute("brand_name").and_then(Value::as_str)
    }

    /// Percentage-formatted discount label such as `-50%`.
    pub fn disc_pct(&self) -> Option<&str> {
        self.attribute("disc_pct").and_then(Value::as_str)
    }

    /// Numeric discount used by listing filters.
    pub fn discount(&self) -> Option<f64> {
        self.attribute("discount").and_then(Value::as_f64)
    }

    /// Canonical product page URL; also the de-duplication key.
    pub fn product_link(&self) -> Option<&str> {
        self.attribute("product_link").and_then(Value::as_str)
    }

    /// Discount parsed from [`Product::disc_pct`]; zero when absent or
    /// malformed.
    pub fn discount_percentage(&self) -> u64 {
        self.disc_pct().map_or(0, parse_discount_percentage)
    }
}

/// Parse a discount label of the form `-<digits>%`.
///
/// Leading `-` and trailing `%` characters are stripped and the remainder must
/// be a non-empty run of ASCII digits. Anything else yields `0`, including
/// labels written with non-ASCII decimal digits such as `-٣٠%`. Values too
/// large for `u64` saturate.
///
/// # Examples
/// ```
/// use storefront::domain::parse_discount_percentage;
///
/// assert_eq!(parse_discount_percentage("-50%"), 50);
/// assert_eq!(parse_discount_percentage("35"), 35);
/// assert_eq!(parse_discount_percentage("abc%"), 0);
/// assert_eq!(parse_discount_percentage(""), 0);
/// ```
pub fn parse_discount_percentage(raw: &str) -> u64 {
    let digits = raw.trim_start_matches('-').trim_end_matches('%');
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return 0;
    }
    digits.bytes().fold(0_u64, |acc, byte| {
        acc.saturating_mul(10)
            .saturating_add(u64::from(byte - b'0'))
    })
}

/// Validation errors for [`ProductId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductIdValidationError {
    #[error("product id must not be empty")]
    Empty,
    #[error("product id must be 24 hexadecimal characters, got {value:?}")]
    Malformed { value: String },
}

/// Store identifier of a product: 24 hexadecimal characters.
///
/// Validation happens here so malformed identifiers are rejected without a
/// round trip to the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    /// Length of the hexadecimal identifier.
    pub const LENGTH: usize = 24;

    /// Validate and construct a product identifier. Hex digits are normalised
    /// to lowercase.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ProductIdValidationError> {
        let raw = value.as_ref();
        if raw.trim().is_empty() {
            return Err(ProductIdValidationError::Empty);
        }
        if raw.len() != Self::LENGTH || !raw.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(ProductIdValidationError::Malformed {
                value: raw.to_owned(),
            });
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
