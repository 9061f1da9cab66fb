//! Product listing queries and results.
//!
//! A listing is filtered by brand and minimum discount, ranked so that the
//! house priority brands lead an unfiltered catalogue, optionally sorted by a
//! caller-chosen attribute, and paginated with [`PageRequest`].

use std::collections::HashSet;

use pagination::{PageRequest, PageSummary};
use serde::Serialize;

use super::Product;

/// Brands promoted to the head of unfiltered listings.
pub const PRIORITY_BRANDS: [&str; 3] = ["Brunello Cucinelli", "Brioni", "Zimmermann"];

/// Rank bucket for priority brands.
pub const PRIORITY_BUCKET: u8 = 0;

/// Rank bucket for every other product.
pub const STANDARD_BUCKET: u8 = 1;

/// Rank bucket a product falls into.
///
/// Under a brand filter every product lands in [`STANDARD_BUCKET`] so the
/// ranking has no effect.
///
/// # Examples
/// ```
/// use storefront::domain::{brand_priority, PRIORITY_BUCKET, STANDARD_BUCKET};
///
/// assert_eq!(brand_priority(Some("Brioni"), false), PRIORITY_BUCKET);
/// assert_eq!(brand_priority(Some("Brioni"), true), STANDARD_BUCKET);
/// assert_eq!(brand_priority(None, false), STANDARD_BUCKET);
/// ```
pub fn brand_priority(brand: Option<&str>, brand_filtered: bool) -> u8 {
    match brand {
        Some(name) if !brand_filtered && PRIORITY_BRANDS.contains(&name) => PRIORITY_BUCKET,
        _ => STANDARD_BUCKET,
    }
}

/// Sort direction for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Interpret a raw `sort_order` parameter.
    ///
    /// Only `desc` (case-insensitive) selects descending order; anything else,
    /// including an absent value, sorts ascending.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.trim().eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    /// Store direction flag: `1` ascending, `-1` descending.
    pub fn direction(self) -> i32 {
        match self {
            Self::Asc => 1,
            Self::Desc => -1,
        }
    }
}

/// Secondary sort applied after the brand ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    field: String,
    order: SortOrder,
}

impl SortSpec {
    /// Build a sort spec; blank field names produce `None`.
    pub fn new(field: impl Into<String>, order: SortOrder) -> Option<Self> {
        let field = field.into();
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            field: trimmed.to_owned(),
            order,
        })
    }

    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }
}

/// Match criteria shared by the listing query and its total count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    brand: Option<String>,
    min_discount: Option<f64>,
}

impl ProductFilter {
    /// Build a filter. Blank brands and NaN discounts are treated as absent.
    pub fn new(brand: Option<String>, min_discount: Option<f64>) -> Self {
        Self {
            brand: brand.filter(|value| !value.trim().is_empty()),
            min_discount: min_discount.filter(|value| !value.is_nan()),
        }
    }

    /// Exact brand to match.
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    /// Inclusive lower bound on the numeric `discount` attribute.
    pub fn min_discount(&self) -> Option<f64> {
        self.min_discount
    }

    /// Whether a brand filter disables the priority ranking.
    pub fn is_brand_filtered(&self) -> bool {
        self.brand.is_some()
    }

    /// Whether `product` satisfies the filter.
    pub fn matches(&self, product: &Product) -> bool {
        let brand_ok = self
            .brand()
            .is_none_or(|brand| product.brand_name() == Some(brand));
        let discount_ok = self
            .min_discount
            .is_none_or(|min| product.discount().is_some_and(|value| value >= min));
        brand_ok && discount_ok
    }
}

/// Parse a raw `min_discount` parameter, ignoring values that are not numbers.
///
/// # Examples
/// ```
/// use storefront::domain::parse_min_discount;
///
/// assert_eq!(parse_min_discount(Some("25")), Some(25.0));
/// assert_eq!(parse_min_discount(Some("lots")), None);
/// assert_eq!(parse_min_discount(None), None);
/// ```
pub fn parse_min_discount(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| !value.is_nan())
}

/// Fully validated listing request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListingQuery {
    page: PageRequest,
    filter: ProductFilter,
    sort: Option<SortSpec>,
}

impl ProductListingQuery {
    pub fn new(page: PageRequest, filter: ProductFilter, sort: Option<SortSpec>) -> Self {
        Self { page, filter, sort }
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    pub fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }
}

impl Default for ProductListingQuery {
    fn default() -> Self {
        Self::new(PageRequest::default(), ProductFilter::default(), None)
    }
}

/// One page of a product listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub page: PageRequest,
    pub summary: PageSummary,
}

/// Rank discounted candidates and keep the best `limit`.
///
/// Candidates are ordered by [`Product::discount_percentage`] descending. The
/// sort is stable, so ties keep store order.
pub fn select_top_deals(mut candidates: Vec<Product>, limit: usize) -> Vec<Product> {
    candidates.sort_by_key(|product| std::cmp::Reverse(product.discount_percentage()));
    candidates.truncate(limit);
    candidates
}

/// Product links already present in a selection.
pub fn selected_links(selection: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    selection
        .iter()
        .filter_map(Product::product_link)
        .filter(|link| !link.is_empty() && seen.insert(*link))
        .map(str::to_owned)
        .collect()
}

/// Append `extras` to `selection` until it holds `limit` products.
///
/// Extras whose link is already selected, or repeated among the extras, are
/// skipped.
pub fn backfill_deals(
    mut selection: Vec<Product>,
    extras: Vec<Product>,
    limit: usize,
) -> Vec<Product> {
    let mut seen: HashSet<String> = selected_links(&selection).into_iter().collect();
    for product in extras {
        if selection.len() >= limit {
            break;
        }
        let duplicate = product
            .product_link()
            .filter(|link| !link.is_empty())
            .is_some_and(|link| !seen.insert(link.to_owned()));
        if !duplicate {
            selection.push(product);
        }
    }
    selection
}
