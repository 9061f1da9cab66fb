//! MongoDB-backed catalogue read adapter.
//!
//! Listings run as a single aggregation: match the filter, compute the
//! `brand_priority` rank, sort, page, then project away store-only fields.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};
use mongodb::error::Error as MongoError;

use crate::domain::ports::{ProductRepository, ProductRepositoryError};
use crate::domain::{
    BRAND_PRIORITY_FIELD, PRIORITY_BRANDS, PRIORITY_BUCKET, Product, ProductFilter, ProductId,
    ProductListingQuery, STANDARD_BUCKET, STORE_ID_FIELD,
};

use super::store::{DocumentStore, is_connectivity_failure};

/// MongoDB implementation of the product read port.
#[derive(Clone)]
pub struct MongoProductRepository {
    store: DocumentStore,
}

impl MongoProductRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }
}

fn map_mongo_error(error: MongoError) -> ProductRepositoryError {
    if is_connectivity_failure(&error) {
        ProductRepositoryError::connection(error.to_string())
    } else {
        ProductRepositoryError::query(error.to_string())
    }
}

fn as_store_limit(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn hide_store_id() -> Document {
    doc! { STORE_ID_FIELD: 0 }
}

/// Convert a stored document into a domain product via relaxed extended JSON.
fn to_product(document: Document) -> Result<Product, ProductRepositoryError> {
    Product::from_value(Bson::Document(document).into_relaxed_extjson())
        .ok_or_else(|| ProductRepositoryError::query("product document is not an object"))
}

fn to_products(documents: Vec<Document>) -> Result<Vec<Product>, ProductRepositoryError> {
    documents.into_iter().map(to_product).collect()
}

/// `$match` criteria for a listing filter.
pub(crate) fn filter_document(filter: &ProductFilter) -> Document {
    let mut criteria = Document::new();
    if let Some(brand) = filter.brand() {
        criteria.insert("brand_name", brand);
    }
    if let Some(min_discount) = filter.min_discount() {
        criteria.insert("discount", doc! { "$gte": min_discount });
    }
    criteria
}

/// `$addFields` stage computing the brand rank.
pub(crate) fn brand_priority_stage(brand_filtered: bool) -> Document {
    let rank = if brand_filtered {
        Bson::Int32(i32::from(STANDARD_BUCKET))
    } else {
        Bson::Document(doc! {
            "$cond": {
                "if": { "$in": ["$brand_name", PRIORITY_BRANDS.to_vec()] },
                "then": i32::from(PRIORITY_BUCKET),
                "else": i32::from(STANDARD_BUCKET),
            }
        })
    };
    doc! { "$addFields": { BRAND_PRIORITY_FIELD: rank } }
}

/// `$sort` document: rank first, then the caller's sort.
pub(crate) fn sort_document(query: &ProductListingQuery) -> Document {
    let mut sort = doc! { BRAND_PRIORITY_FIELD: 1 };
    if let Some(spec) = query.sort() {
        sort.insert(spec.field(), spec.order().direction());
    }
    sort
}

/// Full aggregation pipeline for one listing page.
pub(crate) fn listing_pipeline(query: &ProductListingQuery) -> Vec<Document> {
    let page = query.page();
    vec![
        doc! { "$match": filter_document(query.filter()) },
        brand_priority_stage(query.filter().is_brand_filtered()),
        doc! { "$sort": sort_document(query) },
        doc! { "$skip": as_store_limit(page.offset()) },
        doc! { "$limit": as_store_limit(page.limit()) },
        doc! { "$project": { STORE_ID_FIELD: 0, BRAND_PRIORITY_FIELD: 0 } },
    ]
}

/// Products carrying a usable discount label.
pub(crate) fn discounted_filter() -> Document {
    doc! { "disc_pct": { "$exists": true, "$nin": [Bson::Null, ""] } }
}

/// Products whose link is not already selected.
pub(crate) fn excluding_links_filter(links: &[String]) -> Document {
    if links.is_empty() {
        Document::new()
    } else {
        doc! { "product_link": { "$nin": links.to_vec() } }
    }
}

/// Keep string brands in first-seen order.
pub(crate) fn string_brands(values: Vec<Bson>) -> Vec<String> {
    let mut brands: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let Bson::String(brand) = value else {
            continue;
        };
        if !brands.contains(&brand) {
            brands.push(brand);
        }
    }
    brands
}

impl MongoProductRepository {
    async fn find(
        &self,
        filter: Document,
        limit: u64,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        let documents: Vec<Document> = self
            .store
            .products()
            .find(filter)
            .projection(hide_store_id())
            .limit(as_store_limit(limit))
            .await
            .map_err(map_mongo_error)?
            .try_collect()
            .await
            .map_err(map_mongo_error)?;
        to_products(documents)
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    async fn list(
        &self,
        query: &ProductListingQuery,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        let documents: Vec<Document> = self
            .store
            .products()
            .aggregate(listing_pipeline(query))
            .await
            .map_err(map_mongo_error)?
            .try_collect()
            .await
            .map_err(map_mongo_error)?;
        to_products(documents)
    }

    async fn count(&self, filter: &ProductFilter) -> Result<u64, ProductRepositoryError> {
        self.store
            .products()
            .count_documents(filter_document(filter))
            .await
            .map_err(map_mongo_error)
    }

    async fn discounted(&self, limit: u64) -> Result<Vec<Product>, ProductRepositoryError> {
        self.find(discounted_filter(), limit).await
    }

    async fn excluding_links(
        &self,
        links: &[String],
        limit: u64,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        self.find(excluding_links_filter(links), limit).await
    }

    async fn first(&self, limit: u64) -> Result<Vec<Product>, ProductRepositoryError> {
        self.find(Document::new(), limit).await
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        let object_id = ObjectId::parse_str(id.as_str())
            .map_err(|err| ProductRepositoryError::query(err.to_string()))?;
        self.store
            .products()
            .find_one(doc! { STORE_ID_FIELD: object_id })
            .projection(hide_store_id())
            .await
            .map_err(map_mongo_error)?
            .map(to_product)
            .transpose()
    }

    async fn distinct_brands(&self) -> Result<Vec<String>, ProductRepositoryError> {
        let values = self
            .store
            .products()
            .distinct("brand_name", Document::new())
            .await
            .map_err(map_mongo_error)?;
        Ok(string_brands(values))
    }
}
