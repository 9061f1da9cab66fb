//! In-memory driven adapters for behaviour tests.
//!
//! The product store mirrors the aggregation the MongoDB adapter issues:
//! filter, rank by brand priority, sort within each rank, then page.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;
use storefront::domain::ports::{
    ContactMessageRepository, ContactMessageRepositoryError, NotificationError, NotificationSink,
    ProductRepository, ProductRepositoryError,
};
use storefront::domain::{
    ContactMessage, ContactMessageId, Notification, Product, ProductFilter, ProductId,
    ProductListingQuery, SortOrder, brand_priority,
};

const OFFLINE: &str = "in-memory store offline";

/// Product store holding `(id, product)` pairs in insertion order.
#[derive(Clone, Default)]
pub(crate) struct InMemoryProducts {
    products: Arc<Mutex<Vec<(String, Product)>>>,
    offline: Arc<AtomicBool>,
}

impl InMemoryProducts {
    pub(crate) fn insert(&self, id: &str, product: Value) {
        let product = Product::from_value(product).expect("product fixture is an object");
        self.products
            .lock()
            .expect("products lock")
            .push((id.to_owned(), product));
    }

    pub(crate) fn go_offline(&self) {
        self.offline.store(true, AtomicOrdering::SeqCst);
    }

    fn snapshot(&self) -> Result<Vec<(String, Product)>, ProductRepositoryError> {
        if self.offline.load(AtomicOrdering::SeqCst) {
            return Err(ProductRepositoryError::connection(OFFLINE));
        }
        Ok(self.products.lock().expect("products lock").clone())
    }

    fn take(&self, limit: u64, keep: impl Fn(&Product) -> bool) -> Result<Vec<Product>, ProductRepositoryError> {
        Ok(self
            .snapshot()?
            .into_iter()
            .map(|(_, product)| product)
            .filter(|product| keep(product))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect())
    }
}

fn compare_values(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    match (left, right) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn list(
        &self,
        query: &ProductListingQuery,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        let filter = query.filter();
        let filtered = filter.is_brand_filtered();
        let mut matching: Vec<Product> = self
            .snapshot()?
            .into_iter()
            .map(|(_, product)| product)
            .filter(|product| filter.matches(product))
            .collect();

        matching.sort_by(|a, b| {
            let rank = brand_priority(a.brand_name(), filtered)
                .cmp(&brand_priority(b.brand_name(), filtered));
            let within = query.sort().map_or(Ordering::Equal, |sort| {
                let ordering = compare_values(a.attribute(sort.field()), b.attribute(sort.field()));
                match sort.order() {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
            rank.then(within)
        });

        let page = query.page();
        Ok(matching
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(usize::try_from(page.limit()).unwrap_or(usize::MAX))
            .collect())
    }

    async fn count(&self, filter: &ProductFilter) -> Result<u64, ProductRepositoryError> {
        let matching = self
            .snapshot()?
            .iter()
            .filter(|(_, product)| filter.matches(product))
            .count();
        Ok(matching as u64)
    }

    async fn discounted(&self, limit: u64) -> Result<Vec<Product>, ProductRepositoryError> {
        self.take(limit, |product| {
            product.disc_pct().is_some_and(|label| !label.is_empty())
        })
    }

    async fn excluding_links(
        &self,
        links: &[String],
        limit: u64,
    ) -> Result<Vec<Product>, ProductRepositoryError> {
        self.take(limit, |product| {
            product
                .product_link()
                .is_none_or(|link| !links.iter().any(|taken| taken == link))
        })
    }

    async fn first(&self, limit: u64) -> Result<Vec<Product>, ProductRepositoryError> {
        self.take(limit, |_| true)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductRepositoryError> {
        Ok(self
            .snapshot()?
            .into_iter()
            .find(|(stored, _)| stored == id.as_str())
            .map(|(_, product)| product))
    }

    async fn distinct_brands(&self) -> Result<Vec<String>, ProductRepositoryError> {
        let mut brands: Vec<String> = Vec::new();
        for (_, product) in self.snapshot()? {
            let Some(brand) = product.brand_name() else {
                continue;
            };
            if !brands.iter().any(|known| known == brand) {
                brands.push(brand.to_owned());
            }
        }
        Ok(brands)
    }
}

/// Message store recording every insert.
#[derive(Clone, Default)]
pub(crate) struct InMemoryMessages {
    stored: Arc<Mutex<Vec<ContactMessage>>>,
    offline: Arc<AtomicBool>,
}

impl InMemoryMessages {
    pub(crate) fn go_offline(&self) {
        self.offline.store(true, AtomicOrdering::SeqCst);
    }

    pub(crate) fn stored(&self) -> Vec<ContactMessage> {
        self.stored.lock().expect("messages lock").clone()
    }
}

#[async_trait]
impl ContactMessageRepository for InMemoryMessages {
    async fn insert(
        &self,
        message: &ContactMessage,
    ) -> Result<ContactMessageId, ContactMessageRepositoryError> {
        if self.offline.load(AtomicOrdering::SeqCst) {
            return Err(ContactMessageRepositoryError::connection(OFFLINE));
        }
        let mut stored = self.stored.lock().expect("messages lock");
        stored.push(message.clone());
        let id = format!("{:024x}", stored.len());
        ContactMessageId::new(id)
            .ok_or_else(|| ContactMessageRepositoryError::query("blank id"))
    }
}

/// Notification sink recording deliveries, optionally failing every send.
#[derive(Clone, Default)]
pub(crate) struct RecordingNotifier {
    sent: Arc<Mutex<Vec<Notification>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingNotifier {
    pub(crate) fn fail_all(&self) {
        self.failing.store(true, AtomicOrdering::SeqCst);
    }

    pub(crate) fn sent(&self) -> Vec<Notification> {
        self.sent.lock().expect("notifier lock").clone()
    }
}

#[async_trait]
impl NotificationSink for RecordingNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotificationError> {
        if self.failing.load(AtomicOrdering::SeqCst) {
            return Err(NotificationError::transport("relay refused connection"));
        }
        self.sent
            .lock()
            .expect("notifier lock")
            .push(notification.clone());
        Ok(())
    }
}
