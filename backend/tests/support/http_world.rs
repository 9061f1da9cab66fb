//! Shared world for HTTP behaviour scenarios.
//!
//! Requests run through `actix_web::test` on an actix system owned by the
//! world, so no sockets are opened.

use std::cell::RefCell;
use std::sync::Arc;

use actix_web::http::Method;
use actix_web::rt::{System, SystemRunner};
use actix_web::{App, test, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use serde_json::Value;
use storefront::Trace;
use storefront::domain::{CatalogueService, ContactService};
use storefront::inbound::http::configure;
use storefront::inbound::http::state::HttpState;

use crate::in_memory_store::{InMemoryMessages, InMemoryProducts, RecordingNotifier};

pub(crate) const OPERATOR: &str = "owner@halfsy.shop";

struct FrozenClock;

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 12, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    }
}

pub(crate) fn frozen_timestamp() -> DateTime<Utc> {
    FrozenClock.utc()
}

/// Last response observed by a scenario.
#[derive(Debug, Clone)]
pub(crate) struct Observed {
    pub(crate) status: u16,
    pub(crate) body: Value,
    pub(crate) trace_id: Option<String>,
}

pub(crate) struct HttpWorld {
    runner: SystemRunner,
    pub(crate) products: InMemoryProducts,
    pub(crate) messages: InMemoryMessages,
    pub(crate) notifier: RecordingNotifier,
    last: RefCell<Option<Observed>>,
}

impl HttpWorld {
    pub(crate) fn new() -> Self {
        Self {
            runner: System::new(),
            products: InMemoryProducts::default(),
            messages: InMemoryMessages::default(),
            notifier: RecordingNotifier::default(),
            last: RefCell::new(None),
        }
    }

    fn state(&self) -> HttpState {
        HttpState::new(
            Arc::new(CatalogueService::new(Arc::new(self.products.clone()))),
            Arc::new(ContactService::new(
                Arc::new(self.messages.clone()),
                Arc::new(self.notifier.clone()),
                Arc::new(FrozenClock),
                Some(OPERATOR.to_owned()),
            )),
        )
    }

    pub(crate) fn request(&self, method: Method, path: &str, payload: Option<Value>) {
        let state = self.state();
        let observed = self.runner.block_on(async move {
            let app = test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .wrap(Trace)
                    .configure(configure),
            )
            .await;
            let request = test::TestRequest::default().method(method).uri(path);
            let request = match payload {
                Some(body) => request.set_json(body),
                None => request,
            };
            let response = test::call_service(&app, request.to_request()).await;
            let status = response.status().as_u16();
            let trace_id = response
                .headers()
                .get("trace-id")
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let bytes = test::read_body(response).await;
            let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            Observed {
                status,
                body,
                trace_id,
            }
        });
        *self.last.borrow_mut() = Some(observed);
    }

    pub(crate) fn last(&self) -> Observed {
        self.last
            .borrow()
            .clone()
            .expect("a request should have been sent")
    }
}
