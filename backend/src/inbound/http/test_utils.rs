//! Test helpers for inbound HTTP components.

use actix_web::{App, web};

use super::configure;
use super::state::HttpState;

/// Build an application exposing every API route over `state`, wired the
/// same way as the server.
pub fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure)
}
