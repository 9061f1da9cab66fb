//! Response assertions shared by the HTTP behaviour suites.

use rstest_bdd_macros::then;
use serde_json::Value;

use crate::http_world::HttpWorld;

#[then("the response status is {status}")]
fn the_response_status_is(world: &HttpWorld, status: u16) {
    let observed = world.last();
    assert_eq!(observed.status, status, "body: {}", observed.body);
}

#[then("the error code is {code}")]
fn the_error_code_is(world: &HttpWorld, code: String) {
    let observed = world.last();
    assert_eq!(
        observed.body.get("code").and_then(Value::as_str),
        Some(code.as_str())
    );
}

#[then("the response carries a trace id")]
fn the_response_carries_a_trace_id(world: &HttpWorld) {
    let observed = world.last();
    let header = observed.trace_id.expect("trace-id header");
    assert_eq!(
        observed.body.get("traceId").and_then(Value::as_str),
        Some(header.as_str())
    );
}
