//! Stateful wiremock responders.
//!
//! Mount-order independent: each responder decides from the request and
//! its own state, so tests stay deterministic however mocks are mounted.

use std::sync::atomic::{AtomicU32, Ordering};
use wiremock::{Request, Respond, ResponseTemplate};

/// Fails a fixed number of requests with a 500 before serving the body.
pub struct FlakyResponder {
    remaining_failures: AtomicU32,
    body: String,
}

impl FlakyResponder {
    pub fn fail_first(failures: u32, body: impl Into<String>) -> Self {
        Self {
            remaining_failures: AtomicU32::new(failures),
            body: body.into(),
        }
    }
}

impl Respond for FlakyResponder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let still_failing = self
            .remaining_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| {
                left.checked_sub(1)
            })
            .is_ok();
        if still_failing {
            ResponseTemplate::new(500)
        } else {
            ResponseTemplate::new(200).set_body_string(self.body.clone())
        }
    }
}

/// Picks a response by the value of one query parameter, with a fallback
/// for every other value.
pub struct QueryRouter {
    param: String,
    routes: Vec<(String, ResponseTemplate)>,
    fallback: ResponseTemplate,
}

impl QueryRouter {
    pub fn new(param: &str, fallback_body: impl Into<String>) -> Self {
        Self {
            param: param.to_string(),
            routes: Vec::new(),
            fallback: ResponseTemplate::new(200).set_body_string(fallback_body.into()),
        }
    }

    pub fn route(self, value: &str, body: impl Into<String>) -> Self {
        self.route_response(value, ResponseTemplate::new(200).set_body_string(body.into()))
    }

    pub fn route_response(mut self, value: &str, response: ResponseTemplate) -> Self {
        self.routes.push((value.to_string(), response));
        self
    }
}

impl Respond for QueryRouter {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let value = request
            .url
            .query_pairs()
            .find(|(name, _)| name == self.param.as_str())
            .map(|(_, value)| value.into_owned());

        value
            .and_then(|value| {
                self.routes
                    .iter()
                    .find(|(candidate, _)| candidate == &value)
                    .map(|(_, response)| response.clone())
            })
            .unwrap_or_else(|| self.fallback.clone())
    }
}
