//! Scripted in-memory transport for controller tests.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

type Reply = Result<HttpResponse, TransportError>;

#[derive(Default)]
struct Inner {
    routes: HashMap<(Method, String), Reply>,
    log: Vec<HttpRequest>,
}

/// Answers each (method, path) with a fixed reply and records every request.
/// Unscripted routes answer 404 with a plain-text body.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    inner: Rc<RefCell<Inner>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(&self, method: Method, path: &str, status: u16, body: serde_json::Value) -> &Self {
        self.reply(
            method,
            path,
            Ok(HttpResponse {
                status,
                content_type: Some("application/json".to_string()),
                body: body.to_string(),
            }),
        )
    }

    pub fn text(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        self.reply(
            method,
            path,
            Ok(HttpResponse {
                status,
                content_type: Some("text/html; charset=utf-8".to_string()),
                body: body.to_string(),
            }),
        )
    }

    pub fn unreachable(&self, method: Method, path: &str) -> &Self {
        self.reply(
            method,
            path,
            Err(TransportError("connection refused".to_string())),
        )
    }

    fn reply(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.inner
            .borrow_mut()
            .routes
            .insert((method, path.to_string()), reply);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.inner.borrow().log.clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.inner
            .borrow()
            .log
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn clear_log(&self) {
        self.inner.borrow_mut().log.clear();
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut inner = self.inner.borrow_mut();
        let key = (request.method, request.path.clone());
        inner.log.push(request);

        inner.routes.get(&key).cloned().unwrap_or_else(|| {
            Ok(HttpResponse {
                status: 404,
                content_type: Some("text/plain".to_string()),
                body: "Not Found".to_string(),
            })
        })
    }
}
