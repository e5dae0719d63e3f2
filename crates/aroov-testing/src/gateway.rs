//! In-memory backend for controller tests.

use aroov_client::gateway::server_message;
use aroov_client::{Gateway, GatewayError, Method, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use tokio::sync::oneshot;

/// A request the gateway received.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Holds back one scripted response until opened. Dropping the gate
/// releases the response as well.
#[derive(Debug)]
pub struct Gate(oneshot::Sender<()>);

impl Gate {
    pub fn open(self) {
        let _ = self.0.send(());
    }
}

struct Scripted {
    result: Result<Value>,
    gate: Option<oneshot::Receiver<()>>,
}

/// Gateway answering from per-route queues.
///
/// Responses are keyed by method and exact path (query string included) and
/// consumed in order. A request with nothing queued fails as a network error,
/// so a test never silently depends on an unscripted call.
///
/// # Example
/// ```no_run
/// use aroov_client::Method;
/// use aroov_testing::ScriptedGateway;
/// use serde_json::json;
///
/// let gateway = ScriptedGateway::new();
/// gateway.ok(Method::Get, "/api/user/groups", json!([]));
/// gateway.fail(Method::Post, "/api/groups/5/recommend", 409, json!({"error": "Already added"}));
/// ```
#[derive(Default)]
pub struct ScriptedGateway {
    routes: RefCell<HashMap<(Method, String), VecDeque<Scripted>>>,
    log: RefCell<Vec<RecordedRequest>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, path: &str, result: Result<Value>) {
        self.push(method, path, result, None);
    }

    pub fn ok(&self, method: Method, path: &str, body: Value) {
        self.respond(method, path, Ok(body));
    }

    /// Non-2xx answer. The message is extracted from `body` the same way the
    /// HTTP gateway does it.
    pub fn fail(&self, method: Method, path: &str, status: u16, body: Value) {
        let message = server_message(&body.to_string());
        self.respond(method, path, Err(GatewayError::http(status, message)));
    }

    pub fn network_error(&self, method: Method, path: &str) {
        self.respond(
            method,
            path,
            Err(GatewayError::Network("connection refused".to_string())),
        );
    }

    /// Queue a response that is only delivered once the returned gate opens.
    pub fn gated(&self, method: Method, path: &str, result: Result<Value>) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.push(method, path, result, Some(rx));
        Gate(tx)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.log.borrow().clone()
    }

    /// Number of requests sent with `method` to a path starting with `prefix`.
    pub fn count(&self, method: Method, prefix: &str) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.path.starts_with(prefix))
            .count()
    }

    /// Responses still queued across all routes.
    pub fn pending(&self) -> usize {
        self.routes.borrow().values().map(VecDeque::len).sum()
    }

    fn push(
        &self,
        method: Method,
        path: &str,
        result: Result<Value>,
        gate: Option<oneshot::Receiver<()>>,
    ) {
        self.routes
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(Scripted { result, gate });
    }
}

#[async_trait(?Send)]
impl Gateway for ScriptedGateway {
    async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        self.log.borrow_mut().push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
        });

        let next = self
            .routes
            .borrow_mut()
            .get_mut(&(method, path.to_string()))
            .and_then(VecDeque::pop_front);
        let Some(scripted) = next else {
            return Err(GatewayError::Network(format!(
                "no scripted response for {} {}",
                method, path
            )));
        };

        if let Some(gate) = scripted.gate {
            let _ = gate.await;
        }
        scripted.result
    }
}
