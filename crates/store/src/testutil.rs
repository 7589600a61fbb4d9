//! Scripted [`Rpc`] mock for store tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use sei_client::{ClientError, ClientResult, Rpc};

enum Scripted {
    Body(Bytes),
    Fail,
}

/// Replays scripted responses per `(service, method)` pair and counts calls.
/// An exhausted or missing script yields empty (default-decoding) bodies.
pub(crate) struct MockRpc {
    responses: Mutex<HashMap<(String, String), VecDeque<Scripted>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockRpc {
    pub(crate) fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn push(&self, service: &str, method: &str, msg: &impl prost::Message) {
        self.script(service, method, Scripted::Body(Bytes::from(msg.encode_to_vec())));
    }

    /// Script the next call to `(service, method)` to fail with a gRPC status.
    pub(crate) fn push_error(&self, service: &str, method: &str) {
        self.script(service, method, Scripted::Fail);
    }

    fn script(&self, service: &str, method: &str, entry: Scripted) {
        self.responses
            .lock()
            .unwrap()
            .entry((service.to_string(), method.to_string()))
            .or_default()
            .push_back(entry);
    }

    pub(crate) fn call_count(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, m)| m == method)
            .count()
    }
}

#[async_trait]
impl Rpc for MockRpc {
    async fn request(&self, service: &str, method: &str, _payload: Bytes) -> ClientResult<Bytes> {
        self.calls
            .lock()
            .unwrap()
            .push((service.to_string(), method.to_string()));
        let next = self
            .responses
            .lock()
            .unwrap()
            .get_mut(&(service.to_string(), method.to_string()))
            .and_then(|queue| queue.pop_front());
        match next {
            Some(Scripted::Body(body)) => Ok(body),
            Some(Scripted::Fail) => Err(ClientError::Status(tonic::Status::unavailable(
                "scripted failure",
            ))),
            None => Ok(Bytes::default()),
        }
    }
}
