//! In-memory [`Rpc`] mock for client tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::ClientResult;
use crate::transport::Rpc;

/// Records every dispatched call and replays scripted responses in order.
/// An empty script yields empty (default-decoding) response bodies.
pub(crate) struct MockRpc {
    calls: Mutex<Vec<(String, String)>>,
    responses: Mutex<VecDeque<Bytes>>,
}

impl MockRpc {
    pub(crate) fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        }
    }

    pub(crate) fn push_response(&self, msg: &impl prost::Message) {
        self.push_raw(Bytes::from(msg.encode_to_vec()));
    }

    pub(crate) fn push_raw(&self, body: Bytes) {
        self.responses.lock().unwrap().push_back(body);
    }

    pub(crate) fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Rpc for MockRpc {
    async fn request(&self, service: &str, method: &str, _payload: Bytes) -> ClientResult<Bytes> {
        self.calls
            .lock()
            .unwrap()
            .push((service.to_string(), method.to_string()));
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_default())
    }
}
