//! End-to-end store behavior against a scripted transport.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use prost::Message;
use sei_client::{ClientResult, Rpc};
use sei_proto::dex::query::{QueryGetOrderCountRequest, QueryGetOrderCountResponse};
use sei_proto::oracle::query::{QueryExchangeRateRequest, QueryExchangeRateResponse};
use sei_proto::oracle::OracleExchangeRate;
use sei_store::{watch_blocks, QueryOptions, SeiStore, StoreConfig};
use tokio::sync::broadcast;

struct ScriptedRpc {
    responses: Mutex<HashMap<String, VecDeque<Bytes>>>,
}

impl ScriptedRpc {
    fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
        }
    }

    fn push(&self, method: &str, msg: &impl Message) {
        self.responses
            .lock()
            .unwrap()
            .entry(method.to_string())
            .or_default()
            .push_back(Bytes::from(msg.encode_to_vec()));
    }
}

#[async_trait]
impl Rpc for ScriptedRpc {
    async fn request(&self, _service: &str, method: &str, _payload: Bytes) -> ClientResult<Bytes> {
        Ok(self
            .responses
            .lock()
            .unwrap()
            .get_mut(method)
            .and_then(|queue| queue.pop_front())
            .unwrap_or_default())
    }
}

fn rate(value: &str) -> QueryExchangeRateResponse {
    QueryExchangeRateResponse {
        oracle_exchange_rate: Some(OracleExchangeRate {
            exchange_rate: value.to_string(),
            last_update: "100".to_string(),
            last_update_timestamp: 1_700_000_000,
        }),
    }
}

#[tokio::test]
async fn subscribed_queries_follow_the_chain() {
    let rpc = Arc::new(ScriptedRpc::new());
    rpc.push("ExchangeRate", &rate("11.27"));
    rpc.push("ExchangeRate", &rate("11.31"));
    rpc.push("GetOrderCount", &QueryGetOrderCountResponse { count: 4 });

    let store = Arc::new(SeiStore::new(Arc::clone(&rpc), &StoreConfig::default()));

    let rate_req = QueryExchangeRateRequest {
        denom: "uatom".to_string(),
    };
    let first = store
        .oracle
        .query_exchange_rate(&rate_req, &QueryOptions::live())
        .await
        .unwrap();
    assert_eq!(
        first.oracle_exchange_rate.as_ref().unwrap().exchange_rate,
        "11.27"
    );

    // unsubscribed query is untouched by refresh
    let count_req = QueryGetOrderCountRequest::default();
    let count = store
        .dex
        .query_order_count(&count_req, &QueryOptions::default())
        .await
        .unwrap();
    assert_eq!(count.count, 4);

    let (tx, rx) = broadcast::channel(8);
    let handle = watch_blocks(Arc::clone(&store), rx);
    tx.send(1001).unwrap();

    tokio::time::timeout(Duration::from_secs(1), async {
        loop {
            let cached = store.oracle.exchange_rate.get(&rate_req).unwrap().unwrap();
            if cached.oracle_exchange_rate.as_ref().unwrap().exchange_rate == "11.31" {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("subscribed rate was not refreshed");

    // the scripted GetOrderCount queue is empty, so a replay would have
    // overwritten the cache with a default response
    let cached_count = store.dex.order_count.get(&count_req).unwrap().unwrap();
    assert_eq!(cached_count.count, 4);

    drop(tx);
    handle.await.unwrap();
}
