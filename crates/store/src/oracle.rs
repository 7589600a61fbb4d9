//! Caching store over the oracle query service.

use std::sync::Arc;

use sei_client::oracle::OracleQueryClient;
use sei_client::Rpc;
use sei_proto::oracle::query::*;

use crate::cache::{QueryOptions, StoreConfig, StoreOp};
use crate::error::{fold_refresh_failure, StoreError, StoreResult};

/// Query store for the `sei.oracle.v1` module.
pub struct OracleStore<R> {
    client: OracleQueryClient<R>,
    pub exchange_rate: StoreOp<QueryExchangeRateRequest, QueryExchangeRateResponse>,
    pub exchange_rates: StoreOp<QueryExchangeRatesRequest, QueryExchangeRatesResponse>,
    pub actives: StoreOp<QueryActivesRequest, QueryActivesResponse>,
    pub vote_targets: StoreOp<QueryVoteTargetsRequest, QueryVoteTargetsResponse>,
    pub price_snapshot_history:
        StoreOp<QueryPriceSnapshotHistoryRequest, QueryPriceSnapshotHistoryResponse>,
    pub twaps: StoreOp<QueryTwapsRequest, QueryTwapsResponse>,
    pub feeder_delegation: StoreOp<QueryFeederDelegationRequest, QueryFeederDelegationResponse>,
    pub vote_penalty_counter:
        StoreOp<QueryVotePenaltyCounterRequest, QueryVotePenaltyCounterResponse>,
    pub slash_window: StoreOp<QuerySlashWindowRequest, QuerySlashWindowResponse>,
    pub params: StoreOp<QueryParamsRequest, QueryParamsResponse>,
}

impl<R: Rpc> OracleStore<R> {
    pub fn new(rpc: R, config: &StoreConfig) -> Self {
        Self {
            client: OracleQueryClient::new(rpc),
            exchange_rate: StoreOp::new(config),
            exchange_rates: StoreOp::new(config),
            actives: StoreOp::new(config),
            vote_targets: StoreOp::new(config),
            price_snapshot_history: StoreOp::new(config),
            twaps: StoreOp::new(config),
            feeder_delegation: StoreOp::new(config),
            vote_penalty_counter: StoreOp::new(config),
            slash_window: StoreOp::new(config),
            params: StoreOp::new(config),
        }
    }

    pub async fn query_exchange_rate(
        &self,
        req: &QueryExchangeRateRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryExchangeRateResponse>> {
        let resp = self
            .client
            .exchange_rate(req)
            .await
            .map_err(StoreError::query("ExchangeRate"))?;
        self.exchange_rate.store(req, resp, opts)
    }

    pub async fn query_exchange_rates(
        &self,
        req: &QueryExchangeRatesRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryExchangeRatesResponse>> {
        let resp = self
            .client
            .exchange_rates(req)
            .await
            .map_err(StoreError::query("ExchangeRates"))?;
        self.exchange_rates.store(req, resp, opts)
    }

    pub async fn query_actives(
        &self,
        req: &QueryActivesRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryActivesResponse>> {
        let resp = self
            .client
            .actives(req)
            .await
            .map_err(StoreError::query("Actives"))?;
        self.actives.store(req, resp, opts)
    }

    pub async fn query_vote_targets(
        &self,
        req: &QueryVoteTargetsRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryVoteTargetsResponse>> {
        let resp = self
            .client
            .vote_targets(req)
            .await
            .map_err(StoreError::query("VoteTargets"))?;
        self.vote_targets.store(req, resp, opts)
    }

    pub async fn query_price_snapshot_history(
        &self,
        req: &QueryPriceSnapshotHistoryRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryPriceSnapshotHistoryResponse>> {
        let resp = self
            .client
            .price_snapshot_history(req)
            .await
            .map_err(StoreError::query("PriceSnapshotHistory"))?;
        self.price_snapshot_history.store(req, resp, opts)
    }

    pub async fn query_twaps(
        &self,
        req: &QueryTwapsRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryTwapsResponse>> {
        let resp = self
            .client
            .twaps(req)
            .await
            .map_err(StoreError::query("Twaps"))?;
        self.twaps.store(req, resp, opts)
    }

    pub async fn query_feeder_delegation(
        &self,
        req: &QueryFeederDelegationRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryFeederDelegationResponse>> {
        let resp = self
            .client
            .feeder_delegation(req)
            .await
            .map_err(StoreError::query("FeederDelegation"))?;
        self.feeder_delegation.store(req, resp, opts)
    }

    pub async fn query_vote_penalty_counter(
        &self,
        req: &QueryVotePenaltyCounterRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryVotePenaltyCounterResponse>> {
        let resp = self
            .client
            .vote_penalty_counter(req)
            .await
            .map_err(StoreError::query("VotePenaltyCounter"))?;
        self.vote_penalty_counter.store(req, resp, opts)
    }

    pub async fn query_slash_window(
        &self,
        req: &QuerySlashWindowRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QuerySlashWindowResponse>> {
        let resp = self
            .client
            .slash_window(req)
            .await
            .map_err(StoreError::query("SlashWindow"))?;
        self.slash_window.store(req, resp, opts)
    }

    pub async fn query_params(
        &self,
        req: &QueryParamsRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryParamsResponse>> {
        let resp = self
            .client
            .params(req)
            .await
            .map_err(StoreError::query("Params"))?;
        self.params.store(req, resp, opts)
    }

    /// Re-run every subscribed query and update its cache slot.
    ///
    /// A failed replay is logged and the pass continues; the first failure
    /// is returned once every subscription has been attempted.
    pub async fn refresh(&self) -> StoreResult<()> {
        let mut first = None;
        for (req, _) in self.exchange_rate.subscriptions()? {
            match self
                .client
                .exchange_rate(&req)
                .await
                .map_err(StoreError::query("ExchangeRate"))
            {
                Ok(resp) => {
                    self.exchange_rate.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.exchange_rates.subscriptions()? {
            match self
                .client
                .exchange_rates(&req)
                .await
                .map_err(StoreError::query("ExchangeRates"))
            {
                Ok(resp) => {
                    self.exchange_rates.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.actives.subscriptions()? {
            match self
                .client
                .actives(&req)
                .await
                .map_err(StoreError::query("Actives"))
            {
                Ok(resp) => {
                    self.actives.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.vote_targets.subscriptions()? {
            match self
                .client
                .vote_targets(&req)
                .await
                .map_err(StoreError::query("VoteTargets"))
            {
                Ok(resp) => {
                    self.vote_targets.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.price_snapshot_history.subscriptions()? {
            match self
                .client
                .price_snapshot_history(&req)
                .await
                .map_err(StoreError::query("PriceSnapshotHistory"))
            {
                Ok(resp) => {
                    self.price_snapshot_history.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.twaps.subscriptions()? {
            match self
                .client
                .twaps(&req)
                .await
                .map_err(StoreError::query("Twaps"))
            {
                Ok(resp) => {
                    self.twaps.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.feeder_delegation.subscriptions()? {
            match self
                .client
                .feeder_delegation(&req)
                .await
                .map_err(StoreError::query("FeederDelegation"))
            {
                Ok(resp) => {
                    self.feeder_delegation.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.vote_penalty_counter.subscriptions()? {
            match self
                .client
                .vote_penalty_counter(&req)
                .await
                .map_err(StoreError::query("VotePenaltyCounter"))
            {
                Ok(resp) => {
                    self.vote_penalty_counter.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.slash_window.subscriptions()? {
            match self
                .client
                .slash_window(&req)
                .await
                .map_err(StoreError::query("SlashWindow"))
            {
                Ok(resp) => {
                    self.slash_window.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.params.subscriptions()? {
            match self
                .client
                .params(&req)
                .await
                .map_err(StoreError::query("Params"))
            {
                Ok(resp) => {
                    self.params.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        match first {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Drop all cached responses and subscriptions.
    pub fn reset(&self) {
        self.exchange_rate.reset();
        self.exchange_rates.reset();
        self.actives.reset();
        self.vote_targets.reset();
        self.price_snapshot_history.reset();
        self.twaps.reset();
        self.feeder_delegation.reset();
        self.vote_penalty_counter.reset();
        self.slash_window.reset();
        self.params.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockRpc;

    #[tokio::test]
    async fn distinct_requests_use_distinct_slots() {
        let rpc = Arc::new(MockRpc::new());
        rpc.push(
            "sei.oracle.v1.Query",
            "ExchangeRate",
            &QueryExchangeRateResponse::default(),
        );
        rpc.push(
            "sei.oracle.v1.Query",
            "ExchangeRate",
            &QueryExchangeRateResponse::default(),
        );
        let store = OracleStore::new(Arc::clone(&rpc), &StoreConfig::default());

        let atom = QueryExchangeRateRequest {
            denom: "uatom".to_string(),
        };
        let eth = QueryExchangeRateRequest {
            denom: "ueth".to_string(),
        };
        store
            .query_exchange_rate(&atom, &QueryOptions::default())
            .await
            .unwrap();
        store
            .query_exchange_rate(&eth, &QueryOptions::default())
            .await
            .unwrap();

        assert_eq!(rpc.call_count("ExchangeRate"), 2);
        assert!(store.exchange_rate.get(&atom).unwrap().is_some());
        assert!(store.exchange_rate.get(&eth).unwrap().is_some());
    }

    #[tokio::test]
    async fn live_options_subscribe_and_refresh() {
        let rpc = Arc::new(MockRpc::new());
        rpc.push(
            "sei.oracle.v1.Query",
            "Actives",
            &QueryActivesResponse {
                actives: vec!["uatom".to_string()],
            },
        );
        rpc.push(
            "sei.oracle.v1.Query",
            "Actives",
            &QueryActivesResponse {
                actives: vec!["uatom".to_string(), "ueth".to_string()],
            },
        );
        let store = OracleStore::new(Arc::clone(&rpc), &StoreConfig::default());

        let req = QueryActivesRequest::default();
        let first = store
            .query_actives(&req, &QueryOptions::live())
            .await
            .unwrap();
        assert_eq!(first.actives.len(), 1);

        store.refresh().await.unwrap();
        let cached = store.actives.get(&req).unwrap().unwrap();
        assert_eq!(cached.actives.len(), 2);
    }

    #[tokio::test]
    async fn refresh_continues_past_failed_subscriptions() {
        let rpc = Arc::new(MockRpc::new());
        rpc.push(
            "sei.oracle.v1.Query",
            "ExchangeRate",
            &QueryExchangeRateResponse::default(),
        );
        rpc.push_error("sei.oracle.v1.Query", "ExchangeRate");
        rpc.push(
            "sei.oracle.v1.Query",
            "Actives",
            &QueryActivesResponse::default(),
        );
        rpc.push(
            "sei.oracle.v1.Query",
            "Actives",
            &QueryActivesResponse {
                actives: vec!["uatom".to_string()],
            },
        );
        let store = OracleStore::new(Arc::clone(&rpc), &StoreConfig::default());

        let rate = QueryExchangeRateRequest {
            denom: "uatom".to_string(),
        };
        let actives = QueryActivesRequest::default();
        store
            .query_exchange_rate(&rate, &QueryOptions::live())
            .await
            .unwrap();
        store
            .query_actives(&actives, &QueryOptions::live())
            .await
            .unwrap();

        // ExchangeRate fails on replay but Actives is still refreshed.
        let err = store.refresh().await.unwrap_err();
        assert!(matches!(err, StoreError::Query { op: "ExchangeRate", .. }));
        assert_eq!(rpc.call_count("Actives"), 2);
        let cached = store.actives.get(&actives).unwrap().unwrap();
        assert_eq!(cached.actives, vec!["uatom".to_string()]);
    }
}
