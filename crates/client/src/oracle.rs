//! Clients for the `sei.oracle.v1` query and msg services.

use sei_proto::oracle::{query::*, tx::*};

use crate::error::ClientResult;
use crate::transport::{unary, Rpc};

/// Fully qualified name of the oracle query service.
pub const QUERY_SERVICE: &str = "sei.oracle.v1.Query";
/// Fully qualified name of the oracle msg service.
pub const MSG_SERVICE: &str = "sei.oracle.v1.Msg";

/// Read-only client for the oracle module.
#[derive(Clone)]
pub struct OracleQueryClient<R> {
    rpc: R,
}

impl<R: Rpc> OracleQueryClient<R> {
    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    pub async fn exchange_rate(
        &self,
        request: &QueryExchangeRateRequest,
    ) -> ClientResult<QueryExchangeRateResponse> {
        unary(&self.rpc, QUERY_SERVICE, "ExchangeRate", request).await
    }

    pub async fn exchange_rates(
        &self,
        request: &QueryExchangeRatesRequest,
    ) -> ClientResult<QueryExchangeRatesResponse> {
        unary(&self.rpc, QUERY_SERVICE, "ExchangeRates", request).await
    }

    pub async fn actives(
        &self,
        request: &QueryActivesRequest,
    ) -> ClientResult<QueryActivesResponse> {
        unary(&self.rpc, QUERY_SERVICE, "Actives", request).await
    }

    pub async fn vote_targets(
        &self,
        request: &QueryVoteTargetsRequest,
    ) -> ClientResult<QueryVoteTargetsResponse> {
        unary(&self.rpc, QUERY_SERVICE, "VoteTargets", request).await
    }

    pub async fn price_snapshot_history(
        &self,
        request: &QueryPriceSnapshotHistoryRequest,
    ) -> ClientResult<QueryPriceSnapshotHistoryResponse> {
        unary(&self.rpc, QUERY_SERVICE, "PriceSnapshotHistory", request).await
    }

    pub async fn twaps(&self, request: &QueryTwapsRequest) -> ClientResult<QueryTwapsResponse> {
        unary(&self.rpc, QUERY_SERVICE, "Twaps", request).await
    }

    pub async fn feeder_delegation(
        &self,
        request: &QueryFeederDelegationRequest,
    ) -> ClientResult<QueryFeederDelegationResponse> {
        unary(&self.rpc, QUERY_SERVICE, "FeederDelegation", request).await
    }

    pub async fn vote_penalty_counter(
        &self,
        request: &QueryVotePenaltyCounterRequest,
    ) -> ClientResult<QueryVotePenaltyCounterResponse> {
        unary(&self.rpc, QUERY_SERVICE, "VotePenaltyCounter", request).await
    }

    pub async fn slash_window(
        &self,
        request: &QuerySlashWindowRequest,
    ) -> ClientResult<QuerySlashWindowResponse> {
        unary(&self.rpc, QUERY_SERVICE, "SlashWindow", request).await
    }

    pub async fn params(&self, request: &QueryParamsRequest) -> ClientResult<QueryParamsResponse> {
        unary(&self.rpc, QUERY_SERVICE, "Params", request).await
    }
}

/// Transaction client for the oracle module.
#[derive(Clone)]
pub struct OracleMsgClient<R> {
    rpc: R,
}

impl<R: Rpc> OracleMsgClient<R> {
    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    pub async fn aggregate_exchange_rate_vote(
        &self,
        request: &MsgAggregateExchangeRateVote,
    ) -> ClientResult<MsgAggregateExchangeRateVoteResponse> {
        unary(&self.rpc, MSG_SERVICE, "AggregateExchangeRateVote", request).await
    }

    pub async fn delegate_feed_consent(
        &self,
        request: &MsgDelegateFeedConsent,
    ) -> ClientResult<MsgDelegateFeedConsentResponse> {
        unary(&self.rpc, MSG_SERVICE, "DelegateFeedConsent", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockRpc;
    use sei_proto::oracle::{DenomOracleExchangeRatePair, OracleExchangeRate};

    #[tokio::test]
    async fn exchange_rates_routes_and_decodes() {
        let rpc = MockRpc::new();
        rpc.push_response(&QueryExchangeRatesResponse {
            denom_oracle_exchange_rate_pairs: vec![DenomOracleExchangeRatePair {
                denom: "uatom".to_string(),
                oracle_exchange_rate: Some(OracleExchangeRate {
                    exchange_rate: "11.27".to_string(),
                    last_update: "4200".to_string(),
                    last_update_timestamp: 1_700_000_000,
                }),
            }],
        });

        let client = OracleQueryClient::new(rpc);
        let resp = client
            .exchange_rates(&QueryExchangeRatesRequest {})
            .await
            .unwrap();

        assert_eq!(resp.denom_oracle_exchange_rate_pairs.len(), 1);
        assert_eq!(
            client.rpc.calls(),
            vec![("sei.oracle.v1.Query".to_string(), "ExchangeRates".to_string())]
        );
    }

    #[tokio::test]
    async fn vote_routes_to_msg_service() {
        let rpc = MockRpc::new();
        let client = OracleMsgClient::new(rpc);
        client
            .aggregate_exchange_rate_vote(&MsgAggregateExchangeRateVote {
                exchange_rates: "11.27uatom".to_string(),
                feeder: "sei1feeder".to_string(),
                validator: "seivaloper1abc".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(
            client.rpc.calls(),
            vec![(
                "sei.oracle.v1.Msg".to_string(),
                "AggregateExchangeRateVote".to_string()
            )]
        );
    }
}
