//! Requests and responses for the `sei.oracle.v1.Query` service.

use serde::{Deserialize, Serialize};

use super::{
    DenomOracleExchangeRatePair, OracleExchangeRate, OracleTwap, Params, PriceSnapshot,
    VotePenaltyCounter,
};

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryExchangeRateRequest {
    #[prost(string, tag = "1")]
    pub denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryExchangeRateResponse {
    #[prost(message, optional, tag = "1")]
    pub oracle_exchange_rate: Option<OracleExchangeRate>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryExchangeRatesRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryExchangeRatesResponse {
    #[prost(message, repeated, tag = "1")]
    pub denom_oracle_exchange_rate_pairs: Vec<DenomOracleExchangeRatePair>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryActivesRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryActivesResponse {
    /// Denoms with an active exchange rate.
    #[prost(string, repeated, tag = "1")]
    pub actives: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryVoteTargetsRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryVoteTargetsResponse {
    #[prost(string, repeated, tag = "1")]
    pub vote_targets: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryPriceSnapshotHistoryRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryPriceSnapshotHistoryResponse {
    #[prost(message, repeated, tag = "1")]
    pub price_snapshots: Vec<PriceSnapshot>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryTwapsRequest {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::json::u64_string")]
    pub lookback_seconds: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryTwapsResponse {
    #[prost(message, repeated, tag = "1")]
    pub oracle_twaps: Vec<OracleTwap>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryFeederDelegationRequest {
    #[prost(string, tag = "1")]
    pub validator_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryFeederDelegationResponse {
    #[prost(string, tag = "1")]
    pub feeder_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryVotePenaltyCounterRequest {
    #[prost(string, tag = "1")]
    pub validator_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryVotePenaltyCounterResponse {
    #[prost(message, optional, tag = "1")]
    pub vote_penalty_counter: Option<VotePenaltyCounter>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySlashWindowRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuerySlashWindowResponse {
    /// Number of vote periods elapsed in the current slash window.
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::json::u64_string")]
    pub window_progress: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParamsRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParamsResponse {
    #[prost(message, optional, tag = "1")]
    pub params: Option<Params>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn exchange_rate_request_wire_shape() {
        let req = QueryExchangeRateRequest {
            denom: "uatom".to_string(),
        };
        assert_eq!(
            req.encode_to_vec(),
            [0x0a, 0x05, b'u', b'a', b't', b'o', b'm']
        );
    }

    #[test]
    fn twaps_request_json_stringifies_lookback() {
        let req = QueryTwapsRequest {
            lookback_seconds: 86400,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["lookbackSeconds"], "86400");
        let back: QueryTwapsRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn actives_response_roundtrip() {
        let resp = QueryActivesResponse {
            actives: vec!["uatom".to_string(), "ueth".to_string()],
        };
        let decoded = QueryActivesResponse::decode(resp.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, resp);
    }
}
