//! Types for `sei.oracle.v1`, the exchange rate oracle module.

pub mod query;
pub mod tx;

use serde::{Deserialize, Serialize};

/// Protobuf package this module maps to.
pub const PACKAGE: &str = "sei.oracle.v1";

/// Oracle module parameters.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Params {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::json::u64_string")]
    pub vote_period: u64,
    #[prost(string, tag = "2")]
    pub vote_threshold: String,
    #[prost(string, tag = "3")]
    pub reward_band: String,
    #[prost(message, repeated, tag = "4")]
    pub whitelist: Vec<Denom>,
    #[prost(string, tag = "5")]
    pub slash_fraction: String,
    #[prost(uint64, tag = "6")]
    #[serde(with = "crate::json::u64_string")]
    pub slash_window: u64,
    #[prost(string, tag = "7")]
    pub min_valid_per_window: String,
    // tag 8 was retired in the originating schema
    #[prost(uint64, tag = "9")]
    #[serde(with = "crate::json::u64_string")]
    pub lookback_duration: u64,
}

/// A whitelisted vote target denom.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Denom {
    #[prost(string, tag = "1")]
    pub name: String,
}

/// A validator's submitted exchange rate vote across all denoms.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AggregateExchangeRateVote {
    #[prost(message, repeated, tag = "1")]
    pub exchange_rate_tuples: Vec<ExchangeRateTuple>,
    #[prost(string, tag = "2")]
    pub voter: String,
}

/// One denom's rate inside an aggregate vote.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExchangeRateTuple {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub exchange_rate: String,
}

/// The consensus exchange rate for a denom, with update provenance.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OracleExchangeRate {
    #[prost(string, tag = "1")]
    pub exchange_rate: String,
    /// Block height of the last update, as a decimal string.
    #[prost(string, tag = "2")]
    pub last_update: String,
    #[prost(int64, tag = "3")]
    #[serde(with = "crate::json::i64_string")]
    pub last_update_timestamp: i64,
}

/// Rate of one denom inside a historical snapshot.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriceSnapshotItem {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(message, optional, tag = "2")]
    pub oracle_exchange_rate: Option<OracleExchangeRate>,
}

/// All consensus rates at one point in time.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriceSnapshot {
    #[prost(int64, tag = "1")]
    #[serde(with = "crate::json::i64_string")]
    pub snapshot_timestamp: i64,
    #[prost(message, repeated, tag = "2")]
    pub price_snapshot_items: Vec<PriceSnapshotItem>,
}

/// Time-weighted average rate of a denom over a lookback window.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleTwap {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub twap: String,
    #[prost(int64, tag = "3")]
    #[serde(with = "crate::json::i64_string")]
    pub lookback_seconds: i64,
}

/// A denom paired with its consensus rate, as returned by bulk queries.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DenomOracleExchangeRatePair {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(message, optional, tag = "2")]
    pub oracle_exchange_rate: Option<OracleExchangeRate>,
}

/// Voting performance counters for a validator in the current slash window.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VotePenaltyCounter {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::json::u64_string")]
    pub miss_count: u64,
    #[prost(uint64, tag = "2")]
    #[serde(with = "crate::json::u64_string")]
    pub abstain_count: u64,
    #[prost(uint64, tag = "3")]
    #[serde(with = "crate::json::u64_string")]
    pub success_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn params_keeps_retired_tag_gap() {
        let params = Params {
            min_valid_per_window: "0.05".to_string(),
            lookback_duration: 3600,
            ..Default::default()
        };
        let bytes = params.encode_to_vec();
        // field 7 then field 9 (tag 0x48), nothing at tag 8
        assert_eq!(bytes[0], 0x3a);
        assert!(bytes.contains(&0x48));
        let decoded = Params::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded, params);
    }

    #[test]
    fn aggregate_vote_roundtrip() {
        let vote = AggregateExchangeRateVote {
            exchange_rate_tuples: vec![
                ExchangeRateTuple {
                    denom: "uatom".to_string(),
                    exchange_rate: "11.27".to_string(),
                },
                ExchangeRateTuple {
                    denom: "ueth".to_string(),
                    exchange_rate: "1610.5".to_string(),
                },
            ],
            voter: "seivaloper1abc".to_string(),
        };
        let decoded =
            AggregateExchangeRateVote::decode(vote.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, vote);
    }
}
