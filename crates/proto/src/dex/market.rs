//! Market data: pairs, tick sizes, prices, twaps, asset metadata, match
//! results and the module parameters.

use serde::{Deserialize, Serialize};

use crate::cosmos;

/// A tradable pair registered with a market contract.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pair {
    #[prost(string, tag = "1")]
    pub price_denom: String,
    #[prost(string, tag = "2")]
    pub asset_denom: String,
    #[prost(string, tag = "3")]
    pub price_ticksize: String,
    #[prost(string, tag = "4")]
    pub quantity_ticksize: String,
}

/// Pairs to register against one contract in a single proposal.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BatchContractPair {
    #[prost(string, tag = "1")]
    pub contract_addr: String,
    #[prost(message, repeated, tag = "2")]
    pub pairs: Vec<Pair>,
}

/// A tick size update for one pair of one contract.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TickSize {
    #[prost(message, optional, tag = "1")]
    pub pair: Option<Pair>,
    #[prost(string, tag = "2")]
    pub ticksize: String,
    #[prost(string, tag = "3")]
    pub contract_addr: String,
}

/// Settlement price of a pair at one snapshot.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Price {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::json::u64_string")]
    pub snapshot_timestamp_in_seconds: u64,
    #[prost(string, tag = "2")]
    pub price: String,
    #[prost(message, optional, tag = "3")]
    pub pair: Option<Pair>,
}

/// OHLCV candlestick over one aggregation period.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriceCandlestick {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::json::u64_string")]
    pub begin_timestamp: u64,
    #[prost(uint64, tag = "2")]
    #[serde(with = "crate::json::u64_string")]
    pub end_timestamp: u64,
    #[prost(string, tag = "3")]
    pub open: String,
    #[prost(string, tag = "4")]
    pub high: String,
    #[prost(string, tag = "5")]
    pub low: String,
    #[prost(string, tag = "6")]
    pub close: String,
    #[prost(string, tag = "7")]
    pub volume: String,
}

/// Time-weighted average price of a pair over a lookback window.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Twap {
    #[prost(message, optional, tag = "1")]
    pub pair: Option<Pair>,
    #[prost(string, tag = "2")]
    pub twap: String,
    #[prost(uint64, tag = "3")]
    #[serde(with = "crate::json::u64_string")]
    pub lookback_seconds: u64,
}

/// IBC provenance of an asset listed on the dex.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssetIbcInfo {
    #[prost(string, tag = "1")]
    pub source_channel: String,
    #[prost(string, tag = "2")]
    pub dst_channel: String,
    #[prost(string, tag = "3")]
    pub source_denom: String,
    #[prost(string, tag = "4")]
    pub source_chain_id: String,
}

/// Listing metadata for one asset.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssetMetadata {
    #[prost(message, optional, tag = "1")]
    pub ibc_info: Option<AssetIbcInfo>,
    /// Asset class, e.g. `"cw20"`, `"ibc"` or `"erc20"`.
    #[prost(string, tag = "2")]
    pub type_asset: String,
    #[prost(message, optional, tag = "3")]
    pub metadata: Option<cosmos::Metadata>,
}

/// One fill produced by the matching engine.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettlementEntry {
    #[prost(string, tag = "1")]
    pub account: String,
    #[prost(string, tag = "2")]
    pub price_denom: String,
    #[prost(string, tag = "3")]
    pub asset_denom: String,
    #[prost(string, tag = "4")]
    pub quantity: String,
    #[prost(string, tag = "5")]
    pub execution_cost_or_proceed: String,
    #[prost(string, tag = "6")]
    pub expected_cost_or_proceed: String,
    #[prost(string, tag = "7")]
    pub position_direction: String,
    #[prost(string, tag = "8")]
    pub order_type: String,
    #[prost(uint64, tag = "9")]
    #[serde(with = "crate::json::u64_string")]
    pub order_id: u64,
    #[prost(uint64, tag = "10")]
    #[serde(with = "crate::json::u64_string")]
    pub timestamp: u64,
    #[prost(uint64, tag = "11")]
    #[serde(with = "crate::json::u64_string")]
    pub height: u64,
    #[prost(uint64, tag = "12")]
    #[serde(with = "crate::json::u64_string")]
    pub settlement_id: u64,
}

/// Everything the matching engine produced for one contract in one block.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchResult {
    #[prost(int64, tag = "1")]
    #[serde(with = "crate::json::i64_string")]
    pub height: i64,
    #[prost(string, tag = "2")]
    pub contract_addr: String,
    #[prost(message, repeated, tag = "3")]
    pub orders: Vec<super::Order>,
    #[prost(message, repeated, tag = "4")]
    pub settlements: Vec<SettlementEntry>,
    #[prost(message, repeated, tag = "5")]
    pub cancellations: Vec<super::Cancellation>,
}

/// Dex module parameters.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Params {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::json::u64_string")]
    pub price_snapshot_retention: u64,
    #[prost(string, tag = "2")]
    pub sudo_call_gas_price: String,
    #[prost(uint64, tag = "3")]
    #[serde(with = "crate::json::u64_string")]
    pub begin_block_gas_limit: u64,
    #[prost(uint64, tag = "4")]
    #[serde(with = "crate::json::u64_string")]
    pub end_block_gas_limit: u64,
    #[prost(uint64, tag = "5")]
    #[serde(with = "crate::json::u64_string")]
    pub default_gas_per_order: u64,
    #[prost(uint64, tag = "6")]
    #[serde(with = "crate::json::u64_string")]
    pub default_gas_per_cancel: u64,
    #[prost(uint64, tag = "7")]
    #[serde(with = "crate::json::u64_string")]
    pub min_rent_deposit: u64,
    #[prost(uint64, tag = "8")]
    #[serde(with = "crate::json::u64_string")]
    pub gas_allowance_per_settlement: u64,
    #[prost(uint64, tag = "9")]
    #[serde(with = "crate::json::u64_string")]
    pub min_processable_rent: u64,
    #[prost(uint64, tag = "10")]
    #[serde(with = "crate::json::u64_string")]
    pub order_book_entries_per_load: u64,
    #[prost(uint64, tag = "11")]
    #[serde(with = "crate::json::u64_string")]
    pub contract_unsuspend_cost: u64,
    #[prost(uint64, tag = "12")]
    #[serde(with = "crate::json::u64_string")]
    pub max_order_per_price: u64,
    #[prost(uint64, tag = "13")]
    #[serde(with = "crate::json::u64_string")]
    pub max_pairs_per_contract: u64,
    #[prost(uint64, tag = "14")]
    #[serde(with = "crate::json::u64_string")]
    pub default_gas_per_order_data_byte: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn match_result_roundtrip() {
        let result = MatchResult {
            height: 1234,
            contract_addr: "sei1market".to_string(),
            orders: vec![super::super::Order {
                id: 1,
                ..Default::default()
            }],
            settlements: vec![SettlementEntry {
                account: "sei1taker".to_string(),
                order_id: 1,
                quantity: "5".to_string(),
                ..Default::default()
            }],
            cancellations: vec![],
        };
        let decoded = MatchResult::decode(result.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, result);
    }

    #[test]
    fn price_json_stringifies_timestamp() {
        let price = Price {
            snapshot_timestamp_in_seconds: 1_700_000_000,
            price: "2.5".to_string(),
            pair: None,
        };
        let json = serde_json::to_value(&price).unwrap();
        assert_eq!(json["snapshotTimestampInSeconds"], "1700000000");
    }
}
