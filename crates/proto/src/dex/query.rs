//! Request/response pairs for the `seiprotocol.seichain.dex.Query` service.

use serde::{Deserialize, Serialize};

use super::{
    AssetMetadata, ContractInfoV2, LongBook, MatchResult, Order, Pair, Params, PositionDirection,
    Price, PriceCandlestick, ShortBook, Twap,
};
use crate::cosmos::{PageRequest, PageResponse};

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParamsRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParamsResponse {
    #[prost(message, optional, tag = "1")]
    pub params: Option<Params>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryGetLongBookRequest {
    #[prost(string, tag = "1")]
    pub price: String,
    #[prost(string, tag = "2")]
    pub contract_addr: String,
    #[prost(string, tag = "3")]
    pub price_denom: String,
    #[prost(string, tag = "4")]
    pub asset_denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetLongBookResponse {
    #[prost(message, optional, tag = "1")]
    pub long_book: Option<LongBook>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryAllLongBookRequest {
    #[prost(message, optional, tag = "1")]
    pub pagination: Option<PageRequest>,
    #[prost(string, tag = "2")]
    pub contract_addr: String,
    #[prost(string, tag = "3")]
    pub price_denom: String,
    #[prost(string, tag = "4")]
    pub asset_denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryAllLongBookResponse {
    #[prost(message, repeated, tag = "1")]
    pub long_book: Vec<LongBook>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryGetShortBookRequest {
    #[prost(string, tag = "1")]
    pub price: String,
    #[prost(string, tag = "2")]
    pub contract_addr: String,
    #[prost(string, tag = "3")]
    pub price_denom: String,
    #[prost(string, tag = "4")]
    pub asset_denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetShortBookResponse {
    #[prost(message, optional, tag = "1")]
    pub short_book: Option<ShortBook>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryAllShortBookRequest {
    #[prost(message, optional, tag = "1")]
    pub pagination: Option<PageRequest>,
    #[prost(string, tag = "2")]
    pub contract_addr: String,
    #[prost(string, tag = "3")]
    pub price_denom: String,
    #[prost(string, tag = "4")]
    pub asset_denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryAllShortBookResponse {
    #[prost(message, repeated, tag = "1")]
    pub short_book: Vec<ShortBook>,
    #[prost(message, optional, tag = "2")]
    pub pagination: Option<PageResponse>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryGetPricesRequest {
    #[prost(string, tag = "1")]
    pub price_denom: String,
    #[prost(string, tag = "2")]
    pub asset_denom: String,
    #[prost(string, tag = "3")]
    pub contract_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetPricesResponse {
    #[prost(message, repeated, tag = "1")]
    pub prices: Vec<Price>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryGetPriceRequest {
    #[prost(string, tag = "1")]
    pub price_denom: String,
    #[prost(string, tag = "2")]
    pub asset_denom: String,
    #[prost(string, tag = "3")]
    pub contract_addr: String,
    #[prost(uint64, tag = "4")]
    #[serde(with = "crate::json::u64_string")]
    pub timestamp: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetPriceResponse {
    #[prost(message, optional, tag = "1")]
    pub price: Option<Price>,
    #[prost(bool, tag = "2")]
    pub found: bool,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryGetLatestPriceRequest {
    #[prost(string, tag = "1")]
    pub price_denom: String,
    #[prost(string, tag = "2")]
    pub asset_denom: String,
    #[prost(string, tag = "3")]
    pub contract_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetLatestPriceResponse {
    #[prost(message, optional, tag = "1")]
    pub price: Option<Price>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryGetTwapsRequest {
    #[prost(string, tag = "1")]
    pub contract_addr: String,
    #[prost(uint64, tag = "2")]
    #[serde(with = "crate::json::u64_string")]
    pub lookback_seconds: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetTwapsResponse {
    #[prost(message, repeated, tag = "1")]
    pub twaps: Vec<Twap>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryAssetListRequest {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryAssetListResponse {
    #[prost(message, repeated, tag = "1")]
    pub asset_list: Vec<AssetMetadata>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryAssetMetadataRequest {
    #[prost(string, tag = "1")]
    pub denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryAssetMetadataResponse {
    #[prost(message, optional, tag = "1")]
    pub metadata: Option<AssetMetadata>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryRegisteredPairsRequest {
    #[prost(string, tag = "1")]
    pub contract_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryRegisteredPairsResponse {
    #[prost(message, repeated, tag = "1")]
    pub pairs: Vec<Pair>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryRegisteredContractRequest {
    #[prost(string, tag = "1")]
    pub contract_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryRegisteredContractResponse {
    #[prost(message, optional, tag = "1")]
    pub contract_info: Option<ContractInfoV2>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryGetOrdersRequest {
    #[prost(string, tag = "1")]
    pub contract_addr: String,
    #[prost(string, tag = "2")]
    pub account: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetOrdersResponse {
    #[prost(message, repeated, tag = "1")]
    pub orders: Vec<Order>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryGetOrderByIdRequest {
    #[prost(string, tag = "1")]
    pub contract_addr: String,
    #[prost(string, tag = "2")]
    pub price_denom: String,
    #[prost(string, tag = "3")]
    pub asset_denom: String,
    #[prost(uint64, tag = "4")]
    #[serde(with = "crate::json::u64_string")]
    pub id: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetOrderByIdResponse {
    #[prost(message, optional, tag = "1")]
    pub order: Option<Order>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryGetHistoricalPricesRequest {
    #[prost(string, tag = "1")]
    pub contract_addr: String,
    #[prost(string, tag = "2")]
    pub price_denom: String,
    #[prost(string, tag = "3")]
    pub asset_denom: String,
    #[prost(uint64, tag = "4")]
    #[serde(with = "crate::json::u64_string")]
    pub period_length_in_seconds: u64,
    #[prost(uint64, tag = "5")]
    #[serde(with = "crate::json::u64_string")]
    pub num_of_periods: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetHistoricalPricesResponse {
    #[prost(message, repeated, tag = "1")]
    pub prices: Vec<PriceCandlestick>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryGetMarketSummaryRequest {
    #[prost(string, tag = "1")]
    pub contract_addr: String,
    #[prost(string, tag = "2")]
    pub price_denom: String,
    #[prost(string, tag = "3")]
    pub asset_denom: String,
    #[prost(uint64, tag = "4")]
    #[serde(with = "crate::json::u64_string")]
    pub lookback_in_seconds: u64,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryGetMarketSummaryResponse {
    #[prost(string, tag = "1")]
    pub total_volume: String,
    #[prost(string, tag = "2")]
    pub total_volume_notional: String,
    #[prost(string, tag = "3")]
    pub high_price: String,
    #[prost(string, tag = "4")]
    pub low_price: String,
    #[prost(string, tag = "5")]
    pub last_price: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryOrderSimulationRequest {
    #[prost(message, optional, tag = "1")]
    pub order: Option<Order>,
    #[prost(string, tag = "2")]
    pub contract_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryOrderSimulationResponse {
    /// Quantity that would fill immediately against the current book.
    #[prost(string, tag = "1")]
    pub executed_quantity: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryGetMatchResultRequest {
    #[prost(string, tag = "1")]
    pub contract_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetMatchResultResponse {
    #[prost(message, optional, tag = "1")]
    pub result: Option<MatchResult>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryGetOrderCountRequest {
    #[prost(string, tag = "1")]
    pub contract_addr: String,
    #[prost(string, tag = "2")]
    pub price_denom: String,
    #[prost(string, tag = "3")]
    pub asset_denom: String,
    #[prost(string, tag = "4")]
    pub price: String,
    #[prost(enumeration = "PositionDirection", tag = "5")]
    pub position_direction: i32,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryGetOrderCountResponse {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::json::u64_string")]
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn get_orders_request_wire_format() {
        let req = QueryGetOrdersRequest {
            contract_addr: "c1".to_string(),
            account: "a1".to_string(),
        };
        assert_eq!(
            req.encode_to_vec(),
            [0x0a, 0x02, b'c', b'1', 0x12, 0x02, b'a', b'1']
        );
    }

    #[test]
    fn paginated_request_roundtrip() {
        let req = QueryAllLongBookRequest {
            pagination: Some(PageRequest {
                limit: 100,
                ..Default::default()
            }),
            contract_addr: "sei1market".to_string(),
            price_denom: "USDC".to_string(),
            asset_denom: "ATOM".to_string(),
        };
        let decoded = QueryAllLongBookRequest::decode(req.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, req);
    }

    #[test]
    fn unknown_fields_are_skipped() {
        let mut bytes = QueryGetOrderCountResponse { count: 9 }.encode_to_vec();
        // append an unknown string field (tag 15)
        bytes.extend([0x7a, 0x03, b'x', b'y', b'z']);
        let decoded = QueryGetOrderCountResponse::decode(bytes.as_slice()).unwrap();
        assert_eq!(decoded.count, 9);
    }
}
