//! Clients for the `seiprotocol.seichain.dex` query and msg services.

use sei_proto::dex::{query::*, tx::*};

use crate::error::ClientResult;
use crate::transport::{unary, Rpc};

/// Fully qualified name of the dex query service.
pub const QUERY_SERVICE: &str = "seiprotocol.seichain.dex.Query";
/// Fully qualified name of the dex msg service.
pub const MSG_SERVICE: &str = "seiprotocol.seichain.dex.Msg";

/// Read-only client for the dex module.
#[derive(Clone)]
pub struct DexQueryClient<R> {
    rpc: R,
}

impl<R: Rpc> DexQueryClient<R> {
    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    pub async fn params(&self, request: &QueryParamsRequest) -> ClientResult<QueryParamsResponse> {
        unary(&self.rpc, QUERY_SERVICE, "Params", request).await
    }

    pub async fn long_book(
        &self,
        request: &QueryGetLongBookRequest,
    ) -> ClientResult<QueryGetLongBookResponse> {
        unary(&self.rpc, QUERY_SERVICE, "LongBook", request).await
    }

    pub async fn long_book_all(
        &self,
        request: &QueryAllLongBookRequest,
    ) -> ClientResult<QueryAllLongBookResponse> {
        unary(&self.rpc, QUERY_SERVICE, "LongBookAll", request).await
    }

    pub async fn short_book(
        &self,
        request: &QueryGetShortBookRequest,
    ) -> ClientResult<QueryGetShortBookResponse> {
        unary(&self.rpc, QUERY_SERVICE, "ShortBook", request).await
    }

    pub async fn short_book_all(
        &self,
        request: &QueryAllShortBookRequest,
    ) -> ClientResult<QueryAllShortBookResponse> {
        unary(&self.rpc, QUERY_SERVICE, "ShortBookAll", request).await
    }

    pub async fn get_prices(
        &self,
        request: &QueryGetPricesRequest,
    ) -> ClientResult<QueryGetPricesResponse> {
        unary(&self.rpc, QUERY_SERVICE, "GetPrices", request).await
    }

    pub async fn get_price(
        &self,
        request: &QueryGetPriceRequest,
    ) -> ClientResult<QueryGetPriceResponse> {
        unary(&self.rpc, QUERY_SERVICE, "GetPrice", request).await
    }

    pub async fn get_latest_price(
        &self,
        request: &QueryGetLatestPriceRequest,
    ) -> ClientResult<QueryGetLatestPriceResponse> {
        unary(&self.rpc, QUERY_SERVICE, "GetLatestPrice", request).await
    }

    pub async fn get_twaps(
        &self,
        request: &QueryGetTwapsRequest,
    ) -> ClientResult<QueryGetTwapsResponse> {
        unary(&self.rpc, QUERY_SERVICE, "GetTwaps", request).await
    }

    pub async fn asset_metadata(
        &self,
        request: &QueryAssetMetadataRequest,
    ) -> ClientResult<QueryAssetMetadataResponse> {
        unary(&self.rpc, QUERY_SERVICE, "AssetMetadata", request).await
    }

    pub async fn asset_list(
        &self,
        request: &QueryAssetListRequest,
    ) -> ClientResult<QueryAssetListResponse> {
        unary(&self.rpc, QUERY_SERVICE, "AssetList", request).await
    }

    pub async fn get_registered_pairs(
        &self,
        request: &QueryRegisteredPairsRequest,
    ) -> ClientResult<QueryRegisteredPairsResponse> {
        unary(&self.rpc, QUERY_SERVICE, "GetRegisteredPairs", request).await
    }

    pub async fn get_registered_contract(
        &self,
        request: &QueryRegisteredContractRequest,
    ) -> ClientResult<QueryRegisteredContractResponse> {
        unary(&self.rpc, QUERY_SERVICE, "GetRegisteredContract", request).await
    }

    pub async fn get_orders(
        &self,
        request: &QueryGetOrdersRequest,
    ) -> ClientResult<QueryGetOrdersResponse> {
        unary(&self.rpc, QUERY_SERVICE, "GetOrders", request).await
    }

    pub async fn get_order(
        &self,
        request: &QueryGetOrderByIdRequest,
    ) -> ClientResult<QueryGetOrderByIdResponse> {
        unary(&self.rpc, QUERY_SERVICE, "GetOrder", request).await
    }

    pub async fn get_historical_prices(
        &self,
        request: &QueryGetHistoricalPricesRequest,
    ) -> ClientResult<QueryGetHistoricalPricesResponse> {
        unary(&self.rpc, QUERY_SERVICE, "GetHistoricalPrices", request).await
    }

    pub async fn get_market_summary(
        &self,
        request: &QueryGetMarketSummaryRequest,
    ) -> ClientResult<QueryGetMarketSummaryResponse> {
        unary(&self.rpc, QUERY_SERVICE, "GetMarketSummary", request).await
    }

    pub async fn get_order_simulation(
        &self,
        request: &QueryOrderSimulationRequest,
    ) -> ClientResult<QueryOrderSimulationResponse> {
        unary(&self.rpc, QUERY_SERVICE, "GetOrderSimulation", request).await
    }

    pub async fn get_match_result(
        &self,
        request: &QueryGetMatchResultRequest,
    ) -> ClientResult<QueryGetMatchResultResponse> {
        unary(&self.rpc, QUERY_SERVICE, "GetMatchResult", request).await
    }

    pub async fn get_order_count(
        &self,
        request: &QueryGetOrderCountRequest,
    ) -> ClientResult<QueryGetOrderCountResponse> {
        unary(&self.rpc, QUERY_SERVICE, "GetOrderCount", request).await
    }
}

/// Transaction client for the dex module.
///
/// Callers are expected to wrap these messages in a signed transaction before
/// broadcast; the client only handles encoding and dispatch.
#[derive(Clone)]
pub struct DexMsgClient<R> {
    rpc: R,
}

impl<R: Rpc> DexMsgClient<R> {
    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    pub async fn place_orders(
        &self,
        request: &MsgPlaceOrders,
    ) -> ClientResult<MsgPlaceOrdersResponse> {
        unary(&self.rpc, MSG_SERVICE, "PlaceOrders", request).await
    }

    pub async fn cancel_orders(
        &self,
        request: &MsgCancelOrders,
    ) -> ClientResult<MsgCancelOrdersResponse> {
        unary(&self.rpc, MSG_SERVICE, "CancelOrders", request).await
    }

    pub async fn register_contract(
        &self,
        request: &MsgRegisterContract,
    ) -> ClientResult<MsgRegisterContractResponse> {
        unary(&self.rpc, MSG_SERVICE, "RegisterContract", request).await
    }

    pub async fn contract_deposit_rent(
        &self,
        request: &MsgContractDepositRent,
    ) -> ClientResult<MsgContractDepositRentResponse> {
        unary(&self.rpc, MSG_SERVICE, "ContractDepositRent", request).await
    }

    pub async fn unregister_contract(
        &self,
        request: &MsgUnregisterContract,
    ) -> ClientResult<MsgUnregisterContractResponse> {
        unary(&self.rpc, MSG_SERVICE, "UnregisterContract", request).await
    }

    pub async fn register_pairs(
        &self,
        request: &MsgRegisterPairs,
    ) -> ClientResult<MsgRegisterPairsResponse> {
        unary(&self.rpc, MSG_SERVICE, "RegisterPairs", request).await
    }

    pub async fn update_price_tick_size(
        &self,
        request: &MsgUpdatePriceTickSize,
    ) -> ClientResult<MsgUpdateTickSizeResponse> {
        unary(&self.rpc, MSG_SERVICE, "UpdatePriceTickSize", request).await
    }

    pub async fn update_quantity_tick_size(
        &self,
        request: &MsgUpdateQuantityTickSize,
    ) -> ClientResult<MsgUpdateTickSizeResponse> {
        unary(&self.rpc, MSG_SERVICE, "UpdateQuantityTickSize", request).await
    }

    pub async fn unsuspend_contract(
        &self,
        request: &MsgUnsuspendContract,
    ) -> ClientResult<MsgUnsuspendContractResponse> {
        unary(&self.rpc, MSG_SERVICE, "UnsuspendContract", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockRpc;
    use sei_proto::dex::{LongBook, Order};

    #[tokio::test]
    async fn long_book_routes_and_decodes() {
        let rpc = MockRpc::new();
        rpc.push_response(&QueryGetLongBookResponse {
            long_book: Some(LongBook {
                price: "9.75".to_string(),
                entry: None,
            }),
        });

        let client = DexQueryClient::new(rpc);
        let resp = client
            .long_book(&QueryGetLongBookRequest {
                contract_addr: "sei1market".to_string(),
                price_denom: "usei".to_string(),
                asset_denom: "uatom".to_string(),
                price: "9.75".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(resp.long_book.unwrap().price, "9.75");
        assert_eq!(
            client.rpc.calls(),
            vec![("seiprotocol.seichain.dex.Query".to_string(), "LongBook".to_string())]
        );
    }

    #[tokio::test]
    async fn place_orders_routes_to_msg_service() {
        let rpc = MockRpc::new();
        rpc.push_response(&MsgPlaceOrdersResponse {
            order_ids: vec![17],
        });

        let client = DexMsgClient::new(rpc);
        let resp = client
            .place_orders(&MsgPlaceOrders {
                creator: "sei1trader".to_string(),
                orders: vec![Order::default()],
                contract_addr: "sei1market".to_string(),
                funds: vec![],
            })
            .await
            .unwrap();

        assert_eq!(resp.order_ids, vec![17]);
        assert_eq!(
            client.rpc.calls(),
            vec![("seiprotocol.seichain.dex.Msg".to_string(), "PlaceOrders".to_string())]
        );
    }

    #[tokio::test]
    async fn decode_error_surfaces() {
        let rpc = MockRpc::new();
        rpc.push_raw(bytes::Bytes::from_static(&[0xff, 0xff, 0xff]));

        let client = DexQueryClient::new(rpc);
        let err = client
            .params(&QueryParamsRequest {})
            .await
            .unwrap_err();
        assert!(matches!(err, crate::ClientError::Decode(_)));
    }
}
