//! Caching store over the dex query service.

use std::sync::Arc;

use sei_client::dex::DexQueryClient;
use sei_client::Rpc;
use sei_proto::dex::query::*;

use crate::cache::{QueryOptions, StoreConfig, StoreOp};
use crate::error::{fold_refresh_failure, StoreError, StoreResult};

/// Query store for the `seiprotocol.seichain.dex` module.
///
/// Each operation has its own cache slot set, exposed as a public field for
/// direct cache access (`store.params.get(..)`, `unsubscribe`, `reset`).
pub struct DexStore<R> {
    client: DexQueryClient<R>,
    pub params: StoreOp<QueryParamsRequest, QueryParamsResponse>,
    pub long_book: StoreOp<QueryGetLongBookRequest, QueryGetLongBookResponse>,
    pub long_book_all: StoreOp<QueryAllLongBookRequest, QueryAllLongBookResponse>,
    pub short_book: StoreOp<QueryGetShortBookRequest, QueryGetShortBookResponse>,
    pub short_book_all: StoreOp<QueryAllShortBookRequest, QueryAllShortBookResponse>,
    pub get_prices: StoreOp<QueryGetPricesRequest, QueryGetPricesResponse>,
    pub get_price: StoreOp<QueryGetPriceRequest, QueryGetPriceResponse>,
    pub get_latest_price: StoreOp<QueryGetLatestPriceRequest, QueryGetLatestPriceResponse>,
    pub get_twaps: StoreOp<QueryGetTwapsRequest, QueryGetTwapsResponse>,
    pub asset_metadata: StoreOp<QueryAssetMetadataRequest, QueryAssetMetadataResponse>,
    pub asset_list: StoreOp<QueryAssetListRequest, QueryAssetListResponse>,
    pub registered_pairs: StoreOp<QueryRegisteredPairsRequest, QueryRegisteredPairsResponse>,
    pub registered_contract:
        StoreOp<QueryRegisteredContractRequest, QueryRegisteredContractResponse>,
    pub get_orders: StoreOp<QueryGetOrdersRequest, QueryGetOrdersResponse>,
    pub get_order: StoreOp<QueryGetOrderByIdRequest, QueryGetOrderByIdResponse>,
    pub historical_prices:
        StoreOp<QueryGetHistoricalPricesRequest, QueryGetHistoricalPricesResponse>,
    pub market_summary: StoreOp<QueryGetMarketSummaryRequest, QueryGetMarketSummaryResponse>,
    pub order_simulation: StoreOp<QueryOrderSimulationRequest, QueryOrderSimulationResponse>,
    pub match_result: StoreOp<QueryGetMatchResultRequest, QueryGetMatchResultResponse>,
    pub order_count: StoreOp<QueryGetOrderCountRequest, QueryGetOrderCountResponse>,
}

impl<R: Rpc> DexStore<R> {
    pub fn new(rpc: R, config: &StoreConfig) -> Self {
        Self {
            client: DexQueryClient::new(rpc),
            params: StoreOp::new(config),
            long_book: StoreOp::new(config),
            long_book_all: StoreOp::new(config),
            short_book: StoreOp::new(config),
            short_book_all: StoreOp::new(config),
            get_prices: StoreOp::new(config),
            get_price: StoreOp::new(config),
            get_latest_price: StoreOp::new(config),
            get_twaps: StoreOp::new(config),
            asset_metadata: StoreOp::new(config),
            asset_list: StoreOp::new(config),
            registered_pairs: StoreOp::new(config),
            registered_contract: StoreOp::new(config),
            get_orders: StoreOp::new(config),
            get_order: StoreOp::new(config),
            historical_prices: StoreOp::new(config),
            market_summary: StoreOp::new(config),
            order_simulation: StoreOp::new(config),
            match_result: StoreOp::new(config),
            order_count: StoreOp::new(config),
        }
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

    pub async fn query_long_book(
        &self,
        req: &QueryGetLongBookRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryGetLongBookResponse>> {
        let resp = self
            .client
            .long_book(req)
            .await
            .map_err(StoreError::query("LongBook"))?;
        self.long_book.store(req, resp, opts)
    }

    pub async fn query_long_book_all(
        &self,
        req: &QueryAllLongBookRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryAllLongBookResponse>> {
        let resp = self.fetch_long_book_all(req, opts.all).await?;
        self.long_book_all.store(req, resp, opts)
    }

    pub async fn query_short_book(
        &self,
        req: &QueryGetShortBookRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryGetShortBookResponse>> {
        let resp = self
            .client
            .short_book(req)
            .await
            .map_err(StoreError::query("ShortBook"))?;
        self.short_book.store(req, resp, opts)
    }

    pub async fn query_short_book_all(
        &self,
        req: &QueryAllShortBookRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryAllShortBookResponse>> {
        let resp = self.fetch_short_book_all(req, opts.all).await?;
        self.short_book_all.store(req, resp, opts)
    }

    pub async fn query_get_prices(
        &self,
        req: &QueryGetPricesRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryGetPricesResponse>> {
        let resp = self
            .client
            .get_prices(req)
            .await
            .map_err(StoreError::query("GetPrices"))?;
        self.get_prices.store(req, resp, opts)
    }

    pub async fn query_get_price(
        &self,
        req: &QueryGetPriceRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryGetPriceResponse>> {
        let resp = self
            .client
            .get_price(req)
            .await
            .map_err(StoreError::query("GetPrice"))?;
        self.get_price.store(req, resp, opts)
    }

    pub async fn query_get_latest_price(
        &self,
        req: &QueryGetLatestPriceRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryGetLatestPriceResponse>> {
        let resp = self
            .client
            .get_latest_price(req)
            .await
            .map_err(StoreError::query("GetLatestPrice"))?;
        self.get_latest_price.store(req, resp, opts)
    }

    pub async fn query_get_twaps(
        &self,
        req: &QueryGetTwapsRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryGetTwapsResponse>> {
        let resp = self
            .client
            .get_twaps(req)
            .await
            .map_err(StoreError::query("GetTwaps"))?;
        self.get_twaps.store(req, resp, opts)
    }

    pub async fn query_asset_metadata(
        &self,
        req: &QueryAssetMetadataRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryAssetMetadataResponse>> {
        let resp = self
            .client
            .asset_metadata(req)
            .await
            .map_err(StoreError::query("AssetMetadata"))?;
        self.asset_metadata.store(req, resp, opts)
    }

    pub async fn query_asset_list(
        &self,
        req: &QueryAssetListRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryAssetListResponse>> {
        let resp = self
            .client
            .asset_list(req)
            .await
            .map_err(StoreError::query("AssetList"))?;
        self.asset_list.store(req, resp, opts)
    }

    pub async fn query_registered_pairs(
        &self,
        req: &QueryRegisteredPairsRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryRegisteredPairsResponse>> {
        let resp = self
            .client
            .get_registered_pairs(req)
            .await
            .map_err(StoreError::query("GetRegisteredPairs"))?;
        self.registered_pairs.store(req, resp, opts)
    }

    pub async fn query_registered_contract(
        &self,
        req: &QueryRegisteredContractRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryRegisteredContractResponse>> {
        let resp = self
            .client
            .get_registered_contract(req)
            .await
            .map_err(StoreError::query("GetRegisteredContract"))?;
        self.registered_contract.store(req, resp, opts)
    }

    pub async fn query_get_orders(
        &self,
        req: &QueryGetOrdersRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryGetOrdersResponse>> {
        let resp = self
            .client
            .get_orders(req)
            .await
            .map_err(StoreError::query("GetOrders"))?;
        self.get_orders.store(req, resp, opts)
    }

    pub async fn query_get_order(
        &self,
        req: &QueryGetOrderByIdRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryGetOrderByIdResponse>> {
        let resp = self
            .client
            .get_order(req)
            .await
            .map_err(StoreError::query("GetOrder"))?;
        self.get_order.store(req, resp, opts)
    }

    pub async fn query_historical_prices(
        &self,
        req: &QueryGetHistoricalPricesRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryGetHistoricalPricesResponse>> {
        let resp = self
            .client
            .get_historical_prices(req)
            .await
            .map_err(StoreError::query("GetHistoricalPrices"))?;
        self.historical_prices.store(req, resp, opts)
    }

    pub async fn query_market_summary(
        &self,
        req: &QueryGetMarketSummaryRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryGetMarketSummaryResponse>> {
        let resp = self
            .client
            .get_market_summary(req)
            .await
            .map_err(StoreError::query("GetMarketSummary"))?;
        self.market_summary.store(req, resp, opts)
    }

    pub async fn query_order_simulation(
        &self,
        req: &QueryOrderSimulationRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryOrderSimulationResponse>> {
        let resp = self
            .client
            .get_order_simulation(req)
            .await
            .map_err(StoreError::query("GetOrderSimulation"))?;
        self.order_simulation.store(req, resp, opts)
    }

    pub async fn query_match_result(
        &self,
        req: &QueryGetMatchResultRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryGetMatchResultResponse>> {
        let resp = self
            .client
            .get_match_result(req)
            .await
            .map_err(StoreError::query("GetMatchResult"))?;
        self.match_result.store(req, resp, opts)
    }

    pub async fn query_order_count(
        &self,
        req: &QueryGetOrderCountRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryGetOrderCountResponse>> {
        let resp = self
            .client
            .get_order_count(req)
            .await
            .map_err(StoreError::query("GetOrderCount"))?;
        self.order_count.store(req, resp, opts)
    }

    /// Re-run every subscribed query and update its cache slot.
    ///
    /// A failed replay is logged and the pass continues; the first failure
    /// is returned once every subscription has been attempted.
    pub async fn refresh(&self) -> StoreResult<()> {
        let mut first = None;
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
        for (req, _) in self.long_book.subscriptions()? {
            match self
                .client
                .long_book(&req)
                .await
                .map_err(StoreError::query("LongBook"))
            {
                Ok(resp) => {
                    self.long_book.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, all) in self.long_book_all.subscriptions()? {
            match self.fetch_long_book_all(&req, all).await {
                Ok(resp) => {
                    self.long_book_all.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.short_book.subscriptions()? {
            match self
                .client
                .short_book(&req)
                .await
                .map_err(StoreError::query("ShortBook"))
            {
                Ok(resp) => {
                    self.short_book.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, all) in self.short_book_all.subscriptions()? {
            match self.fetch_short_book_all(&req, all).await {
                Ok(resp) => {
                    self.short_book_all.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.get_prices.subscriptions()? {
            match self
                .client
                .get_prices(&req)
                .await
                .map_err(StoreError::query("GetPrices"))
            {
                Ok(resp) => {
                    self.get_prices.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.get_price.subscriptions()? {
            match self
                .client
                .get_price(&req)
                .await
                .map_err(StoreError::query("GetPrice"))
            {
                Ok(resp) => {
                    self.get_price.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.get_latest_price.subscriptions()? {
            match self
                .client
                .get_latest_price(&req)
                .await
                .map_err(StoreError::query("GetLatestPrice"))
            {
                Ok(resp) => {
                    self.get_latest_price.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.get_twaps.subscriptions()? {
            match self
                .client
                .get_twaps(&req)
                .await
                .map_err(StoreError::query("GetTwaps"))
            {
                Ok(resp) => {
                    self.get_twaps.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.asset_metadata.subscriptions()? {
            match self
                .client
                .asset_metadata(&req)
                .await
                .map_err(StoreError::query("AssetMetadata"))
            {
                Ok(resp) => {
                    self.asset_metadata.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.asset_list.subscriptions()? {
            match self
                .client
                .asset_list(&req)
                .await
                .map_err(StoreError::query("AssetList"))
            {
                Ok(resp) => {
                    self.asset_list.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.registered_pairs.subscriptions()? {
            match self
                .client
                .get_registered_pairs(&req)
                .await
                .map_err(StoreError::query("GetRegisteredPairs"))
            {
                Ok(resp) => {
                    self.registered_pairs.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.registered_contract.subscriptions()? {
            match self
                .client
                .get_registered_contract(&req)
                .await
                .map_err(StoreError::query("GetRegisteredContract"))
            {
                Ok(resp) => {
                    self.registered_contract.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.get_orders.subscriptions()? {
            match self
                .client
                .get_orders(&req)
                .await
                .map_err(StoreError::query("GetOrders"))
            {
                Ok(resp) => {
                    self.get_orders.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.get_order.subscriptions()? {
            match self
                .client
                .get_order(&req)
                .await
                .map_err(StoreError::query("GetOrder"))
            {
                Ok(resp) => {
                    self.get_order.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.historical_prices.subscriptions()? {
            match self
                .client
                .get_historical_prices(&req)
                .await
                .map_err(StoreError::query("GetHistoricalPrices"))
            {
                Ok(resp) => {
                    self.historical_prices.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.market_summary.subscriptions()? {
            match self
                .client
                .get_market_summary(&req)
                .await
                .map_err(StoreError::query("GetMarketSummary"))
            {
                Ok(resp) => {
                    self.market_summary.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.order_simulation.subscriptions()? {
            match self
                .client
                .get_order_simulation(&req)
                .await
                .map_err(StoreError::query("GetOrderSimulation"))
            {
                Ok(resp) => {
                    self.order_simulation.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.match_result.subscriptions()? {
            match self
                .client
                .get_match_result(&req)
                .await
                .map_err(StoreError::query("GetMatchResult"))
            {
                Ok(resp) => {
                    self.match_result.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.order_count.subscriptions()? {
            match self
                .client
                .get_order_count(&req)
                .await
                .map_err(StoreError::query("GetOrderCount"))
            {
                Ok(resp) => {
                    self.order_count.put(&req, resp)?;
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
        self.params.reset();
        self.long_book.reset();
        self.long_book_all.reset();
        self.short_book.reset();
        self.short_book_all.reset();
        self.get_prices.reset();
        self.get_price.reset();
        self.get_latest_price.reset();
        self.get_twaps.reset();
        self.asset_metadata.reset();
        self.asset_list.reset();
        self.registered_pairs.reset();
        self.registered_contract.reset();
        self.get_orders.reset();
        self.get_order.reset();
        self.historical_prices.reset();
        self.market_summary.reset();
        self.order_simulation.reset();
        self.match_result.reset();
        self.order_count.reset();
    }

    async fn fetch_long_book_all(
        &self,
        req: &QueryAllLongBookRequest,
        all: bool,
    ) -> StoreResult<QueryAllLongBookResponse> {
        let mut page_req = req.clone();
        let mut resp = self
            .client
            .long_book_all(&page_req)
            .await
            .map_err(StoreError::query("LongBookAll"))?;
        if all {
            while let Some(next_key) = next_page_key(&resp.pagination) {
                page_req.pagination.get_or_insert_with(Default::default).key = next_key;
                let next = self
                    .client
                    .long_book_all(&page_req)
                    .await
                    .map_err(StoreError::query("LongBookAll"))?;
                resp.long_book.extend(next.long_book);
                resp.pagination = next.pagination;
            }
        }
        Ok(resp)
    }

    async fn fetch_short_book_all(
        &self,
        req: &QueryAllShortBookRequest,
        all: bool,
    ) -> StoreResult<QueryAllShortBookResponse> {
        let mut page_req = req.clone();
        let mut resp = self
            .client
            .short_book_all(&page_req)
            .await
            .map_err(StoreError::query("ShortBookAll"))?;
        if all {
            while let Some(next_key) = next_page_key(&resp.pagination) {
                page_req.pagination.get_or_insert_with(Default::default).key = next_key;
                let next = self
                    .client
                    .short_book_all(&page_req)
                    .await
                    .map_err(StoreError::query("ShortBookAll"))?;
                resp.short_book.extend(next.short_book);
                resp.pagination = next.pagination;
            }
        }
        Ok(resp)
    }
}

/// Key of the next page, if the response says there is one.
fn next_page_key(pagination: &Option<sei_proto::cosmos::PageResponse>) -> Option<Vec<u8>> {
    pagination
        .as_ref()
        .filter(|p| !p.next_key.is_empty())
        .map(|p| p.next_key.clone())
}
