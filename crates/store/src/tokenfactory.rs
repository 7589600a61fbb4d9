//! Caching store over the tokenfactory query service.

use std::sync::Arc;

use sei_client::tokenfactory::TokenfactoryQueryClient;
use sei_client::Rpc;
use sei_proto::tokenfactory::query::*;

use crate::cache::{QueryOptions, StoreConfig, StoreOp};
use crate::error::{fold_refresh_failure, StoreError, StoreResult};

/// Query store for the `sei.tokenfactory.v1` module.
pub struct TokenfactoryStore<R> {
    client: TokenfactoryQueryClient<R>,
    pub params: StoreOp<QueryParamsRequest, QueryParamsResponse>,
    pub denom_authority_metadata:
        StoreOp<QueryDenomAuthorityMetadataRequest, QueryDenomAuthorityMetadataResponse>,
    pub denoms_from_creator:
        StoreOp<QueryDenomsFromCreatorRequest, QueryDenomsFromCreatorResponse>,
    pub denom_metadata: StoreOp<QueryDenomMetadataRequest, QueryDenomMetadataResponse>,
}

impl<R: Rpc> TokenfactoryStore<R> {
    pub fn new(rpc: R, config: &StoreConfig) -> Self {
        Self {
            client: TokenfactoryQueryClient::new(rpc),
            params: StoreOp::new(config),
            denom_authority_metadata: StoreOp::new(config),
            denoms_from_creator: StoreOp::new(config),
            denom_metadata: StoreOp::new(config),
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

    pub async fn query_denom_authority_metadata(
        &self,
        req: &QueryDenomAuthorityMetadataRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryDenomAuthorityMetadataResponse>> {
        let resp = self
            .client
            .denom_authority_metadata(req)
            .await
            .map_err(StoreError::query("DenomAuthorityMetadata"))?;
        self.denom_authority_metadata.store(req, resp, opts)
    }

    pub async fn query_denoms_from_creator(
        &self,
        req: &QueryDenomsFromCreatorRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryDenomsFromCreatorResponse>> {
        let resp = self
            .client
            .denoms_from_creator(req)
            .await
            .map_err(StoreError::query("DenomsFromCreator"))?;
        self.denoms_from_creator.store(req, resp, opts)
    }

    pub async fn query_denom_metadata(
        &self,
        req: &QueryDenomMetadataRequest,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<QueryDenomMetadataResponse>> {
        let resp = self
            .client
            .denom_metadata(req)
            .await
            .map_err(StoreError::query("DenomMetadata"))?;
        self.denom_metadata.store(req, resp, opts)
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
        for (req, _) in self.denom_authority_metadata.subscriptions()? {
            match self
                .client
                .denom_authority_metadata(&req)
                .await
                .map_err(StoreError::query("DenomAuthorityMetadata"))
            {
                Ok(resp) => {
                    self.denom_authority_metadata.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.denoms_from_creator.subscriptions()? {
            match self
                .client
                .denoms_from_creator(&req)
                .await
                .map_err(StoreError::query("DenomsFromCreator"))
            {
                Ok(resp) => {
                    self.denoms_from_creator.put(&req, resp)?;
                }
                Err(err) => fold_refresh_failure(&mut first, err),
            }
        }
        for (req, _) in self.denom_metadata.subscriptions()? {
            match self
                .client
                .denom_metadata(&req)
                .await
                .map_err(StoreError::query("DenomMetadata"))
            {
                Ok(resp) => {
                    self.denom_metadata.put(&req, resp)?;
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
        self.denom_authority_metadata.reset();
        self.denoms_from_creator.reset();
        self.denom_metadata.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockRpc;
    use sei_proto::tokenfactory::DenomAuthorityMetadata;

    #[tokio::test]
    async fn authority_metadata_is_cached_per_denom() {
        let rpc = Arc::new(MockRpc::new());
        rpc.push(
            "sei.tokenfactory.v1.Query",
            "DenomAuthorityMetadata",
            &QueryDenomAuthorityMetadataResponse {
                authority_metadata: Some(DenomAuthorityMetadata {
                    admin: "sei1admin".to_string(),
                }),
            },
        );
        let store = TokenfactoryStore::new(Arc::clone(&rpc), &StoreConfig::default());

        let req = QueryDenomAuthorityMetadataRequest {
            denom: "factory/sei1admin/gold".to_string(),
        };
        let resp = store
            .query_denom_authority_metadata(&req, &QueryOptions::default())
            .await
            .unwrap();
        assert_eq!(
            resp.authority_metadata.as_ref().unwrap().admin,
            "sei1admin"
        );

        // Cache-only reads go through the operation's slot, without a fetch.
        let cached = store.denom_authority_metadata.get(&req).unwrap().unwrap();
        assert_eq!(
            cached.authority_metadata.as_ref().unwrap().admin,
            "sei1admin"
        );
        assert_eq!(rpc.call_count("DenomAuthorityMetadata"), 1);
    }
}
