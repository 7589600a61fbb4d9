//! Clients for the `sei.tokenfactory.v1` query and msg services.

use sei_proto::tokenfactory::{query::*, tx::*};

use crate::error::ClientResult;
use crate::transport::{unary, Rpc};

/// Fully qualified name of the tokenfactory query service.
pub const QUERY_SERVICE: &str = "sei.tokenfactory.v1.Query";
/// Fully qualified name of the tokenfactory msg service.
pub const MSG_SERVICE: &str = "sei.tokenfactory.v1.Msg";

/// Read-only client for the tokenfactory module.
#[derive(Clone)]
pub struct TokenfactoryQueryClient<R> {
    rpc: R,
}

impl<R: Rpc> TokenfactoryQueryClient<R> {
    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    pub async fn params(&self, request: &QueryParamsRequest) -> ClientResult<QueryParamsResponse> {
        unary(&self.rpc, QUERY_SERVICE, "Params", request).await
    }

    pub async fn denom_authority_metadata(
        &self,
        request: &QueryDenomAuthorityMetadataRequest,
    ) -> ClientResult<QueryDenomAuthorityMetadataResponse> {
        unary(&self.rpc, QUERY_SERVICE, "DenomAuthorityMetadata", request).await
    }

    pub async fn denoms_from_creator(
        &self,
        request: &QueryDenomsFromCreatorRequest,
    ) -> ClientResult<QueryDenomsFromCreatorResponse> {
        unary(&self.rpc, QUERY_SERVICE, "DenomsFromCreator", request).await
    }

    pub async fn denom_metadata(
        &self,
        request: &QueryDenomMetadataRequest,
    ) -> ClientResult<QueryDenomMetadataResponse> {
        unary(&self.rpc, QUERY_SERVICE, "DenomMetadata", request).await
    }
}

/// Transaction client for the tokenfactory module.
#[derive(Clone)]
pub struct TokenfactoryMsgClient<R> {
    rpc: R,
}

impl<R: Rpc> TokenfactoryMsgClient<R> {
    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    pub async fn create_denom(
        &self,
        request: &MsgCreateDenom,
    ) -> ClientResult<MsgCreateDenomResponse> {
        unary(&self.rpc, MSG_SERVICE, "CreateDenom", request).await
    }

    pub async fn mint(&self, request: &MsgMint) -> ClientResult<MsgMintResponse> {
        unary(&self.rpc, MSG_SERVICE, "Mint", request).await
    }

    pub async fn burn(&self, request: &MsgBurn) -> ClientResult<MsgBurnResponse> {
        unary(&self.rpc, MSG_SERVICE, "Burn", request).await
    }

    pub async fn change_admin(
        &self,
        request: &MsgChangeAdmin,
    ) -> ClientResult<MsgChangeAdminResponse> {
        unary(&self.rpc, MSG_SERVICE, "ChangeAdmin", request).await
    }

    pub async fn set_denom_metadata(
        &self,
        request: &MsgSetDenomMetadata,
    ) -> ClientResult<MsgSetDenomMetadataResponse> {
        unary(&self.rpc, MSG_SERVICE, "SetDenomMetadata", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockRpc;

    #[tokio::test]
    async fn denoms_from_creator_routes_and_decodes() {
        let rpc = MockRpc::new();
        rpc.push_response(&QueryDenomsFromCreatorResponse {
            denoms: vec!["factory/sei1creator/gold".to_string()],
        });

        let client = TokenfactoryQueryClient::new(rpc);
        let resp = client
            .denoms_from_creator(&QueryDenomsFromCreatorRequest {
                creator: "sei1creator".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(resp.denoms, vec!["factory/sei1creator/gold"]);
        assert_eq!(
            client.rpc.calls(),
            vec![(
                "sei.tokenfactory.v1.Query".to_string(),
                "DenomsFromCreator".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn create_denom_routes_to_msg_service() {
        let rpc = MockRpc::new();
        rpc.push_response(&MsgCreateDenomResponse {
            new_token_denom: "factory/sei1creator/gold".to_string(),
        });

        let client = TokenfactoryMsgClient::new(rpc);
        let resp = client
            .create_denom(&MsgCreateDenom {
                sender: "sei1creator".to_string(),
                subdenom: "gold".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(resp.new_token_denom, "factory/sei1creator/gold");
        assert_eq!(
            client.rpc.calls(),
            vec![("sei.tokenfactory.v1.Msg".to_string(), "CreateDenom".to_string())]
        );
    }
}
