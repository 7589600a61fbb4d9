//! Requests and responses for the `sei.tokenfactory.v1.Query` service.

use serde::{Deserialize, Serialize};

use super::{DenomAuthorityMetadata, Params};
use crate::cosmos::Metadata;

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
#[serde(default)]
pub struct QueryDenomAuthorityMetadataRequest {
    /// Full denom, `factory/{creator}/{subdenom}`.
    #[prost(string, tag = "1")]
    pub denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryDenomAuthorityMetadataResponse {
    #[prost(message, optional, tag = "1")]
    pub authority_metadata: Option<DenomAuthorityMetadata>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDenomsFromCreatorRequest {
    #[prost(string, tag = "1")]
    pub creator: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDenomsFromCreatorResponse {
    #[prost(string, repeated, tag = "1")]
    pub denoms: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDenomMetadataRequest {
    #[prost(string, tag = "1")]
    pub denom: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDenomMetadataResponse {
    #[prost(message, optional, tag = "1")]
    pub metadata: Option<Metadata>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn denoms_from_creator_roundtrip() {
        let resp = QueryDenomsFromCreatorResponse {
            denoms: vec![
                "factory/sei1creator/ust".to_string(),
                "factory/sei1creator/gold".to_string(),
            ],
        };
        let decoded =
            QueryDenomsFromCreatorResponse::decode(resp.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, resp);
    }

    #[test]
    fn denom_metadata_request_wire_shape() {
        let req = QueryDenomMetadataRequest {
            denom: "usei".to_string(),
        };
        assert_eq!(req.encode_to_vec(), [0x0a, 0x04, b'u', b's', b'e', b'i']);
    }
}
