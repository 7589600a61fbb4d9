//! Types for `sei.tokenfactory.v1`, permissionless creation of `factory/{creator}/{subdenom}` denoms.

pub mod query;
pub mod tx;

use serde::{Deserialize, Serialize};

/// Protobuf package this module maps to.
pub const PACKAGE: &str = "sei.tokenfactory.v1";

/// Tokenfactory module parameters. Currently empty; creation fees were
/// removed from the originating schema.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {}

/// Admin authority over a factory denom.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct DenomAuthorityMetadata {
    /// Empty once the admin is burned away.
    #[prost(string, tag = "1")]
    pub admin: String,
}
