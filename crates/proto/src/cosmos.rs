//! Shared Cosmos SDK base types referenced by the Sei modules.
//!
//! Packages: `cosmos.base.v1beta1` (Coin), `cosmos.base.query.v1beta1`
//! (pagination) and `cosmos.bank.v1beta1` (denom metadata).

use serde::{Deserialize, Serialize};

/// A token amount. `amount` is a decimal string to preserve precision.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Coin {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(string, tag = "2")]
    pub amount: String,
}

/// Pagination parameters for `*All` list queries.
///
/// `key` and `offset` are mutually exclusive: `key` continues from the
/// opaque cursor returned in [`PageResponse::next_key`].
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageRequest {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "crate::json::base64_bytes")]
    pub key: Vec<u8>,
    #[prost(uint64, tag = "2")]
    #[serde(with = "crate::json::u64_string")]
    pub offset: u64,
    #[prost(uint64, tag = "3")]
    #[serde(with = "crate::json::u64_string")]
    pub limit: u64,
    #[prost(bool, tag = "4")]
    pub count_total: bool,
    #[prost(bool, tag = "5")]
    pub reverse: bool,
}

/// Pagination cursor returned by `*All` list queries.
///
/// An empty `next_key` means the listing is exhausted.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageResponse {
    #[prost(bytes = "vec", tag = "1")]
    #[serde(with = "crate::json::base64_bytes")]
    pub next_key: Vec<u8>,
    #[prost(uint64, tag = "2")]
    #[serde(with = "crate::json::u64_string")]
    pub total: u64,
}

/// One named exponent of a denom (e.g. `usei` at exponent 0, `sei` at 6).
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct DenomUnit {
    #[prost(string, tag = "1")]
    pub denom: String,
    #[prost(uint32, tag = "2")]
    pub exponent: u32,
    #[prost(string, repeated, tag = "3")]
    pub aliases: Vec<String>,
}

/// Bank metadata describing a token denomination.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    #[prost(string, tag = "1")]
    pub description: String,
    #[prost(message, repeated, tag = "2")]
    pub denom_units: Vec<DenomUnit>,
    /// The base denom all units are defined against (the on-chain denom).
    #[prost(string, tag = "3")]
    pub base: String,
    #[prost(string, tag = "4")]
    pub display: String,
    #[prost(string, tag = "5")]
    pub name: String,
    #[prost(string, tag = "6")]
    pub symbol: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn coin_wire_format() {
        let coin = Coin {
            denom: "usei".to_string(),
            amount: "100".to_string(),
        };
        // tag 1 (string) "usei", tag 2 (string) "100"
        let expected = [
            0x0a, 0x04, b'u', b's', b'e', b'i', //
            0x12, 0x03, b'1', b'0', b'0',
        ];
        assert_eq!(coin.encode_to_vec(), expected);
        assert_eq!(Coin::decode(&expected[..]).unwrap(), coin);
    }

    #[test]
    fn default_fields_are_elided() {
        assert!(Coin::default().encode_to_vec().is_empty());
        assert!(PageRequest::default().encode_to_vec().is_empty());
    }

    #[test]
    fn page_request_json_uses_base64_key() {
        let page = PageRequest {
            key: vec![1, 2, 3],
            limit: 50,
            ..Default::default()
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["key"], "AQID");
        assert_eq!(json["limit"], "50");
    }
}
