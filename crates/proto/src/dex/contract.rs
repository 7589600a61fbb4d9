//! Market contract registration records.

use serde::{Deserialize, Serialize};

/// Dependency edge between market contracts, with its position among
/// siblings in the execution order.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContractDependencyInfo {
    #[prost(string, tag = "1")]
    pub dependency: String,
    #[prost(string, tag = "2")]
    pub immediate_elder_sibling: String,
    #[prost(string, tag = "3")]
    pub immediate_younger_sibling: String,
}

/// Legacy registration record, kept for decoding pre-upgrade state.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContractInfo {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::json::u64_string")]
    pub code_id: u64,
    #[prost(string, tag = "2")]
    pub contract_addr: String,
    #[prost(bool, tag = "3")]
    pub need_hook: bool,
    #[prost(bool, tag = "4")]
    pub need_order_matching: bool,
    #[prost(message, repeated, tag = "5")]
    pub dependencies: Vec<ContractDependencyInfo>,
    #[prost(int64, tag = "6")]
    #[serde(with = "crate::json::i64_string")]
    pub num_incoming_dependencies: i64,
}

/// Registration record of a market contract, including rent accounting.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContractInfoV2 {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::json::u64_string")]
    pub code_id: u64,
    #[prost(string, tag = "2")]
    pub contract_addr: String,
    #[prost(bool, tag = "3")]
    pub need_hook: bool,
    #[prost(bool, tag = "4")]
    pub need_order_matching: bool,
    #[prost(message, repeated, tag = "5")]
    pub dependencies: Vec<ContractDependencyInfo>,
    #[prost(int64, tag = "6")]
    #[serde(with = "crate::json::i64_string")]
    pub num_incoming_dependencies: i64,
    #[prost(string, tag = "7")]
    pub creator: String,
    #[prost(uint64, tag = "8")]
    #[serde(with = "crate::json::u64_string")]
    pub rent_balance: u64,
    #[prost(bool, tag = "9")]
    pub suspended: bool,
    #[prost(string, tag = "10")]
    pub suspension_reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn contract_info_v2_roundtrip() {
        let info = ContractInfoV2 {
            code_id: 42,
            contract_addr: "sei1market".to_string(),
            need_order_matching: true,
            dependencies: vec![ContractDependencyInfo {
                dependency: "sei1other".to_string(),
                ..Default::default()
            }],
            creator: "sei1deployer".to_string(),
            rent_balance: 1_000_000,
            ..Default::default()
        };
        let decoded = ContractInfoV2::decode(info.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, info);
    }

    #[test]
    fn v2_decodes_legacy_prefix() {
        // ContractInfo's fields are a prefix of ContractInfoV2's schema, so a
        // legacy record decodes into a V2 with the added fields defaulted.
        let legacy = ContractInfo {
            code_id: 7,
            contract_addr: "sei1old".to_string(),
            need_hook: true,
            ..Default::default()
        };
        let upgraded = ContractInfoV2::decode(legacy.encode_to_vec().as_slice()).unwrap();
        assert_eq!(upgraded.code_id, 7);
        assert_eq!(upgraded.contract_addr, "sei1old");
        assert!(upgraded.need_hook);
        assert!(upgraded.creator.is_empty());
        assert!(!upgraded.suspended);
    }
}
