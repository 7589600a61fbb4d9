//! Messages for the `seiprotocol.seichain.dex.Msg` service.

use serde::{Deserialize, Serialize};

use super::{BatchContractPair, Cancellation, ContractInfoV2, Order, TickSize};
use crate::cosmos::Coin;

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MsgPlaceOrders {
    #[prost(string, tag = "1")]
    pub creator: String,
    #[prost(message, repeated, tag = "2")]
    pub orders: Vec<Order>,
    #[prost(string, tag = "3")]
    pub contract_addr: String,
    /// Deposits forwarded to the market contract alongside the orders.
    #[prost(message, repeated, tag = "4")]
    pub funds: Vec<Coin>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MsgPlaceOrdersResponse {
    /// Ids assigned to the placed orders, in input order.
    #[prost(uint64, repeated, tag = "1")]
    #[serde(with = "crate::json::u64_string_vec")]
    pub order_ids: Vec<u64>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MsgCancelOrders {
    #[prost(string, tag = "1")]
    pub creator: String,
    #[prost(message, repeated, tag = "2")]
    pub cancellations: Vec<Cancellation>,
    #[prost(string, tag = "3")]
    pub contract_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgCancelOrdersResponse {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgRegisterContract {
    #[prost(string, tag = "1")]
    pub creator: String,
    #[prost(message, optional, tag = "2")]
    pub contract: Option<ContractInfoV2>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgRegisterContractResponse {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MsgContractDepositRent {
    #[prost(string, tag = "1")]
    pub contract_addr: String,
    #[prost(uint64, tag = "2")]
    #[serde(with = "crate::json::u64_string")]
    pub amount: u64,
    #[prost(string, tag = "3")]
    pub sender: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgContractDepositRentResponse {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MsgUnregisterContract {
    #[prost(string, tag = "1")]
    pub creator: String,
    #[prost(string, tag = "2")]
    pub contract_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgUnregisterContractResponse {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgRegisterPairs {
    #[prost(string, tag = "1")]
    pub creator: String,
    // tag 2 was retired in the originating schema
    #[prost(message, repeated, tag = "3")]
    pub batchcontractpair: Vec<BatchContractPair>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgRegisterPairsResponse {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MsgUpdatePriceTickSize {
    #[prost(string, tag = "1")]
    pub creator: String,
    #[prost(message, repeated, tag = "2")]
    pub tick_size_list: Vec<TickSize>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MsgUpdateQuantityTickSize {
    #[prost(string, tag = "1")]
    pub creator: String,
    #[prost(message, repeated, tag = "2")]
    pub tick_size_list: Vec<TickSize>,
}

/// Shared response for both tick size update messages.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgUpdateTickSizeResponse {}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MsgUnsuspendContract {
    #[prost(string, tag = "1")]
    pub creator: String,
    #[prost(string, tag = "2")]
    pub contract_addr: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgUnsuspendContractResponse {}
