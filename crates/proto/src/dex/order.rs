//! Orders, cancellations and their enums.

use serde::{Deserialize, Serialize};

/// Side of the book an order rests on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PositionDirection {
    Long = 0,
    Short = 1,
}

impl PositionDirection {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Long => "LONG",
            Self::Short => "SHORT",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "LONG" => Some(Self::Long),
            "SHORT" => Some(Self::Short),
            _ => None,
        }
    }
}

/// Execution style of an order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OrderType {
    Limit = 0,
    Market = 1,
    Liquidation = 2,
    /// Fill-or-kill market order by quantity.
    Fokmarket = 3,
    /// Fill-or-kill market order by nominal value.
    Fokmarketbyvalue = 4,
    Stoploss = 5,
    Stoplimit = 6,
}

impl OrderType {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Limit => "LIMIT",
            Self::Market => "MARKET",
            Self::Liquidation => "LIQUIDATION",
            Self::Fokmarket => "FOKMARKET",
            Self::Fokmarketbyvalue => "FOKMARKETBYVALUE",
            Self::Stoploss => "STOPLOSS",
            Self::Stoplimit => "STOPLIMIT",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "LIMIT" => Some(Self::Limit),
            "MARKET" => Some(Self::Market),
            "LIQUIDATION" => Some(Self::Liquidation),
            "FOKMARKET" => Some(Self::Fokmarket),
            "FOKMARKETBYVALUE" => Some(Self::Fokmarketbyvalue),
            "STOPLOSS" => Some(Self::Stoploss),
            "STOPLIMIT" => Some(Self::Stoplimit),
            _ => None,
        }
    }
}

/// Lifecycle state of a placed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OrderStatus {
    Placed = 0,
    FailedToPlace = 1,
    Cancelled = 2,
    Fulfilled = 3,
}

impl OrderStatus {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Placed => "PLACED",
            Self::FailedToPlace => "FAILED_TO_PLACE",
            Self::Cancelled => "CANCELLED",
            Self::Fulfilled => "FULFILLED",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "PLACED" => Some(Self::Placed),
            "FAILED_TO_PLACE" => Some(Self::FailedToPlace),
            "CANCELLED" => Some(Self::Cancelled),
            "FULFILLED" => Some(Self::Fulfilled),
            _ => None,
        }
    }
}

/// Who initiated a cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CancellationInitiator {
    User = 0,
    Liquidated = 1,
}

impl CancellationInitiator {
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Liquidated => "LIQUIDATED",
        }
    }

    pub fn from_str_name(value: &str) -> Option<Self> {
        match value {
            "USER" => Some(Self::User),
            "LIQUIDATED" => Some(Self::Liquidated),
            _ => None,
        }
    }
}

/// A single order as tracked by the matching engine.
///
/// Price, quantity and nominal are decimal strings (`sdk.Dec` on chain).
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Order {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::json::u64_string")]
    pub id: u64,
    #[prost(enumeration = "OrderStatus", tag = "2")]
    pub status: i32,
    #[prost(string, tag = "3")]
    pub account: String,
    #[prost(string, tag = "4")]
    pub contract_addr: String,
    #[prost(string, tag = "5")]
    pub price: String,
    #[prost(string, tag = "6")]
    pub quantity: String,
    #[prost(string, tag = "7")]
    pub price_denom: String,
    #[prost(string, tag = "8")]
    pub asset_denom: String,
    #[prost(enumeration = "OrderType", tag = "9")]
    pub order_type: i32,
    #[prost(enumeration = "PositionDirection", tag = "10")]
    pub position_direction: i32,
    /// Opaque order payload forwarded to the market contract.
    #[prost(string, tag = "11")]
    pub data: String,
    #[prost(string, tag = "12")]
    pub status_description: String,
    #[prost(string, tag = "13")]
    pub nominal: String,
    #[prost(string, tag = "14")]
    pub trigger_price: String,
    #[prost(bool, tag = "15")]
    pub trigger_status: bool,
}

/// A cancellation of a resting order.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cancellation {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::json::u64_string")]
    pub id: u64,
    #[prost(enumeration = "CancellationInitiator", tag = "2")]
    pub initiator: i32,
    #[prost(string, tag = "3")]
    pub creator: String,
    #[prost(string, tag = "4")]
    pub contract_addr: String,
    #[prost(string, tag = "5")]
    pub price_denom: String,
    #[prost(string, tag = "6")]
    pub asset_denom: String,
    #[prost(enumeration = "PositionDirection", tag = "7")]
    pub position_direction: i32,
    #[prost(string, tag = "8")]
    pub price: String,
}

/// Order ids still resting on the book for an account.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ActiveOrders {
    #[prost(uint64, repeated, tag = "1")]
    #[serde(with = "crate::json::u64_string_vec")]
    pub ids: Vec<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn order_roundtrip() {
        let order = Order {
            id: 7,
            status: OrderStatus::Fulfilled as i32,
            account: "sei1abcd".to_string(),
            contract_addr: "sei1contract".to_string(),
            price: "10.5".to_string(),
            quantity: "3".to_string(),
            price_denom: "USDC".to_string(),
            asset_denom: "ATOM".to_string(),
            order_type: OrderType::Market as i32,
            position_direction: PositionDirection::Short as i32,
            ..Default::default()
        };
        let decoded = Order::decode(order.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, order);
        assert_eq!(decoded.status(), OrderStatus::Fulfilled);
        assert_eq!(decoded.position_direction(), PositionDirection::Short);
    }

    #[test]
    fn enum_accessors_fall_back_to_default_on_unknown_values() {
        let order = Order {
            status: 99,
            order_type: -1,
            position_direction: 42,
            ..Default::default()
        };
        assert_eq!(order.status(), OrderStatus::Placed);
        assert_eq!(order.order_type(), OrderType::Limit);
        assert_eq!(order.position_direction(), PositionDirection::Long);
    }

    #[test]
    fn active_orders_packs_ids() {
        let active = ActiveOrders { ids: vec![1, 2, 3] };
        // tag 1, length-delimited packed varints
        assert_eq!(active.encode_to_vec(), [0x0a, 0x03, 0x01, 0x02, 0x03]);
    }

    #[test]
    fn enum_str_names_roundtrip() {
        for ty in [
            OrderType::Limit,
            OrderType::Market,
            OrderType::Liquidation,
            OrderType::Fokmarket,
            OrderType::Fokmarketbyvalue,
            OrderType::Stoploss,
            OrderType::Stoplimit,
        ] {
            assert_eq!(OrderType::from_str_name(ty.as_str_name()), Some(ty));
        }
        assert_eq!(OrderType::from_str_name("NOT_A_TYPE"), None);
    }
}
