//! Order book levels.

use serde::{Deserialize, Serialize};

/// Share of a book level belonging to one order.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Allocation {
    #[prost(uint64, tag = "1")]
    #[serde(with = "crate::json::u64_string")]
    pub order_id: u64,
    #[prost(string, tag = "2")]
    pub quantity: String,
    #[prost(string, tag = "3")]
    pub account: String,
}

/// Aggregate quantity resting at one price level.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderEntry {
    #[prost(string, tag = "1")]
    pub price: String,
    #[prost(string, tag = "2")]
    pub quantity: String,
    #[prost(message, repeated, tag = "3")]
    pub allocations: Vec<Allocation>,
    #[prost(string, tag = "4")]
    pub price_denom: String,
    #[prost(string, tag = "5")]
    pub asset_denom: String,
}

/// A buy-side book level.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct LongBook {
    #[prost(string, tag = "1")]
    pub price: String,
    #[prost(message, optional, tag = "2")]
    pub entry: Option<OrderEntry>,
}

/// A sell-side book level.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortBook {
    #[prost(string, tag = "1")]
    pub price: String,
    #[prost(message, optional, tag = "2")]
    pub entry: Option<OrderEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn book_level_roundtrip() {
        let level = LongBook {
            price: "9.99".to_string(),
            entry: Some(OrderEntry {
                price: "9.99".to_string(),
                quantity: "12".to_string(),
                allocations: vec![Allocation {
                    order_id: 4,
                    quantity: "12".to_string(),
                    account: "sei1maker".to_string(),
                }],
                price_denom: "USDC".to_string(),
                asset_denom: "ATOM".to_string(),
            }),
        };
        let decoded = LongBook::decode(level.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, level);
    }

    #[test]
    fn missing_entry_decodes_to_none() {
        let bytes = ShortBook {
            price: "1".to_string(),
            entry: None,
        }
        .encode_to_vec();
        assert_eq!(ShortBook::decode(bytes.as_slice()).unwrap().entry, None);
    }
}
