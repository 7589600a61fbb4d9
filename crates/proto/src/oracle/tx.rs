//! Messages for the `sei.oracle.v1.Msg` service.

use serde::{Deserialize, Serialize};

/// Submit a full set of exchange rates for one vote period.
///
/// `exchange_rates` is the comma separated `rate + denom` string the chain
/// expects, e.g. `"11.27uatom,1610.5ueth"`.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MsgAggregateExchangeRateVote {
    #[prost(string, tag = "1")]
    pub exchange_rates: String,
    #[prost(string, tag = "2")]
    pub feeder: String,
    #[prost(string, tag = "3")]
    pub validator: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgAggregateExchangeRateVoteResponse {}

/// Delegate feeder rights for a validator to another account.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgDelegateFeedConsent {
    #[prost(string, tag = "1")]
    pub operator: String,
    #[prost(string, tag = "2")]
    pub delegate: String,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct MsgDelegateFeedConsentResponse {}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn aggregate_vote_roundtrip() {
        let msg = MsgAggregateExchangeRateVote {
            exchange_rates: "11.27uatom,1610.5ueth".to_string(),
            feeder: "sei1feeder".to_string(),
            validator: "seivaloper1abc".to_string(),
        };
        let decoded =
            MsgAggregateExchangeRateVote::decode(msg.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, msg);
    }

    #[test]
    fn delegate_feed_consent_default_encodes_empty() {
        assert!(MsgDelegateFeedConsent::default().encode_to_vec().is_empty());
    }
}
