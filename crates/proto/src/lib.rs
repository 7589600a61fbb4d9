//! Protobuf message types for the Sei blockchain's gRPC services.
//!
//! Each module mirrors one protobuf package exposed by a Sei node:
//!
//! - [`dex`]: `seiprotocol.seichain.dex`: order books, orders, prices and
//!   the matching-engine query/tx surface.
//! - [`oracle`]: `sei.oracle.v1`: exchange rate voting and price snapshots.
//! - [`tokenfactory`]: `sei.tokenfactory.v1`: permissionless denom creation.
//! - [`cosmos`]: the shared Cosmos SDK base types the above reference
//!   (coins, pagination, bank denom metadata).
//!
//! Types are `prost` messages with field tags matching the on-chain schema,
//! so the binary encoding is wire-compatible with any other protobuf
//! implementation. They also implement serde with the canonical protobuf
//! JSON conventions: 64-bit integers as decimal strings, bytes as base64.

pub mod cosmos;
pub mod dex;
pub mod json;
pub mod oracle;
pub mod tokenfactory;

pub use prost::Message;
