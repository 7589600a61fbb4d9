//! Types for `seiprotocol.seichain.dex`, the Sei order-book matching module.
//!
//! Split by concern the way the originating schema is: orders and
//! cancellations, book levels, market data (pairs, prices, twaps, assets),
//! registered contracts, and the query/tx service surfaces.

mod book;
mod contract;
mod market;
mod order;
pub mod query;
pub mod tx;

pub use book::{Allocation, LongBook, OrderEntry, ShortBook};
pub use contract::{ContractDependencyInfo, ContractInfo, ContractInfoV2};
pub use market::{
    AssetIbcInfo, AssetMetadata, BatchContractPair, MatchResult, Pair, Params, Price,
    PriceCandlestick, SettlementEntry, TickSize, Twap,
};
pub use order::{
    ActiveOrders, Cancellation, CancellationInitiator, Order, OrderStatus, OrderType,
    PositionDirection,
};

/// Protobuf package this module maps to.
pub const PACKAGE: &str = "seiprotocol.seichain.dex";
