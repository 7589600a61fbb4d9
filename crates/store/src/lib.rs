//! Caching query stores for the Sei module clients.
//!
//! Stores wrap the query clients with request-keyed response caches and a
//! subscription mechanism: a query made with `subscribe` set is re-run on
//! every new block so its cache slot always holds a recent response. The
//! [`watch_blocks`] task drives the refresh from a block height broadcast.

pub mod cache;
pub mod dex;
pub mod error;
pub mod oracle;
pub mod tokenfactory;
pub mod watch;

#[cfg(test)]
pub(crate) mod testutil;

pub use cache::{QueryOptions, StoreConfig, StoreOp};
pub use dex::DexStore;
pub use error::{StoreError, StoreResult};
pub use oracle::OracleStore;
pub use tokenfactory::TokenfactoryStore;
pub use watch::{watch_blocks, SeiStore};
