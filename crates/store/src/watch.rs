//! Block-driven refresh of subscribed queries.

use std::sync::Arc;

use sei_client::Rpc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::cache::StoreConfig;
use crate::dex::DexStore;
use crate::error::StoreResult;
use crate::oracle::OracleStore;
use crate::tokenfactory::TokenfactoryStore;

/// All module stores behind one transport.
pub struct SeiStore<R> {
    pub dex: DexStore<R>,
    pub oracle: OracleStore<R>,
    pub tokenfactory: TokenfactoryStore<R>,
}

impl<R: Rpc + Clone> SeiStore<R> {
    pub fn new(rpc: R, config: &StoreConfig) -> Self {
        Self {
            dex: DexStore::new(rpc.clone(), config),
            oracle: OracleStore::new(rpc.clone(), config),
            tokenfactory: TokenfactoryStore::new(rpc, config),
        }
    }
}

impl<R: Rpc> SeiStore<R> {
    /// Re-run every subscribed query across all modules.
    ///
    /// Every module gets its refresh pass even if an earlier one failed;
    /// the first failure is returned afterwards.
    pub async fn refresh(&self) -> StoreResult<()> {
        let dex = self.dex.refresh().await;
        let oracle = self.oracle.refresh().await;
        let tokenfactory = self.tokenfactory.refresh().await;
        dex.and(oracle).and(tokenfactory)
    }

    /// Drop all cached responses and subscriptions across all modules.
    pub fn reset(&self) {
        self.dex.reset();
        self.oracle.reset();
        self.tokenfactory.reset();
    }
}

/// Spawn a task that refreshes subscribed queries whenever a new block height
/// arrives on `blocks`. The task exits when the sender side is dropped.
///
/// A failed refresh is logged and the task keeps running; the next block
/// retries the same subscriptions.
pub fn watch_blocks<R>(
    store: Arc<SeiStore<R>>,
    mut blocks: broadcast::Receiver<u64>,
) -> JoinHandle<()>
where
    R: Rpc + 'static,
{
    tokio::spawn(async move {
        loop {
            match blocks.recv().await {
                Ok(height) => {
                    tracing::debug!(height, "refreshing subscribed queries");
                    if let Err(err) = store.refresh().await {
                        tracing::warn!(height, %err, "subscription refresh failed");
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    // Missed heights collapse into the next refresh.
                    tracing::warn!(skipped, "lagged behind block notifications");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    })
}
