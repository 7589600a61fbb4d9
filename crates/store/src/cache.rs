//! Per-operation response cache with subscription tracking.
//!
//! Responses are keyed by the JSON serialization of their request, so two
//! structurally equal requests share one cache slot. Subscribed requests are
//! kept alongside the cache and replayed whenever a new block arrives.

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreResult;

/// Default number of cached responses per operation.
const DEFAULT_CACHE_SIZE: usize = 256;

/// Configuration shared by all module stores.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Number of responses to cache per query operation.
    pub cache_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
        }
    }
}

/// Per-call options, mirroring how callers drive the stores.
///
/// A `query_*` call always hits the chain and refreshes the cache slot;
/// cache-only reads go through [`StoreOp::get`] on the operation's field.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryOptions {
    /// Re-run this query automatically on every new block.
    pub subscribe: bool,
    /// For paginated queries, follow `next_key` and merge all pages.
    pub all: bool,
}

impl QueryOptions {
    /// Keep the result fresh on new blocks.
    pub fn live() -> Self {
        Self {
            subscribe: true,
            all: false,
        }
    }
}

/// Cache and subscription state for one query operation.
///
/// Subscriptions remember the `all` flag they were made with so a paginated
/// subscription replays the full page walk.
pub struct StoreOp<Req, Resp> {
    cache: RwLock<LruCache<String, Arc<Resp>>>,
    subscribers: RwLock<BTreeMap<String, bool>>,
    _req: PhantomData<fn() -> Req>,
}

impl<Req, Resp> StoreOp<Req, Resp>
where
    Req: Serialize + DeserializeOwned,
{
    pub(crate) fn new(config: &StoreConfig) -> Self {
        Self {
            cache: RwLock::new(LruCache::new(
                NonZeroUsize::new(config.cache_size.max(1)).unwrap(),
            )),
            subscribers: RwLock::new(BTreeMap::new()),
            _req: PhantomData,
        }
    }

    fn key(req: &Req) -> StoreResult<String> {
        Ok(serde_json::to_string(req)?)
    }

    /// Get the cached response for `req`, if any.
    pub fn get(&self, req: &Req) -> StoreResult<Option<Arc<Resp>>> {
        let key = Self::key(req)?;
        Ok(self.cache.write().get(&key).cloned())
    }

    /// Insert a response, subscribing first if the options ask for it.
    pub(crate) fn store(
        &self,
        req: &Req,
        resp: Resp,
        opts: &QueryOptions,
    ) -> StoreResult<Arc<Resp>> {
        if opts.subscribe {
            self.subscribe(req, opts.all)?;
        }
        self.put(req, resp)
    }

    /// Insert a response without touching subscriptions.
    pub(crate) fn put(&self, req: &Req, resp: Resp) -> StoreResult<Arc<Resp>> {
        let key = Self::key(req)?;
        let resp = Arc::new(resp);
        self.cache.write().put(key, Arc::clone(&resp));
        Ok(resp)
    }

    /// Replay this request on every new block.
    pub fn subscribe(&self, req: &Req, all: bool) -> StoreResult<()> {
        self.subscribers.write().insert(Self::key(req)?, all);
        Ok(())
    }

    /// Stop replaying this request.
    pub fn unsubscribe(&self, req: &Req) -> StoreResult<()> {
        self.subscribers.write().remove(&Self::key(req)?);
        Ok(())
    }

    /// Snapshot the subscribed requests with their `all` flags.
    pub fn subscriptions(&self) -> StoreResult<Vec<(Req, bool)>> {
        self.subscribers
            .read()
            .iter()
            .map(|(key, all)| Ok((serde_json::from_str(key)?, *all)))
            .collect()
    }

    /// Drop all cached responses and subscriptions.
    pub fn reset(&self) {
        self.cache.write().clear();
        self.subscribers.write().clear();
    }
}
