use crate::data_loader::DataLoader;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use thiserror::Error;

type Result<T> = std::result::Result<T, DataLoaderRegistryError>;

static NEXT_REGISTRY_ID: AtomicU64 = AtomicU64::new(1);

/// A named set of [`DataLoader`]s scoped to exactly one execution.
///
/// Create a new `DataLoaderRegistry` (and new `DataLoader`s) for each
/// execution. Re-using a registry across executions mixes their batched
/// and cached results. An engine can turn that rule into a hard error by
/// calling [`claim`](Self::claim) when an execution begins.
///
/// Registries are shared through an `Arc`, so loaders are registered through
/// `&self`.
pub struct DataLoaderRegistry {
    claimed: AtomicBool,
    id: u64,
    loaders: RwLock<IndexMap<String, Arc<dyn DataLoader>>>,
}

impl DataLoaderRegistry {
    pub fn new() -> Self {
        let id = NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed);
        log::trace!("Created data loader registry #{id}.");
        Self {
            claimed: AtomicBool::new(false),
            id,
            loaders: RwLock::new(IndexMap::new()),
        }
    }

    /// Mark this registry as in use by an execution.
    ///
    /// The first call succeeds; every later call fails with
    /// [`DataLoaderRegistryError::AlreadyClaimed`].
    pub fn claim(&self) -> Result<()> {
        if self.claimed.swap(true, Ordering::AcqRel) {
            log::debug!(
                "Rejected a second claim on data loader registry #{}.",
                self.id,
            );
            return Err(DataLoaderRegistryError::AlreadyClaimed {
                registry_id: self.id,
            });
        }
        Ok(())
    }

    /// Dispatch every registered loader, returning the total number of keys
    /// dispatched.
    pub fn dispatch_all(&self) -> usize {
        // Loaders may register further loaders while dispatching, so they
        // are dispatched from a snapshot rather than under the read lock.
        let loaders: Vec<Arc<dyn DataLoader>> =
            self.loaders.read().values().cloned().collect();

        loaders.iter().map(|loader| loader.dispatch()).sum()
    }

    /// Total number of keys queued across every registered loader.
    pub fn dispatch_depth(&self) -> usize {
        self.loaders
            .read()
            .values()
            .map(|loader| loader.dispatch_depth())
            .sum()
    }

    pub fn get(&self, key: &str) -> Option<Arc<dyn DataLoader>> {
        self.loaders.read().get(key).cloned()
    }

    /// Process-unique identifier, used to tell registries apart in logs.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed.load(Ordering::Acquire)
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.read().is_empty()
    }

    /// Names of the registered loaders, in registration order.
    pub fn keys(&self) -> Vec<String> {
        self.loaders.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.loaders.read().len()
    }

    /// Register `loader` under `key`, returning the loader it replaced (if
    /// any).
    pub fn register(
        &self,
        key: impl Into<String>,
        loader: Arc<dyn DataLoader>,
    ) -> Option<Arc<dyn DataLoader>> {
        let key = key.into();
        log::trace!(
            "Registering data loader `{key}` on registry #{}.",
            self.id,
        );
        self.loaders.write().insert(key, loader)
    }

    pub fn unregister(&self, key: &str) -> Option<Arc<dyn DataLoader>> {
        log::trace!(
            "Unregistering data loader `{key}` from registry #{}.",
            self.id,
        );
        self.loaders.write().shift_remove(key)
    }
}

impl Default for DataLoaderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DataLoaderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataLoaderRegistry")
            .field("id", &self.id)
            .field("loaders", &self.len())
            .field("claimed", &self.is_claimed())
            .finish()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DataLoaderRegistryError {
    #[error(
        "Data loader registry #{registry_id} was already claimed by another \
        execution; create a new registry for each execution"
    )]
    AlreadyClaimed { registry_id: u64 },
}
