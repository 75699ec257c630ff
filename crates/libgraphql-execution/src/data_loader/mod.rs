//! The per-execution batching registry referenced by every
//! [`ExecutionInput`](crate::ExecutionInput).
//!
//! A [`DataLoaderRegistry`] groups the [`DataLoader`]s an execution engine
//! batches field resolution through. Registries hold per-request state
//! (queued keys, cached values), so a registry must never be shared by two
//! executions. [`DataLoaderRegistry::claim`] lets an engine enforce that.

#[allow(clippy::module_inception)]
mod data_loader;
mod data_loader_registry;

pub use data_loader::DataLoader;
pub use data_loader_registry::DataLoaderRegistry;
pub use data_loader_registry::DataLoaderRegistryError;
