/// A batching loader that queues keys during field resolution and resolves
/// them together when dispatched.
///
/// Loaders are registered on a
/// [`DataLoaderRegistry`](crate::data_loader::DataLoaderRegistry) under a
/// name and dispatched by the execution engine between resolution passes.
pub trait DataLoader: Send + Sync {
    /// Resolve every queued key, returning how many keys were dispatched.
    fn dispatch(&self) -> usize;

    /// Number of keys currently queued and awaiting dispatch.
    fn dispatch_depth(&self) -> usize;
}
