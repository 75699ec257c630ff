use crate::ExecutionInput;
use crate::data_loader::DataLoader;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

#[derive(Debug, PartialEq)]
pub(super) struct TestContext {
    pub(super) user_id: String,
}

#[derive(Debug, PartialEq)]
pub(super) struct TestRoot;

pub(super) type TestExecutionInput = ExecutionInput<TestContext, TestRoot>;

/// A loader that pretends to have `queued` keys waiting and records how
/// often it was dispatched.
pub(super) struct CountingLoader {
    pub(super) dispatches: AtomicUsize,
    pub(super) queued: AtomicUsize,
}
impl CountingLoader {
    pub(super) fn with_queued(queued: usize) -> Arc<Self> {
        Arc::new(Self {
            dispatches: AtomicUsize::new(0),
            queued: AtomicUsize::new(queued),
        })
    }
}
impl DataLoader for CountingLoader {
    fn dispatch(&self) -> usize {
        self.dispatches.fetch_add(1, Ordering::SeqCst);
        self.queued.swap(0, Ordering::SeqCst)
    }

    fn dispatch_depth(&self) -> usize {
        self.queued.load(Ordering::SeqCst)
    }
}

fn ptr_eq_opt<T>(a: Option<&Arc<T>>, b: Option<&Arc<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Asserts that two inputs agree by value on query, operation name and
/// validate, and by identity on every shared field.
pub(super) fn assert_same_input<C, R>(
    a: &ExecutionInput<C, R>,
    b: &ExecutionInput<C, R>,
) {
    assert_eq!(a.query(), b.query());
    assert_eq!(a.operation_name(), b.operation_name());
    assert_eq!(a.validate(), b.validate());
    assert!(ptr_eq_opt(a.context(), b.context()), "context differs");
    assert!(ptr_eq_opt(a.root(), b.root()), "root differs");
    assert!(Arc::ptr_eq(a.variables(), b.variables()), "variables differ");
    assert!(
        Arc::ptr_eq(a.data_loader_registry(), b.data_loader_registry()),
        "data loader registry differs",
    );
}
