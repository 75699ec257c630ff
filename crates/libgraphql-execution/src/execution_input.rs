use crate::ExecutionInputBuilder;
use crate::Variables;
use crate::data_loader::DataLoaderRegistry;
use std::fmt;
use std::sync::Arc;

/// Everything an execution engine needs to know to execute one GraphQL
/// request.
///
/// An `ExecutionInput` is immutable once built. Build one with
/// [`ExecutionInput::builder()`] and derive modified copies with
/// [`transform()`](Self::transform).
///
/// `context` and `root` are opaque to this crate: they are shared (never
/// copied) with whoever else holds the same `Arc`. The same goes for
/// `variables` and the `data_loader_registry`, which means every input
/// derived through `transform()` refers to the very same variables map and
/// registry unless the transform replaces them.
///
/// The referenced [`DataLoaderRegistry`] must be used by exactly one
/// execution. Inputs that will be executed again should be derived with a
/// fresh registry:
///
/// ```
/// # use libgraphql_execution::ExecutionInput;
/// let first = ExecutionInput::<(), ()>::builder()
///     .query("{ hero { name } }")
///     .build();
///
/// let rerun = first.transform(|builder| {
///     builder.fresh_data_loader_registry();
/// });
///
/// assert_ne!(
///     first.data_loader_registry().id(),
///     rerun.data_loader_registry().id(),
/// );
/// ```
pub struct ExecutionInput<TContext = (), TRoot = ()> {
    pub(crate) context: Option<Arc<TContext>>,
    pub(crate) data_loader_registry: Arc<DataLoaderRegistry>,
    pub(crate) operation_name: Option<String>,
    pub(crate) query: String,
    pub(crate) root: Option<Arc<TRoot>>,
    pub(crate) validate: bool,
    pub(crate) variables: Arc<Variables>,
}

impl<TContext, TRoot> ExecutionInput<TContext, TRoot> {
    /// A new [`ExecutionInputBuilder`] with every field at its default.
    pub fn builder() -> ExecutionInputBuilder<TContext, TRoot> {
        ExecutionInputBuilder::new()
    }

    /// The context value handed to every resolver.
    pub fn context(&self) -> Option<&Arc<TContext>> {
        self.context.as_ref()
    }

    /// The data loader registry associated with this execution.
    pub fn data_loader_registry(&self) -> &Arc<DataLoaderRegistry> {
        &self.data_loader_registry
    }

    /// The name of the operation to execute.
    ///
    /// `None` asks the engine to execute the document's only operation.
    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }

    /// The query text.
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// The root value execution starts from.
    pub fn root(&self) -> Option<&Arc<TRoot>> {
        self.root.as_ref()
    }

    /// Produce an [`ExecutionInputBuilder`] seeded with every value of this
    /// `ExecutionInput`.
    ///
    /// Shared fields are seeded by reference: the builder points at the same
    /// context, root, variables and data loader registry as `self`.
    pub fn to_builder(&self) -> ExecutionInputBuilder<TContext, TRoot> {
        ExecutionInputBuilder {
            context: self.context.clone(),
            data_loader_registry: Arc::clone(&self.data_loader_registry),
            operation_name: self.operation_name.clone(),
            query: self.query.clone(),
            root: self.root.clone(),
            validate: self.validate,
            variables: Arc::clone(&self.variables),
        }
    }

    /// Derive a new `ExecutionInput` from this one.
    ///
    /// `modifier` receives a builder seeded with this input's values (see
    /// [`to_builder()`](Self::to_builder)) and runs exactly once before the
    /// builder is built. `self` is left untouched.
    pub fn transform<F>(&self, modifier: F) -> Self
    where
        F: FnOnce(&mut ExecutionInputBuilder<TContext, TRoot>),
    {
        let mut builder = self.to_builder();
        modifier(&mut builder);
        log::trace!(
            "Transformed execution input (data loader registry #{} -> #{}).",
            self.data_loader_registry.id(),
            builder.data_loader_registry.id(),
        );
        builder.build()
    }

    /// Like [`transform()`](Self::transform), but for modifiers that can
    /// fail.
    ///
    /// An error returned by `modifier` is passed back unchanged and no new
    /// `ExecutionInput` is built.
    pub fn try_transform<F, E>(&self, modifier: F) -> Result<Self, E>
    where
        F: FnOnce(&mut ExecutionInputBuilder<TContext, TRoot>) -> Result<(), E>,
    {
        let mut builder = self.to_builder();
        modifier(&mut builder)?;
        Ok(builder.build())
    }

    /// Whether the engine should validate the query before executing it.
    /// Defaults to `true`.
    pub fn validate(&self) -> bool {
        self.validate
    }

    /// Values for the variables referenced (via `$name`) by the query.
    pub fn variables(&self) -> &Arc<Variables> {
        &self.variables
    }
}

impl<TContext, TRoot> Clone for ExecutionInput<TContext, TRoot> {
    fn clone(&self) -> Self {
        Self {
            context: self.context.clone(),
            data_loader_registry: Arc::clone(&self.data_loader_registry),
            operation_name: self.operation_name.clone(),
            query: self.query.clone(),
            root: self.root.clone(),
            validate: self.validate,
            variables: Arc::clone(&self.variables),
        }
    }
}

impl<TContext, TRoot> fmt::Debug for ExecutionInput<TContext, TRoot>
where
    TContext: fmt::Debug,
    TRoot: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionInput")
            .field("query", &self.query)
            .field("operation_name", &self.operation_name)
            .field("context", &self.context)
            .field("root", &self.root)
            .field("variables", &self.variables)
            .field("data_loader_registry", &self.data_loader_registry)
            .field("validate", &self.validate)
            .finish()
    }
}
