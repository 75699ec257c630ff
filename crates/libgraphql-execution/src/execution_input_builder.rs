use crate::ExecutionInput;
use crate::Variables;
use crate::data_loader::DataLoaderRegistry;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, ExecutionInputBuildError>;

/// Stages the fields of an [`ExecutionInput`].
///
/// A fresh builder starts with an empty query, no operation name, no
/// context or root, empty [`Variables`], a newly allocated
/// [`DataLoaderRegistry`] and validation enabled.
///
/// [`build()`](Self::build) does not consume the builder. Each call snapshots
/// whatever is staged at that moment; inputs built from the same builder
/// share its context, root, variables and registry.
pub struct ExecutionInputBuilder<TContext = (), TRoot = ()> {
    pub(crate) context: Option<Arc<TContext>>,
    pub(crate) data_loader_registry: Arc<DataLoaderRegistry>,
    pub(crate) operation_name: Option<String>,
    pub(crate) query: String,
    pub(crate) root: Option<Arc<TRoot>>,
    pub(crate) validate: bool,
    pub(crate) variables: Arc<Variables>,
}

impl<TContext, TRoot> ExecutionInputBuilder<TContext, TRoot> {
    /// Create a new `ExecutionInputBuilder` with every field at its default.
    pub fn new() -> Self {
        Self {
            context: None,
            data_loader_registry: Arc::new(DataLoaderRegistry::new()),
            operation_name: None,
            query: String::new(),
            root: None,
            validate: true,
            variables: Variables::empty(),
        }
    }

    /// Produce an [`ExecutionInput`] from the currently staged values.
    pub fn build(&self) -> ExecutionInput<TContext, TRoot> {
        log::trace!(
            "Building execution input (operation: {:?}, validate: {}, \
            variables: {}, data loader registry: #{}).",
            self.operation_name,
            self.validate,
            self.variables.len(),
            self.data_loader_registry.id(),
        );

        ExecutionInput {
            context: self.context.clone(),
            data_loader_registry: Arc::clone(&self.data_loader_registry),
            operation_name: self.operation_name.clone(),
            query: self.query.clone(),
            root: self.root.clone(),
            validate: self.validate,
            variables: Arc::clone(&self.variables),
        }
    }

    /// Unset the context value.
    pub fn clear_context(&mut self) -> &mut Self {
        self.context = None;
        self
    }

    /// Unset the operation name so the engine executes the document's only
    /// operation.
    pub fn clear_operation_name(&mut self) -> &mut Self {
        self.operation_name = None;
        self
    }

    /// Unset the root value.
    pub fn clear_root(&mut self) -> &mut Self {
        self.root = None;
        self
    }

    /// Stage the context value handed to every resolver.
    pub fn context(&mut self, context: impl Into<Arc<TContext>>) -> &mut Self {
        self.context = Some(context.into());
        self
    }

    /// Stage the [`DataLoaderRegistry`] the execution will batch through.
    ///
    /// Create a new registry (and new loaders) for each execution; re-using
    /// one across executions mixes their results.
    ///
    /// Fails with [`ExecutionInputBuildError::MissingDataLoaderRegistry`] if
    /// `registry` is `None`, in which case the previously staged registry is
    /// kept.
    pub fn data_loader_registry(
        &mut self,
        registry: Option<Arc<DataLoaderRegistry>>,
    ) -> Result<&mut Self> {
        let Some(registry) = registry else {
            log::debug!(
                "Rejected a missing data loader registry; keeping registry \
                #{}.",
                self.data_loader_registry.id(),
            );
            return Err(ExecutionInputBuildError::MissingDataLoaderRegistry);
        };
        self.data_loader_registry = registry;
        Ok(self)
    }

    /// Replace the staged [`DataLoaderRegistry`] with a newly allocated one.
    pub fn fresh_data_loader_registry(&mut self) -> &mut Self {
        self.data_loader_registry = Arc::new(DataLoaderRegistry::new());
        self
    }

    /// Stage the name of the operation to execute.
    pub fn operation_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Stage the query text. The text is not parsed or checked here.
    pub fn query(&mut self, query: impl Into<String>) -> &mut Self {
        self.query = query.into();
        self
    }

    /// Stage the root value execution starts from.
    pub fn root(&mut self, root: impl Into<Arc<TRoot>>) -> &mut Self {
        self.root = Some(root.into());
        self
    }

    /// Stage whether the engine validates the query before executing it.
    pub fn validate(&mut self, validate: bool) -> &mut Self {
        self.validate = validate;
        self
    }

    /// Replace the staged variables wholesale. Previously staged variables
    /// are not merged in.
    pub fn variables(&mut self, variables: impl Into<Arc<Variables>>) -> &mut Self {
        self.variables = variables.into();
        self
    }
}

impl<TContext, TRoot> Default for ExecutionInputBuilder<TContext, TRoot> {
    fn default() -> Self {
        Self::new()
    }
}

impl<TContext, TRoot> fmt::Debug for ExecutionInputBuilder<TContext, TRoot>
where
    TContext: fmt::Debug,
    TRoot: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionInputBuilder")
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

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExecutionInputBuildError {
    #[error("Data loader registry must not be None")]
    MissingDataLoaderRegistry,
}
