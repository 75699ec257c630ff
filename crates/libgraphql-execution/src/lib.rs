//! Inputs for a single GraphQL execution.
//!
//! An [`ExecutionInput`] bundles everything an execution engine needs to
//! know about one request: the query text, the operation to run, the
//! caller's context and root values, bound variables, a per-execution
//! [`DataLoaderRegistry`](data_loader::DataLoaderRegistry), and whether the
//! query should be validated before it runs.
//!
//! `ExecutionInput`s are immutable. They are assembled with an
//! [`ExecutionInputBuilder`] and "updated" only by deriving a new input via
//! [`ExecutionInput::transform`].
//!
//! ```
//! use libgraphql_execution::ExecutionInput;
//! use libgraphql_execution::Variables;
//!
//! let input = ExecutionInput::<(), ()>::builder()
//!     .query("query Hero($id: ID!) { hero(id: $id) { name } }")
//!     .operation_name("Hero")
//!     .variables(Variables::from_iter([("id", 42)]))
//!     .build();
//!
//! let next = input.transform(|builder| {
//!     builder.variables(Variables::from_iter([("id", 43)]));
//! });
//!
//! assert_eq!(input.query(), next.query());
//! assert_eq!(next.variables().get("id").and_then(|v| v.as_i64()), Some(43));
//! ```

pub mod data_loader;
mod execution_input;
mod execution_input_builder;
mod value;
mod variables;

pub use execution_input::ExecutionInput;
pub use execution_input_builder::ExecutionInputBuilder;
pub use execution_input_builder::ExecutionInputBuildError;
pub use value::Value;
pub use variables::Variables;

#[cfg(test)]
mod tests;
