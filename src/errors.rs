//! Error types for the schema registry.
//!
//! All failures in this crate are configuration-shaped: a lookup for a task
//! nobody registered, a registration that would store an invalid spec, or a
//! produced output that does not match its declared contract. There is no
//! transient failure category and nothing is retried.

use crate::field::OutputField;
use crate::task::Task;
use thiserror::Error;

/// Errors that can occur when building or consulting the output registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// No output spec is registered for the given task.
    #[error("no output spec registered for task '{}'", .task.name())]
    UnknownTask {
        /// The task that was looked up.
        task: Task,
    },

    /// A string did not name any known task.
    #[error("unknown task name: '{name}'")]
    UnknownTaskName {
        /// The string that failed to parse.
        name: String,
    },

    /// A string did not name any known output field.
    #[error("unknown output field key: '{key}'")]
    UnknownFieldKey {
        /// The string that failed to parse.
        key: String,
    },

    /// A spec was registered with no fields.
    #[error("an output spec must list at least one field")]
    EmptySpec,

    /// A spec listed the same field more than once.
    #[error("output field '{}' is listed more than once", .field.key())]
    DuplicateField {
        /// The repeated field.
        field: OutputField,
    },

    /// A produced output's key set does not match the declared spec.
    #[error(
        "produced output does not match spec (missing: [{}], unexpected: [{}])",
        .missing.iter().map(|f| f.key()).collect::<Vec<_>>().join(", "),
        .unexpected.join(", ")
    )]
    OutputMismatch {
        /// Declared fields absent from the produced output.
        missing: Vec<OutputField>,
        /// Produced keys that no declared field accounts for.
        unexpected: Vec<String>,
    },
}

impl SchemaError {
    /// Creates a SchemaError for a lookup of an unregistered task.
    pub fn unknown_task(task: Task) -> Self {
        Self::UnknownTask { task }
    }
}
