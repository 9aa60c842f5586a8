//! # Pipeline Schema
//!
//! A registry mapping inference tasks to the named output fields a model
//! pipeline for that task must produce. Pure schema metadata: the crate
//! performs no inference and holds no runtime state beyond the lookup table
//! itself, which is built once and immutable afterwards.
//!
//! ## Components
//!
//! * [`task`] - The task taxonomy ([`Task`], [`Modality`])
//! * [`field`] - The output field namespace ([`OutputField`])
//! * [`spec`] - Validated per-task field lists ([`TaskOutputSpec`])
//! * [`registry`] - The task → spec lookup table ([`OutputRegistry`])
//! * [`errors`] - Typed failures ([`SchemaError`])
//!
//! ## Quick Start
//!
//! ```rust
//! use pipeline_schema::prelude::*;
//!
//! # fn main() -> Result<(), SchemaError> {
//! let registry = builtin_registry();
//!
//! let spec = registry.get_output_spec(Task::ObjectDetection)?;
//! assert_eq!(
//!     spec.fields(),
//!     &[OutputField::Scores, OutputField::Labels, OutputField::Boxes],
//! );
//!
//! // Check a produced result against its contract before returning it.
//! spec.validate_keys(&["scores", "labels", "boxes"])?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom registries
//!
//! Consumers that support a subset of tasks, or override a contract, build
//! their own table and pass it by reference to whatever dispatches on it:
//!
//! ```rust
//! use pipeline_schema::prelude::*;
//!
//! # fn main() -> Result<(), SchemaError> {
//! let mut builder = OutputRegistry::builder();
//! builder.register(Task::Translation, vec![OutputField::Translation])?;
//! let registry = builder.build();
//!
//! assert!(registry.get_output_spec(Task::ImageCaptioning).is_err());
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod field;
mod macros;
pub mod registry;
pub mod spec;
pub mod task;

pub use errors::SchemaError;
pub use field::OutputField;
pub use registry::{builtin_registry, OutputRegistry, OutputRegistryBuilder};
pub use spec::TaskOutputSpec;
pub use task::{Modality, Task};

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use pipeline_schema::prelude::*;
/// ```
pub mod prelude {
    pub use crate::errors::SchemaError;
    pub use crate::field::OutputField;
    pub use crate::registry::{builtin_registry, OutputRegistry, OutputRegistryBuilder};
    pub use crate::spec::TaskOutputSpec;
    pub use crate::task::{Modality, Task};
}

/// Initializes the tracing subscriber for logging.
///
/// Sets up the tracing subscriber with environment filter and formatting
/// layer. Typically called once at the start of an application.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();
}
