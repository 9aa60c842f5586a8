//! Per-task output specifications.
//!
//! A [`TaskOutputSpec`] is the ordered list of fields a conforming pipeline
//! output must contain for one task. Construction validates the list, so a
//! spec held anywhere in the process is always non-empty and duplicate-free.
//! Field order is the documented presentation order; it carries no runtime
//! meaning beyond determinism.

use crate::errors::SchemaError;
use crate::field::OutputField;
use serde::{Deserialize, Serialize};

/// The ordered set of output fields expected for one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<OutputField>", into = "Vec<OutputField>")]
pub struct TaskOutputSpec {
    fields: Vec<OutputField>,
}

impl TaskOutputSpec {
    /// Creates a spec from an ordered field list.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptySpec`] for an empty list and
    /// [`SchemaError::DuplicateField`] when a field appears more than once.
    /// Nothing is stored on failure.
    pub fn new(fields: Vec<OutputField>) -> Result<Self, SchemaError> {
        if fields.is_empty() {
            return Err(SchemaError::EmptySpec);
        }

        for (idx, field) in fields.iter().enumerate() {
            if fields[..idx].contains(field) {
                return Err(SchemaError::DuplicateField { field: *field });
            }
        }

        Ok(Self { fields })
    }

    /// Builds a spec from a static field list without re-validating.
    ///
    /// Used for the builtin table, whose entries are authored by hand and
    /// covered by tests that push every entry through [`TaskOutputSpec::new`].
    pub(crate) fn from_static(fields: &'static [OutputField]) -> Self {
        Self {
            fields: fields.to_vec(),
        }
    }

    /// Returns the fields in their documented order.
    pub fn fields(&self) -> &[OutputField] {
        &self.fields
    }

    /// Returns the field key strings in their documented order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.key())
    }

    /// Returns whether the spec lists the given field.
    pub fn contains(&self, field: OutputField) -> bool {
        self.fields.contains(&field)
    }

    /// Returns the number of fields in the spec.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the spec is empty. Always false for a constructed
    /// spec; present for API symmetry with the standard collections.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns an iterator over the fields.
    pub fn iter(&self) -> std::slice::Iter<'_, OutputField> {
        self.fields.iter()
    }

    /// Checks that a produced output's key set matches this spec exactly.
    ///
    /// Conformance is opt-in: pipelines call this on the container they are
    /// about to return. Order is not checked, only the key set. Repeated
    /// occurrences of a declared key are tolerated since keyed containers
    /// cannot hold them anyway.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::OutputMismatch`] listing the declared fields
    /// that are missing and the produced keys that are not declared.
    pub fn validate_keys(&self, produced: &[&str]) -> Result<(), SchemaError> {
        let missing: Vec<OutputField> = self
            .fields
            .iter()
            .filter(|f| !produced.contains(&f.key()))
            .copied()
            .collect();

        let unexpected: Vec<String> = produced
            .iter()
            .copied()
            .filter(|key| !self.keys().any(|k| k == *key))
            .map(str::to_string)
            .collect();

        if missing.is_empty() && unexpected.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::OutputMismatch {
                missing,
                unexpected,
            })
        }
    }
}

impl TryFrom<Vec<OutputField>> for TaskOutputSpec {
    type Error = SchemaError;

    fn try_from(fields: Vec<OutputField>) -> Result<Self, Self::Error> {
        Self::new(fields)
    }
}

impl From<TaskOutputSpec> for Vec<OutputField> {
    fn from(spec: TaskOutputSpec) -> Self {
        spec.fields
    }
}

impl<'a> IntoIterator for &'a TaskOutputSpec {
    type Item = &'a OutputField;
    type IntoIter = std::slice::Iter<'a, OutputField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
