//! The task → output spec registry.
//!
//! The registry is built once, through [`OutputRegistryBuilder`], and is
//! immutable afterwards: concurrent readers need no synchronization. The
//! builtin table reproduces the output contract of every supported task;
//! consumers that only dispatch on stock tasks use [`builtin_registry`] and
//! never build their own.

use crate::errors::SchemaError;
use crate::field::OutputField as F;
use crate::field::OutputField;
use crate::spec::TaskOutputSpec;
use crate::task::Task;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::{debug, warn};

/// The builtin output contract for every supported task.
///
/// Entries are authored by hand; `test_builtin_specs_are_valid` pushes each
/// one through the validating constructor.
const BUILTIN_SPECS: &[(Task, &[OutputField])] = &[
    // vision
    (Task::ImageClassification, &[F::Scores, F::Labels]),
    (Task::ImageTagging, &[F::Scores, F::Labels]),
    (Task::ObjectDetection, &[F::Scores, F::Labels, F::Boxes]),
    (Task::FaceDetection, &[F::Scores, F::Boxes, F::Keypoints]),
    (Task::FaceRecognition, &[F::ImgEmbedding]),
    (Task::ImageSegmentation, &[F::Scores, F::Labels, F::Boxes]),
    (Task::ImageEditing, &[F::OutputImg]),
    (Task::ImageMatting, &[F::OutputImg]),
    (Task::ImageGeneration, &[F::OutputImg]),
    (Task::ImageDenoise, &[F::OutputImg]),
    (Task::ImageColorization, &[F::OutputImg]),
    (Task::FaceImageGeneration, &[F::OutputImg]),
    (Task::ImageSuperResolution, &[F::OutputImg]),
    (Task::ImageColorEnhance, &[F::OutputImg]),
    (Task::ActionRecognition, &[F::Labels]),
    (Task::LiveCategory, &[F::Scores, F::Labels]),
    (Task::VideoCategory, &[F::Scores, F::Labels]),
    (Task::PoseEstimation, &[F::Poses, F::Boxes]),
    (Task::OcrDetection, &[F::Polygons]),
    (Task::ProductRetrievalEmbedding, &[F::ImgEmbedding]),
    (Task::VideoEmbedding, &[F::VideoEmbedding]),
    // nlp
    (Task::TextClassification, &[F::Scores, F::Labels]),
    (Task::TextGeneration, &[F::Text]),
    (Task::FillMask, &[F::Text]),
    (Task::WordSegmentation, &[F::Output]),
    (Task::NamedEntityRecognition, &[F::Output]),
    (Task::SentenceSimilarity, &[F::Scores, F::Labels]),
    (Task::Translation, &[F::Translation]),
    (Task::SentimentClassification, &[F::Scores, F::Labels]),
    (Task::ZeroShotClassification, &[F::Scores, F::Labels]),
    (Task::Nli, &[F::Scores, F::Labels]),
    (
        Task::DialogIntentPrediction,
        &[F::Prediction, F::LabelPos, F::Label],
    ),
    (Task::DialogModeling, &[F::Response]),
    (Task::DialogStateTracking, &[F::DialogStates]),
    (Task::TextErrorCorrection, &[F::Output]),
    // audio
    (Task::SpeechSignalProcess, &[F::OutputPcm]),
    (Task::AcousticEchoCancellation, &[F::OutputPcm]),
    (Task::AcousticNoiseSuppression, &[F::OutputPcm]),
    (Task::TextToSpeech, &[F::OutputPcm]),
    (Task::AutoSpeechRecognition, &[F::Text]),
    // multi-modal
    (Task::ImageCaptioning, &[F::Caption]),
    (
        Task::MultiModalEmbedding,
        &[F::ImgEmbedding, F::TextEmbedding],
    ),
    (
        Task::GenerativeMultiModalEmbedding,
        &[F::ImgEmbedding, F::TextEmbedding, F::Caption],
    ),
    (Task::VisualGrounding, &[F::Boxes, F::Scores]),
    (Task::TextToImageSynthesis, &[F::OutputImg]),
    (Task::VirtualTryOn, &[F::OutputImg]),
    (Task::VisualQuestionAnswering, &[F::Text]),
];

static BUILTIN_REGISTRY: Lazy<OutputRegistry> = Lazy::new(OutputRegistry::builtin);

/// Returns the process-wide builtin registry.
///
/// Built on first access and never mutated afterwards, so it can be read
/// from any number of threads.
pub fn builtin_registry() -> &'static OutputRegistry {
    &BUILTIN_REGISTRY
}

/// An immutable mapping from tasks to their output specs.
#[derive(Debug, Clone)]
pub struct OutputRegistry {
    specs: HashMap<Task, TaskOutputSpec>,
}

impl OutputRegistry {
    /// Creates a builder for assembling a registry.
    pub fn builder() -> OutputRegistryBuilder {
        OutputRegistryBuilder::new()
    }

    /// Builds a registry holding the builtin output contract for every
    /// supported task.
    pub fn builtin() -> Self {
        let mut specs = HashMap::with_capacity(BUILTIN_SPECS.len());
        for (task, fields) in BUILTIN_SPECS {
            specs.insert(*task, TaskOutputSpec::from_static(*fields));
        }
        Self { specs }
    }

    /// Returns the output spec registered for a task.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownTask`] when no spec is registered for
    /// the task. An absent task never yields an empty or partial spec.
    pub fn get_output_spec(&self, task: Task) -> Result<&TaskOutputSpec, SchemaError> {
        self.specs
            .get(&task)
            .ok_or_else(|| SchemaError::unknown_task(task))
    }

    /// Returns the output spec for a task, or `None` if unregistered.
    pub fn get(&self, task: Task) -> Option<&TaskOutputSpec> {
        self.specs.get(&task)
    }

    /// Returns whether a spec is registered for the task.
    pub fn contains(&self, task: Task) -> bool {
        self.specs.contains_key(&task)
    }

    /// Returns the number of registered tasks.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Returns an iterator over registered tasks and their specs.
    ///
    /// Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (Task, &TaskOutputSpec)> {
        self.specs.iter().map(|(task, spec)| (*task, spec))
    }

    /// Returns an iterator over the registered tasks.
    pub fn tasks(&self) -> impl Iterator<Item = Task> + '_ {
        self.specs.keys().copied()
    }
}

/// Assembles an [`OutputRegistry`].
///
/// Registration validates each spec before storing it. Registering the same
/// task twice replaces the earlier spec; the replacement is logged since it
/// usually indicates two components fighting over one task.
#[derive(Debug, Default)]
pub struct OutputRegistryBuilder {
    specs: HashMap<Task, TaskOutputSpec>,
}

impl OutputRegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            specs: HashMap::new(),
        }
    }

    /// Creates an empty builder with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            specs: HashMap::with_capacity(capacity),
        }
    }

    /// Registers the output fields for a task.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptySpec`] or [`SchemaError::DuplicateField`]
    /// for an invalid field list; nothing is stored on failure.
    pub fn register(&mut self, task: Task, fields: Vec<OutputField>) -> Result<(), SchemaError> {
        let spec = TaskOutputSpec::new(fields)?;
        self.register_spec(task, spec);
        Ok(())
    }

    /// Registers an already-validated spec for a task.
    pub fn register_spec(&mut self, task: Task, spec: TaskOutputSpec) {
        if self.specs.insert(task, spec).is_some() {
            warn!(task = task.name(), "replacing previously registered output spec");
        } else {
            debug!(task = task.name(), "registered output spec");
        }
    }

    /// Returns whether a spec is already registered for the task.
    pub fn contains(&self, task: Task) -> bool {
        self.specs.contains_key(&task)
    }

    /// Finalizes the builder into an immutable registry.
    pub fn build(self) -> OutputRegistry {
        OutputRegistry { specs: self.specs }
    }
}
