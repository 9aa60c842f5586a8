//! The inference task taxonomy.
//!
//! Tasks identify a supported inference capability. Each task has a stable
//! snake_case name used as its wire identifier, and a [`Modality`] grouping
//! tag. The per-task output contract lives in the registry, not here.

use crate::macros::string_enum;

string_enum! {
    /// The broad input/output domain a task operates over.
    pub enum Modality(name) {
        /// Image and video tasks.
        Vision => "vision",
        /// Natural language tasks.
        Nlp => "nlp",
        /// Speech and audio signal tasks.
        Audio => "audio",
        /// Tasks combining more than one domain.
        MultiModal => "multi_modal",
    }
}

string_enum! {
    /// An inference task with a registered output contract.
    pub enum Task(name) {
        // vision
        /// Single-label or multi-label image classification.
        ImageClassification => "image_classification",
        /// Open-vocabulary image tagging.
        ImageTagging => "image_tagging",
        /// Object detection with boxes, labels, and scores.
        ObjectDetection => "object_detection",
        /// Face detection with boxes and facial keypoints.
        FaceDetection => "face_detection",
        /// Face recognition producing an identity embedding.
        FaceRecognition => "face_recognition",
        /// Instance segmentation.
        ImageSegmentation => "image_segmentation",
        /// General image editing.
        ImageEditing => "image_editing",
        /// Foreground matting with an alpha channel.
        ImageMatting => "image_matting",
        /// Unconditional or conditional image generation.
        ImageGeneration => "image_generation",
        /// Image denoising.
        ImageDenoise => "image_denoise",
        /// Grayscale image colorization.
        ImageColorization => "image_colorization",
        /// Face image generation.
        FaceImageGeneration => "face_image_generation",
        /// Image super resolution.
        ImageSuperResolution => "image_super_resolution",
        /// Image color enhancement.
        ImageColorEnhance => "image_color_enhance",
        /// Video action recognition.
        ActionRecognition => "action_recognition",
        /// Live-stream category recognition.
        LiveCategory => "live_category",
        /// Video category recognition.
        VideoCategory => "video_category",
        /// Human pose estimation.
        PoseEstimation => "pose_estimation",
        /// OCR text region detection.
        OcrDetection => "ocr_detection",
        /// Product retrieval embedding.
        ProductRetrievalEmbedding => "product_retrieval_embedding",
        /// Video embedding.
        VideoEmbedding => "video_embedding",

        // nlp
        /// Text classification.
        TextClassification => "text_classification",
        /// Free-form text generation.
        TextGeneration => "text_generation",
        /// Masked token filling.
        FillMask => "fill_mask",
        /// Word segmentation.
        WordSegmentation => "word_segmentation",
        /// Named entity recognition.
        NamedEntityRecognition => "named_entity_recognition",
        /// Sentence similarity scoring.
        SentenceSimilarity => "sentence_similarity",
        /// Machine translation.
        Translation => "translation",
        /// Sentiment classification.
        SentimentClassification => "sentiment_classification",
        /// Zero-shot classification.
        ZeroShotClassification => "zero_shot_classification",
        /// Natural language inference.
        Nli => "nli",
        /// Dialog intent prediction.
        DialogIntentPrediction => "dialog_intent_prediction",
        /// Dialog response modeling.
        DialogModeling => "dialog_modeling",
        /// Dialog state tracking.
        DialogStateTracking => "dialog_state_tracking",
        /// Text error correction.
        TextErrorCorrection => "text_error_correction",

        // audio
        /// Generic speech signal processing.
        SpeechSignalProcess => "speech_signal_process",
        /// Acoustic echo cancellation.
        AcousticEchoCancellation => "acoustic_echo_cancellation",
        /// Acoustic noise suppression.
        AcousticNoiseSuppression => "acoustic_noise_suppression",
        /// Text to speech synthesis.
        TextToSpeech => "text_to_speech",
        /// Automatic speech recognition.
        AutoSpeechRecognition => "auto_speech_recognition",

        // multi-modal
        /// Image captioning.
        ImageCaptioning => "image_captioning",
        /// Joint image and text embedding.
        MultiModalEmbedding => "multi_modal_embedding",
        /// Generative multi-modal embedding with a caption.
        GenerativeMultiModalEmbedding => "generative_multi_modal_embedding",
        /// Visual grounding of a text query.
        VisualGrounding => "visual_grounding",
        /// Text to image synthesis.
        TextToImageSynthesis => "text_to_image_synthesis",
        /// Virtual try-on rendering.
        VirtualTryOn => "virtual_try_on",
        /// Visual question answering.
        VisualQuestionAnswering => "visual_question_answering",
    }
}

impl Task {
    /// Returns the modality group this task belongs to.
    pub fn modality(&self) -> Modality {
        use Task::*;
        match self {
            ImageClassification | ImageTagging | ObjectDetection | FaceDetection
            | FaceRecognition | ImageSegmentation | ImageEditing | ImageMatting
            | ImageGeneration | ImageDenoise | ImageColorization | FaceImageGeneration
            | ImageSuperResolution | ImageColorEnhance | ActionRecognition | LiveCategory
            | VideoCategory | PoseEstimation | OcrDetection | ProductRetrievalEmbedding
            | VideoEmbedding => Modality::Vision,

            TextClassification | TextGeneration | FillMask | WordSegmentation
            | NamedEntityRecognition | SentenceSimilarity | Translation
            | SentimentClassification | ZeroShotClassification | Nli
            | DialogIntentPrediction | DialogModeling | DialogStateTracking
            | TextErrorCorrection => Modality::Nlp,

            SpeechSignalProcess | AcousticEchoCancellation | AcousticNoiseSuppression
            | TextToSpeech | AutoSpeechRecognition => Modality::Audio,

            ImageCaptioning | MultiModalEmbedding | GenerativeMultiModalEmbedding
            | VisualGrounding | TextToImageSynthesis | VirtualTryOn
            | VisualQuestionAnswering => Modality::MultiModal,
        }
    }
}

impl std::str::FromStr for Task {
    type Err = crate::errors::SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Task::parse(s).ok_or_else(|| crate::errors::SchemaError::UnknownTaskName {
            name: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_task_name() {
        assert_eq!(Task::ImageClassification.name(), "image_classification");
        assert_eq!(Task::Nli.name(), "nli");
        assert_eq!(Task::AutoSpeechRecognition.name(), "auto_speech_recognition");
    }

    #[test]
    fn test_names_are_pairwise_distinct() {
        let names: HashSet<&str> = Task::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), Task::ALL.len());
    }

    #[test]
    fn test_parse_inverts_name() {
        for task in Task::ALL {
            assert_eq!(Task::parse(task.name()), Some(*task));
        }
        assert_eq!(Task::parse("not_a_real_task"), None);
    }

    #[test]
    fn test_from_str_reports_unknown_name() {
        let err = "not_a_real_task".parse::<Task>().unwrap_err();
        assert!(err.to_string().contains("not_a_real_task"));
    }

    #[test]
    fn test_modality_grouping() {
        assert_eq!(Task::ObjectDetection.modality(), Modality::Vision);
        assert_eq!(Task::Translation.modality(), Modality::Nlp);
        assert_eq!(Task::TextToSpeech.modality(), Modality::Audio);
        assert_eq!(Task::ImageCaptioning.modality(), Modality::MultiModal);

        // Every modality group is non-empty.
        for modality in Modality::ALL {
            assert!(Task::ALL.iter().any(|t| t.modality() == *modality));
        }
    }

    #[test]
    fn test_serde_uses_name_strings() {
        let json = serde_json::to_string(&Task::ZeroShotClassification).unwrap();
        assert_eq!(json, "\"zero_shot_classification\"");

        let task: Task = serde_json::from_str("\"visual_grounding\"").unwrap();
        assert_eq!(task, Task::VisualGrounding);
    }
}
