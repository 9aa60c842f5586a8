//! The output field namespace.
//!
//! Every result a pipeline produces is a keyed container; the keys come from
//! this closed set. A field's identity is its key string, which is what
//! appears in serialized results and in the per-task output specs.

use crate::macros::string_enum;

string_enum! {
    /// A named slot in a task's result structure.
    ///
    /// Not every field is referenced by the builtin registry table; fields
    /// such as `Loss` or `Logits` exist for pipelines that attach them
    /// outside the registered spec (training diagnostics, raw heads).
    pub enum OutputField(key) {
        /// Training or evaluation loss value.
        Loss => "loss",
        /// Raw model logits before any normalization.
        Logits => "logits",
        /// Confidence scores, parallel to `labels`.
        Scores => "scores",
        /// A single predicted label.
        Label => "label",
        /// Predicted labels.
        Labels => "labels",
        /// Index of the predicted label within the label set.
        LabelPos => "label_pos",
        /// Per-person keypoint poses.
        Poses => "poses",
        /// A generated image caption.
        Caption => "caption",
        /// Bounding boxes as `[x1, y1, x2, y2]`.
        Boxes => "boxes",
        /// Keypoint coordinates per detection.
        Keypoints => "keypoints",
        /// Segmentation masks.
        Masks => "masks",
        /// Generated or recognized text.
        Text => "text",
        /// Text region polygons as `[x1, y1, ..., x4, y4]`.
        Polygons => "polygons",
        /// Generic single-value output.
        Output => "output",
        /// An output image.
        OutputImg => "output_img",
        /// Output audio in PCM format.
        OutputPcm => "output_pcm",
        /// An image embedding vector.
        ImgEmbedding => "img_embedding",
        /// A text embedding vector.
        TextEmbedding => "text_embedding",
        /// A translated sentence.
        Translation => "translation",
        /// A dialog system response.
        Response => "response",
        /// A single prediction vector.
        Prediction => "prediction",
        /// Multiple prediction vectors.
        Predictions => "predictions",
        /// Class probabilities.
        Probabilities => "probabilities",
        /// Tracked dialog slot states.
        DialogStates => "dialog_states",
        /// A video embedding vector.
        VideoEmbedding => "video_embedding",
    }
}

impl std::str::FromStr for OutputField {
    type Err = crate::errors::SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputField::parse(s).ok_or_else(|| crate::errors::SchemaError::UnknownFieldKey {
            key: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_pairwise_distinct() {
        let keys: HashSet<&str> = OutputField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys.len(), OutputField::ALL.len());
    }

    #[test]
    fn test_parse_inverts_key() {
        for field in OutputField::ALL {
            assert_eq!(OutputField::parse(field.key()), Some(*field));
        }
        assert_eq!(OutputField::parse("not_a_field"), None);
    }

    #[test]
    fn test_from_str_reports_unknown_key() {
        let err = "not_a_field".parse::<OutputField>().unwrap_err();
        assert!(err.to_string().contains("not_a_field"));
    }

    #[test]
    fn test_serde_uses_key_strings() {
        let json = serde_json::to_string(&OutputField::OutputImg).unwrap();
        assert_eq!(json, "\"output_img\"");

        let field: OutputField = serde_json::from_str("\"img_embedding\"").unwrap();
        assert_eq!(field, OutputField::ImgEmbedding);
    }
}
