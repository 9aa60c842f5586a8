//! Integration tests exercising the public API against the builtin table.

use pipeline_schema::prelude::*;

#[test]
fn builtin_lookup_matches_documented_contracts() {
    let registry = builtin_registry();

    let classification = registry
        .get_output_spec(Task::ImageClassification)
        .unwrap();
    assert_eq!(
        classification.fields(),
        &[OutputField::Scores, OutputField::Labels]
    );

    let detection = registry.get_output_spec(Task::ObjectDetection).unwrap();
    assert_eq!(
        detection.fields(),
        &[OutputField::Scores, OutputField::Labels, OutputField::Boxes]
    );

    let translation = registry.get_output_spec(Task::Translation).unwrap();
    assert_eq!(translation.fields(), &[OutputField::Translation]);
}

#[test]
fn unknown_task_string_fails_to_parse() {
    let err = "not_a_real_task".parse::<Task>().unwrap_err();
    assert!(matches!(err, SchemaError::UnknownTaskName { .. }));
}

#[test]
fn task_names_round_trip_through_lookup() {
    // The path a dispatcher takes: wire name -> Task -> spec -> key strings.
    let task: Task = "image_captioning".parse().unwrap();
    let spec = builtin_registry().get_output_spec(task).unwrap();
    assert_eq!(spec.keys().collect::<Vec<_>>(), vec!["caption"]);
}

#[test]
fn every_builtin_spec_is_nonempty_and_duplicate_free() {
    let registry = builtin_registry();
    for task in Task::ALL {
        let spec = registry.get_output_spec(*task).unwrap();
        assert!(!spec.is_empty(), "empty spec for {}", task);

        let mut seen = std::collections::HashSet::new();
        for field in spec {
            assert!(seen.insert(field), "duplicate field {} for {}", field, task);
        }
    }
}

#[test]
fn custom_registry_rejects_invalid_registration() {
    let mut builder = OutputRegistry::builder();

    assert!(builder.register(Task::Translation, vec![]).is_err());
    assert!(builder
        .register(
            Task::Translation,
            vec![OutputField::Translation, OutputField::Translation],
        )
        .is_err());

    // Valid registration still works after rejected attempts.
    builder
        .register(Task::Translation, vec![OutputField::Translation])
        .unwrap();

    let registry = builder.build();
    assert_eq!(registry.len(), 1);
    assert!(registry
        .get_output_spec(Task::ImageClassification)
        .is_err());
}

#[test]
fn produced_output_conformance_is_checkable() {
    let spec = builtin_registry()
        .get_output_spec(Task::FaceDetection)
        .unwrap();

    assert!(spec.validate_keys(&["scores", "boxes", "keypoints"]).is_ok());

    let err = spec.validate_keys(&["scores", "boxes"]).unwrap_err();
    assert!(matches!(err, SchemaError::OutputMismatch { .. }));
}

#[test]
fn specs_serialize_as_plain_key_lists() {
    let spec = builtin_registry()
        .get_output_spec(Task::GenerativeMultiModalEmbedding)
        .unwrap();

    let json = serde_json::to_string(spec).unwrap();
    assert_eq!(json, r#"["img_embedding","text_embedding","caption"]"#);

    let back: TaskOutputSpec = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, spec);
}

#[test]
fn modalities_partition_the_taxonomy() {
    let mut counts = std::collections::HashMap::new();
    for task in Task::ALL {
        *counts.entry(task.modality()).or_insert(0usize) += 1;
    }
    assert_eq!(counts.len(), Modality::ALL.len());
    assert_eq!(counts.values().sum::<usize>(), Task::ALL.len());
}
