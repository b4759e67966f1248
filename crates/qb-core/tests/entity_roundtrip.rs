//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::Utc;
use qb_core::entities::*;
use qb_core::enums::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    user_roundtrip,
    User,
    User::new("asha@example.com", "asha")
);

roundtrip_and_validate!(
    question_roundtrip,
    Question,
    Question {
        id: 1,
        question_text: "Which gas is most abundant in Earth's atmosphere?".into(),
        option_a: "Oxygen".into(),
        option_b: "Nitrogen".into(),
        option_c: "Argon".into(),
        option_d: "Carbon dioxide".into(),
        correct_answer: AnswerOption::B,
        explanation: Some("Nitrogen makes up about 78% of dry air.".into()),
        has_diagram: false,
        diagram_description: None,
        year: 2021,
        exam_type: ExamType::GroupD,
        exam_stage: ExamStage::Cbt1,
        subject: Subject::GeneralScience,
        topic: Some("Atmosphere".into()),
        difficulty_level: DifficultyLevel::Easy,
        source: Some("Previous Year Paper".into()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    new_question_roundtrip,
    NewQuestion,
    NewQuestion::new(
        "2+2?",
        ["3", "4", "5", "6"],
        AnswerOption::B,
        2020,
        ExamType::Ssc,
        ExamStage::Cbt1,
        Subject::Arithmetic,
    )
);

roundtrip_and_validate!(
    tag_roundtrip,
    Tag,
    Tag {
        id: 4,
        name: "percentages".into(),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    question_tag_roundtrip,
    QuestionTag,
    QuestionTag {
        question_id: 1,
        tag_id: 4,
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    user_progress_roundtrip,
    UserProgress,
    UserProgress {
        id: 10,
        user_id: 2,
        question_id: 1,
        is_correct: true,
        time_taken: Some(37.5),
        attempted_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    question_statistics_roundtrip,
    QuestionStatistics,
    QuestionStatistics::from_counts(1, 12, 9, 10, 41.25, Utc::now()).unwrap()
);

roundtrip_and_validate!(
    question_image_roundtrip,
    QuestionImage,
    QuestionImage {
        id: 3,
        question_id: 1,
        image_path: "images/q1/circuit.png".into(),
        image_type: Some("diagram".into()),
        caption: Some("Series circuit with two resistors".into()),
        display_order: 1,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

#[test]
fn question_schema_lists_closed_sets() {
    let schema = serde_json::to_string(&schema_for!(Question)).unwrap();
    for literal in ["GROUP D", "Tier 3", "General Intelligence & Reasoning", "Moderate"] {
        assert!(schema.contains(literal), "schema should mention '{literal}'");
    }
}

#[test]
fn schema_rejects_unknown_subject() {
    let schema = serde_json::to_value(schema_for!(Subject)).unwrap();
    let errors = validate_against_schema(&schema, &serde_json::json!("Astrology"));
    assert!(!errors.is_empty());
}
