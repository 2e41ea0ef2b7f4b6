//! Serde roundtrip and JsonSchema validation tests for entity and response types.

use chrono::Utc;
use pset_core::entities::*;
use pset_core::enums::*;
use pset_core::responses::*;
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

fn sample_task() -> Task {
    Task {
        id: "tsk-a3f8b2c1".into(),
        task_id: "task_1700000000123".into(),
        title: "Math problem set (3 problems)".into(),
        user_id: "anon-9f1c2b7d3e4a5f60".into(),
        conversation_id: "conv_1700000000123".into(),
        status: TaskStatus::NotStarted,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

roundtrip_and_validate!(task_roundtrip, Task, sample_task());

roundtrip_and_validate!(
    task_filter_roundtrip,
    TaskFilter,
    TaskFilter {
        user_id: Some("anon-9f1c2b7d3e4a5f60".into()),
        status: Some(TaskStatus::InProgress),
        ..TaskFilter::default()
    }
);

roundtrip_and_validate!(
    problem_roundtrip,
    Problem,
    Problem {
        id: "prb-0c1d2e3f".into(),
        task_id: "task_1700000000123".into(),
        problem_key: "content1".into(),
        content: "Solve \\[x^2 = 4\\]".into(),
        answered: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    session_roundtrip,
    Session,
    Session {
        user_id: "anon-9f1c2b7d3e4a5f60".into(),
        token: "0123456789abcdef0123456789abcdef".into(),
        anonymous: true,
        created_at: Utc::now(),
        expires_at: Utc::now() + chrono::Duration::hours(1),
    }
);

roundtrip_and_validate!(
    import_preview_roundtrip,
    ImportPreview,
    ImportPreview {
        method: RecoveryMethod::Preprocessed,
        count: 2,
        entries: vec![
            ProblemEntry {
                index: "1".into(),
                key: "content1".into(),
                content: "first".into(),
            },
            ProblemEntry {
                index: "2".into(),
                key: "content2".into(),
                content: String::new(),
            },
        ],
    }
);

roundtrip_and_validate!(
    import_report_roundtrip,
    ImportReport,
    ImportReport {
        task: sample_task(),
        method: Some(RecoveryMethod::Direct),
        outcomes: vec![
            EntryOutcome::Created {
                key: "content1".into(),
                problem_id: "prb-0c1d2e3f".into(),
            },
            EntryOutcome::Failed {
                key: "content2".into(),
                error: "Validation error: content is required".into(),
            },
        ],
        created: 1,
        failed: 1,
    }
);

roundtrip_and_validate!(
    transition_response_roundtrip,
    TransitionResponse,
    TransitionResponse {
        task: sample_task(),
        from: TaskStatus::NotStarted,
        to: TaskStatus::InProgress,
    }
);

roundtrip_and_validate!(
    auth_status_roundtrip,
    AuthStatusResponse,
    AuthStatusResponse {
        authenticated: false,
        user_id: None,
        anonymous: None,
        expires_at: None,
        session_path: ".pset/session.json".into(),
    }
);

#[test]
fn entry_outcome_is_tagged() {
    let outcome = EntryOutcome::Failed {
        key: "content7".into(),
        error: "boom".into(),
    };
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["outcome"], "failed");
    assert_eq!(outcome.key(), "content7");
    assert!(!outcome.is_created());
}

#[test]
fn task_filter_matches_all_set_fields() {
    let task = sample_task();
    assert!(TaskFilter::default().matches(&task));
    assert!(TaskFilter::default().is_empty());

    let by_user = TaskFilter {
        user_id: Some(task.user_id.clone()),
        status: Some(TaskStatus::NotStarted),
        ..TaskFilter::default()
    };
    assert!(by_user.matches(&task));

    let wrong_status = TaskFilter {
        user_id: Some(task.user_id.clone()),
        status: Some(TaskStatus::Completed),
        ..TaskFilter::default()
    };
    assert!(!wrong_status.matches(&task));
}

#[test]
fn session_expiry() {
    let now = Utc::now();
    let session = Session {
        user_id: "u-1".into(),
        token: "t".into(),
        anonymous: false,
        created_at: now - chrono::Duration::hours(2),
        expires_at: now - chrono::Duration::hours(1),
    };
    assert!(session.is_expired());
    assert!(session.is_near_expiry(60));
    let identity = session.to_identity();
    assert_eq!(identity.user_id, "u-1");
    assert!(!identity.anonymous);
}
