#![allow(clippy::unwrap_used, clippy::expect_used)]

use labeldiff_core::comparer::{comparable, Comparers};
use labeldiff_core::core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND,
    FIELD_LABEL, FIELD_LEFT_LEN, FIELD_MISMATCHES, FIELD_RIGHT_LEN, FIELD_TYPE_NAME,
};
use labeldiff_core::logging_facility::test_capture::init_test_capture;
use labeldiff_core::{check_diff, log_op_end, log_op_error, log_op_start, render_diff, Mismatch};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    assert!(
        !capture.events_for(op_name, EVENT_START).is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events = capture.events_for(op_name, EVENT_END);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_from_mismatch() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = Mismatch::Length { left: 1, right: 2 }.labeled("items");
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events = capture.events_for(op_name, EVENT_END_ERROR);
    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(
        error_events[0].field(FIELD_ERR_CODE),
        Some("ERR_LENGTH_MISMATCH")
    );
    assert_eq!(error_events[0].field(FIELD_ERR_KIND), Some("LengthMismatch"));
}

#[test]
fn test_log_macros_with_multiple_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_macros_fields_unique_4";

    log_op_start!(op_name, label = "Items", depth = 3u64);

    let start = capture
        .events()
        .into_iter()
        .find(|e| e.op.as_deref() == Some(op_name))
        .expect("Should have start event");
    assert_eq!(start.field(FIELD_LABEL), Some("Items"));
    assert_eq!(start.field("depth"), Some("3"));
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_render_diff_logs_start_and_end() {
    let capture = init_test_capture();

    let diff = render_diff(&1, &2, |v: &i32| -> Comparers { vec![comparable("v", *v)] });
    assert_eq!(diff, "v: 1 != 2");

    capture.assert_event_exists("render_diff", EVENT_START);
    let with_one_mismatch = capture.count_events(|e| {
        e.op.as_deref() == Some("render_diff")
            && e.event.as_deref() == Some(EVENT_END)
            && e.field(FIELD_MISMATCHES) == Some("1")
    });
    assert!(with_one_mismatch >= 1);
}

#[test]
fn test_check_diff_logs_error_event() {
    let capture = init_test_capture();

    let result = check_diff(&"a".to_string(), &"b".to_string(), |v: &String| -> Comparers {
        vec![comparable("check_diff_logging_field", v.clone())]
    });
    assert!(result.is_err());

    let errors = capture.events_for("check_diff", EVENT_END_ERROR);
    assert!(errors
        .iter()
        .any(|e| e.field(FIELD_ERR_CODE) == Some("ERR_VALUE_MISMATCH")));
}

#[test]
fn test_arity_mismatch_logs_debug_event() {
    let capture = init_test_capture();

    let diff = render_diff(&17usize, &23usize, |n: &usize| -> Comparers {
        (0..*n).map(|i| comparable("i", i)).collect()
    });
    assert_eq!(diff, "comparers: 17 != 23");

    let found = capture.count_events(|e| {
        e.field(FIELD_LEFT_LEN) == Some("17") && e.field(FIELD_RIGHT_LEN) == Some("23")
    });
    assert_eq!(found, 1);
}

#[test]
fn test_type_mismatch_logs_warning() {
    let capture = init_test_capture();

    let diff = render_diff(&true, &false, |flag: &bool| -> Comparers {
        if *flag {
            vec![comparable("v", 1u16)]
        } else {
            vec![comparable("v", 'c')]
        }
    });
    assert_eq!(diff, "invalid type: char");

    let warnings = capture.count_events(|e| {
        e.level == tracing::Level::WARN
            && e.field("expected") == Some("u16")
            && e.field(FIELD_TYPE_NAME) == Some("char")
    });
    assert_eq!(warnings, 1);
}
