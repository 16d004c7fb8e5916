use super::*;

// =============================================================
// ConversationState ordinals
// =============================================================

#[test]
fn state_default_has_zero_questions() {
    let state = ConversationState::default();
    assert_eq!(state.question_count, 0);
}

#[test]
fn next_ordinal_increments_by_one() {
    let mut state = ConversationState::default();
    assert_eq!(state.next_ordinal(), 1);
    assert_eq!(state.next_ordinal(), 2);
    assert_eq!(state.next_ordinal(), 3);
    assert_eq!(state.question_count, 3);
}

// =============================================================
// Question validation
// =============================================================

#[test]
fn validate_rejects_empty_question() {
    assert_eq!(validate_question(""), Err(ClientError::EmptyQuestion));
}

#[test]
fn validate_rejects_whitespace_only_question() {
    assert_eq!(validate_question("   \t\n"), Err(ClientError::EmptyQuestion));
}

#[test]
fn validate_accepts_untrimmed_text() {
    assert_eq!(validate_question("  旅客运输量  "), Ok(()));
}

// =============================================================
// Placeholder shrink latch
// =============================================================

#[test]
fn placeholder_unmeasured_has_no_height() {
    let p = Placeholder::default();
    assert!(p.is_active());
    assert_eq!(p.css_height(), None);
}

#[test]
fn placeholder_first_measurement_wins() {
    let mut p = Placeholder::default();
    p.measure(300.0);
    p.measure(50.0);
    assert_eq!(p.css_height(), Some("300px".to_owned()));
}

#[test]
fn placeholder_shrinks_by_overflow() {
    let mut p = Placeholder::default();
    p.measure(300.0);
    p.absorb(120.0);
    assert!(p.is_active());
    assert_eq!(p.css_height(), Some("180px".to_owned()));
}

#[test]
fn placeholder_clamps_to_zero_and_latches() {
    let mut p = Placeholder::default();
    p.measure(100.0);
    p.absorb(150.0);
    assert!(!p.is_active());
    assert_eq!(p.css_height(), Some("0px".to_owned()));
}

#[test]
fn placeholder_never_reactivates() {
    let mut p = Placeholder::default();
    p.measure(100.0);
    p.absorb(100.0);
    assert!(!p.is_active());

    // Further appends (even with negative overflow) must not grow it back.
    p.absorb(-500.0);
    p.measure(400.0);
    assert!(!p.is_active());
    assert_eq!(p.css_height(), Some("0px".to_owned()));
}

#[test]
fn placeholder_absorb_before_measure_is_inert() {
    let mut p = Placeholder::default();
    p.absorb(50.0);
    assert!(p.is_active());
    assert_eq!(p.css_height(), None);
}

// =============================================================
// TranscriptEntry labels and classes
// =============================================================

#[test]
fn question_entry_label_and_class() {
    let entry = TranscriptEntry::Question {
        ordinal: 1,
        body: "旅客运输量".to_owned(),
    };
    assert_eq!(entry.label().as_deref(), Some("[Q1]："));
    assert_eq!(entry.kind_class(), "question");
    assert_eq!(entry.ordinal(), 1);
}

#[test]
fn answer_entry_label_and_class() {
    let entry = TranscriptEntry::Answer {
        ordinal: 7,
        body: "2023年旅客运输量增长".to_owned(),
        chart_count: 2,
    };
    assert_eq!(entry.label().as_deref(), Some("[A7]："));
    assert_eq!(entry.kind_class(), "answer");
}

#[test]
fn error_entry_has_no_label_but_keeps_ordinal() {
    let entry = TranscriptEntry::Error {
        ordinal: 3,
        body: "请求失败：500 Internal Server Error".to_owned(),
    };
    assert_eq!(entry.label(), None);
    assert_eq!(entry.kind_class(), "answer-error");
    assert_eq!(entry.ordinal(), 3);
}
