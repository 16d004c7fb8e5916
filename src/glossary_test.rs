use super::*;

// =============================================================
// No-match behavior
// =============================================================

#[test]
fn annotate_returns_text_unchanged_without_terms() {
    assert_eq!(annotate("今天天气不错"), "今天天气不错");
}

#[test]
fn annotate_is_idempotent_on_term_free_text() {
    let text = "抱歉！小航能力有限，无法回答您这个问题。";
    assert_eq!(annotate(&annotate(text)), annotate(text));
    assert_eq!(annotate(text), text);
}

#[test]
fn annotate_empty_string() {
    assert_eq!(annotate(""), "");
}

// =============================================================
// Single-annotation contract
// =============================================================

#[test]
fn annotate_wraps_first_occurrence_with_note() {
    let out = annotate("2023年旅客运输量增长");
    assert!(out.starts_with("2023年<span class=\"keyword\">旅客运输量"));
    assert!(out.ends_with("</span></span>增长"));
    assert!(out.contains("<span class=\"keyword-note\">"));
    assert!(out.contains("旅客人次"));
}

#[test]
fn annotate_at_most_one_span_per_call() {
    let out = annotate("旅客运输量与货邮运输量均有增长");
    assert_eq!(out.matches("<span class=\"keyword\">").count(), 1);
}

#[test]
fn annotate_only_first_occurrence_of_the_term() {
    let out = annotate("旅客运输量，还是旅客运输量");
    assert_eq!(out.matches("<span class=\"keyword\">").count(), 1);
    // The second occurrence stays bare.
    assert!(out.ends_with("，还是旅客运输量"));
}

#[test]
fn glossary_order_beats_position_in_text() {
    // 旅客运输量 appears first in the text, but 运输总周转量 comes first
    // in the glossary, so it wins.
    let out = annotate("旅客运输量与运输总周转量");
    assert!(out.contains("<span class=\"keyword\">运输总周转量"));
    assert!(out.starts_with("旅客运输量与<span"));
}
