//! Domain-focused tests for identifiers, priorities, drafts, and comments.
#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use crate::board::domain::{
    BoardDomainError, ColumnId, Comment, ParsePriorityError, Priority, TaskDraft, TaskPatch,
    UserId,
};
use crate::board::tests::fixtures::user_id;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
#[case(Priority::Low, "low")]
#[case(Priority::Medium, "medium")]
#[case(Priority::High, "high")]
fn priority_round_trips_canonical_strings(#[case] priority: Priority, #[case] canonical: &str) {
    assert_eq!(priority.as_str(), canonical);
    assert_eq!(Priority::try_from(canonical).expect("parses"), priority);
}

#[rstest]
fn priority_parse_normalizes_case_and_whitespace() {
    assert_eq!(Priority::try_from("  HIGH "), Ok(Priority::High));
}

#[rstest]
fn priority_parse_rejects_unknown_values() {
    assert_eq!(
        Priority::try_from("urgent"),
        Err(ParsePriorityError("urgent".to_owned()))
    );
}

#[rstest]
fn priority_defaults_to_medium() {
    assert_eq!(Priority::default(), Priority::Medium);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("to do")]
fn column_id_rejects_blank_or_spaced_tokens(#[case] raw: &str) {
    assert_eq!(
        ColumnId::new(raw),
        Err(BoardDomainError::InvalidColumnId(raw.to_owned()))
    );
}

#[rstest]
fn column_id_trims_surrounding_whitespace() {
    let id = ColumnId::new(" todo ").expect("valid after trim");
    assert_eq!(id.as_str(), "todo");
}

#[rstest]
fn user_id_rejects_blank_tokens() {
    assert_eq!(
        UserId::new(""),
        Err(BoardDomainError::InvalidUserId(String::new()))
    );
}

#[rstest]
fn task_draft_rejects_empty_title() {
    assert_eq!(
        TaskDraft::new("  "),
        Err(BoardDomainError::EmptyTaskTitle)
    );
}

#[rstest]
fn task_patch_rejects_empty_title() {
    assert_eq!(
        TaskPatch::new().with_title("\t"),
        Err(BoardDomainError::EmptyTaskTitle)
    );
}

#[rstest]
fn empty_patch_compares_equal_to_default() {
    assert_eq!(TaskPatch::new(), TaskPatch::default());
}

#[rstest]
fn comment_rejects_blank_content(clock: DefaultClock) {
    assert_eq!(
        Comment::new(user_id("alice"), "   ", &clock),
        Err(BoardDomainError::EmptyCommentContent)
    );
}

#[rstest]
fn comment_carries_author_and_content(clock: DefaultClock) {
    let comment = Comment::new(user_id("alice"), "Looks good to me", &clock)
        .expect("valid comment");

    assert_eq!(comment.author(), &user_id("alice"));
    assert_eq!(comment.content(), "Looks good to me");
}

#[rstest]
fn comments_get_distinct_identifiers(clock: DefaultClock) {
    let first = Comment::new(user_id("alice"), "first", &clock).expect("valid comment");
    let second = Comment::new(user_id("alice"), "second", &clock).expect("valid comment");

    assert_ne!(first.id(), second.id());
}
