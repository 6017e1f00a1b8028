//! End-to-end flow: extraction (test double) -> resolution -> board.

use async_trait::async_trait;
use chrono::Duration;

use haru_core::board::GoalBoard;
use haru_core::error::CoreError;
use haru_core::extract::GoalExtractor;
use haru_core::models::ExtractedGoal;
use haru_core::resolver::{resolve, Resolution};
use haru_core::zone;

/// Extractor double that answers with a canned record, standing in for the
/// model endpoint.
struct CannedExtractor {
    goal: &'static str,
    deadline: &'static str,
}

#[async_trait]
impl GoalExtractor for CannedExtractor {
    async fn extract(&self, _sentence: &str) -> Result<ExtractedGoal, CoreError> {
        Ok(ExtractedGoal {
            goal: self.goal.to_string(),
            deadline: self.deadline.to_string(),
        })
    }
}

/// Extractor double that always fails, as a broken endpoint would.
struct FailingExtractor;

#[async_trait]
impl GoalExtractor for FailingExtractor {
    async fn extract(&self, _sentence: &str) -> Result<ExtractedGoal, CoreError> {
        Err(CoreError::Extraction("model endpoint returned 503".to_string()))
    }
}

#[tokio::test]
async fn submitted_sentence_becomes_a_tracked_goal() {
    let now = zone::at(2025, 5, 13, 10, 0, 0).unwrap();
    let extractor = CannedExtractor {
        goal: "보고서 작성",
        deadline: "오늘 오후 6시",
    };
    let mut board = GoalBoard::new();

    let extracted = extractor.extract("오후 6시까지 보고서 작성").await.unwrap();
    let resolution = resolve(&extracted.deadline, now);
    assert_eq!(
        resolution,
        Resolution::Parsed(zone::at(2025, 5, 13, 18, 0, 0).unwrap())
    );

    let goal = board.submit(extracted.goal, resolution.deadline(), now);
    assert_eq!(goal.description, "보고서 작성");
    assert!(!goal.done);

    // Not overdue before the deadline, overdue once it passes, and marking
    // done suppresses the warning regardless of time.
    assert!(!board.list_sorted(now)[0].1);
    let evening = zone::at(2025, 5, 13, 18, 30, 0).unwrap();
    assert!(board.list_sorted(evening)[0].1);
    board.mark_done(0).unwrap();
    assert!(!board.list_sorted(evening)[0].1);
}

#[tokio::test]
async fn fallback_resolution_still_yields_a_goal() {
    let now = zone::at(2025, 5, 13, 21, 40, 0).unwrap();
    let extractor = CannedExtractor {
        goal: "친구에게 전화",
        deadline: "나중에",
    };
    let mut board = GoalBoard::new();

    let extracted = extractor.extract("나중에 친구에게 전화하기").await.unwrap();
    let resolution = resolve(&extracted.deadline, now);
    assert!(resolution.is_fallback());
    assert_eq!(resolution.deadline(), now + Duration::hours(1));

    board.submit(extracted.goal, resolution.deadline(), now);
    assert_eq!(board.len(), 1);
}

#[tokio::test]
async fn failed_extraction_drops_the_submission() {
    let now = zone::at(2025, 5, 13, 10, 0, 0).unwrap();
    let mut board = GoalBoard::new();

    let err = FailingExtractor.extract("오늘 안에 청소").await.unwrap_err();
    assert!(matches!(err, CoreError::Extraction(_)));

    // The caller never reaches submit; the board is untouched.
    assert!(board.is_empty());
    board.clear_all();
    assert!(board.is_empty());
}

#[tokio::test]
async fn mixed_day_goals_sort_across_the_midnight_boundary() {
    let now = zone::at(2025, 5, 13, 23, 55, 0).unwrap();
    let mut board = GoalBoard::new();

    let tomorrow = resolve("내일 오전 9시", now);
    board.submit("제출".to_string(), tomorrow.deadline(), now);
    let tonight = resolve("밤 11시", now);
    board.submit("정리".to_string(), tonight.deadline(), now);

    let view = board.list_sorted(now);
    assert_eq!(view[0].0.description, "정리");
    assert!(view[0].1, "23:00 tonight already passed at 23:55");
    assert_eq!(view[1].0.description, "제출");
    assert!(!view[1].1);

    // Display format switches once the deadline leaves now's date.
    assert_eq!(zone::format_deadline(view[0].0.deadline, now), "23:00");
    assert_eq!(zone::format_deadline(view[1].0.deadline, now), "05월 14일 09:00");
}
