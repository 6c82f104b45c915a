use super::*;
use crate::state::test_helpers;
use roster::Activity;

#[tokio::test]
async fn list_returns_snapshot() {
    let state = test_helpers::test_app_state();
    let mut snapshot = list_activities(&state).await;
    snapshot.clear();
    assert!(!list_activities(&state).await.is_empty());
}

#[tokio::test]
async fn signup_success_message_names_email_and_activity() {
    let state = test_helpers::test_app_state();
    let body = signup(&state, "Basketball Team", "newstudent@mergington.edu").await.unwrap();
    assert_eq!(body.message, "Signed up newstudent@mergington.edu for Basketball Team");
    assert!(
        test_helpers::participants(&state, "Basketball Team")
            .await
            .contains(&"newstudent@mergington.edu".to_owned())
    );
}

#[tokio::test]
async fn signup_duplicate_leaves_catalog_unchanged() {
    let state = test_helpers::test_app_state();
    let before = test_helpers::participants(&state, "Basketball Team").await;
    let err = signup(&state, "Basketball Team", "alex@mergington.edu").await.unwrap_err();
    assert!(matches!(err, RosterError::AlreadySignedUp { .. }));
    assert_eq!(test_helpers::participants(&state, "Basketball Team").await, before);
}

#[tokio::test]
async fn remove_success_message_starts_with_removed() {
    let state = test_helpers::test_app_state();
    let body = remove(&state, "Basketball Team", "alex@mergington.edu").await.unwrap();
    assert!(body.message.starts_with("Removed"));
    assert!(test_helpers::participants(&state, "Basketball Team").await.is_empty());
}

#[tokio::test]
async fn remove_unknown_activity_is_not_found() {
    let state = test_helpers::test_app_state();
    let err = remove(&state, "Nonexistent Activity", "a@mergington.edu").await.unwrap_err();
    assert!(matches!(err, RosterError::ActivityNotFound(_)));
}

#[tokio::test]
async fn concurrent_signups_never_exceed_capacity() {
    let mut catalog = Catalog::new();
    catalog.insert(
        "Tiny Club".to_owned(),
        Activity {
            description: "One seat".to_owned(),
            schedule: "Never".to_owned(),
            max_participants: 3,
            participants: Vec::new(),
        },
    );
    let state = AppState::new(catalog);

    let mut handles = Vec::new();
    for i in 0..16 {
        let state = state.clone();
        handles.push(tokio::spawn(async move {
            signup(&state, "Tiny Club", &format!("student{i}@mergington.edu")).await
        }));
    }

    let mut accepted = 0;
    let mut full = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => accepted += 1,
            Err(RosterError::ActivityFull(_)) => full += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(accepted, 3);
    assert_eq!(full, 13);
    assert_eq!(test_helpers::participants(&state, "Tiny Club").await.len(), 3);
}
