use crate::{Card, CardPatch, CardStatus};

use chrono::{Duration, Utc};

fn existing_card() -> Card {
    Card::new(
        "Review responsive layout".to_string(),
        Some("Design review".to_string()),
        CardStatus::Todo,
    )
}

#[test]
fn test_empty_patch_detection() {
    assert!(CardPatch::default().is_empty());

    let patch = CardPatch {
        status: Some(CardStatus::Done),
        ..CardPatch::default()
    };
    assert!(!patch.is_empty());
}

#[test]
fn test_apply_changes_only_supplied_fields() {
    let card = existing_card();
    let now = Utc::now() + Duration::seconds(5);

    let patch = CardPatch {
        description: Some("Review the new layout".to_string()),
        status: Some(CardStatus::Doing),
        ..CardPatch::default()
    };
    let updated = card.apply(&patch, now);

    // Absent fields are bit-for-bit unchanged
    assert_eq!(updated.title, card.title);
    assert_eq!(updated.id, card.id);
    assert_eq!(updated.created_at, card.created_at);

    // Present fields carry exactly the new values
    assert_eq!(updated.description, "Review the new layout");
    assert_eq!(updated.status, CardStatus::Doing);
}

#[test]
fn test_apply_refreshes_updated_at_unconditionally() {
    let card = existing_card();
    let now = Utc::now() + Duration::seconds(30);

    let patch = CardPatch {
        title: Some("Design review round 2".to_string()),
        ..CardPatch::default()
    };
    let updated = card.apply(&patch, now);

    assert_eq!(updated.updated_at, now);
    assert!(updated.updated_at >= updated.created_at);
}

#[test]
fn test_apply_does_not_mutate_the_original() {
    let card = existing_card();
    let patch = CardPatch {
        status: Some(CardStatus::Done),
        ..CardPatch::default()
    };

    let _updated = card.apply(&patch, Utc::now());

    assert_eq!(card.status, CardStatus::Todo);
}
