use crate::{Card, CardStatus};

#[test]
fn test_new_card_defaults() {
    let card = Card::new("Write the report".to_string(), None, CardStatus::default());

    assert_eq!(card.title, None);
    assert_eq!(card.description, "Write the report");
    assert_eq!(card.status, CardStatus::Todo);
    assert_eq!(card.created_at, card.updated_at);
}

#[test]
fn test_new_card_keeps_supplied_fields() {
    let card = Card::new(
        "Connect the board".to_string(),
        Some("API integration".to_string()),
        CardStatus::Doing,
    );

    assert_eq!(card.title.as_deref(), Some("API integration"));
    assert_eq!(card.status, CardStatus::Doing);
}

#[test]
fn test_new_cards_get_distinct_ids() {
    let a = Card::new("a".to_string(), None, CardStatus::Todo);
    let b = Card::new("b".to_string(), None, CardStatus::Todo);
    assert_ne!(a.id, b.id);
}
