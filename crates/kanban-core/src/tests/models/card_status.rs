use crate::CardStatus;

use std::str::FromStr;

#[test]
fn test_card_status_as_str() {
    assert_eq!(CardStatus::Todo.as_str(), "todo");
    assert_eq!(CardStatus::Doing.as_str(), "doing");
    assert_eq!(CardStatus::Done.as_str(), "done");
}

#[test]
fn test_card_status_from_str() {
    assert_eq!(CardStatus::from_str("todo").unwrap(), CardStatus::Todo);
    assert_eq!(CardStatus::from_str("doing").unwrap(), CardStatus::Doing);
    assert_eq!(CardStatus::from_str("done").unwrap(), CardStatus::Done);
    assert!(CardStatus::from_str("blocked").is_err());
    assert!(CardStatus::from_str("").is_err());
    assert!(CardStatus::from_str("Todo").is_err());
}

#[test]
fn test_card_status_default() {
    assert_eq!(CardStatus::default(), CardStatus::Todo);
}

#[test]
fn test_card_status_serde_round_trip() {
    let json = serde_json::to_string(&CardStatus::Doing).unwrap();
    assert_eq!(json, "\"doing\"");
    let parsed: CardStatus = serde_json::from_str("\"done\"").unwrap();
    assert_eq!(parsed, CardStatus::Done);
}
