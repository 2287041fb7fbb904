mod common;

use common::{create_pinned_card, create_test_card, create_test_pool};

use kanban_core::{Card, CardPatch, CardStatus};
use kanban_db::CardRepository;

use chrono::{Duration, Utc};
use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_valid_card_when_created_then_can_be_found_by_id() {
    // Given: A test database
    let pool = create_test_pool().await;
    let card = Card::new(
        "Prepare the next sprint backlog".to_string(),
        Some("Sprint planning".to_string()),
        CardStatus::Todo,
    );

    // When: Creating the card
    CardRepository::create(&pool, &card).await.unwrap();

    // Then: Finding by ID returns the card
    let result = CardRepository::find_by_id(&pool, card.id).await.unwrap();

    assert_that!(result, some(anything()));
    let found = result.unwrap();
    assert_that!(found.id, eq(card.id));
    assert_that!(found.title, eq(&card.title));
    assert_that!(found.description, eq(&card.description));
    assert_that!(found.status, eq(CardStatus::Todo));
    assert_that!(found.created_at.timestamp(), eq(card.created_at.timestamp()));
}

#[tokio::test]
async fn given_card_without_title_when_created_then_title_round_trips_as_none() {
    // Given
    let pool = create_test_pool().await;
    let card = create_test_card("No title here", CardStatus::Doing);

    // When
    CardRepository::create(&pool, &card).await.unwrap();

    // Then
    let found = CardRepository::find_by_id(&pool, card.id)
        .await
        .unwrap()
        .unwrap();
    assert_that!(found.title, none());
}

#[tokio::test]
async fn given_empty_database_when_finding_nonexistent_id_then_returns_none() {
    // Given: An empty database
    let pool = create_test_pool().await;

    // When: Finding a card that doesn't exist
    let result = CardRepository::find_by_id(&pool, Uuid::new_v4())
        .await
        .unwrap();

    // Then: Returns None
    assert_that!(result, none());
}

#[tokio::test]
async fn given_status_filter_when_listing_then_total_counts_only_matches() {
    // Given: 3 todo cards and 2 done cards
    let pool = create_test_pool().await;
    for i in 0..3 {
        let card = create_test_card(&format!("todo {}", i), CardStatus::Todo);
        CardRepository::create(&pool, &card).await.unwrap();
    }
    for i in 0..2 {
        let card = create_test_card(&format!("done {}", i), CardStatus::Done);
        CardRepository::create(&pool, &card).await.unwrap();
    }

    // When: Listing page 1 of size 2, filtered to todo
    let (items, total) = CardRepository::list(&pool, Some(CardStatus::Todo), 1, 2)
        .await
        .unwrap();

    // Then: 2 items, total is the filtered count, not the table count
    assert_that!(items.len(), eq(2));
    assert_that!(total, eq(3));

    // And: page 2 holds exactly the remaining match
    let (rest, total) = CardRepository::list(&pool, Some(CardStatus::Todo), 2, 2)
        .await
        .unwrap();
    assert_that!(rest.len(), eq(1));
    assert_that!(total, eq(3));

    // And: the unfiltered total differs
    let (_, unfiltered) = CardRepository::list(&pool, None, 1, 10).await.unwrap();
    assert_that!(unfiltered, eq(5));
}

#[tokio::test]
async fn given_cards_with_distinct_timestamps_when_listing_then_newest_first() {
    // Given
    let pool = create_test_pool().await;
    let older = create_pinned_card("00000000-0000-0000-0000-000000000001", 1_000, CardStatus::Todo);
    let newer = create_pinned_card("00000000-0000-0000-0000-000000000002", 2_000, CardStatus::Todo);
    CardRepository::create(&pool, &older).await.unwrap();
    CardRepository::create(&pool, &newer).await.unwrap();

    // When
    let (items, _) = CardRepository::list(&pool, None, 1, 10).await.unwrap();

    // Then
    assert_that!(items[0].id, eq(newer.id));
    assert_that!(items[1].id, eq(older.id));
}

#[tokio::test]
async fn given_cards_with_equal_timestamps_when_listing_then_larger_id_first() {
    // Given: Two cards sharing a created_at second
    let pool = create_test_pool().await;
    let low = create_pinned_card("00000000-0000-0000-0000-00000000000a", 1_000, CardStatus::Todo);
    let high = create_pinned_card("00000000-0000-0000-0000-00000000000b", 1_000, CardStatus::Todo);
    CardRepository::create(&pool, &low).await.unwrap();
    CardRepository::create(&pool, &high).await.unwrap();

    // When
    let (items, _) = CardRepository::list(&pool, None, 1, 10).await.unwrap();

    // Then: id descending breaks the tie deterministically
    assert_that!(items[0].id, eq(high.id));
    assert_that!(items[1].id, eq(low.id));
}

#[tokio::test]
async fn given_patched_card_when_updated_then_only_patched_fields_persist() {
    // Given: A persisted card with a title
    let pool = create_test_pool().await;
    let card = Card::new(
        "Connect frontend board to backend".to_string(),
        Some("API integration".to_string()),
        CardStatus::Todo,
    );
    CardRepository::create(&pool, &card).await.unwrap();

    // When: Applying a description+status patch and persisting it
    let patch = CardPatch {
        description: Some("Connect board to the new backend".to_string()),
        status: Some(CardStatus::Doing),
        ..CardPatch::default()
    };
    let now = Utc::now() + Duration::seconds(10);
    let updated = card.apply(&patch, now);
    CardRepository::update(&pool, &updated).await.unwrap();

    // Then: Title untouched, patched fields and updated_at persisted
    let found = CardRepository::find_by_id(&pool, card.id)
        .await
        .unwrap()
        .unwrap();
    assert_that!(found.title.as_deref(), some(eq("API integration")));
    assert_that!(found.description, eq("Connect board to the new backend"));
    assert_that!(found.status, eq(CardStatus::Doing));
    assert_that!(found.updated_at.timestamp(), eq(now.timestamp()));
    assert_that!(found.created_at.timestamp(), eq(card.created_at.timestamp()));
    assert_that!(found.updated_at >= found.created_at, eq(true));
}

#[tokio::test]
async fn given_existing_card_when_deleted_then_gone_and_one_row_affected() {
    // Given
    let pool = create_test_pool().await;
    let card = create_test_card("Short lived", CardStatus::Todo);
    CardRepository::create(&pool, &card).await.unwrap();

    // When
    let rows = CardRepository::delete(&pool, card.id).await.unwrap();

    // Then
    assert_that!(rows, eq(1));
    let found = CardRepository::find_by_id(&pool, card.id).await.unwrap();
    assert_that!(found, none());
}

#[tokio::test]
async fn given_missing_card_when_deleted_then_zero_rows_affected() {
    // Given
    let pool = create_test_pool().await;

    // When
    let rows = CardRepository::delete(&pool, Uuid::new_v4()).await.unwrap();

    // Then
    assert_that!(rows, eq(0));
}

#[tokio::test]
async fn given_empty_then_seeded_table_when_has_any_then_flips() {
    // Given
    let pool = create_test_pool().await;
    assert_that!(CardRepository::has_any(&pool).await.unwrap(), eq(false));

    // When
    let card = create_test_card("First card", CardStatus::Todo);
    CardRepository::create(&pool, &card).await.unwrap();

    // Then
    assert_that!(CardRepository::has_any(&pool).await.unwrap(), eq(true));
}
