pub mod card_repository;
