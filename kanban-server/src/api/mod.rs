pub mod cards;
pub mod error;
