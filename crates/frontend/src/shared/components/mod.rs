pub mod file_drop;
pub mod stat_card;
