pub mod data_table;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
