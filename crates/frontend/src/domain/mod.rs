pub mod a001_order;
pub mod a002_ingredient;
pub mod a003_inventory;
pub mod a004_rider;
