pub mod aggregate;

pub use aggregate::InventoryRow;
