pub mod dto;

pub use dto::FoodCost;
