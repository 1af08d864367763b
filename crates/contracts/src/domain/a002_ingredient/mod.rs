pub mod aggregate;

pub use aggregate::{Ingredient, IngredientQuery};
