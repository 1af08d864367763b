pub mod p900_food_cost;
pub mod p901_product_margin;
