pub mod left;
pub mod navbar;
