//! Wire types shared between the DataDash dashboard and the food-cost REST API.

pub mod domain;
pub mod projections;
pub mod system;
pub mod usecases;
