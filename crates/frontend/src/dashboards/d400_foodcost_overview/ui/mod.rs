pub mod dashboard;

pub use dashboard::FoodCostDashboard;
