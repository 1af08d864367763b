pub mod d400_foodcost_overview;

pub use d400_foodcost_overview::ui::FoodCostDashboard;
