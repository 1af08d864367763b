pub mod api;
pub mod panel;
pub mod view;

pub use view::CsvExchangePage;
