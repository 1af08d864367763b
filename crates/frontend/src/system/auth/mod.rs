pub mod api;
pub mod context;
pub mod flow;
pub mod storage;
pub mod validation;
