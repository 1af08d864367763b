pub mod aggregate;

pub use aggregate::{Rider, RiderPerformance};
