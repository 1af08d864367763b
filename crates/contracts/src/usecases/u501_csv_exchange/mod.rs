pub mod entity;
pub mod response;

pub use entity::{EntityDescriptor, EntityKind, ENTITIES};
pub use response::ImportSummary;
