pub mod candidate;
pub mod department;
pub mod enterprise;
pub mod entity;
pub mod interview;
pub mod interviewer;
pub mod location;
pub mod position;

pub use entity::{EntityKind, Listable, StatusCode};
