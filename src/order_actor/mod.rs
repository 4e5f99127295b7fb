//! Order-specific domain logic: how the store creates, patches, and moves
//! orders through their status workflow.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
