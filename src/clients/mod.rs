//! Typed handles over the store actors.

#[macro_use]
mod macros;
mod order_client;

pub use order_client::*;
