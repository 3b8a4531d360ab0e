//! Plain data types that make up a [`GameState`](crate::state::GameState).
mod common;
mod entities;

pub use common::{Identity, IdentityError, Position};
pub use entities::{Enemies, Entity, Obstacles};
