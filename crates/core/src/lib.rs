//! Core domain types for the Ojakh recipe catalog and the Nvag chord reference.
//!
//! This crate contains types shared across the storage and HTTP crates.

mod chord;
mod constants;
mod env_config;
mod recipe;

pub use chord::*;
pub use constants::*;
pub use env_config::*;
pub use recipe::*;
