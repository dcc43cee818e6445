// src/storage/mod.rs

//! Local persistence.
//!
//! Only the favorites set outlives the process; list state is always
//! rebuilt from the remote service.

mod favorites;

pub use favorites::Favorites;
