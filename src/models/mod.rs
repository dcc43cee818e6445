// src/models/mod.rs

//! Domain models for the catalog application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod category;
mod config;
mod page;
mod store;

// Re-export all public types
pub use category::Category;
pub use config::{ApiConfig, Config, ScrollConfig};
pub use page::ResultPage;
pub use store::{AmountType, RateType, Store, StoreStatus};
