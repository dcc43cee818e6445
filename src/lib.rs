// src/lib.rs

//! storescout Library
//!
//! Headless browsing engine for a cashback store catalog: canonical query
//! construction, paginated fetching with stale-response protection, address
//! bar synchronization, and a persisted favorites set.

pub mod catalog;
pub mod error;
pub mod models;
pub mod nav;
pub mod query;
pub mod services;
pub mod storage;
