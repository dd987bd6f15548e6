//! Domain model and query logic for the short-drama catalog.
//!
//! This crate has no I/O: storage lives in `drama-db` and the HTTP surface
//! in `drama-api`.

pub mod drama;
pub mod error;
pub mod search;
pub mod seed;
pub mod types;
