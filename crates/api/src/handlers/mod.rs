//! Request handlers.
//!
//! Handlers delegate to [`drama_db::repositories::DramaRepo`] and map
//! failures via [`crate::error::AppError`].

pub mod drama;
pub mod search;
