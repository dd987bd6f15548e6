//! Repositories over the record store.

pub mod drama_repo;

pub use drama_repo::DramaRepo;
