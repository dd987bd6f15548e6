/// Catalog identifiers are positive integers assigned by the store.
pub type DramaId = i64;
