//! Query parameter types for API handlers.

use serde::Deserialize;

/// Search parameters (`?q=`). A missing `q` searches for the empty string,
/// which matches every record.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}
