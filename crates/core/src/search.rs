//! Free-text catalog search.
//!
//! Matching is plain case-insensitive substring containment over the title,
//! the description and each keyword. There is no ranking: results keep the
//! order of the input collection.

use crate::drama::DramaRecord;

/// Whether `record` contains `needle` in its title, description or any
/// keyword. `needle` must already be lowercased.
pub fn matches(record: &DramaRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record
            .keywords
            .iter()
            .any(|keyword| keyword.to_lowercase().contains(needle))
        || record.description.to_lowercase().contains(needle)
}

/// Filter `records` down to those matching `query`.
///
/// An empty query matches every record.
pub fn search(records: &[DramaRecord], query: &str) -> Vec<DramaRecord> {
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|record| matches(record, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{default_catalog, sample_catalog};

    fn titles(records: &[DramaRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let catalog = sample_catalog();
        assert_eq!(search(&catalog, "").len(), catalog.len());
    }

    #[test]
    fn matches_title_substring() {
        let results = search(&default_catalog(), "霸道");
        assert_eq!(titles(&results), vec!["霸道总裁爱上我"]);
    }

    #[test]
    fn matches_keyword_substring() {
        let results = search(&default_catalog(), "古装");
        assert_eq!(titles(&results), vec!["神医王妃"]);
    }

    #[test]
    fn matches_description_substring() {
        let results = search(&sample_catalog(), "保镖");
        assert_eq!(titles(&results), vec!["校花的贴身高手"]);
    }

    #[test]
    fn is_case_insensitive() {
        let mut catalog = default_catalog();
        catalog[0].title = "CEO Romance".to_string();

        assert_eq!(search(&catalog, "ceo").len(), 1);
        assert_eq!(search(&catalog, "ROMANCE").len(), 1);
    }

    #[test]
    fn preserves_input_order() {
        let results = search(&sample_catalog(), "逆袭");
        let ids: Vec<_> = results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 5]);
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(search(&sample_catalog(), "不存在的关键词").is_empty());
    }
}
