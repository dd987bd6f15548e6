//! Drama catalog entry and its request DTOs.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::DramaId;

/// Icon used when a record is created without one.
pub const DEFAULT_ICON: &str = "📺";

/// Cover image used when a record is created without one.
pub const DEFAULT_COVER_IMAGE: &str =
    "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=400&h=250&fit=crop";

/// Entity name used in not-found errors.
pub const ENTITY: &str = "短剧";

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DramaRecord {
    pub id: DramaId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pan_url: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

impl DramaRecord {
    /// Shallow-merge `update` over this record. Omitted fields keep their
    /// current value and the id never changes.
    pub fn apply(&mut self, update: UpdateDrama) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(keywords) = update.keywords {
            self.keywords = keywords;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(pan_url) = update.pan_url {
            self.pan_url = pan_url;
        }
        if let Some(icon) = update.icon {
            self.icon = icon;
        }
        if let Some(cover_image) = update.cover_image {
            self.cover_image = cover_image;
        }
    }
}

/// Next identifier for a new record: one past the largest existing id, or
/// `1` for an empty collection. `None` once the largest id is `DramaId::MAX`.
pub fn next_id(records: &[DramaRecord]) -> Option<DramaId> {
    records.iter().map(|r| r.id).max().unwrap_or(0).checked_add(1)
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Payload for creating a record. Every field is optional on the wire; the
/// HTTP layer decides whether to enforce [`CreateDrama::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDrama {
    pub title: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub description: Option<String>,
    pub pan_url: Option<String>,
    pub icon: Option<String>,
    pub cover_image: Option<String>,
}

impl CreateDrama {
    /// Check that the required fields are present and non-blank.
    ///
    /// Returns an empty `Vec` if valid; otherwise a list of human-readable errors.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if is_blank(self.title.as_deref()) {
            errors.push("title is required".to_string());
        }

        match &self.keywords {
            None => errors.push("keywords must contain at least one entry".to_string()),
            Some(keywords) if keywords.is_empty() => {
                errors.push("keywords must contain at least one entry".to_string());
            }
            Some(keywords) => {
                if keywords.iter().any(|k| k.trim().is_empty()) {
                    errors.push("keywords must not contain blank entries".to_string());
                }
            }
        }

        if is_blank(self.description.as_deref()) {
            errors.push("description is required".to_string());
        }

        if is_blank(self.pan_url.as_deref()) {
            errors.push("panUrl is required".to_string());
        }

        errors
    }

    /// Build the stored record, filling defaults for anything left out.
    ///
    /// An empty `icon` or `coverImage` counts as missing.
    pub fn into_record(self, id: DramaId) -> DramaRecord {
        DramaRecord {
            id,
            title: self.title.unwrap_or_default(),
            keywords: self.keywords.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            pan_url: self.pan_url.unwrap_or_default(),
            icon: non_empty(self.icon).unwrap_or_else(default_icon),
            cover_image: Some(
                non_empty(self.cover_image).unwrap_or_else(|| DEFAULT_COVER_IMAGE.to_string()),
            ),
        }
    }
}

/// Partial update. `None` means "keep the current value". For `coverImage`
/// an explicit JSON `null` clears the field (`Some(None)`).
///
/// Unknown fields, including `id`, are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDrama {
    pub title: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub description: Option<String>,
    pub pan_url: Option<String>,
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub cover_image: Option<Option<String>>,
}

/// Distinguish a field that is present (possibly `null`) from one that is absent.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: DramaId) -> DramaRecord {
        DramaRecord {
            id,
            title: format!("title {id}"),
            keywords: vec!["都市".to_string()],
            description: "desc".to_string(),
            pan_url: "https://pan.example/s/1".to_string(),
            icon: "💼".to_string(),
            cover_image: None,
        }
    }

    fn complete_create() -> CreateDrama {
        CreateDrama {
            title: Some("X".to_string()),
            keywords: Some(vec!["a".to_string()]),
            description: Some("d".to_string()),
            pan_url: Some("u".to_string()),
            icon: None,
            cover_image: None,
        }
    }

    // -- next_id -------------------------------------------------------------

    #[test]
    fn next_id_empty_collection_starts_at_one() {
        assert_eq!(next_id(&[]), Some(1));
    }

    #[test]
    fn next_id_uses_max_not_len() {
        let records = vec![record(7), record(2), record(4)];
        assert_eq!(next_id(&records), Some(8));
    }

    #[test]
    fn next_id_at_max_id_is_none() {
        let records = vec![record(1), record(DramaId::MAX)];
        assert_eq!(next_id(&records), None);
    }

    // -- CreateDrama ---------------------------------------------------------

    #[test]
    fn into_record_fills_defaults() {
        let drama = complete_create().into_record(3);

        assert_eq!(drama.id, 3);
        assert_eq!(drama.icon, DEFAULT_ICON);
        assert_eq!(drama.cover_image.as_deref(), Some(DEFAULT_COVER_IMAGE));
    }

    #[test]
    fn into_record_treats_empty_icon_as_missing() {
        let input = CreateDrama {
            icon: Some(String::new()),
            cover_image: Some(String::new()),
            ..complete_create()
        };
        let drama = input.into_record(1);

        assert_eq!(drama.icon, DEFAULT_ICON);
        assert_eq!(drama.cover_image.as_deref(), Some(DEFAULT_COVER_IMAGE));
    }

    #[test]
    fn into_record_keeps_supplied_icon_and_cover() {
        let input = CreateDrama {
            icon: Some("👑".to_string()),
            cover_image: Some("https://img.example/c.png".to_string()),
            ..complete_create()
        };
        let drama = input.into_record(1);

        assert_eq!(drama.icon, "👑");
        assert_eq!(drama.cover_image.as_deref(), Some("https://img.example/c.png"));
    }

    #[test]
    fn into_record_is_permissive_about_missing_fields() {
        let drama = CreateDrama::default().into_record(1);

        assert!(drama.title.is_empty());
        assert!(drama.keywords.is_empty());
    }

    #[test]
    fn validate_accepts_complete_payload() {
        assert!(complete_create().validate().is_empty());
    }

    #[test]
    fn validate_reports_every_missing_field() {
        let errors = CreateDrama::default().validate();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn validate_rejects_blank_keyword() {
        let input = CreateDrama {
            keywords: Some(vec!["a".to_string(), " ".to_string()]),
            ..complete_create()
        };
        let errors = input.validate();
        assert_eq!(errors, vec!["keywords must not contain blank entries"]);
    }

    #[test]
    fn validate_rejects_whitespace_title() {
        let input = CreateDrama {
            title: Some("   ".to_string()),
            ..complete_create()
        };
        assert_eq!(input.validate(), vec!["title is required"]);
    }

    // -- UpdateDrama ---------------------------------------------------------

    #[test]
    fn empty_update_leaves_record_unchanged() {
        let mut drama = record(5);
        let before = drama.clone();
        drama.apply(UpdateDrama::default());
        assert_eq!(drama, before);
    }

    #[test]
    fn update_overwrites_only_supplied_fields() {
        let mut drama = record(5);
        let update: UpdateDrama =
            serde_json::from_value(serde_json::json!({"title": "新标题", "id": 99})).unwrap();
        drama.apply(update);

        assert_eq!(drama.id, 5);
        assert_eq!(drama.title, "新标题");
        assert_eq!(drama.description, "desc");
    }

    #[test]
    fn update_null_cover_image_clears_it() {
        let mut drama = DramaRecord {
            cover_image: Some("https://img.example/c.png".to_string()),
            ..record(1)
        };

        let absent: UpdateDrama = serde_json::from_value(serde_json::json!({})).unwrap();
        drama.apply(absent);
        assert!(drama.cover_image.is_some());

        let null: UpdateDrama =
            serde_json::from_value(serde_json::json!({"coverImage": null})).unwrap();
        drama.apply(null);
        assert_eq!(drama.cover_image, None);
    }

    // -- Serialization -------------------------------------------------------

    #[test]
    fn record_uses_camel_case_keys() {
        let json = serde_json::to_value(DramaRecord {
            cover_image: Some("c".to_string()),
            ..record(1)
        })
        .unwrap();

        assert_eq!(json["panUrl"], "https://pan.example/s/1");
        assert_eq!(json["coverImage"], "c");
    }

    #[test]
    fn stored_record_without_icon_gets_placeholder() {
        let drama: DramaRecord = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "t",
            "keywords": ["k"],
            "description": "d",
            "panUrl": "u"
        }))
        .unwrap();

        assert_eq!(drama.icon, DEFAULT_ICON);
        assert_eq!(drama.cover_image, None);
    }

    #[test]
    fn stored_record_with_missing_text_fields_still_parses() {
        let drama: DramaRecord = serde_json::from_value(serde_json::json!({
            "id": 7,
            "keywords": ["k"],
            "icon": "📺"
        }))
        .unwrap();

        assert_eq!(drama.id, 7);
        assert!(drama.title.is_empty());
        assert!(drama.description.is_empty());
        assert!(drama.pan_url.is_empty());
    }
}
