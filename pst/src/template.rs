//! CustomTemplate domain type
//!
//! A user-authored prompt record, as opposed to the read-only catalog
//! entries shipped with the application.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Optional free-text classification attached to a template
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
}

impl TemplateMetadata {
    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.jurisdiction.is_none() && self.tone.is_none() && self.audience.is_none()
    }
}

/// A user-authored prompt template.
///
/// Serialized field names are camelCase: that is the shape the collection
/// is persisted in, and the shape export and import exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTemplate {
    /// Unique identifier, generated at creation
    pub id: String,

    /// Display name
    pub name: String,

    /// The prompt body
    pub prompt: String,

    /// Free-form labels; also used as the variable list when scoring
    #[serde(default)]
    pub tags: Vec<String>,

    /// Creation timestamp (ISO-8601 on the wire)
    pub created_at: DateTime<Utc>,

    /// Last mutation timestamp, refreshed by every field edit
    pub updated_at: DateTime<Utc>,

    /// Optional jurisdiction/tone/audience strings
    #[serde(default)]
    pub metadata: TemplateMetadata,
}

/// Alphabet for generated id suffixes (lowercase base 36)
const ID_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random id suffix
const ID_SUFFIX_LEN: usize = 8;

fn generate_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_CHARSET[rng.random_range(0..ID_CHARSET.len())] as char)
        .collect();
    format!("tmpl_{suffix}")
}

impl CustomTemplate {
    /// Create a blank template with a fresh id and current timestamps
    pub fn blank() -> Self {
        let now = Utc::now();
        Self {
            id: generate_id(),
            name: "Untitled Template".to_string(),
            prompt: String::new(),
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
            metadata: TemplateMetadata::default(),
        }
    }

    /// Copy into a new template: fresh id and timestamps, " (Copy)" name
    pub fn duplicate(&self) -> Self {
        let now = Utc::now();
        Self {
            id: generate_id(),
            name: format!("{} (Copy)", self.name),
            prompt: self.prompt.clone(),
            tags: self.tags.clone(),
            created_at: now,
            updated_at: now,
            metadata: self.metadata.clone(),
        }
    }

    /// Rename the template
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    /// Replace the prompt body
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
        self.touch();
    }

    /// Replace the tag set
    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = tags;
        self.touch();
    }

    /// Replace the metadata block
    pub fn set_metadata(&mut self, metadata: TemplateMetadata) {
        self.metadata = metadata;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_defaults() {
        let t = CustomTemplate::blank();
        assert_eq!(t.name, "Untitled Template");
        assert!(t.prompt.is_empty());
        assert!(t.tags.is_empty());
        assert!(t.metadata.is_empty());
        assert_eq!(t.created_at, t.updated_at);
    }

    #[test]
    fn test_blank_id_shape() {
        let t = CustomTemplate::blank();
        let suffix = t.id.strip_prefix("tmpl_").expect("id should carry the tmpl_ prefix");
        assert_eq!(suffix.len(), ID_SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_blank_ids_are_distinct() {
        let a = CustomTemplate::blank();
        let b = CustomTemplate::blank();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_duplicate_copies_fields_under_new_id() {
        let mut original = CustomTemplate::blank();
        original.set_name("Demand Letter");
        original.set_prompt("Draft a demand letter.");
        original.set_tags(vec!["contracts".to_string()]);
        original.set_metadata(TemplateMetadata {
            jurisdiction: Some("Delaware".to_string()),
            ..Default::default()
        });

        let copy = original.duplicate();
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.name, "Demand Letter (Copy)");
        assert_eq!(copy.prompt, original.prompt);
        assert_eq!(copy.tags, original.tags);
        assert_eq!(copy.metadata, original.metadata);
        assert!(copy.created_at >= original.created_at);
        assert_eq!(copy.created_at, copy.updated_at);
    }

    #[test]
    fn test_edits_refresh_updated_at() {
        let mut t = CustomTemplate::blank();
        let created = t.created_at;

        t.set_prompt("Summarize the attached brief.");
        assert!(t.updated_at >= created);
        assert_eq!(t.created_at, created);

        let after_prompt = t.updated_at;
        t.set_tags(vec!["litigation".to_string()]);
        assert!(t.updated_at >= after_prompt);
    }

    #[test]
    fn test_serde_uses_camel_case_wire_names() {
        let t = CustomTemplate::blank();
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
        assert!(!json.contains("\"created_at\""));
    }

    #[test]
    fn test_empty_metadata_serializes_as_empty_object() {
        let t = CustomTemplate::blank();
        let value = serde_json::to_value(&t).unwrap();
        assert_eq!(value["metadata"], serde_json::json!({}));
    }
}
