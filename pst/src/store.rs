//! Template collection persistence and import/export

use std::path::Path;

use eyre::{Context, Result};
use tracing::{debug, warn};

use crate::STORAGE_KEY;
use crate::slot::{FileSlot, KvSlot};
use crate::template::CustomTemplate;

/// The personal template store.
///
/// Wraps a single persisted slot holding the whole collection as one JSON
/// array. Saves overwrite the slot wholesale; last writer wins. Loading is
/// total: malformed slot content degrades to an empty collection.
pub struct TemplateStore {
    slot: Box<dyn KvSlot>,
}

impl TemplateStore {
    /// Open a file-backed store at the given directory
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            slot: Box::new(FileSlot::open(path)?),
        })
    }

    /// Build a store over any slot implementation
    pub fn with_slot(slot: Box<dyn KvSlot>) -> Self {
        Self { slot }
    }

    /// Load the collection; an absent, unreadable, or unparsable slot
    /// yields an empty list
    pub fn load(&self) -> Vec<CustomTemplate> {
        let raw = match self.slot.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(%err, "Slot read failed, treating collection as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<CustomTemplate>>(&raw) {
            Ok(templates) => templates,
            Err(err) => {
                warn!(%err, "Slot content is not a template array, treating collection as empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the slot with the full serialized collection
    pub fn save(&self, templates: &[CustomTemplate]) -> Result<()> {
        let raw = serde_json::to_string(templates).context("Failed to serialize template collection")?;
        self.slot.set(STORAGE_KEY, &raw)?;
        debug!(count = templates.len(), "Saved template collection");
        Ok(())
    }
}

/// Resolve an id, or a unique partial id, to an index in the collection
pub fn find_template(templates: &[CustomTemplate], id: &str) -> Result<usize> {
    if let Some(pos) = templates.iter().position(|t| t.id == id) {
        return Ok(pos);
    }

    let matches: Vec<usize> = templates
        .iter()
        .enumerate()
        .filter(|(_, t)| t.id.contains(id))
        .map(|(pos, _)| pos)
        .collect();

    match matches.as_slice() {
        [pos] => Ok(*pos),
        [] => Err(eyre::eyre!("Template not found: {}", id)),
        _ => Err(eyre::eyre!("Ambiguous template id: {} matches {} templates", id, matches.len())),
    }
}

/// Pretty-printed JSON export of a single template (round-trip-safe)
pub fn export_to_json(template: &CustomTemplate) -> Result<String> {
    serde_json::to_string_pretty(template).context("Failed to serialize template")
}

/// Fixed Markdown rendering: heading, metadata lines, raw prompt body
pub fn export_to_markdown(template: &CustomTemplate) -> String {
    format!(
        "# {}\n\n**Created:** {}\n**Updated:** {}\n**Tags:** {}\n\n## Prompt\n\n{}\n",
        template.name,
        template.created_at.to_rfc3339(),
        template.updated_at.to_rfc3339(),
        template.tags.join(", "),
        template.prompt
    )
}

/// Parse exported JSON back into a template.
///
/// Returns `None` on parse failure or when `id`, `name`, or `prompt` is
/// missing or empty; the caller decides how to report it.
pub fn parse_import(raw: &str) -> Option<CustomTemplate> {
    let template: CustomTemplate = serde_json::from_str(raw).ok()?;
    if template.id.is_empty() || template.name.is_empty() || template.prompt.is_empty() {
        return None;
    }
    Some(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::MemSlot;
    use crate::template::TemplateMetadata;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn mem_store() -> TemplateStore {
        TemplateStore::with_slot(Box::new(MemSlot::default()))
    }

    fn sample() -> CustomTemplate {
        let mut t = CustomTemplate::blank();
        t.set_name("Motion Outline");
        t.set_prompt("Outline a motion to dismiss with citation placeholders.");
        t.set_tags(vec!["litigation".to_string(), "motions".to_string()]);
        t.set_metadata(TemplateMetadata {
            jurisdiction: Some("California".to_string()),
            tone: Some("Formal".to_string()),
            audience: None,
        });
        t
    }

    #[test]
    fn test_load_empty_when_slot_absent() {
        assert!(mem_store().load().is_empty());
    }

    #[test]
    fn test_load_empty_on_unparsable_content() {
        let slot = MemSlot::default();
        slot.set(STORAGE_KEY, "not json at all").unwrap();
        let store = TemplateStore::with_slot(Box::new(slot));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_empty_when_content_is_not_an_array() {
        let slot = MemSlot::default();
        slot.set(STORAGE_KEY, "{\"id\": \"tmpl_abc\"}").unwrap();
        let store = TemplateStore::with_slot(Box::new(slot));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order_and_fields() {
        let store = mem_store();
        let first = sample();
        let second = CustomTemplate::blank();

        store.save(&[first.clone(), second.clone()]).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, vec![first, second]);
    }

    #[test]
    fn test_save_overwrites_previous_collection() {
        let store = mem_store();
        store.save(&[sample()]).unwrap();
        store.save(&[]).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_file_backed_store_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = TemplateStore::open(temp.path().join("store")).unwrap();
        let t = sample();

        store.save(std::slice::from_ref(&t)).unwrap();

        let reopened = TemplateStore::open(temp.path().join("store")).unwrap();
        assert_eq!(reopened.load(), vec![t]);
    }

    #[test]
    fn test_find_template_exact_and_partial() {
        let a = sample();
        let b = CustomTemplate::blank();
        let templates = vec![a.clone(), b.clone()];

        assert_eq!(find_template(&templates, &a.id).unwrap(), 0);
        // unique suffix of the second id resolves too
        let suffix = &b.id[b.id.len() - 6..];
        if !a.id.contains(suffix) {
            assert_eq!(find_template(&templates, suffix).unwrap(), 1);
        }
    }

    #[test]
    fn test_find_template_missing_and_ambiguous() {
        let templates = vec![sample(), CustomTemplate::blank()];
        assert!(find_template(&templates, "no-such-id").is_err());
        // every generated id shares the tmpl_ prefix
        assert!(find_template(&templates, "tmpl_").is_err());
    }

    #[test]
    fn test_export_import_round_trip() {
        let t = sample();
        let json = export_to_json(&t).unwrap();
        assert_eq!(parse_import(&json), Some(t));
    }

    #[test]
    fn test_parse_import_rejects_empty_object() {
        assert_eq!(parse_import("{}"), None);
    }

    #[test]
    fn test_parse_import_rejects_non_json() {
        assert_eq!(parse_import("## Prompt\n\nnot json"), None);
    }

    #[test]
    fn test_parse_import_rejects_missing_required_fields() {
        let t = sample();
        let mut value = serde_json::to_value(&t).unwrap();
        value.as_object_mut().unwrap().remove("prompt");
        assert_eq!(parse_import(&value.to_string()), None);

        let mut value = serde_json::to_value(&t).unwrap();
        value["name"] = serde_json::json!("");
        assert_eq!(parse_import(&value.to_string()), None);
    }

    #[test]
    fn test_parse_import_defaults_tags_and_metadata() {
        let t = sample();
        let mut value = serde_json::to_value(&t).unwrap();
        let obj = value.as_object_mut().unwrap();
        obj.remove("tags");
        obj.remove("metadata");

        let imported = parse_import(&value.to_string()).unwrap();
        assert!(imported.tags.is_empty());
        assert!(imported.metadata.is_empty());
    }

    #[test]
    fn test_markdown_layout() {
        let t = sample();
        let md = export_to_markdown(&t);

        assert!(md.starts_with("# Motion Outline\n\n"));
        assert!(md.contains(&format!("**Created:** {}", t.created_at.to_rfc3339())));
        assert!(md.contains("**Tags:** litigation, motions"));
        assert!(md.contains("\n## Prompt\n\n"));
        assert!(md.ends_with(&format!("{}\n", t.prompt)));
    }

    proptest! {
        #[test]
        fn prop_export_import_round_trip(
            name in ".{1,40}",
            prompt in ".{1,300}",
            tags in proptest::collection::vec("[a-z0-9-]{1,12}", 0..5),
            jurisdiction in proptest::option::of("[A-Za-z ]{1,20}"),
            tone in proptest::option::of("[A-Za-z ]{1,20}"),
        ) {
            let mut t = CustomTemplate::blank();
            t.set_name(name);
            t.set_prompt(prompt);
            t.set_tags(tags);
            t.set_metadata(TemplateMetadata { jurisdiction, tone, audience: None });

            let json = export_to_json(&t).unwrap();
            prop_assert_eq!(parse_import(&json), Some(t));
        }
    }
}
