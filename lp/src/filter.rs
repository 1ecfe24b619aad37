//! Catalog filtering
//!
//! Derives a filtered subset of the catalog from user predicates: a
//! case-insensitive substring search plus categorical equality. Catalog
//! order is preserved; an unset predicate matches everything.

use crate::catalog::{Difficulty, ModelCompatibility, PracticeArea, PromptTemplate, TaskType};

#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    /// Substring searched in name, description, and tags
    pub search: Option<String>,
    pub practice_area: Option<PracticeArea>,
    pub task_type: Option<TaskType>,
    pub model: Option<ModelCompatibility>,
    pub difficulty: Option<Difficulty>,
}

impl CatalogFilter {
    /// True when any predicate is set
    pub fn is_active(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.trim().is_empty())
            || self.practice_area.is_some()
            || self.task_type.is_some()
            || self.model.is_some()
            || self.difficulty.is_some()
    }

    /// Whether a single template passes every predicate
    pub fn matches(&self, template: &PromptTemplate) -> bool {
        let matches_search = match self.search.as_deref() {
            None | Some("") => true,
            Some(needle) => {
                let needle = needle.to_lowercase();
                template.name.to_lowercase().contains(&needle)
                    || template.description.to_lowercase().contains(&needle)
                    || template.tags.join(" ").to_lowercase().contains(&needle)
            }
        };

        matches_search
            && self.practice_area.is_none_or(|p| template.practice_area == p)
            && self.task_type.is_none_or(|t| template.task_type == t)
            && self.model.is_none_or(|m| template.model_compatibility.contains(&m))
            && self.difficulty.is_none_or(|d| template.difficulty == d)
    }

    /// Filtered view of the catalog, original order preserved
    pub fn apply<'a>(&self, templates: &'a [PromptTemplate]) -> Vec<&'a PromptTemplate> {
        templates.iter().filter(|t| self.matches(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_default_filter_matches_everything() {
        let templates = catalog::builtin().unwrap();
        let filter = CatalogFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&templates).len(), templates.len());
    }

    #[test]
    fn test_practice_area_equality_preserves_order() {
        let templates = catalog::builtin().unwrap();
        let filter = CatalogFilter {
            practice_area: Some(PracticeArea::Contracts),
            ..Default::default()
        };

        let filtered = filter.apply(&templates);
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|t| t.practice_area == PracticeArea::Contracts));

        // result order is catalog order
        let expected: Vec<&str> = templates
            .iter()
            .filter(|t| t.practice_area == PracticeArea::Contracts)
            .map(|t| t.id.as_str())
            .collect();
        let actual: Vec<&str> = filtered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_search_is_case_insensitive_and_covers_tags() {
        let templates = catalog::builtin().unwrap();
        let filter = CatalogFilter {
            search: Some("EDISCOVERY".to_string()),
            ..Default::default()
        };

        let filtered = filter.apply(&templates);
        assert!(filtered.iter().any(|t| t.id == "litigation-hold-notice"));
    }

    #[test]
    fn test_model_filter_uses_set_membership() {
        let templates = catalog::builtin().unwrap();
        let filter = CatalogFilter {
            model: Some(ModelCompatibility::Gemini),
            ..Default::default()
        };

        for t in filter.apply(&templates) {
            assert!(t.model_compatibility.contains(&ModelCompatibility::Gemini));
        }
    }

    #[test]
    fn test_predicates_combine_conjunctively() {
        let templates = catalog::builtin().unwrap();
        let filter = CatalogFilter {
            practice_area: Some(PracticeArea::Litigation),
            difficulty: Some(Difficulty::Advanced),
            ..Default::default()
        };

        // the only litigation entry is Starter, so the conjunction is empty
        assert!(filter.apply(&templates).is_empty());
    }

    #[test]
    fn test_no_match_yields_empty_subset() {
        let templates = catalog::builtin().unwrap();
        let filter = CatalogFilter {
            search: Some("zoning variance".to_string()),
            ..Default::default()
        };
        assert!(filter.apply(&templates).is_empty());
    }
}
