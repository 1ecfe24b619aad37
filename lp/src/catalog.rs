//! Built-in template catalog
//!
//! Read-only reference data compiled into the binary from a YAML document,
//! plus the classification enums the catalog and the filters share. The
//! same spellings appear in the YAML, on the CLI, and in JSON output.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Catalog data, compiled into the binary
const CATALOG_YAML: &str = include_str!("../catalog/templates.yml");

/// Practice area a template belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PracticeArea {
    Litigation,
    Contracts,
    Research,
    #[serde(rename = "Client Comms")]
    ClientComms,
    Compliance,
    Employment,
    #[serde(rename = "IP")]
    Ip,
    Privacy,
}

impl std::fmt::Display for PracticeArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Litigation => "Litigation",
            Self::Contracts => "Contracts",
            Self::Research => "Research",
            Self::ClientComms => "Client Comms",
            Self::Compliance => "Compliance",
            Self::Employment => "Employment",
            Self::Ip => "IP",
            Self::Privacy => "Privacy",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for PracticeArea {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "litigation" => Ok(Self::Litigation),
            "contracts" => Ok(Self::Contracts),
            "research" => Ok(Self::Research),
            "client comms" | "client-comms" => Ok(Self::ClientComms),
            "compliance" => Ok(Self::Compliance),
            "employment" => Ok(Self::Employment),
            "ip" => Ok(Self::Ip),
            "privacy" => Ok(Self::Privacy),
            _ => Err(format!(
                "Unknown practice area: {}. Use: litigation, contracts, research, client-comms, compliance, employment, ip, or privacy",
                s
            )),
        }
    }
}

/// Kind of work a template performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskType {
    Drafting,
    Review,
    Analysis,
    Negotiation,
    Summarization,
    Strategy,
    Advisory,
    Checklist,
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Drafting => "Drafting",
            Self::Review => "Review",
            Self::Analysis => "Analysis",
            Self::Negotiation => "Negotiation",
            Self::Summarization => "Summarization",
            Self::Strategy => "Strategy",
            Self::Advisory => "Advisory",
            Self::Checklist => "Checklist",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for TaskType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "drafting" => Ok(Self::Drafting),
            "review" => Ok(Self::Review),
            "analysis" => Ok(Self::Analysis),
            "negotiation" => Ok(Self::Negotiation),
            "summarization" => Ok(Self::Summarization),
            "strategy" => Ok(Self::Strategy),
            "advisory" => Ok(Self::Advisory),
            "checklist" => Ok(Self::Checklist),
            _ => Err(format!(
                "Unknown task type: {}. Use: drafting, review, analysis, negotiation, summarization, strategy, advisory, or checklist",
                s
            )),
        }
    }
}

/// Model family a template is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelCompatibility {
    #[serde(rename = "GPT-4")]
    Gpt4,
    Claude,
    Gemini,
    Llama,
    Any,
}

impl std::fmt::Display for ModelCompatibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Gpt4 => "GPT-4",
            Self::Claude => "Claude",
            Self::Gemini => "Gemini",
            Self::Llama => "Llama",
            Self::Any => "Any",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for ModelCompatibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gpt-4" | "gpt4" => Ok(Self::Gpt4),
            "claude" => Ok(Self::Claude),
            "gemini" => Ok(Self::Gemini),
            "llama" => Ok(Self::Llama),
            "any" => Ok(Self::Any),
            _ => Err(format!(
                "Unknown model: {}. Use: gpt-4, claude, gemini, llama, or any",
                s
            )),
        }
    }
}

/// How much legal judgment a template assumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Starter,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Starter => "Starter",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "starter" => Ok(Self::Starter),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(format!(
                "Unknown difficulty: {}. Use: starter, intermediate, or advanced",
                s
            )),
        }
    }
}

/// A caution shown alongside a catalog template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateWarning {
    pub title: String,
    pub detail: String,
}

/// One predefined catalog entry. Defined at build time, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub practice_area: PracticeArea,
    pub task_type: TaskType,
    pub model_compatibility: Vec<ModelCompatibility>,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    pub variables: Vec<String>,
    pub prompt: String,
    pub example_output: String,
    #[serde(default)]
    pub warnings: Vec<TemplateWarning>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl PromptTemplate {
    /// Derived Markdown document offered on the detail view
    pub fn to_markdown(&self) -> String {
        format!("# {}\n\n{}\n\n## Prompt\n\n{}\n", self.name, self.description, self.prompt)
    }

    /// Download-style file stem derived from the template name
    pub fn file_stem(&self) -> String {
        let slug = self
            .name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect::<String>();
        let slug = slug.split('-').filter(|part| !part.is_empty()).collect::<Vec<_>>().join("-");
        if slug.is_empty() { "prompt".to_string() } else { slug }
    }
}

/// Parse the embedded catalog
pub fn builtin() -> Result<Vec<PromptTemplate>> {
    let templates: Vec<PromptTemplate> =
        serde_yaml::from_str(CATALOG_YAML).context("Embedded catalog is malformed")?;
    debug!(count = templates.len(), "Parsed embedded catalog");
    Ok(templates)
}

/// Find a catalog template by id
pub fn find<'a>(templates: &'a [PromptTemplate], id: &str) -> Result<&'a PromptTemplate> {
    templates
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| eyre::eyre!("Template not found: {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_parses() {
        let templates = builtin().unwrap();
        assert!(templates.len() >= 8);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let templates = builtin().unwrap();
        let ids: HashSet<&str> = templates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), templates.len());
    }

    #[test]
    fn test_catalog_covers_every_practice_area() {
        let templates = builtin().unwrap();
        let areas: HashSet<String> = templates.iter().map(|t| t.practice_area.to_string()).collect();
        assert_eq!(areas.len(), 8);
    }

    #[test]
    fn test_catalog_entries_are_complete() {
        for t in builtin().unwrap() {
            assert!(!t.name.is_empty(), "{} has no name", t.id);
            assert!(!t.description.is_empty(), "{} has no description", t.id);
            assert!(!t.prompt.is_empty(), "{} has no prompt", t.id);
            assert!(!t.example_output.is_empty(), "{} has no example output", t.id);
            assert!(!t.variables.is_empty(), "{} declares no variables", t.id);
            assert!(!t.model_compatibility.is_empty(), "{} lists no models", t.id);
        }
    }

    #[test]
    fn test_find_known_and_unknown_ids() {
        let templates = builtin().unwrap();
        assert!(find(&templates, &templates[0].id).is_ok());
        assert!(find(&templates, "no-such-template").is_err());
    }

    #[test]
    fn test_enum_display_from_str_round_trip() {
        for area in [
            PracticeArea::Litigation,
            PracticeArea::ClientComms,
            PracticeArea::Ip,
        ] {
            assert_eq!(area.to_string().parse::<PracticeArea>().unwrap(), area);
        }
        assert_eq!("gpt4".parse::<ModelCompatibility>().unwrap(), ModelCompatibility::Gpt4);
        assert_eq!("client-comms".parse::<PracticeArea>().unwrap(), PracticeArea::ClientComms);
        assert!("paralegal".parse::<TaskType>().is_err());
    }

    #[test]
    fn test_enum_serde_uses_display_spelling() {
        let json = serde_json::to_string(&PracticeArea::ClientComms).unwrap();
        assert_eq!(json, "\"Client Comms\"");
        let json = serde_json::to_string(&ModelCompatibility::Gpt4).unwrap();
        assert_eq!(json, "\"GPT-4\"");
    }

    #[test]
    fn test_file_stem_slugging() {
        let mut t = builtin().unwrap().into_iter().next().unwrap();
        t.name = "NDA Review: Mutual (Short Form)".to_string();
        assert_eq!(t.file_stem(), "nda-review-mutual-short-form");

        t.name = "!!!".to_string();
        assert_eq!(t.file_stem(), "prompt");
    }

    #[test]
    fn test_to_markdown_layout() {
        let templates = builtin().unwrap();
        let md = templates[0].to_markdown();
        assert!(md.starts_with(&format!("# {}\n\n", templates[0].name)));
        assert!(md.contains("\n## Prompt\n\n"));
        assert!(md.ends_with(&format!("{}\n", templates[0].prompt)));
    }
}
