//! Prompt assembly wizard
//!
//! A linear sequence of free-text steps whose answers are rendered into a
//! single prompt through an embedded template. The interactive walk lives
//! in the binary; this module owns the steps, the answers, and assembly.

use std::path::Path;

use eyre::{Context, Result};
use handlebars::Handlebars;
use serde::{Deserialize, Serialize};

/// The rendered prompt frame, compiled into the binary
const PROMPT_TEMPLATE: &str = include_str!("../prompts/wizard.pmt");

/// One wizard step: display title plus its guidance line
pub struct WizardStep {
    pub title: &'static str,
    pub guidance: &'static str,
}

/// The eight steps, in order
pub const STEPS: [WizardStep; 8] = [
    WizardStep {
        title: "Goal",
        guidance: "Define the legal task and desired outcome.",
    },
    WizardStep {
        title: "Audience",
        guidance: "Who will use or read this output?",
    },
    WizardStep {
        title: "Jurisdiction",
        guidance: "Jurisdiction, forum, or governing law.",
    },
    WizardStep {
        title: "Constraints",
        guidance: "Constraints, deadlines, assumptions, or exclusions.",
    },
    WizardStep {
        title: "Tone",
        guidance: "Tone guidance.",
    },
    WizardStep {
        title: "Citations",
        guidance: "How should citations be handled?",
    },
    WizardStep {
        title: "Output Format",
        guidance: "Desired output structure.",
    },
    WizardStep {
        title: "Safeguards",
        guidance: "Safety checks and escalation guidance.",
    },
];

/// Answers for each step.
///
/// The style steps come prefilled so a fast run still produces a usable
/// prompt; the fact steps start empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardAnswers {
    pub goal: String,
    pub audience: String,
    pub jurisdiction: String,
    pub constraints: String,
    pub tone: String,
    pub citations: String,
    pub output_format: String,
    pub safeguards: String,
}

impl Default for WizardAnswers {
    fn default() -> Self {
        Self {
            goal: String::new(),
            audience: String::new(),
            jurisdiction: String::new(),
            constraints: String::new(),
            tone: "Professional, precise, and pragmatic".to_string(),
            citations: "Provide citation placeholders for statutes and cases.".to_string(),
            output_format: "Use headings, bullet points, and a short summary.".to_string(),
            safeguards: "Flag missing facts, avoid legal conclusions, and remind to verify with counsel."
                .to_string(),
        }
    }
}

impl WizardAnswers {
    /// Answer for a step index, in [`STEPS`] order
    pub fn get(&self, step: usize) -> &str {
        match step {
            0 => &self.goal,
            1 => &self.audience,
            2 => &self.jurisdiction,
            3 => &self.constraints,
            4 => &self.tone,
            5 => &self.citations,
            6 => &self.output_format,
            7 => &self.safeguards,
            _ => "",
        }
    }

    /// Replace the answer for a step index; out-of-range indexes are ignored
    pub fn set(&mut self, step: usize, value: String) {
        match step {
            0 => self.goal = value,
            1 => self.audience = value,
            2 => self.jurisdiction = value,
            3 => self.constraints = value,
            4 => self.tone = value,
            5 => self.citations = value,
            6 => self.output_format = value,
            7 => self.safeguards = value,
            _ => {}
        }
    }

    /// Load answers from a YAML file; omitted fields keep their defaults
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read answers file: {}", path.display()))?;
        serde_yaml::from_str(&content).context("Malformed answers file")
    }

    /// Render the final prompt from the embedded template
    pub fn assemble(&self) -> Result<String> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
            .render_template(PROMPT_TEMPLATE, self)
            .context("Failed to render prompt template")
    }
}
