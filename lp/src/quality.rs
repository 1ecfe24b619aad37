//! Prompt quality rubric
//!
//! A deterministic 0-100 heuristic over seven dimensions. Scores come from
//! substring hits on fixed keyword sets plus a length tier, not from a
//! language model: every point is traceable to a specific hit, so the same
//! prompt always earns the same score and the advisory notes never contradict
//! the breakdown.

use serde::Serialize;

/// Keywords signalling factual grounding
const CONTEXT_KEYWORDS: &[&str] = &["facts", "background", "context", "summary", "issue"];

/// Keywords signalling explicit constraints
const CONSTRAINT_KEYWORDS: &[&str] = &["must", "avoid", "only", "limit", "deadline", "requirements"];

/// Keywords signalling a requested output shape
const OUTPUT_KEYWORDS: &[&str] = &["format", "provide", "include", "table", "bullets"];

/// Keywords signalling review safeguards
const SAFEGUARD_KEYWORDS: &[&str] = &["verify", "confirm", "not legal advice", "disclaimer", "counsel"];

/// Keywords signalling citation handling
const CITATION_KEYWORDS: &[&str] = &["citation", "authority", "case", "statute", "source"];

/// Per-dimension sub-scores
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub clarity: u32,
    pub context: u32,
    pub constraints: u32,
    pub output: u32,
    pub safeguards: u32,
    pub citations: u32,
    pub variables: u32,
}

/// A scored prompt: capped total, per-dimension breakdown, advisory notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityScore {
    pub total: u32,
    pub breakdown: ScoreBreakdown,
    pub notes: Vec<String>,
}

fn keyword_hits(text: &str, keywords: &[&str]) -> u32 {
    keywords.iter().filter(|keyword| text.contains(*keyword)).count() as u32
}

/// Score a prompt against the rubric.
///
/// Pure and total: empty input yields the floor score for every dimension.
/// Matching is case-insensitive and each keyword counts at most once.
pub fn score_prompt(prompt: &str, variables: &[String]) -> QualityScore {
    let text = prompt.to_lowercase();
    let mut notes = Vec::new();

    let clarity = if text.len() > 220 {
        14
    } else if text.len() > 140 {
        11
    } else {
        7
    };
    if clarity < 10 {
        notes.push("Add more context and role framing for clarity.".to_string());
    }

    let context = (6 + keyword_hits(&text, CONTEXT_KEYWORDS) * 2).min(14);
    if context < 10 {
        notes.push("Include factual background and case context.".to_string());
    }

    let constraints = (6 + keyword_hits(&text, CONSTRAINT_KEYWORDS) * 2).min(14);
    if constraints < 10 {
        notes.push("Add explicit constraints or requirements.".to_string());
    }

    let output = (6 + keyword_hits(&text, OUTPUT_KEYWORDS) * 2).min(14);
    if output < 10 {
        notes.push("Specify the desired output format.".to_string());
    }

    let safeguards = (6 + keyword_hits(&text, SAFEGUARD_KEYWORDS) * 2).min(14);
    if safeguards < 10 {
        notes.push("Add safeguards or review reminders.".to_string());
    }

    let citations = (if keyword_hits(&text, CITATION_KEYWORDS) > 0 { 10 } else { 6 }).min(12);
    if citations < 10 {
        notes.push("Add citation placeholders for authority.".to_string());
    }

    let variables_score = if variables.len() >= 3 {
        8
    } else if !variables.is_empty() {
        6
    } else {
        3
    };
    if variables_score < 6 {
        notes.push("Add more reusable variables.".to_string());
    }

    let total =
        (clarity + context + constraints + output + safeguards + citations + variables_score).min(100);

    QualityScore {
        total,
        breakdown: ScoreBreakdown {
            clarity,
            context,
            constraints,
            output,
            safeguards,
            citations,
            variables: variables_score,
        },
        notes,
    }
}
