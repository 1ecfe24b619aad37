//! LexPrompt - legal prompt catalog, scorer, and wizard
//!
//! A library of predefined legal prompt templates with filtering and
//! search, a deterministic prompt quality rubric, and a step-by-step
//! prompt builder. Personal templates live in the companion
//! `promptstore` crate.
//!
//! # Modules
//!
//! - [`catalog`] - the built-in template catalog and its classification enums
//! - [`filter`] - predicate filtering over the catalog
//! - [`quality`] - the seven-dimension prompt quality rubric
//! - [`wizard`] - the eight-step prompt assembly flow
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod catalog;
pub mod cli;
pub mod config;
pub mod filter;
pub mod quality;
pub mod wizard;

pub use catalog::{
    Difficulty, ModelCompatibility, PracticeArea, PromptTemplate, TaskType, TemplateWarning,
};
pub use filter::CatalogFilter;
pub use quality::{QualityScore, ScoreBreakdown, score_prompt};
pub use wizard::{STEPS, WizardAnswers, WizardStep};
