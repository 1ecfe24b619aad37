//! CLI argument parsing for lexprompt

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::{Difficulty, ModelCompatibility, PracticeArea, TaskType};

#[derive(Parser, Debug)]
#[command(name = "lp")]
#[command(author, version, about = "Legal prompt catalog, scorer, and wizard", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Browse the template library
    Library {
        /// Substring search over names, descriptions, and tags
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by practice area
        #[arg(short, long)]
        practice: Option<PracticeArea>,

        /// Filter by task type
        #[arg(short, long)]
        task: Option<TaskType>,

        /// Filter by model compatibility
        #[arg(short, long)]
        model: Option<ModelCompatibility>,

        /// Filter by difficulty
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show one catalog template in full
    Show {
        /// Catalog template id
        #[arg(required = true)]
        id: String,
    },

    /// Export a catalog template's prompt text or Markdown document
    Export {
        /// Catalog template id
        #[arg(required = true)]
        id: String,

        /// txt (raw prompt) or md (derived document)
        #[arg(short, long, default_value = "md")]
        format: ExportFormat,

        /// Output file (default: name derived from the template)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Score prompt text against the quality rubric
    Score {
        /// Literal prompt text
        #[arg(long, conflicts_with_all = ["file", "template"])]
        text: Option<String>,

        /// Read the prompt from a file
        #[arg(long, conflicts_with = "template")]
        file: Option<PathBuf>,

        /// Score a saved personal template (its tags count as variables)
        #[arg(long)]
        template: Option<String>,

        /// Declared variable names (repeatable)
        #[arg(short, long = "var")]
        vars: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Build a prompt step by step
    Wizard {
        /// Read answers from a YAML file instead of prompting
        #[arg(short, long)]
        answers: Option<PathBuf>,

        /// Write the assembled prompt to a file
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Save the assembled prompt to the personal store under this name
        #[arg(short = 'S', long)]
        save: Option<String>,
    },
}

/// Output format for library and score commands
#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

/// Export format for catalog templates
#[derive(Clone, Debug, Default)]
pub enum ExportFormat {
    Text,
    #[default]
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" | "text" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            _ => Err(format!("Unknown format: {}. Use: txt or md", s)),
        }
    }
}
