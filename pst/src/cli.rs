//! CLI argument parsing for promptstore

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pst")]
#[command(author, version, about = "Personal prompt template store", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a blank template
    New {
        /// Name for the new template (default: "Untitled Template")
        #[arg(short, long)]
        name: Option<String>,
    },

    /// List saved templates
    List {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show one template in full
    Show {
        /// Template id (or unique partial match)
        #[arg(required = true)]
        id: String,
    },

    /// Edit template fields (refreshes the updated timestamp)
    Set {
        /// Template id (or unique partial match)
        #[arg(required = true)]
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New prompt body
        #[arg(long)]
        prompt: Option<String>,

        /// Read the new prompt body from a file
        #[arg(long, conflicts_with = "prompt")]
        prompt_file: Option<PathBuf>,

        /// Comma-separated tags (replaces the existing set)
        #[arg(long)]
        tags: Option<String>,

        /// Jurisdiction metadata
        #[arg(long)]
        jurisdiction: Option<String>,

        /// Tone metadata
        #[arg(long)]
        tone: Option<String>,

        /// Audience metadata
        #[arg(long)]
        audience: Option<String>,
    },

    /// Duplicate a template under a fresh id
    Dup {
        /// Template id (or unique partial match)
        #[arg(required = true)]
        id: String,
    },

    /// Delete a template
    Rm {
        /// Template id (or unique partial match)
        #[arg(required = true)]
        id: String,
    },

    /// Export a template as JSON or Markdown
    Export {
        /// Template id (or unique partial match)
        #[arg(required = true)]
        id: String,

        /// Export format
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Import a template from exported JSON (file or stdin)
    Import {
        /// Path to the JSON file; reads stdin when omitted
        file: Option<PathBuf>,
    },
}

/// Output format for the list command
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

/// Export format for the export command
#[derive(Clone, Debug, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "md" | "markdown" => Ok(Self::Markdown),
            _ => Err(format!("Unknown format: {}. Use: json or md", s)),
        }
    }
}
