use std::fs;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use promptstore::cli::{Cli, Command, ExportFormat, OutputFormat};
use promptstore::config::Config;
use promptstore::{
    CustomTemplate, TemplateStore, export_to_json, export_to_markdown, find_template, parse_import,
};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("promptstore starting");

    let store = TemplateStore::open(&config.store_path)?;

    match cli.command {
        Command::New { name } => {
            let mut templates = store.load();
            let mut template = CustomTemplate::blank();
            if let Some(name) = name {
                template.set_name(name);
            }
            let id = template.id.clone();
            templates.insert(0, template);
            store.save(&templates)?;
            println!("{} Created template: {}", "✓".green(), id.cyan());
        }
        Command::List { format } => {
            let templates = store.load();
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&templates)?),
                OutputFormat::Text => {
                    if templates.is_empty() {
                        println!("No templates saved");
                    } else {
                        for t in &templates {
                            println!(
                                "{}  {}  {}",
                                t.id.yellow(),
                                t.name,
                                format!("updated {}", t.updated_at.format("%Y-%m-%d")).dimmed()
                            );
                        }
                    }
                }
            }
        }
        Command::Show { id } => {
            let templates = store.load();
            let template = &templates[find_template(&templates, &id)?];
            print_template(template);
        }
        Command::Set {
            id,
            name,
            prompt,
            prompt_file,
            tags,
            jurisdiction,
            tone,
            audience,
        } => {
            let mut templates = store.load();
            let pos = find_template(&templates, &id)?;
            let template = &mut templates[pos];

            if let Some(name) = name {
                template.set_name(name);
            }
            if let Some(prompt) = prompt {
                template.set_prompt(prompt);
            }
            if let Some(path) = prompt_file {
                let body = fs::read_to_string(&path)
                    .context(format!("Failed to read prompt file: {}", path.display()))?;
                template.set_prompt(body);
            }
            if let Some(tags) = tags {
                template.set_tags(parse_tags(&tags));
            }
            if jurisdiction.is_some() || tone.is_some() || audience.is_some() {
                let mut metadata = template.metadata.clone();
                if jurisdiction.is_some() {
                    metadata.jurisdiction = jurisdiction.filter(|s| !s.is_empty());
                }
                if tone.is_some() {
                    metadata.tone = tone.filter(|s| !s.is_empty());
                }
                if audience.is_some() {
                    metadata.audience = audience.filter(|s| !s.is_empty());
                }
                template.set_metadata(metadata);
            }

            let id = template.id.clone();
            store.save(&templates)?;
            println!("{} Updated template: {}", "✓".green(), id.cyan());
        }
        Command::Dup { id } => {
            let mut templates = store.load();
            let pos = find_template(&templates, &id)?;
            let copy = templates[pos].duplicate();
            let copy_id = copy.id.clone();
            templates.insert(0, copy);
            store.save(&templates)?;
            println!("{} Duplicated as: {}", "✓".green(), copy_id.cyan());
        }
        Command::Rm { id } => {
            let mut templates = store.load();
            let pos = find_template(&templates, &id)?;
            let removed = templates.remove(pos);
            store.save(&templates)?;
            println!("{} Deleted template: {}", "✓".green(), removed.id);
        }
        Command::Export { id, format, out } => {
            let templates = store.load();
            let template = &templates[find_template(&templates, &id)?];
            let content = match format {
                ExportFormat::Json => export_to_json(template)?,
                ExportFormat::Markdown => export_to_markdown(template),
            };
            match out {
                Some(path) => {
                    fs::write(&path, content)
                        .context(format!("Failed to write export file: {}", path.display()))?;
                    println!("{} Wrote {}", "✓".green(), path.display());
                }
                None => println!("{}", content),
            }
        }
        Command::Import { file } => {
            let raw = match file {
                Some(path) => fs::read_to_string(&path)
                    .context(format!("Failed to read import file: {}", path.display()))?,
                None => std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?,
            };

            let template = parse_import(&raw)
                .ok_or_else(|| eyre::eyre!("Invalid template JSON: id, name, and prompt are required"))?;

            let mut templates = store.load();
            if templates.iter().any(|t| t.id == template.id) {
                return Err(eyre::eyre!(
                    "Template already exists: {} (rm it first, or edit the id in the export)",
                    template.id
                ));
            }

            let id = template.id.clone();
            templates.insert(0, template);
            store.save(&templates)?;
            println!("{} Imported template: {}", "✓".green(), id.cyan());
        }
    }

    Ok(())
}

fn print_template(template: &CustomTemplate) {
    println!("{}  {}", template.id.yellow(), template.name);
    println!("  Created: {}", template.created_at.to_rfc3339());
    println!("  Updated: {}", template.updated_at.to_rfc3339());
    if !template.tags.is_empty() {
        println!("  Tags: {}", template.tags.join(", "));
    }
    if let Some(jurisdiction) = &template.metadata.jurisdiction {
        println!("  Jurisdiction: {}", jurisdiction);
    }
    if let Some(tone) = &template.metadata.tone {
        println!("  Tone: {}", tone);
    }
    if let Some(audience) = &template.metadata.audience {
        println!("  Audience: {}", audience);
    }
    println!();
    if template.prompt.is_empty() {
        println!("{}", "(empty prompt)".dimmed());
    } else {
        println!("{}", template.prompt);
    }
}

fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
