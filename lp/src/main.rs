use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use lexprompt::catalog::{self, PromptTemplate};
use lexprompt::cli::{Cli, Command, ExportFormat, OutputFormat};
use lexprompt::config::Config;
use lexprompt::filter::CatalogFilter;
use lexprompt::quality::{QualityScore, score_prompt};
use lexprompt::wizard::{STEPS, WizardAnswers};
use promptstore::{CustomTemplate, TemplateStore, find_template};

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

    info!("lexprompt starting");

    let templates = catalog::builtin()?;

    match cli.command {
        Command::Library {
            search,
            practice,
            task,
            model,
            difficulty,
            format,
        } => {
            let filter = CatalogFilter {
                search,
                practice_area: practice,
                task_type: task,
                model,
                difficulty,
            };
            let filtered = filter.apply(&templates);

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&filtered)?),
                OutputFormat::Text => {
                    if filtered.is_empty() {
                        println!("No prompts match your filters.");
                    } else {
                        for t in &filtered {
                            println!(
                                "{}  {}  {}",
                                t.id.yellow(),
                                t.name,
                                format!("[{} · {} · {}]", t.practice_area, t.task_type, t.difficulty)
                                    .dimmed()
                            );
                        }
                        let summary = format!("{} of {} prompts", filtered.len(), templates.len());
                        if filter.is_active() {
                            println!("{}", format!("{} · filters active", summary).dimmed());
                        } else {
                            println!("{}", summary.dimmed());
                        }
                    }
                }
            }
        }
        Command::Show { id } => {
            let template = catalog::find(&templates, &id)?;
            print_template(template);
        }
        Command::Export { id, format, out } => {
            let template = catalog::find(&templates, &id)?;
            let (content, extension) = match format {
                ExportFormat::Text => (template.prompt.clone(), "txt"),
                ExportFormat::Markdown => (template.to_markdown(), "md"),
            };
            let path =
                out.unwrap_or_else(|| PathBuf::from(format!("{}.{}", template.file_stem(), extension)));
            fs::write(&path, content)
                .context(format!("Failed to write export file: {}", path.display()))?;
            println!("{} Wrote {}", "✓".green(), path.display());
        }
        Command::Score {
            text,
            file,
            template,
            vars,
            format,
        } => {
            let (prompt, variables) = if let Some(text) = text {
                (text, vars)
            } else if let Some(path) = file {
                let body = fs::read_to_string(&path)
                    .context(format!("Failed to read prompt file: {}", path.display()))?;
                (body, vars)
            } else if let Some(id) = template {
                let store = TemplateStore::open(&config.store_path)?;
                let saved = store.load();
                let found = &saved[find_template(&saved, &id)?];
                // saved templates are scored with their tags as the variable list
                (found.prompt.clone(), found.tags.clone())
            } else {
                return Err(eyre::eyre!("Nothing to score: pass --text, --file, or --template"));
            };

            let score = score_prompt(&prompt, &variables);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&score)?),
                OutputFormat::Text => print_score(&score),
            }
        }
        Command::Wizard { answers, out, save } => {
            let answers = match answers {
                Some(path) => WizardAnswers::from_yaml_file(&path)?,
                None => run_wizard_interactive()?,
            };
            let prompt = answers.assemble()?;

            match &out {
                Some(path) => {
                    fs::write(path, &prompt)
                        .context(format!("Failed to write prompt file: {}", path.display()))?;
                    println!("{} Wrote {}", "✓".green(), path.display());
                }
                None => {
                    println!("{}", prompt);
                }
            }

            println!();
            print_score(&score_prompt(&prompt, &[]));

            if let Some(name) = save {
                let store = TemplateStore::open(&config.store_path)?;
                let mut saved = store.load();
                let mut template = CustomTemplate::blank();
                template.set_name(name);
                template.set_prompt(prompt);
                let id = template.id.clone();
                saved.insert(0, template);
                store.save(&saved)?;
                println!("{} Saved template: {}", "✓".green(), id.cyan());
            }
        }
    }

    Ok(())
}

/// Walk the steps in order, editing the prefilled defaults in place
fn run_wizard_interactive() -> Result<WizardAnswers> {
    let mut editor = rustyline::DefaultEditor::new()?;
    let mut answers = WizardAnswers::default();
    let total = STEPS.len();

    for (index, step) in STEPS.iter().enumerate() {
        println!();
        println!("{} {}", format!("Step {}/{}", index + 1, total).cyan(), step.title.bold());
        println!("{}", step.guidance.dimmed());
        let initial = answers.get(index).to_string();
        let line = editor.readline_with_initial("> ", (initial.as_str(), ""))?;
        answers.set(index, line.trim().to_string());
    }

    Ok(answers)
}

fn print_template(template: &PromptTemplate) {
    println!("{}  {}", template.id.yellow(), template.name.bold());
    println!("{}", template.description);
    println!();
    println!("  Practice area: {}", template.practice_area);
    println!("  Task type: {}", template.task_type);
    println!("  Difficulty: {}", template.difficulty);
    println!("  Estimated time: {}", template.estimated_time);
    println!(
        "  Models: {}",
        template
            .model_compatibility
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    if !template.tags.is_empty() {
        println!("  Tags: {}", template.tags.join(", "));
    }
    println!("  Variables: {}", template.variables.join(", "));
    println!();
    println!("{}", "Prompt".cyan());
    println!("{}", template.prompt);
    if !template.warnings.is_empty() {
        println!("{}", "Warnings".yellow());
        for warning in &template.warnings {
            println!("  {} {}", format!("{}:", warning.title).bold(), warning.detail);
        }
        println!();
    }
    println!("{}", "Example output".cyan());
    println!("{}", template.example_output);
}

fn print_score(score: &QualityScore) {
    println!("Total: {}/100", score.total.to_string().bold());
    println!("  clarity      {:>2}/14", score.breakdown.clarity);
    println!("  context      {:>2}/14", score.breakdown.context);
    println!("  constraints  {:>2}/14", score.breakdown.constraints);
    println!("  output       {:>2}/14", score.breakdown.output);
    println!("  safeguards   {:>2}/14", score.breakdown.safeguards);
    println!("  citations    {:>2}/12", score.breakdown.citations);
    println!("  variables    {:>2}/8", score.breakdown.variables);
    if !score.notes.is_empty() {
        println!("Notes:");
        for note in &score.notes {
            println!("  - {}", note);
        }
    }
}
