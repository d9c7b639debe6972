//! The add and delete operations behind each subcommand.
//!
//! Every operation follows the same shape: load and validate the record (or
//! take the delete key from the CLI), locate the array in the page, mutate
//! the body, sync the counter, then commit through backup-then-replace.
//! Nothing is written before the commit step.

use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::catalog::{self, RawTemplate, RawTool, Template, Tool};
use crate::page::{self, counter::CounterPattern, mutator, TEMPLATE_COUNTER, TOOL_COUNTER};
use crate::page::counter::CounterAdjustment;
use crate::store::{self, StoreError};

use super::prompt::{self, Prompter};
use super::{CliError, Outcome};

/// Resolved file locations for one invocation.
#[derive(Debug)]
pub struct Paths {
    /// The catalogue page being edited.
    pub html: PathBuf,
    /// Directory holding the journal files.
    pub data_dir: PathBuf,
}

impl Paths {
    /// Journal of submitted tools.
    #[must_use]
    pub fn tools_journal(&self) -> PathBuf {
        self.data_dir.join("tools_backup.json")
    }

    /// Journal of submitted templates.
    #[must_use]
    pub fn templates_journal(&self) -> PathBuf {
        self.data_dir.join("templates_backup.json")
    }
}

const RULE: &str = "----------------------------------------";

/// Adds a tool to the `aiTools` array.
///
/// # Errors
///
/// Returns an error on validation failure, a missing array literal, or any
/// I/O failure; the page is never partially written.
pub fn add_tool<R: BufRead>(
    paths: &Paths,
    record_file: Option<&Path>,
    assume_yes: bool,
    prompter: &mut Prompter<R>,
) -> Result<Outcome, CliError> {
    let raw: RawTool = match record_file {
        Some(file) => {
            println!("Loading tool data from: {}\n", file.display());
            catalog::load_raw_record(file)?
        }
        None => prompt::tool_from_prompts(prompter)?,
    };

    let tool = raw.validate()?;
    info!(name = %tool.name, "tool record validated");

    println!("Tool Preview:");
    println!("{RULE}");
    println!("   Name: {}", tool.name);
    println!("   Category: {}", tool.category);
    println!("   Pricing: {}", tool.pricing.as_str());
    println!("   Rating: {}", catalog::literal::format_rating(tool.rating));
    println!("   Features: {}", tool.features.join(", "));
    println!("   Website: {}", tool.website);
    println!("{RULE}");

    if !assume_yes && !prompter.confirm("\nAdd this tool to the page? (yes/no): ")? {
        println!("Operation cancelled.");
        return Ok(Outcome::Cancelled);
    }

    let value = record_value(&tool, &paths.tools_journal())?;
    let updated = insert_into_page(
        &paths.html,
        Tool::ARRAY_NAME,
        Tool::KEY_FIELD,
        &tool.name,
        &tool.to_js_literal(),
        &TOOL_COUNTER,
    )?;

    let receipt = store::commit(&paths.html, &updated)?;
    println!("Backup created: {}", receipt.backup_path.display());

    let journal = paths.tools_journal();
    store::journal_append(&journal, value)?;
    println!("Record journalled to: {}", journal.display());

    println!("\nSUCCESS: '{}' has been added to the catalogue.", tool.name);
    Ok(Outcome::Done)
}

/// Adds a template to the `learningTemplates` array.
///
/// # Errors
///
/// Same failure modes as [`add_tool`].
pub fn add_template<R: BufRead>(
    paths: &Paths,
    record_file: Option<&Path>,
    assume_yes: bool,
    prompter: &mut Prompter<R>,
) -> Result<Outcome, CliError> {
    let raw: RawTemplate = match record_file {
        Some(file) => {
            println!("Loading template data from: {}\n", file.display());
            catalog::load_raw_record(file)?
        }
        None => prompt::template_from_prompts(prompter)?,
    };

    let template = raw.validate()?;
    info!(title = %template.title, "template record validated");

    println!("Template Preview:");
    println!("{RULE}");
    println!("   Title: {}", template.title);
    println!("   Category: {}", template.category);
    println!("   Difficulty: {}", template.difficulty.as_str());
    println!("   Time: {}", template.estimated_time);
    println!("   Description: {}", template.description);
    println!("{RULE}");

    if !assume_yes && !prompter.confirm("\nAdd this template to the page? (yes/no): ")? {
        println!("Operation cancelled.");
        return Ok(Outcome::Cancelled);
    }

    let value = record_value(&template, &paths.templates_journal())?;
    let updated = insert_into_page(
        &paths.html,
        Template::ARRAY_NAME,
        Template::KEY_FIELD,
        &template.title,
        &template.to_js_literal(),
        &TEMPLATE_COUNTER,
    )?;

    let receipt = store::commit(&paths.html, &updated)?;
    println!("Backup created: {}", receipt.backup_path.display());

    let journal = paths.templates_journal();
    store::journal_append(&journal, value)?;
    println!("Record journalled to: {}", journal.display());

    println!(
        "\nSUCCESS: '{}' has been added to the catalogue.",
        template.title
    );
    Ok(Outcome::Done)
}

/// Deletes every tool whose name matches `name`.
///
/// # Errors
///
/// Returns an error on a missing array literal or any I/O failure.
pub fn delete_tool(paths: &Paths, name: &str) -> Result<Outcome, CliError> {
    delete_from_page(paths, Tool::ARRAY_NAME, Tool::KEY_FIELD, name, &TOOL_COUNTER)
}

/// Deletes every template whose title matches `title`.
///
/// # Errors
///
/// Returns an error on a missing array literal or any I/O failure.
pub fn delete_template(paths: &Paths, title: &str) -> Result<Outcome, CliError> {
    delete_from_page(
        paths,
        Template::ARRAY_NAME,
        Template::KEY_FIELD,
        title,
        &TEMPLATE_COUNTER,
    )
}

/// Locates the array, inserts the serialised entry, and syncs the counter.
/// Returns the updated document; the caller commits it.
fn insert_into_page(
    html: &Path,
    array_name: &str,
    key_field: &str,
    key_value: &str,
    entry: &str,
    counter: &CounterPattern,
) -> Result<String, CliError> {
    let document = read_page(html)?;
    let region = page::locate(&document, array_name)?;

    if mutator::contains_key(region.body, key_field, key_value)? {
        warn!(
            key = %key_value,
            array = %array_name,
            "an entry with this key already exists; adding anyway"
        );
        println!("Warning: '{key_value}' already exists in {array_name}; adding a duplicate.");
    }

    let new_body = mutator::insert_entry(region.body, entry);
    let updated = region.replace_body(&new_body);

    let (updated, adjustment) = counter.adjust(&updated, 1);
    report_counter(counter, adjustment);

    Ok(updated)
}

/// Shared delete flow: remove all matches, sync the counter, commit.
fn delete_from_page(
    paths: &Paths,
    array_name: &str,
    key_field: &str,
    key_value: &str,
    counter: &CounterPattern,
) -> Result<Outcome, CliError> {
    let document = read_page(&paths.html)?;
    let region = page::locate(&document, array_name)?;

    let (new_body, removed) = mutator::remove_entries(region.body, key_field, key_value)?;
    if removed == 0 {
        println!("'{key_value}' not found in {array_name}; nothing to delete.");
        return Ok(Outcome::NotFound);
    }
    if removed > 1 {
        warn!(
            key = %key_value,
            removed,
            "delete matched more than one entry; all were removed"
        );
        println!("Warning: '{key_value}' matched {removed} entries; all were removed.");
    }

    let updated = region.replace_body(&new_body);
    #[allow(clippy::cast_possible_wrap)] // removal counts are tiny
    let (updated, adjustment) = counter.adjust(&updated, -(removed as i64));
    report_counter(counter, adjustment);

    let receipt = store::commit(&paths.html, &updated)?;
    println!("Backup created: {}", receipt.backup_path.display());

    println!("\nSUCCESS: deleted {removed} entr{} matching '{key_value}'.",
        if removed == 1 { "y" } else { "ies" });
    Ok(Outcome::Done)
}

fn read_page(path: &Path) -> Result<String, CliError> {
    Ok(fs::read_to_string(path).map_err(|e| StoreError::read(path, e))?)
}

fn report_counter(counter: &CounterPattern, adjustment: CounterAdjustment) {
    match adjustment {
        CounterAdjustment::Updated { previous, current } => {
            println!("{} count updated: {previous} -> {current}", counter.label);
        }
        CounterAdjustment::NotFound => {
            warn!(label = counter.label, "counter fragment not found; display left as-is");
        }
    }
}

/// Serialises a validated record for the journal.
fn record_value<T: serde::Serialize>(
    record: &T,
    journal: &Path,
) -> Result<serde_json::Value, CliError> {
    serde_json::to_value(record).map_err(|e| {
        CliError::Store(StoreError::JournalParse {
            path: journal.to_path_buf(),
            source: e,
        })
    })
}
