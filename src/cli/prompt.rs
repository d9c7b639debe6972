//! Interactive record entry.
//!
//! Prompting is line-based and blocking; reads go through any [`BufRead`]
//! so tests can drive the prompts from a buffer. Enumerated choices come
//! from the option tables in [`crate::catalog::options`]; a choice outside
//! the menu falls back to the documented default instead of re-asking.

use std::io::{self, BufRead, Write};

use crate::catalog::options::{CATEGORY_CHOICES, DEFAULT_ICON, DIFFICULTY_CHOICES, ICON_CHOICES};
use crate::catalog::{RawTemplate, RawTool};

/// Line-based prompt driver over an arbitrary reader.
pub struct Prompter<R> {
    input: R,
}

impl Prompter<io::BufReader<io::Stdin>> {
    /// A prompter reading from the controlling terminal's stdin.
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> Prompter<R> {
    /// Wraps a reader.
    pub const fn new(input: R) -> Self {
        Self { input }
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Prints `prompt` and reads one trimmed line.
    pub fn line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;
        self.read_line()
    }

    /// Like [`Self::line`], but an empty answer yields `default`.
    pub fn line_or_default(&mut self, prompt: &str, default: &str) -> io::Result<String> {
        let answer = self.line(prompt)?;
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer
        })
    }

    /// Reads a comma-separated list, dropping empty items.
    pub fn comma_separated(&mut self, prompt: &str) -> io::Result<Vec<String>> {
        let answer = self.line(prompt)?;
        Ok(answer
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect())
    }

    /// Reads lines until the first empty one, joined with spaces.
    pub fn lines_until_blank(&mut self) -> io::Result<String> {
        let mut lines = Vec::new();
        loop {
            let line = self.read_line()?;
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join(" "))
    }

    /// Reads lines verbatim until a line reading `END`, joined with
    /// newlines. Leading/trailing whitespace within lines is preserved.
    pub fn lines_until_end(&mut self) -> io::Result<String> {
        let mut lines = Vec::new();
        loop {
            let mut raw = String::new();
            let read = self.input.read_line(&mut raw)?;
            let trimmed = raw.trim_end_matches(['\n', '\r']);
            if read == 0 || trimmed.trim().eq_ignore_ascii_case("END") {
                break;
            }
            lines.push(trimmed.to_string());
        }
        Ok(lines.join("\n"))
    }

    /// Asks a yes/no question; `yes` and `y` (any case) mean yes.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.line(prompt)?.to_lowercase();
        Ok(answer == "yes" || answer == "y")
    }
}

/// Collects a raw tool record interactively.
///
/// # Errors
///
/// Returns any I/O error from the terminal.
pub fn tool_from_prompts<R: BufRead>(prompter: &mut Prompter<R>) -> io::Result<RawTool> {
    println!("Enter the new tool details:\n");

    let name = prompter.line("Tool Name (e.g., 'Midjourney'): ")?;
    let logo = prompter.line("Logo URL (image URL or icon class like 'fas fa-robot'): ")?;
    let category = prompter.line("Category (e.g., 'Image Generation', 'Productivity'): ")?;

    println!("\nDescription (press Enter twice to finish):");
    let description = prompter.lines_until_blank()?;

    let features = prompter.comma_separated(
        "\nFeatures (comma-separated, e.g., 'Text to image, Style transfer'): ",
    )?;
    let use_cases =
        prompter.comma_separated("Use Cases (comma-separated, e.g., 'Design, Marketing'): ")?;

    let pricing = prompter.line_or_default("Pricing (Free/Freemium/Paid) [Freemium]: ", "Freemium")?;
    let rating = prompter.line("Rating (1.0-5.0) [4.5]: ")?;
    let website = prompter.line("Website URL: ")?;
    let docs = prompter.line("Documentation URL: ")?;

    Ok(RawTool {
        name: Some(name),
        logo: Some(logo),
        logo_type: None,
        category: Some(category),
        description: Some(description),
        features: Some(features),
        use_cases: Some(use_cases),
        pricing: Some(pricing),
        rating: if rating.is_empty() {
            None
        } else {
            Some(serde_json::Value::String(rating))
        },
        website: Some(website),
        docs: Some(docs),
    })
}

/// Collects a raw template record interactively.
///
/// # Errors
///
/// Returns any I/O error from the terminal.
pub fn template_from_prompts<R: BufRead>(prompter: &mut Prompter<R>) -> io::Result<RawTemplate> {
    println!("Enter the new template details:\n");

    let title = prompter.line("Template Title (e.g., 'Socratic Learning Method'): ")?;

    println!("\nSelect Category:");
    for (i, category) in CATEGORY_CHOICES.iter().enumerate() {
        println!("   {}. {category}", i + 1);
    }
    let choice = prompter.line("Enter number or custom category: ")?;
    let category = match menu_index(&choice, CATEGORY_CHOICES.len()) {
        Some(index) if CATEGORY_CHOICES[index] == "Custom" => {
            prompter.line("Enter custom category: ")?
        }
        Some(index) => CATEGORY_CHOICES[index].to_string(),
        None => choice,
    };

    println!("\nSelect Icon:");
    for (i, icon) in ICON_CHOICES.iter().enumerate() {
        println!("   {}. {}", i + 1, icon.label);
    }
    let choice = prompter.line_or_default("Enter number [1]: ", "1")?;
    let icon = menu_index(&choice, ICON_CHOICES.len())
        .map_or(DEFAULT_ICON, |index| ICON_CHOICES[index]);

    println!("\nSelect Difficulty:");
    for (i, difficulty) in DIFFICULTY_CHOICES.iter().enumerate() {
        println!("   {}. {difficulty}", i + 1);
    }
    let choice = prompter.line_or_default("Enter number [2]: ", "2")?;
    let difficulty = menu_index(&choice, DIFFICULTY_CHOICES.len())
        .map_or("Intermediate", |index| DIFFICULTY_CHOICES[index]);

    let description = prompter.line("\nShort Description (1-2 sentences): ")?;

    println!("\nEnter the prompt template (type 'END' on a new line when finished):");
    println!("   TIP: Use **bold** for emphasis, [PLACEHOLDER] for user inputs\n");
    let template = prompter.lines_until_end()?;

    let example = prompter.line("\nExample usage (e.g., 'Replace [TOPIC] with React Hooks'): ")?;
    let tips = prompter.line("Pro tip for using this template: ")?;
    let estimated_time =
        prompter.line_or_default("Estimated time (e.g., '30-60 min') [30-60 min]: ", "30-60 min")?;

    Ok(RawTemplate {
        title: Some(title),
        icon: Some(icon.icon.to_string()),
        icon_color: Some(icon.color.to_string()),
        bg_color: Some(icon.bg.to_string()),
        category: Some(category),
        difficulty: Some(difficulty.to_string()),
        description: Some(description),
        template: Some(template),
        example: Some(example),
        tips: Some(tips),
        estimated_time: Some(estimated_time),
    })
}

/// Parses a 1-based menu answer into a 0-based index, if in range.
fn menu_index(answer: &str, len: usize) -> Option<usize> {
    answer
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}
