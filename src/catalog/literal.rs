//! JS object-literal serialisation for records.
//!
//! Entries are emitted exactly as the page's hand-written entries look:
//! twelve spaces of entry indent, sixteen of field indent, fixed field
//! order. Indentation is cosmetic only — nothing downstream parses it.
//!
//! # Escaping
//!
//! Double-quoted fields escape backslash and double-quote. The template
//! body is embedded in a backtick template literal, so it additionally
//! escapes backticks and `${` — otherwise literal text could be
//! reinterpreted as a substitution when the page evaluates the script.

use std::fmt::Write;

use super::template::Template;
use super::tool::Tool;

/// Indent of the opening/closing braces of an entry.
const ENTRY_INDENT: &str = "            ";
/// Indent of each field line.
const FIELD_INDENT: &str = "                ";

/// Escapes text for embedding in a double-quoted JS string literal.
#[must_use]
pub fn escape_double_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escapes text for embedding in a backtick template literal. Backslashes
/// first, then the delimiter, then the substitution trigger.
#[must_use]
pub fn escape_template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

/// Serialises a string sequence as a JSON array-of-strings literal.
#[must_use]
pub fn string_array_literal(items: &[String]) -> String {
    serde_json::Value::from(items.to_vec()).to_string()
}

/// Formats a rating without quotes. Integral values keep one decimal place
/// so a clamped maximum reads `5.0`, not `5`.
#[must_use]
pub fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        format!("{rating:.1}")
    } else {
        format!("{rating}")
    }
}

impl Tool {
    /// Renders this tool as the JS object literal inserted into `aiTools`.
    #[must_use]
    pub fn to_js_literal(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{ENTRY_INDENT}{{");
        let _ = writeln!(
            out,
            "{FIELD_INDENT}name: \"{}\",",
            escape_double_quoted(&self.name)
        );
        let _ = writeln!(
            out,
            "{FIELD_INDENT}logo: \"{}\",",
            escape_double_quoted(&self.logo)
        );
        let _ = writeln!(out, "{FIELD_INDENT}logoType: \"{}\",", self.logo_type.as_str());
        let _ = writeln!(
            out,
            "{FIELD_INDENT}category: \"{}\",",
            escape_double_quoted(&self.category)
        );
        let _ = writeln!(
            out,
            "{FIELD_INDENT}description: \"{}\",",
            escape_double_quoted(&self.description)
        );
        let _ = writeln!(
            out,
            "{FIELD_INDENT}features: {},",
            string_array_literal(&self.features)
        );
        let _ = writeln!(
            out,
            "{FIELD_INDENT}useCases: {},",
            string_array_literal(&self.use_cases)
        );
        let _ = writeln!(out, "{FIELD_INDENT}pricing: \"{}\",", self.pricing.as_str());
        let _ = writeln!(out, "{FIELD_INDENT}rating: {},", format_rating(self.rating));
        let _ = writeln!(
            out,
            "{FIELD_INDENT}website: \"{}\",",
            escape_double_quoted(&self.website)
        );
        let _ = writeln!(
            out,
            "{FIELD_INDENT}docs: \"{}\"",
            escape_double_quoted(&self.docs)
        );
        let _ = write!(out, "{ENTRY_INDENT}}}");
        out
    }
}

impl Template {
    /// Renders this template as the JS object literal inserted into
    /// `learningTemplates`. The `template` field is a backtick literal so
    /// the body keeps its line structure verbatim.
    #[must_use]
    pub fn to_js_literal(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{ENTRY_INDENT}{{");
        let _ = writeln!(
            out,
            "{FIELD_INDENT}title: \"{}\",",
            escape_double_quoted(&self.title)
        );
        let _ = writeln!(
            out,
            "{FIELD_INDENT}icon: \"{}\",",
            escape_double_quoted(&self.icon)
        );
        let _ = writeln!(
            out,
            "{FIELD_INDENT}iconColor: \"{}\",",
            escape_double_quoted(&self.icon_color)
        );
        let _ = writeln!(
            out,
            "{FIELD_INDENT}bgColor: \"{}\",",
            escape_double_quoted(&self.bg_color)
        );
        let _ = writeln!(
            out,
            "{FIELD_INDENT}category: \"{}\",",
            escape_double_quoted(&self.category)
        );
        let _ = writeln!(
            out,
            "{FIELD_INDENT}difficulty: \"{}\",",
            self.difficulty.as_str()
        );
        let _ = writeln!(
            out,
            "{FIELD_INDENT}description: \"{}\",",
            escape_double_quoted(&self.description)
        );
        let _ = writeln!(
            out,
            "{FIELD_INDENT}template: `{}`,",
            escape_template_literal(&self.template)
        );
        let _ = writeln!(
            out,
            "{FIELD_INDENT}example: \"{}\",",
            escape_double_quoted(&self.example)
        );
        let _ = writeln!(
            out,
            "{FIELD_INDENT}tips: \"{}\",",
            escape_double_quoted(&self.tips)
        );
        let _ = writeln!(
            out,
            "{FIELD_INDENT}estimatedTime: \"{}\"",
            escape_double_quoted(&self.estimated_time)
        );
        let _ = write!(out, "{ENTRY_INDENT}}}");
        out
    }
}
