//! Template records: the entries of the `learningTemplates` array.

use serde::{Deserialize, Serialize};

use super::error::{RecordError, RecordResult};
use super::options::DEFAULT_ICON;

/// Default estimated completion time.
pub const ESTIMATED_TIME_DEFAULT: &str = "30-60 min";

/// Template difficulty level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Suitable for newcomers.
    Beginner,
    /// Assumes some familiarity.
    #[default]
    Intermediate,
    /// Assumes strong familiarity.
    Advanced,
    /// Useful at any level.
    #[serde(rename = "All Levels")]
    AllLevels,
}

impl Difficulty {
    /// Parses a difficulty value. Unrecognised input falls back to the
    /// default rather than failing.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "beginner" => Self::Beginner,
            "advanced" => Self::Advanced,
            "all levels" => Self::AllLevels,
            _ => Self::Intermediate,
        }
    }

    /// The value as it appears in the array literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::AllLevels => "All Levels",
        }
    }
}

/// A template record as submitted, before validation. Every field is
/// optional so that validation can report all missing required fields in
/// one pass.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTemplate {
    /// Template title, the unique key within the array.
    pub title: Option<String>,
    /// Font Awesome icon class.
    pub icon: Option<String>,
    /// Tailwind text colour class.
    #[serde(rename = "iconColor")]
    pub icon_color: Option<String>,
    /// Tailwind background colour classes.
    #[serde(rename = "bgColor")]
    pub bg_color: Option<String>,
    /// Category label.
    pub category: Option<String>,
    /// Difficulty level.
    pub difficulty: Option<String>,
    /// Short description.
    pub description: Option<String>,
    /// The prompt template body. Multi-line; whitespace is significant.
    pub template: Option<String>,
    /// Example usage line.
    pub example: Option<String>,
    /// Pro tip for using the template.
    pub tips: Option<String>,
    /// Estimated completion time.
    #[serde(rename = "estimatedTime")]
    pub estimated_time: Option<String>,
}

/// A validated template record with all defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Template title, the unique key within the array.
    pub title: String,
    /// Font Awesome icon class.
    pub icon: String,
    /// Tailwind text colour class.
    pub icon_color: String,
    /// Tailwind background colour classes.
    pub bg_color: String,
    /// Category label.
    pub category: String,
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Short description.
    pub description: String,
    /// The prompt template body, verbatim.
    pub template: String,
    /// Example usage line.
    pub example: String,
    /// Pro tip for using the template.
    pub tips: String,
    /// Estimated completion time.
    pub estimated_time: String,
}

impl Template {
    /// Name of the array literal holding template entries.
    pub const ARRAY_NAME: &'static str = "learningTemplates";
    /// Field used to identify an entry for duplicate checks and deletion.
    pub const KEY_FIELD: &'static str = "title";
}

impl RawTemplate {
    /// Validates the raw record and applies defaults.
    ///
    /// The icon triple defaults field-by-field to the robot-on-purple style;
    /// difficulty and estimated time take their documented defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingFields`] listing every absent required
    /// field (title, category, description, template, example, tips).
    pub fn validate(self) -> RecordResult<Template> {
        let mut missing = Vec::new();

        let title = required(self.title, "title", &mut missing);
        let category = required(self.category, "category", &mut missing);
        let description = required(self.description, "description", &mut missing);
        let template = required(self.template, "template", &mut missing);
        let example = required(self.example, "example", &mut missing);
        let tips = required(self.tips, "tips", &mut missing);

        if !missing.is_empty() {
            return Err(RecordError::missing_fields("template", missing));
        }

        Ok(Template {
            title: title.unwrap_or_default(),
            icon: self.icon.unwrap_or_else(|| DEFAULT_ICON.icon.to_string()),
            icon_color: self
                .icon_color
                .unwrap_or_else(|| DEFAULT_ICON.color.to_string()),
            bg_color: self.bg_color.unwrap_or_else(|| DEFAULT_ICON.bg.to_string()),
            category: category.unwrap_or_default(),
            difficulty: self
                .difficulty
                .as_deref()
                .map(Difficulty::parse_or_default)
                .unwrap_or_default(),
            description: description.unwrap_or_default(),
            template: template.unwrap_or_default(),
            example: example.unwrap_or_default(),
            tips: tips.unwrap_or_default(),
            estimated_time: self
                .estimated_time
                .unwrap_or_else(|| ESTIMATED_TIME_DEFAULT.to_string()),
        })
    }
}

/// Records `field` in `missing` when the value is absent or blank.
fn required(
    value: Option<String>,
    field: &str,
    missing: &mut Vec<String>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            missing.push(field.to_string());
            None
        }
    }
}
