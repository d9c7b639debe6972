//! Tool records: the entries of the `aiTools` array.

use serde::{Deserialize, Serialize};

use super::error::{RecordError, RecordResult};

/// Rating bounds for tools; out-of-range input is clamped, not rejected.
pub const RATING_MIN: f64 = 1.0;
/// Upper rating bound.
pub const RATING_MAX: f64 = 5.0;
/// Rating used when the input is absent or not numeric.
pub const RATING_DEFAULT: f64 = 4.5;

/// How the page renders a tool's logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoType {
    /// `logo` is an image URL.
    Image,
    /// `logo` is an icon-font class (e.g. `fas fa-robot`).
    Icon,
}

impl LogoType {
    /// Classifies a logo value. Icon-font classes start with `fa`; anything
    /// else is treated as an image URL. This derivation overrides whatever
    /// the caller supplied for `logoType`.
    #[must_use]
    pub fn classify(logo: &str) -> Self {
        if logo.starts_with("fa") {
            Self::Icon
        } else {
            Self::Image
        }
    }

    /// The value as it appears in the array literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Icon => "icon",
        }
    }
}

/// Tool pricing model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pricing {
    /// No paid tier.
    Free,
    /// Free tier with paid upgrades.
    #[default]
    Freemium,
    /// Paid only.
    Paid,
}

impl Pricing {
    /// Parses a pricing value, case-insensitively. Unrecognised input falls
    /// back to the default rather than failing.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "free" => Self::Free,
            "paid" => Self::Paid,
            _ => Self::Freemium,
        }
    }

    /// The value as it appears in the array literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Freemium => "Freemium",
            Self::Paid => "Paid",
        }
    }
}

/// A tool record as submitted, before validation. Every field is optional so
/// that validation can report all missing required fields in one pass, and
/// `rating` is a raw JSON value so that non-numeric input degrades to the
/// default instead of failing deserialisation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTool {
    /// Tool name, the unique key within the array.
    pub name: Option<String>,
    /// Image URL or icon class.
    pub logo: Option<String>,
    /// Caller-supplied logo type; always overridden by classification.
    #[serde(rename = "logoType")]
    pub logo_type: Option<String>,
    /// Category label.
    pub category: Option<String>,
    /// One-line description; embedded newlines are collapsed to spaces.
    pub description: Option<String>,
    /// Feature bullet points.
    pub features: Option<Vec<String>>,
    /// Use-case bullet points.
    #[serde(rename = "useCases")]
    pub use_cases: Option<Vec<String>>,
    /// Pricing model.
    pub pricing: Option<String>,
    /// Rating; string or number accepted.
    pub rating: Option<serde_json::Value>,
    /// Product website URL.
    pub website: Option<String>,
    /// Documentation URL.
    pub docs: Option<String>,
}

/// A validated tool record with all defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Tool name, the unique key within the array.
    pub name: String,
    /// Image URL or icon class.
    pub logo: String,
    /// Derived from `logo`.
    pub logo_type: LogoType,
    /// Category label.
    pub category: String,
    /// Single-line description.
    pub description: String,
    /// Feature bullet points, possibly empty.
    pub features: Vec<String>,
    /// Use-case bullet points, possibly empty.
    pub use_cases: Vec<String>,
    /// Pricing model.
    pub pricing: Pricing,
    /// Rating, clamped to [`RATING_MIN`]..[`RATING_MAX`].
    pub rating: f64,
    /// Product website URL.
    pub website: String,
    /// Documentation URL.
    pub docs: String,
}

impl Tool {
    /// Name of the array literal holding tool entries.
    pub const ARRAY_NAME: &'static str = "aiTools";
    /// Field used to identify an entry for duplicate checks and deletion.
    pub const KEY_FIELD: &'static str = "name";
}

impl RawTool {
    /// Validates the raw record and applies defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MissingFields`] listing every absent required
    /// field (name, logo, category, description, website, docs).
    pub fn validate(self) -> RecordResult<Tool> {
        let mut missing = Vec::new();

        let name = required(self.name, "name", &mut missing);
        let logo = required(self.logo, "logo", &mut missing);
        let category = required(self.category, "category", &mut missing);
        let description = required(self.description, "description", &mut missing);
        let website = required(self.website, "website", &mut missing);
        let docs = required(self.docs, "docs", &mut missing);

        if !missing.is_empty() {
            return Err(RecordError::missing_fields("tool", missing));
        }

        let logo = logo.unwrap_or_default();
        Ok(Tool {
            logo_type: LogoType::classify(&logo),
            name: name.unwrap_or_default(),
            logo,
            category: category.unwrap_or_default(),
            description: collapse_newlines(&description.unwrap_or_default()),
            features: self.features.unwrap_or_default(),
            use_cases: self.use_cases.unwrap_or_default(),
            pricing: self
                .pricing
                .as_deref()
                .map(Pricing::parse_or_default)
                .unwrap_or_default(),
            rating: coerce_rating(self.rating.as_ref()),
            website: website.unwrap_or_default(),
            docs: docs.unwrap_or_default(),
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

/// Collapses embedded newlines to single spaces (descriptions must stay on
/// one source line inside the double-quoted literal).
fn collapse_newlines(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Coerces a raw rating value to a clamped f64. Strings are parsed; anything
/// non-numeric degrades to [`RATING_DEFAULT`].
fn coerce_rating(value: Option<&serde_json::Value>) -> f64 {
    let parsed = match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.unwrap_or(RATING_DEFAULT).clamp(RATING_MIN, RATING_MAX)
}
