//! Keeping the statistics widget's counters in sync with the arrays.
//!
//! Counter updates are best-effort: a page without the expected fragment is
//! returned unchanged. Only the digits are replaced; the surrounding markup
//! is preserved byte-for-byte.

use regex::Regex;

/// A display counter tied to a label in the statistics widget.
///
/// The pattern has three capture groups — markup before the digits, the
/// digits, markup after — and only group 2 is ever rewritten.
#[derive(Debug, Clone, Copy)]
pub struct CounterPattern {
    /// Label shown in operator output ("Tools", "Templates").
    pub label: &'static str,
    pattern: &'static str,
}

/// The tool counter: digits followed by a `+` suffix, anchored by the
/// `tool-count` element id.
pub const TOOL_COUNTER: CounterPattern = CounterPattern {
    label: "Tools",
    pattern: r#"(<div class="text-4xl md:text-5xl font-black mb-1" id="tool-count">)(\d+)(\+</div>)"#,
};

/// The template counter: digits followed by the `Templates` label fragment.
pub const TEMPLATE_COUNTER: CounterPattern = CounterPattern {
    label: "Templates",
    pattern: r#"(<div class="text-4xl md:text-5xl font-black mb-1">)(\d+)(</div>\s*<div class="text-sm opacity-80">Templates</div>)"#,
};

/// Outcome of a counter adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAdjustment {
    /// The digits were rewritten.
    Updated {
        /// Value before the adjustment.
        previous: i64,
        /// Value after the adjustment, clamped at zero.
        current: i64,
    },
    /// The fragment was not found; the document is unchanged.
    NotFound,
}

impl CounterPattern {
    /// Applies `delta` to the counter (positive for insert, negative for
    /// delete), clamping the result at zero. Returns the updated document
    /// and what happened; a missing fragment leaves the document unchanged.
    #[must_use]
    pub fn adjust(&self, document: &str, delta: i64) -> (String, CounterAdjustment) {
        // Both built-in patterns are compile-tested below; a pattern that
        // fails to compile behaves like a missing fragment.
        let Ok(re) = Regex::new(self.pattern) else {
            return (document.to_string(), CounterAdjustment::NotFound);
        };

        let Some(caps) = re.captures(document) else {
            return (document.to_string(), CounterAdjustment::NotFound);
        };
        let Some(digits) = caps.get(2) else {
            return (document.to_string(), CounterAdjustment::NotFound);
        };

        let previous: i64 = digits.as_str().parse().unwrap_or(0);
        let current = (previous + delta).max(0);

        let mut updated = String::with_capacity(document.len());
        updated.push_str(&document[..digits.start()]);
        updated.push_str(&current.to_string());
        updated.push_str(&document[digits.end()..]);

        (updated, CounterAdjustment::Updated { previous, current })
    }
}
