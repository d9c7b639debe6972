//! Locating a named array literal inside the document.

use regex::Regex;

use super::error::{PatchError, PatchResult};

/// A located `const <name> = [ ... ];` span inside a document.
///
/// The region borrows the document it was located in; lifecycle is
/// read-locate-replace-discard within one operation. `prefix` runs up to and
/// including the opening bracket, `body` is the raw entry text (possibly
/// empty or whitespace-only), and `suffix` is the closing bracket line
/// through the statement terminator.
#[derive(Debug)]
pub struct ArrayRegion<'a> {
    document: &'a str,
    /// Everything up to and including the opening `[`.
    pub prefix: &'a str,
    /// Raw text of the existing entries.
    pub body: &'a str,
    /// Closing `];` and the whitespace-only line prefix before it.
    pub suffix: &'a str,
    body_start: usize,
    body_end: usize,
}

impl ArrayRegion<'_> {
    /// Produces a new document with this region's body replaced. Everything
    /// outside the body, including the prefix and suffix, is preserved
    /// byte-for-byte.
    #[must_use]
    pub fn replace_body(&self, new_body: &str) -> String {
        let mut out =
            String::with_capacity(self.document.len() - self.body.len() + new_body.len());
        out.push_str(&self.document[..self.body_start]);
        out.push_str(new_body);
        out.push_str(&self.document[self.body_end..]);
        out
    }
}

/// Finds the first `const <array_name> = [ ... ];` literal in `document`.
///
/// The body match is non-greedy, so the region ends at the first closing
/// bracket that sits alone on a line (only whitespace before it) followed by
/// the statement terminator — similar later arrays are not spanned.
///
/// # Errors
///
/// Returns [`PatchError::ArrayNotFound`] when the literal is absent.
pub fn locate<'a>(document: &'a str, array_name: &str) -> PatchResult<ArrayRegion<'a>> {
    let pattern = format!(
        r"(?s)(const\s+{}\s*=\s*\[)(.*?)(\n\s*\];)",
        regex::escape(array_name)
    );
    let re = Regex::new(&pattern).map_err(|e| PatchError::pattern(&e))?;

    let caps = re
        .captures(document)
        .ok_or_else(|| PatchError::array_not_found(array_name))?;

    // Three capture groups always participate when the pattern matches.
    let (prefix, body, suffix) = match (caps.get(1), caps.get(2), caps.get(3)) {
        (Some(p), Some(b), Some(s)) => (p, b, s),
        _ => return Err(PatchError::array_not_found(array_name)),
    };

    Ok(ArrayRegion {
        document,
        prefix: prefix.as_str(),
        body: body.as_str(),
        suffix: suffix.as_str(),
        body_start: body.start(),
        body_end: body.end(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "\
<script>
        const aiTools = [
            {
                name: \"ChatGPT\",
                rating: 4.8
            }
        ];
        const learningTemplates = [
        ];
</script>
";

    #[test]
    fn locates_named_array() {
        let region = locate(PAGE, "aiTools").unwrap();
        assert!(region.prefix.ends_with('['));
        assert!(region.body.contains("ChatGPT"));
        assert!(!region.body.contains("learningTemplates"));
        assert!(region.suffix.trim_start().starts_with("];"));
    }

    #[test]
    fn non_greedy_body_stops_at_first_terminator() {
        let region = locate(PAGE, "aiTools").unwrap();
        // The second array's closing bracket must not be swallowed.
        assert_eq!(region.body.matches("];").count(), 0);
    }

    #[test]
    fn empty_array_has_whitespace_only_body() {
        let region = locate(PAGE, "learningTemplates").unwrap();
        assert!(region.body.trim().is_empty());
    }

    #[test]
    fn missing_array_is_an_error() {
        let err = locate(PAGE, "missingArray").unwrap_err();
        assert!(matches!(err, PatchError::ArrayNotFound { .. }));
    }

    #[test]
    fn replace_body_preserves_surroundings() {
        let region = locate(PAGE, "learningTemplates").unwrap();
        let updated = region.replace_body("\n            { title: \"T\" }");
        assert!(updated.contains("const learningTemplates = [\n            { title: \"T\" }"));
        assert!(updated.contains("ChatGPT")); // other array untouched
        assert!(updated.starts_with("<script>"));
    }
}
