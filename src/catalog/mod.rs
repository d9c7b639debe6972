//! Record model: the two entry shapes carried by the catalogue page.
//!
//! A [`tool::Tool`] is one entry of the `aiTools` array; a
//! [`template::Template`] is one entry of `learningTemplates`. Both arrive
//! as raw structs with every field optional, are validated in one pass
//! (all missing required fields reported together), and come out with
//! their documented defaults applied. [`literal`] renders validated
//! records into the page's JS object-literal syntax.

pub mod error;
pub mod literal;
pub mod options;
pub mod template;
pub mod tool;

pub use error::{RecordError, RecordResult};
pub use template::{Difficulty, RawTemplate, Template};
pub use tool::{LogoType, Pricing, RawTool, Tool};

use std::path::Path;

use serde::de::DeserializeOwned;

/// Loads a raw record from a JSON file.
///
/// # Errors
///
/// Returns [`RecordError::FileNotFound`] if the path does not exist,
/// [`RecordError::Read`] if it cannot be read, and
/// [`RecordError::InvalidJson`] if the contents are not strict JSON
/// matching the record's field names.
pub fn load_raw_record<T: DeserializeOwned>(path: &Path) -> RecordResult<T> {
    if !path.exists() {
        return Err(RecordError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|e| RecordError::read(path, e))?;
    serde_json::from_str(&contents).map_err(|e| RecordError::invalid_json(path, e))
}
