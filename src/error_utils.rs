//! Shared error utilities

use miette::NamedSource;
use std::path::Path;

/// Create a NamedSource with a display-friendly name for error output
pub fn create_named_source(path: &Path, content: String) -> NamedSource<String> {
    NamedSource::new(path.display().to_string(), content)
}
