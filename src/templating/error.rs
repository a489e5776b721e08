//! Template error types with miette integration

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Template error")]
pub struct TemplateError {
    #[source_code]
    src: NamedSource<String>,

    #[label("{}", self.reason)]
    span: Option<SourceSpan>,

    reason: String,

    #[help]
    help: Option<String>,

    #[source]
    source: Option<minijinja::Error>,
}

impl TemplateError {
    /// Wrap a MiniJinja error with the template source for display.
    pub fn from_minijinja_error(
        error: minijinja::Error,
        source: String,
        source_path: &std::path::Path,
    ) -> Self {
        let (span, reason, help) = Self::extract_error_info(&error, &source);
        let src = crate::error_utils::create_named_source(source_path, source.clone());

        Self {
            src,
            span,
            reason,
            help,
            source: Some(error),
        }
    }

    fn extract_error_info(
        error: &minijinja::Error,
        source: &str,
    ) -> (Option<SourceSpan>, String, Option<String>) {
        let span = if let Some(range) = error.range() {
            Some(SourceSpan::from(range))
        } else {
            error.line().map(|line| {
                // MiniJinja uses 1-based line numbers
                let offset = Self::line_to_offset(source, line.saturating_sub(1));
                SourceSpan::from(offset)
            })
        };

        let reason = match error.kind() {
            minijinja::ErrorKind::UndefinedError => {
                if let Some(detail) = error.detail() {
                    format!("undefined variable: {detail}")
                } else {
                    "undefined variable".to_string()
                }
            }
            minijinja::ErrorKind::SyntaxError => {
                format!(
                    "syntax error: {}",
                    error.detail().unwrap_or("invalid syntax")
                )
            }
            minijinja::ErrorKind::InvalidOperation => {
                format!("invalid operation: {}", error.detail().unwrap_or("unknown"))
            }
            minijinja::ErrorKind::UnknownFilter => {
                format!("unknown filter: {}", error.detail().unwrap_or("unknown"))
            }
            _ => error.to_string(),
        };

        let help = match error.kind() {
            minijinja::ErrorKind::UndefinedError => Some(
                "The map template only sees variables supplied by the map \
                 generator; an undefined variable means the embedded template \
                 and the generator context have drifted apart."
                    .to_string(),
            ),
            minijinja::ErrorKind::UnknownFilter => {
                Some("Available custom filters: swissnum. See MiniJinja docs for built-ins.".to_string())
            }
            _ => None,
        };

        (span, reason, help)
    }

    /// Calculate byte offset from line number
    fn line_to_offset(source: &str, target_line: usize) -> usize {
        let mut current_line = 0;

        for (idx, ch) in source.char_indices() {
            if current_line == target_line {
                return idx;
            }
            if ch == '\n' {
                current_line += 1;
            }
        }

        source.len()
    }
}
