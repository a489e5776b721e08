use miette::Diagnostic;
use thiserror::Error;

/// Raised when the dataset lacks a column the configuration requires.
#[derive(Error, Debug, Diagnostic, Clone)]
#[error("missing required column '{column}'")]
#[diagnostic(code(cantonmap::missing_column))]
pub struct MissingColumnError {
    /// The column name the configuration expects.
    pub column: String,

    #[help]
    help: Option<String>,
}

impl MissingColumnError {
    pub fn new(column: &str, present: &[String]) -> Self {
        let help = if present.is_empty() {
            "the dataset has no columns at all".to_string()
        } else {
            format!(
                "the dataset has these columns: {}.\n\
                 Set `dataset.value_column` in the config (or pass --column) \
                 to match one of them.",
                present.join(", ")
            )
        };

        Self {
            column: column.to_string(),
            help: Some(help),
        }
    }
}
