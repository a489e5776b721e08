use miette::Result as MietteResult;
use minijinja::Environment;
use serde::Serialize;
use std::path::Path;

use super::error::TemplateError;
use super::functions::register_filters;

pub struct TemplateEngine {
    env: Environment<'static>,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();

        // Every variable the template touches must be supplied explicitly
        env.set_undefined_behavior(minijinja::UndefinedBehavior::Strict);

        register_filters(&mut env);

        Self { env }
    }

    /// Render a template source with the given context. `name` is only
    /// used to label error output.
    pub fn render<S: Serialize>(
        &mut self,
        name: &str,
        source: &str,
        context: &S,
    ) -> MietteResult<String> {
        match self.env.render_str(source, context) {
            Ok(rendered) => Ok(rendered),
            Err(error) => {
                let template_error =
                    TemplateError::from_minijinja_error(error, source.to_string(), Path::new(name));
                Err(template_error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_render_with_context() {
        let mut engine = TemplateEngine::new();
        let context: HashMap<&str, &str> = [("canton", "ZH")].into();

        let rendered = engine
            .render("test", "<b>{{ canton }}</b>", &context)
            .unwrap();
        assert_eq!(rendered, "<b>ZH</b>");
    }

    #[test]
    fn test_undefined_variable_is_an_error() {
        let mut engine = TemplateEngine::new();
        let context: HashMap<&str, &str> = HashMap::new();

        let result = engine.render("test", "{{ missing }}", &context);
        assert!(result.is_err());
    }

    #[test]
    fn test_swissnum_filter_is_registered() {
        let mut engine = TemplateEngine::new();
        let context: HashMap<&str, f64> = [("value", 1500.0)].into();

        let rendered = engine.render("test", "{{ value | swissnum }}", &context).unwrap();
        assert_eq!(rendered, "1'500");
    }
}
