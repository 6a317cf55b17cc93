//! The batch rendering pipeline: decode, normalize, render in order.
//!
//! A single linear pipeline with two failure exits. Decoding fails with
//! [`BatchError::InvalidInput`]; rendering fails fast with
//! [`BatchError::Render`] carrying the index of the first bad variable set.
//! On failure nothing is returned, never a partial batch.

use serde_json::Value;

use crate::data::DataSpec;
use crate::engine::{MiniJinjaEngine, TemplateEngine};
use crate::error::BatchError;

/// Renders `template` once per variable set described by `data_json`,
/// using a fresh default engine.
///
/// The output has one entry per variable set, in input order.
///
/// # Example
///
/// ```rust
/// use restamp_render::render_batch;
///
/// let outputs = render_batch("{{ value }}", r#"[{"value":"hello"}]"#).unwrap();
/// assert_eq!(outputs, vec!["hello"]);
/// ```
pub fn render_batch(template: &str, data_json: &str) -> Result<Vec<String>, BatchError> {
    render_batch_with_engine(&MiniJinjaEngine::new(), template, data_json)
}

/// As [`render_batch`], joined with a single newline between consecutive
/// entries. No trailing newline beyond what joining implies.
pub fn render_batch_joined(template: &str, data_json: &str) -> Result<String, BatchError> {
    Ok(render_batch(template, data_json)?.join("\n"))
}

/// Renders a batch with a caller-supplied engine.
pub fn render_batch_with_engine<E: TemplateEngine + ?Sized>(
    engine: &E,
    template: &str,
    data_json: &str,
) -> Result<Vec<String>, BatchError> {
    let contexts = DataSpec::parse(data_json)?.into_contexts();
    render_contexts(engine, template, &contexts)
}

fn render_contexts<E: TemplateEngine + ?Sized>(
    engine: &E,
    template: &str,
    contexts: &[Value],
) -> Result<Vec<String>, BatchError> {
    let mut outputs = Vec::with_capacity(contexts.len());
    for (index, context) in contexts.iter().enumerate() {
        // A variable set must be a mapping. Rejected here so the failure is
        // the same for every engine and does not depend on whether the
        // template happens to look anything up.
        if !context.is_object() {
            return Err(BatchError::Render {
                index,
                message: format!(
                    "non-mapping context: expected a JSON object, got {}",
                    json_type_name(context)
                ),
            });
        }
        match engine.render(template, context) {
            Ok(rendered) => outputs.push(rendered),
            Err(err) => {
                return Err(BatchError::Render {
                    index,
                    message: err.message().to_string(),
                })
            }
        }
    }
    Ok(outputs)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A batch renderer holding a reusable engine.
///
/// Use this when rendering several batches with the same engine setup, for
/// example after registering custom filters:
///
/// ```rust
/// use restamp_render::{BatchRenderer, MiniJinjaEngine};
///
/// let mut engine = MiniJinjaEngine::new();
/// engine
///     .environment_mut()
///     .add_filter("shout", |value: String| value.to_uppercase());
///
/// let renderer = BatchRenderer::with_engine(Box::new(engine));
/// let out = renderer
///     .render_joined("{{ word | shout }}", r#"[{"word":"a"},{"word":"b"}]"#)
///     .unwrap();
/// assert_eq!(out, "A\nB");
/// ```
pub struct BatchRenderer {
    engine: Box<dyn TemplateEngine>,
}

impl BatchRenderer {
    /// Creates a renderer with the default MiniJinja engine.
    pub fn new() -> Self {
        Self {
            engine: Box::new(MiniJinjaEngine::new()),
        }
    }

    /// Creates a renderer over a custom engine.
    pub fn with_engine(engine: Box<dyn TemplateEngine>) -> Self {
        Self { engine }
    }

    /// Renders one batch. See [`render_batch`].
    pub fn render_batch(&self, template: &str, data_json: &str) -> Result<Vec<String>, BatchError> {
        render_batch_with_engine(self.engine.as_ref(), template, data_json)
    }

    /// Renders one batch and joins the results with newlines.
    pub fn render_joined(&self, template: &str, data_json: &str) -> Result<String, BatchError> {
        Ok(self.render_batch(template, data_json)?.join("\n"))
    }
}

impl Default for BatchRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_of_one_object_renders_once() {
        let outputs = render_batch("{{ value }}", r#"[{"value":"hello"}]"#).unwrap();
        assert_eq!(outputs, vec!["hello"]);
    }

    #[test]
    fn single_object_is_wrapped_into_a_batch_of_one() {
        let outputs = render_batch("{{ value }}", r#"{"value":"hi"}"#).unwrap();
        assert_eq!(outputs, vec!["hi"]);
    }

    #[test]
    fn invalid_json_fails_before_rendering() {
        let err = render_batch("{{ value }}", "not json").unwrap_err();
        assert!(matches!(err, BatchError::InvalidInput(_)));
    }

    #[test]
    fn first_bad_set_aborts_with_its_index() {
        let err = render_batch("{{ a }}", r#"[{"a":1},{"b":2}]"#).unwrap_err();
        match err {
            BatchError::Render { index, message } => {
                assert_eq!(index, 1);
                assert!(message.contains("undefined"));
            }
            other => panic!("expected Render, got {other:?}"),
        }
    }

    #[test]
    fn failure_in_the_middle_discards_earlier_results() {
        // Three sets, second one bad: no partial two-element output.
        let result = render_batch("{{ a }}", r#"[{"a":1},{"b":2},{"a":3}]"#);
        assert!(matches!(
            result,
            Err(BatchError::Render { index: 1, .. })
        ));
    }

    #[test]
    fn scalar_context_with_variable_lookup_is_rejected() {
        let err = render_batch("{{ value }}", "42").unwrap_err();
        assert!(matches!(err, BatchError::Render { index: 0, .. }));
    }

    #[test]
    fn scalar_context_is_rejected_even_for_literal_templates() {
        // Non-mapping contexts never render, whether or not the template
        // looks anything up.
        let err = render_batch("just text", "42").unwrap_err();
        match err {
            BatchError::Render { index, message } => {
                assert_eq!(index, 0);
                assert!(message.contains("non-mapping context"));
                assert!(message.contains("a number"));
            }
            other => panic!("expected Render, got {other:?}"),
        }
    }

    #[test]
    fn non_object_array_element_fails_at_its_index() {
        let err = render_batch("just text", r#"[{"a":1}, 7]"#).unwrap_err();
        assert!(matches!(err, BatchError::Render { index: 1, .. }));
    }

    #[test]
    fn empty_array_renders_an_empty_batch() {
        let outputs = render_batch("{{ value }}", "[]").unwrap();
        assert!(outputs.is_empty());
        assert_eq!(render_batch_joined("{{ value }}", "[]").unwrap(), "");
    }

    #[test]
    fn joined_output_uses_single_newlines_no_trailing() {
        let out =
            render_batch_joined("{{ n }}", r#"[{"n":1},{"n":2},{"n":3}]"#).unwrap();
        assert_eq!(out, "1\n2\n3");
    }

    #[test]
    fn batch_renderer_reuses_its_engine() {
        let renderer = BatchRenderer::new();
        let first = renderer
            .render_batch("{{ value }}", r#"[{"value":"x"}]"#)
            .unwrap();
        let second = renderer
            .render_batch("{{ value }}", r#"[{"value":"x"}]"#)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rendering_is_idempotent() {
        let template = "{% for i in range(count) %}{{ name }}{% endfor %}";
        let data = r#"[{"name":"a","count":2},{"name":"b","count":1}]"#;
        let first = render_batch(template, data).unwrap();
        let second = render_batch(template, data).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec!["aa", "b"]);
    }
}
