//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait which allows the batch
//! pipeline to work with different template backends. The default
//! implementation is [`MiniJinjaEngine`].

use minijinja::{Environment, UndefinedBehavior, Value};

use crate::error::EngineError;

/// A template engine that renders a template string against one binding
/// context.
///
/// The batch pipeline treats the engine as an opaque capability: compile the
/// template, substitute the context, return a string or fail. Backends may
/// cache compilation internally as long as rendering stays a pure function
/// of `(template, context)`.
pub trait TemplateEngine: Send + Sync {
    /// Renders `template` with `context` as the variable bindings.
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, EngineError>;
}

/// MiniJinja-based template engine.
///
/// The default backend: Jinja2-compatible syntax with loops, conditionals,
/// filters, and macros. Undefined variables are hard errors, so a variable
/// set missing a key the template references fails its render instead of
/// silently producing empty output.
///
/// # Example
///
/// ```rust
/// use restamp_render::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let engine = MiniJinjaEngine::new();
/// let output = engine
///     .render("Hello, {{ name }}!", &json!({"name": "World"}))
///     .unwrap();
/// assert_eq!(output, "Hello, World!");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates a new engine with strict undefined-variable handling and the
    /// default filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        register_filters(&mut env);
        Self { env }
    }

    /// Returns a mutable reference to the underlying MiniJinja environment.
    ///
    /// This allows registering custom filters or functions before handing
    /// the engine to a [`BatchRenderer`](crate::BatchRenderer).
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String, EngineError> {
        let value = Value::from_serialize(context);
        Ok(self.env.render_str(template, value)?)
    }
}

/// Registers restamp's convenience filters with a MiniJinja environment.
///
/// Called automatically by [`MiniJinjaEngine::new`].
pub fn register_filters(env: &mut Environment<'static>) {
    // Trailing-newline filter, handy for line-oriented generated output.
    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });
}
