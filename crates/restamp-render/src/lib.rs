//! # Restamp Render - Batch Template Rendering
//!
//! `restamp-render` renders one template against many variable sets: parse a
//! JSON description of the sets, render the template once per set with a
//! Jinja2-compatible engine, and return the results in input order.
//!
//! This crate is the rendering core for the `restamp` CLI, but can be used
//! independently wherever a template needs stamping out over a list of
//! records (code generation, SQL scaffolding, config expansion).
//!
//! ## Core Concepts
//!
//! - [`DataSpec`]: decoded shape of the JSON data (array / object / scalar)
//! - [`render_batch`] / [`render_batch_joined`]: the one-shot pipeline
//! - [`BatchRenderer`]: reusable renderer over a configurable engine
//! - [`TemplateEngine`]: the seam for swapping the template backend
//! - [`BatchError`]: the two failure exits (bad JSON, failed render)
//!
//! ## Quick Start
//!
//! ```rust
//! use restamp_render::render_batch_joined;
//!
//! let template = "create table {{ table }} (id int);";
//! let data = r#"[{"table":"users"},{"table":"orders"}]"#;
//!
//! let sql = render_batch_joined(template, data).unwrap();
//! assert_eq!(
//!     sql,
//!     "create table users (id int);\ncreate table orders (id int);"
//! );
//! ```
//!
//! ## Batch Semantics
//!
//! A top-level JSON array renders once per element, in order. A top-level
//! object is a batch of one. Anything else is coerced to a batch of one and
//! rejected at render time, since a variable set must be a JSON object.
//! Rendering is fail-fast: the first failing set aborts the batch with its
//! index, and no partial output is returned.

pub mod batch;
pub mod data;
pub mod engine;
mod error;

pub use batch::{render_batch, render_batch_joined, render_batch_with_engine, BatchRenderer};
pub use data::DataSpec;
pub use engine::{register_filters, MiniJinjaEngine, TemplateEngine};
pub use error::{BatchError, EngineError};
