//! # imprint-render
//!
//! Tera adapter for the imprint batch renderer: loads and compiles a
//! directory of templates once, then renders the named template against one
//! document's data model at a time.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use imprint_core::load_document;
//! use imprint_render::TemplateEngine;
//!
//! fn render_one() -> Result<String, Box<dyn std::error::Error>> {
//!     let engine = TemplateEngine::new(Path::new("templates"))?;
//!     let model = load_document(Path::new("models/invoice.json"))?;
//!     Ok(engine.render("invoice.txt.tera", &model)?)
//! }
//! ```

mod context;
pub mod engine;
pub mod error;

pub use engine::TemplateEngine;
pub use error::RenderError;
