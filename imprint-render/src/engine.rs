//! Template loading and the render call.
//!
//! Every regular file under the template directory is registered with Tera
//! under its slash-normalised relative path, so templates can `{% include %}`
//! and `{% import %}` each other by relative name. The whole set is compiled
//! once per invocation; render-time errors are per-document.

use std::path::{Path, PathBuf};

use tera::Tera;

use imprint_core::ModelValue;

use crate::context::build_context;
use crate::error::RenderError;

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io {
        path: path.into(),
        source,
    }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.is_dir() {
        return Err(RenderError::DirNotFound {
            path: dir.to_path_buf(),
        });
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;

    let mut templates = Vec::new();
    for path in files {
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        // Template sources are read as UTF-8; output encoding is always
        // UTF-8 regardless of how the source declares itself.
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

/// Compiled template set, loaded once per invocation and shared read-only
/// across every per-file render.
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Load and compile every file under `template_dir`.
    ///
    /// A missing directory or a syntax error in any loaded template is a
    /// configuration error; no input file has been touched at that point.
    pub fn new(template_dir: &Path) -> Result<Self, RenderError> {
        let templates = load_templates(template_dir)?;
        let mut tera = Tera::default();
        tera.add_raw_templates(templates)
            .map_err(RenderError::Compile)?;
        Ok(TemplateEngine { tera })
    }

    /// True if `name` is among the compiled templates.
    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }

    /// Render the named template against one document's data model.
    ///
    /// The context is built without loss — decimal numbers are carried as
    /// their literal text and render verbatim. Engine evaluation errors
    /// surface unchanged as [`RenderError::Render`].
    pub fn render(&self, name: &str, model: &ModelValue) -> Result<String, RenderError> {
        if !self.has_template(name) {
            return Err(RenderError::TemplateNotFound {
                name: name.to_string(),
            });
        }
        let ctx = build_context(model)?;
        self.tera
            .render(name, &ctx)
            .map_err(|e| RenderError::Render {
                template: name.to_string(),
                source: e,
            })
    }
}
