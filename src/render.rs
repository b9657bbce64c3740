//! Template rendering of the final recommendations.
//!
//! The template is an external Tera file; Tera is Jinja2-compatible, so
//! operator-maintained `.j2` templates work unchanged. The recommendation
//! mapping is bound to the `data` variable:
//!
//! ```jinja
//! {% for app, resources in data -%}
//! {{ app }}:
//!   requests:
//!     cpu: {{ resources.cpu }}
//!     memory: {{ resources.memory }}
//! {% endfor -%}
//! ```

use crate::percentile::Recommendation;
use std::collections::BTreeMap;
use std::path::Path;
use tera::{Context, Tera};
use thiserror::Error;

/// Default template file name, resolved against the current directory.
pub const DEFAULT_TEMPLATE_FILE: &str = "resources.j2";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to load template {path}: {source}")]
    Template { path: String, source: tera::Error },

    #[error("failed to render template: {0}")]
    Render(#[from] tera::Error),
}

/// Render `data` through the template at `template_path`.
pub fn render_resources(
    template_path: &Path,
    data: &BTreeMap<String, Recommendation>,
) -> Result<String, RenderError> {
    let mut tera = Tera::default();
    tera.add_template_file(template_path, Some("resources"))
        .map_err(|source| RenderError::Template {
            path: template_path.display().to_string(),
            source,
        })?;

    let mut context = Context::new();
    context.insert("data", data);

    Ok(tera.render("resources", &context)?)
}
