//! Generation orchestrators
//!
//! [`generate_project`] drives `init`, [`generate_module`] drives
//! `generate module`. Both walk templates in a fixed order, render each one
//! and hand the result to the materializer. The first error aborts the run.

mod module;
mod project;

pub use module::{generate_module, ModuleOptions, TemplateSource};
pub use project::{generate_project, GenerateOptions, GenerationReport};

use crate::error::{GenerationError, Result};
use crate::render::{self, Grammar, RenderContext};

/// Render one template body, attributing failures to `path`
fn render_template(
    path: &str,
    body: &str,
    grammar: Grammar,
    context: &dyn RenderContext,
) -> Result<String> {
    render::render(body, grammar, context).map_err(|source| GenerationError::TemplateSyntax {
        path: path.to_string(),
        source,
    })
}
