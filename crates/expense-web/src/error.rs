//! Rendering errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),
}
