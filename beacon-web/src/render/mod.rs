//! Page rendering
//!
//! Turns assembled view models into response bodies.

pub mod html;

use thiserror::Error;

use crate::service::build_page::BuildPage;

/// Renders a build page view model into a response body
pub trait Renderer: Send + Sync {
    fn render(&self, page: &BuildPage) -> Result<String, RenderError>;
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write page: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Template error: {0}")]
    Template(String),
}
