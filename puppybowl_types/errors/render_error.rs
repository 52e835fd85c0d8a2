use thiserror::Error;

/// Errors while turning API data into document nodes.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(String),

    #[error("roster envelope carries no players")]
    MissingRoster,
}
