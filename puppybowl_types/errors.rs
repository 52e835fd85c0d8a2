use thiserror::Error;

pub mod api_error;
pub mod render_error;

pub use api_error::ApiError;
pub use render_error::RenderError;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}
