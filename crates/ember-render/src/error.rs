//! Render error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to acquire terminal: {0}")]
    TerminalInit(String),
    #[error("Failed to query terminal size: {0}")]
    SizeQuery(String),
    #[error("Failed to present frame: {0}")]
    Present(String),
}
