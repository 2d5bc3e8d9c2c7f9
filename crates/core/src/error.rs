//! Error types for the renderer.

use thiserror::Error;

/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering a slide.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The caller supplied no HTML to render.
    #[error("HTML content required")]
    EmptyHtml,

    /// Headless Chrome could not be launched or a tab could not be opened.
    #[error("Failed to launch browser: {0}")]
    Launch(String),

    /// The page content failed to load.
    #[error("Failed to load content: {0}")]
    Navigation(String),

    /// The content did not finish loading within the configured cap.
    #[error("Content load timed out after {0}s")]
    Timeout(u64),

    /// The screenshot could not be captured.
    #[error("Screenshot capture failed: {0}")]
    Capture(String),
}
