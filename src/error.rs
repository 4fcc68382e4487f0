use thiserror::Error;

/// Error for the card rendering path.
///
/// Formatting itself is total; only the output writer can fail.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to write card output")]
    Io(#[from] std::io::Error),
}
