use thiserror::Error;

/// Failures while wiring the sketch into the page.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("element #{0} is not a {1}")]
    WrongElement(String, &'static str),
    #[error("2d canvas context unavailable")]
    NoContext,
    #[error("javascript error: {0}")]
    Js(String),
}

pub type Result<T, E = SketchError> = std::result::Result<T, E>;
