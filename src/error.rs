use std::path::PathBuf;

use thiserror::Error;

/// Failures of the window surface. The geometry engine itself never fails.
#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixel buffer error: {0}")]
    Pixels(#[from] pixels::Error),

    #[error("failed to read font {path}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is not a usable TrueType/OpenType font")]
    InvalidFont(PathBuf),
}

/// A token on an input line that could not be understood.
#[derive(Debug, Error, PartialEq)]
pub enum ReadingError {
    #[error("empty field name in {0:?}")]
    EmptyField(String),

    #[error("invalid angle {value:?} for field {field}")]
    InvalidValue { field: String, value: String },
}
