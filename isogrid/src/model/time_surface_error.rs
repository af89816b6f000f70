use isogrid_core::model::SampleGridError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimeSurfaceError {
    #[error("failure building sample grid: {0}")]
    SampleGridError(#[from] SampleGridError),
    #[error("no coordinate found for vertex {0}")]
    MissingVertexCoordinate(String),
    #[error("sample grid for time surface {0} has already been built")]
    SampleGridAlreadyBuilt(u64),
    #[error("invalid configuration: {0}")]
    ConfigurationError(String),
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("{msg}: {source}")]
    CsvError { msg: String, source: csv::Error },
    #[error("{msg}: {source}")]
    IoError {
        msg: String,
        source: std::io::Error,
    },
}
