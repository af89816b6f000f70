use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleGridError {
    #[error("invalid sample grid configuration: {0}")]
    ConfigurationError(String),
    #[error("sample coordinate ({x}, {y}) is not a finite WGS84 position")]
    InvalidCoordinate { x: f64, y: f64 },
    #[error("cannot merge sample grids: {0}")]
    MismatchedGrids(String),
}
