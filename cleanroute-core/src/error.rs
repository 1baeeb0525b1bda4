use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Node declared more than once: {0}")]
    DuplicateNode(String),
    #[error("Edge {from} -> {to} targets an undeclared node")]
    DanglingEdge { from: String, to: String },
    #[error("No coordinates for node: {0}")]
    MissingCoordinate(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
