//! Host startup errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid {var}: {value:?}")]
    InvalidConfig { var: &'static str, value: String },

    #[error("leptos configuration: {0}")]
    LeptosConfig(String),

    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
}
