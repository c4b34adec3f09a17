use thiserror::Error;

mod domain_types;
mod settings;
mod suggestions;

pub use domain_types::*;
pub use settings::*;
pub use suggestions::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Unsupported idea count: {value}, expected one of {allowed:?}")]
    UnsupportedCount { value: u32, allowed: &'static [u32] },

    #[error("Unknown {field}: '{value}'")]
    UnknownChoice { field: &'static str, value: String },
}
