use crate::utils::error::{AdapterError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Unwraps a setting that has to come from somewhere (flags or file).
pub fn require<T>(field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| {
        AdapterError::invalid_value(field, "", "Value is required but was not provided")
    })
}

pub fn validate_customer_name(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AdapterError::invalid_value(
            field,
            name,
            "Customer name cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Path given on the command line or in a file: non-empty, no NUL bytes.
pub fn validate_path(field: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AdapterError::invalid_value(field, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(AdapterError::invalid_value(field, path, "Path contains null bytes"));
    }
    Ok(())
}

/// Output file for the JSON Lines transport; an existing directory cannot be appended to.
pub fn validate_output_path(field: &str, path: &str) -> Result<()> {
    validate_path(field, path)?;
    if Path::new(path).is_dir() {
        return Err(AdapterError::invalid_value(
            field,
            path,
            "Output must be a file, not a directory",
        ));
    }
    Ok(())
}
