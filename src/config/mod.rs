#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::Customer;
use crate::utils::error::{AdapterError, Result};
use crate::utils::validation::{require, validate_customer_name, validate_output_path};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use toml_config::TomlConfig;

/// Which adapter delivers the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SendMode {
    /// Hand the customer value to an object transport.
    Direct,
    /// Serialize to JSON and hand the string to a string transport.
    #[default]
    Json,
}

impl fmt::Display for SendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendMode::Direct => write!(f, "direct"),
            SendMode::Json => write!(f, "json"),
        }
    }
}

/// The object transport has no file form, so an output path only makes sense for JSON.
pub(crate) fn direct_output_error(field: &str, output: &str) -> AdapterError {
    AdapterError::invalid_value(
        field,
        output,
        "The direct mode has no file transport; use the json mode",
    )
}

/// Values given directly (e.g. on the command line). Each one wins over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendOverrides {
    pub name: Option<String>,
    pub id: Option<u32>,
    pub mode: Option<SendMode>,
    pub output: Option<String>,
}

/// Fully resolved description of one send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendPlan {
    pub customer: Customer,
    pub mode: SendMode,
    pub output: Option<PathBuf>,
}

impl SendPlan {
    pub fn resolve(overrides: SendOverrides, file: Option<&TomlConfig>) -> Result<Self> {
        let file_customer = file.and_then(|f| f.customer.as_ref());
        let file_transport = file.and_then(|f| f.transport.as_ref());

        let name = overrides
            .name
            .or_else(|| file_customer.and_then(|c| c.name.clone()));
        let id = overrides.id.or_else(|| file_customer.and_then(|c| c.id));
        let mode = overrides
            .mode
            .or_else(|| file_transport.and_then(|t| t.mode))
            .unwrap_or_default();
        let output = overrides
            .output
            .or_else(|| file_transport.and_then(|t| t.output.clone()));

        let name = require("customer.name", name)?;
        validate_customer_name("customer.name", &name)?;
        let id = require("customer.id", id)?;

        if let Some(output) = &output {
            validate_output_path("transport.output", output)?;
            if mode == SendMode::Direct {
                return Err(direct_output_error("transport.output", output));
            }
        }

        Ok(Self {
            customer: Customer::new(name, id),
            mode,
            output: output.map(PathBuf::from),
        })
    }
}
