use crate::config::{direct_output_error, SendMode, SendOverrides};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{
    validate_customer_name, validate_output_path, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "customer-adapter")]
#[command(about = "Send a customer through a direct or JSON transport adapter")]
pub struct CliConfig {
    /// Customer name
    #[arg(long)]
    pub name: Option<String>,

    /// Customer identifier
    #[arg(long)]
    pub id: Option<u32>,

    /// Adapter to send through
    #[arg(long, value_enum)]
    pub mode: Option<SendMode>,

    /// Append JSON payloads to this file instead of printing them
    #[arg(long)]
    pub output: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CliConfig {
    pub fn overrides(&self) -> SendOverrides {
        SendOverrides {
            name: self.name.clone(),
            id: self.id,
            mode: self.mode,
            output: self.output.clone(),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            validate_customer_name("name", name)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        if let Some(output) = &self.output {
            validate_output_path("output", output)?;
            if self.mode == Some(SendMode::Direct) {
                return Err(direct_output_error("output", output));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "customer-adapter",
            "--name",
            "Alice",
            "--id",
            "1",
            "--mode",
            "direct",
            "-v",
        ]);

        assert_eq!(config.name.as_deref(), Some("Alice"));
        assert_eq!(config.id, Some(1));
        assert_eq!(config.mode, Some(SendMode::Direct));
        assert!(config.verbose);
        assert_eq!(config.log_format, LogFormat::Compact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_carry_flags() {
        let config = CliConfig::parse_from([
            "customer-adapter",
            "--id",
            "5",
            "--output",
            "out.jsonl",
            "--log-format",
            "json",
        ]);

        assert_eq!(
            config.overrides(),
            SendOverrides {
                name: None,
                id: Some(5),
                mode: None,
                output: Some("out.jsonl".to_string()),
            }
        );
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_mode() {
        let result = CliConfig::try_parse_from(["customer-adapter", "--mode", "fax"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_direct_with_output_fails_validation() {
        let config = CliConfig::parse_from([
            "customer-adapter",
            "--mode",
            "direct",
            "--output",
            "out.jsonl",
        ]);
        assert!(config.validate().is_err());
    }
}
