use crate::config::{direct_output_error, SendMode};
use crate::utils::error::{AdapterError, Result};
use crate::utils::validation::{validate_customer_name, validate_output_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub customer: Option<CustomerConfig>,
    pub transport: Option<TransportConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerConfig {
    pub name: Option<String>,
    pub id: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransportConfig {
    pub mode: Option<SendMode>,
    pub output: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AdapterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    ///
    /// `${VAR}` references are expanded after parsing and only inside `customer.name`
    /// and `transport.output`, so a variable can never add or change other keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(|e| AdapterError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;

        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AdapterError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        if let Some(name) = config.customer.as_mut().and_then(|c| c.name.as_mut()) {
            *name = substitute_env_vars(&re, name);
        }
        if let Some(output) = config.transport.as_mut().and_then(|t| t.output.as_mut()) {
            *output = substitute_env_vars(&re, output);
        }

        Ok(config)
    }
}

/// 替換環境變數 (例如 ${CUSTOMER_NAME})，未設定的變數保持原樣
fn substitute_env_vars(re: &Regex, value: &str) -> String {
    re.replace_all(value, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(name) = self.customer.as_ref().and_then(|c| c.name.as_deref()) {
            validate_customer_name("customer.name", name)?;
        }

        if let Some(transport) = &self.transport {
            if let Some(output) = &transport.output {
                validate_output_path("transport.output", output)?;
                if transport.mode == Some(SendMode::Direct) {
                    return Err(direct_output_error("transport.output", output));
                }
            }
        }

        Ok(())
    }
}
