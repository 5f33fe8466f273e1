pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod transports;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{DirectSendAdapter, JsonSendAdapter};
pub use config::{toml_config::TomlConfig, SendMode, SendOverrides, SendPlan};
pub use domain::model::Customer;
pub use domain::ports::{ObjectTransport, SendData, StringTransport};
pub use utils::error::{AdapterError, Result};
pub use utils::logger::LogFormat;
