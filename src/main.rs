use clap::Parser;
use customer_adapter::utils::{logger, validation::Validate};
use customer_adapter::{app, AdapterError, CliConfig, SendPlan, TomlConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.log_format, config.verbose);

    tracing::info!("Starting customer-adapter CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let plan = match resolve_plan(&config) {
        Ok(plan) => plan,
        Err(e) => fail(&e, 1),
    };

    let sender = match app::build_sender(&plan) {
        Ok(sender) => sender,
        Err(e) => fail(&e, 1),
    };
    if let Err(e) = app::run(plan, sender.as_ref()) {
        let code = if e.is_config_error() { 1 } else { 2 };
        fail(&e, code);
    }

    Ok(())
}

fn resolve_plan(config: &CliConfig) -> customer_adapter::Result<SendPlan> {
    config.validate()?;

    let file = match &config.config {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path);
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };

    SendPlan::resolve(config.overrides(), file.as_ref())
}

fn fail(e: &AdapterError, code: i32) -> ! {
    tracing::error!("❌ Send failed: {}", e);
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(code);
}
