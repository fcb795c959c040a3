use clap::Parser;
use switcher_utils::utils::logger::{self, Verbosity};
use switcher_utils::utils::validation::Validate;
use switcher_utils::{app, CliConfig, UtilsError};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 載入設定檔 (日誌等級由設定檔決定)
    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    // 初始化日誌
    let verbosity = if config.verbose {
        Verbosity::Debug
    } else {
        settings.verbosity()?
    };
    if config.log_json || settings.json_logs() {
        logger::init_json_logger(verbosity);
    } else {
        logger::init_cli_logger(verbosity);
    }

    if let Some(path) = &config.config {
        tracing::debug!("Loaded settings from {}", path.display());
    }
    for var_name in &settings.unresolved_env_vars {
        tracing::warn!("Environment variable {} is not set", var_name);
    }
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    match app::execute(&config.command, &settings) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Command failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            exit_with(&e)
        }
    }
}

fn exit_with(e: &UtilsError) -> ! {
    eprintln!("❌ {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
