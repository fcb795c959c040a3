#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "switcher-utils")]
#[command(about = "Platform probes, embedded resources and text file helpers")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔, 未指定時使用預設值
    pub fn load_settings(&self) -> crate::Result<settings::SwitcherConfig> {
        match &self.config {
            Some(path) => settings::SwitcherConfig::from_file(path),
            None => Ok(settings::SwitcherConfig::default()),
        }
    }
}
