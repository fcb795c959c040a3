use clap::Subcommand;
use std::path::PathBuf;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Report the operating system family and process bitness
    Platform {
        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },

    /// Print a file's text content
    ReadFile {
        path: PathBuf,

        #[arg(long, help = "Encoding label, e.g. utf-8, windows-1252, gbk")]
        encoding: Option<String>,
    },

    /// Print a built-in embedded resource
    Resource {
        name: String,

        #[arg(long, help = "Namespace used to qualify simple names")]
        namespace: Option<String>,
    },

    /// List the built-in embedded resources
    Resources,

    /// Write the default settings file
    Init {
        #[arg(long, default_value = "switcher.toml")]
        output: PathBuf,

        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
