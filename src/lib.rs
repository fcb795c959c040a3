#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::Command, CliConfig};

pub use config::settings::SwitcherConfig;
pub use utils::enums::{convert_enum, convert_enum_with, NamedVariants};
pub use utils::error::{Result, UtilsError};
pub use utils::platform::{is_process_64bit, is_windows, PlatformId};
pub use utils::resources::{
    builtin_resources, read_embedded_resource_as_text, ResourceRegistry, ResourceScope,
};
pub use utils::text::{read_file_as_text, read_file_as_text_with_label};
